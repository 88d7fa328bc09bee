use axum::http::header::WWW_AUTHENTICATE;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::offer::errors::OfferError;
use crate::domain::principal::errors::PrincipalError;

pub mod login;
pub mod me;
pub mod offers;
pub mod principals;

/// HTTP-boundary error with one body shape: `{"message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    ServiceUnavailable(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };

        let mut response = (status, Json(ApiErrorBody { message })).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

impl From<PrincipalError> for ApiError {
    fn from(err: PrincipalError) -> Self {
        match err {
            PrincipalError::NotFound(_) => ApiError::NotFound(err.to_string()),
            PrincipalError::EmailAlreadyExists(_) | PrincipalError::UsernameAlreadyExists(_) => {
                ApiError::Conflict(err.to_string())
            }
            PrincipalError::InvalidPrincipalId(_)
            | PrincipalError::InvalidKind(_)
            | PrincipalError::InvalidUsername(_)
            | PrincipalError::InvalidEmail(_) => ApiError::UnprocessableEntity(err.to_string()),
            // Store trouble is 5xx, never the credential-failure path.
            PrincipalError::DatabaseError(_) => ApiError::ServiceUnavailable(err.to_string()),
            PrincipalError::Password(_) | PrincipalError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<OfferError> for ApiError {
    fn from(err: OfferError) -> Self {
        match err {
            OfferError::InvalidOfferId(_) => ApiError::UnprocessableEntity(err.to_string()),
            OfferError::DatabaseError(_) => ApiError::ServiceUnavailable(err.to_string()),
            OfferError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub message: String,
}
