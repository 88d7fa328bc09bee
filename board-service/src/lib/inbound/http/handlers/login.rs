use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::principal::errors::PrincipalError;
use crate::domain::principal::models::PrincipalKind;
use crate::inbound::http::router::AppState;

/// One message for every credential failure. The response must not reveal
/// whether the email exists or the password was wrong.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// `POST /login`
///
/// Looks up the account in the requested kind's partition, verifies the
/// password against the stored hash, and issues a bearer access token.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<(StatusCode, Json<LoginResponseData>), ApiError> {
    let principal = state
        .principal_service
        .get_by_email(body.kind, &body.email)
        .await
        .map_err(|e| match e {
            PrincipalError::NotFound(_) => {
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            _ => ApiError::from(e),
        })?;

    let claims = auth::Claims::for_principal(
        principal.email.as_str(),
        body.kind.as_str(),
        state.jwt_expiration_hours,
    );

    let result = state
        .authenticator
        .authenticate(&body.password, &principal.password_hash, &claims)
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            auth::AuthenticationError::Password(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            auth::AuthenticationError::Jwt(err) => {
                ApiError::InternalServerError(format!("Token issuance failed: {}", err))
            }
        })?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseData {
            access_token: result.access_token,
            token_type: result.token_type,
        }),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    #[serde(rename = "type")]
    kind: PrincipalKind,
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub token_type: &'static str,
}
