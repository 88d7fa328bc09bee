use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::PrincipalData;
use crate::domain::principal::errors::EmailError;
use crate::domain::principal::errors::UsernameError;
use crate::domain::principal::models::EmailAddress;
use crate::domain::principal::models::PrincipalKind;
use crate::domain::principal::models::RegisterPrincipalCommand;
use crate::domain::principal::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// `POST /postulants`
pub async fn register_postulant(
    State(state): State<AppState>,
    Json(body): Json<RegisterPrincipalRequest>,
) -> Result<(StatusCode, Json<PrincipalData>), ApiError> {
    register(state, PrincipalKind::Postulant, body).await
}

/// `POST /companies`
pub async fn register_company(
    State(state): State<AppState>,
    Json(body): Json<RegisterPrincipalRequest>,
) -> Result<(StatusCode, Json<PrincipalData>), ApiError> {
    register(state, PrincipalKind::Company, body).await
}

async fn register(
    state: AppState,
    kind: PrincipalKind,
    body: RegisterPrincipalRequest,
) -> Result<(StatusCode, Json<PrincipalData>), ApiError> {
    state
        .principal_service
        .register(body.try_into_command(kind)?)
        .await
        .map_err(ApiError::from)
        .map(|ref principal| (StatusCode::CREATED, Json(principal.into())))
}

/// HTTP request body for registering a principal (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterPrincipalRequest {
    name: String,
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Name must not be empty")]
    EmptyName,

    #[error("Password must not be empty")]
    EmptyPassword,
}

impl RegisterPrincipalRequest {
    fn try_into_command(
        self,
        kind: PrincipalKind,
    ) -> Result<RegisterPrincipalCommand, ParseRegisterRequestError> {
        if self.name.trim().is_empty() {
            return Err(ParseRegisterRequestError::EmptyName);
        }
        if self.password.is_empty() {
            return Err(ParseRegisterRequestError::EmptyPassword);
        }

        let username = Username::new(self.username)?;
        let email = EmailAddress::new(self.email)?;

        Ok(RegisterPrincipalCommand::new(
            kind,
            self.name,
            username,
            email,
            self.password,
        ))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
