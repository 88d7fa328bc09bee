use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::principals::PrincipalData;
use super::ApiError;
use crate::domain::principal::errors::PrincipalError;
use crate::inbound::http::middleware::AuthenticatedPrincipal;
use crate::inbound::http::router::AppState;

/// `GET /me`
///
/// Returns the profile of the token's subject. The token itself was already
/// checked by the middleware; only the profile read touches the store.
pub async fn current_principal(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedPrincipal>,
) -> Result<(StatusCode, Json<PrincipalData>), ApiError> {
    state
        .principal_service
        .get_by_email(authenticated.kind, &authenticated.email)
        .await
        .map_err(|e| match e {
            // A valid token for a deleted account stays a 401, not a 404.
            PrincipalError::NotFound(_) => {
                ApiError::Unauthorized("Account no longer exists".to_string())
            }
            _ => ApiError::from(e),
        })
        .map(|ref principal| (StatusCode::OK, Json(principal.into())))
}
