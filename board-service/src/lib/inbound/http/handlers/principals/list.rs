use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::PrincipalData;
use crate::domain::principal::models::PrincipalKind;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// `GET /postulants`
pub async fn list_postulants(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<PrincipalData>>), ApiError> {
    list(state, PrincipalKind::Postulant).await
}

/// `GET /companies`
pub async fn list_companies(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<PrincipalData>>), ApiError> {
    list(state, PrincipalKind::Company).await
}

async fn list(
    state: AppState,
    kind: PrincipalKind,
) -> Result<(StatusCode, Json<Vec<PrincipalData>>), ApiError> {
    state
        .principal_service
        .list(kind)
        .await
        .map_err(ApiError::from)
        .map(|principals| {
            let data = principals.iter().map(PrincipalData::from).collect();
            (StatusCode::OK, Json(data))
        })
}
