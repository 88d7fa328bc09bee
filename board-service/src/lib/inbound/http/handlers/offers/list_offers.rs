use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::OfferData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// `GET /offers`
pub async fn list_offers(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<OfferData>>), ApiError> {
    state
        .offer_service
        .list_offers()
        .await
        .map_err(ApiError::from)
        .map(|offers| {
            let data = offers.iter().map(OfferData::from).collect();
            (StatusCode::OK, Json(data))
        })
}
