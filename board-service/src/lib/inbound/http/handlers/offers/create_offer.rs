use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::OfferData;
use crate::domain::offer::models::CreateOfferCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// `POST /offers`
pub async fn create_offer(
    State(state): State<AppState>,
    Json(body): Json<CreateOfferRequest>,
) -> Result<(StatusCode, Json<OfferData>), ApiError> {
    state
        .offer_service
        .create_offer(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref offer| (StatusCode::CREATED, Json(offer.into())))
}

/// HTTP request body for publishing an offer (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateOfferRequest {
    title: String,
    employer: String,
    description: String,
    skills: String,
    salary: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateOfferError {
    #[error("Title must not be empty")]
    EmptyTitle,
}

impl CreateOfferRequest {
    fn try_into_command(self) -> Result<CreateOfferCommand, ParseCreateOfferError> {
        if self.title.trim().is_empty() {
            return Err(ParseCreateOfferError::EmptyTitle);
        }

        Ok(CreateOfferCommand {
            title: self.title,
            employer: self.employer,
            description: self.description,
            skills: self.skills,
            salary: self.salary,
        })
    }
}

impl From<ParseCreateOfferError> for ApiError {
    fn from(err: ParseCreateOfferError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
