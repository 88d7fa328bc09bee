use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::offer::models::Offer;

pub mod create_offer;
pub mod list_offers;

/// Offer as exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfferData {
    pub id: String,
    pub title: String,
    pub employer: String,
    pub description: String,
    pub skills: String,
    pub salary: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Offer> for OfferData {
    fn from(offer: &Offer) -> Self {
        Self {
            id: offer.id.to_string(),
            title: offer.title.clone(),
            employer: offer.employer.clone(),
            description: offer.description.clone(),
            skills: offer.skills.clone(),
            salary: offer.salary.clone(),
            created_at: offer.created_at,
        }
    }
}
