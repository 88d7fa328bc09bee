use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::offer::errors::OfferIdError;

/// Offer unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OfferId(pub Uuid);

impl OfferId {
    /// Generate a new random offer ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an offer ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, OfferIdError> {
        Uuid::parse_str(s)
            .map(OfferId)
            .map_err(|e| OfferIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for OfferId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Job offer posted on the board.
///
/// Free-form fields beyond the title; the board stores what the employer
/// submitted.
#[derive(Debug, Clone)]
pub struct Offer {
    pub id: OfferId,
    pub title: String,
    pub employer: String,
    pub description: String,
    pub skills: String,
    pub salary: String,
    pub created_at: DateTime<Utc>,
}

/// Command to publish a new offer.
#[derive(Debug)]
pub struct CreateOfferCommand {
    pub title: String,
    pub employer: String,
    pub description: String,
    pub skills: String,
    pub salary: String,
}
