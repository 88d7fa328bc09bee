use thiserror::Error;

/// Error for OfferId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OfferIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all offer-related operations
#[derive(Debug, Clone, Error)]
pub enum OfferError {
    #[error("Invalid offer ID: {0}")]
    InvalidOfferId(#[from] OfferIdError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
