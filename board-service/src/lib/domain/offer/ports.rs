use async_trait::async_trait;

use crate::domain::offer::errors::OfferError;
use crate::domain::offer::models::CreateOfferCommand;
use crate::domain::offer::models::Offer;

/// Port for offer domain service operations.
#[async_trait]
pub trait OfferServicePort: Send + Sync + 'static {
    /// Publish a new offer.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn create_offer(&self, command: CreateOfferCommand) -> Result<Offer, OfferError>;

    /// List every offer on the board.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_offers(&self) -> Result<Vec<Offer>, OfferError>;
}

/// Repository port for offer persistence operations.
#[async_trait]
pub trait OfferRepository: Send + Sync + 'static {
    /// Persist a new offer.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, offer: Offer) -> Result<Offer, OfferError>;

    /// Retrieve all offers.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_all(&self) -> Result<Vec<Offer>, OfferError>;
}
