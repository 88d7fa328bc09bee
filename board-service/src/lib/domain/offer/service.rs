use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::offer::errors::OfferError;
use crate::domain::offer::models::CreateOfferCommand;
use crate::domain::offer::models::Offer;
use crate::domain::offer::models::OfferId;
use crate::domain::offer::ports::OfferRepository;
use crate::domain::offer::ports::OfferServicePort;

/// Concrete implementation of OfferServicePort.
///
/// Generic over the repository for testability.
pub struct OfferService<OR>
where
    OR: OfferRepository,
{
    repository: Arc<OR>,
}

impl<OR> OfferService<OR>
where
    OR: OfferRepository,
{
    pub fn new(repository: Arc<OR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<OR> OfferServicePort for OfferService<OR>
where
    OR: OfferRepository,
{
    async fn create_offer(&self, command: CreateOfferCommand) -> Result<Offer, OfferError> {
        let offer = Offer {
            id: OfferId::new(),
            title: command.title,
            employer: command.employer,
            description: command.description,
            skills: command.skills,
            salary: command.salary,
            created_at: Utc::now(),
        };

        self.repository.create(offer).await
    }

    async fn list_offers(&self) -> Result<Vec<Offer>, OfferError> {
        self.repository.list_all().await
    }
}
