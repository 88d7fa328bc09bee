use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::offer::errors::OfferError;
use crate::domain::offer::models::Offer;
use crate::domain::offer::models::OfferId;
use crate::domain::offer::ports::OfferRepository;

pub struct PostgresOfferRepository {
    pool: PgPool,
}

impl PostgresOfferRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct OfferRow {
    id: Uuid,
    title: String,
    employer: String,
    description: String,
    skills: String,
    salary: String,
    created_at: DateTime<Utc>,
}

impl From<OfferRow> for Offer {
    fn from(row: OfferRow) -> Self {
        Offer {
            id: OfferId(row.id),
            title: row.title,
            employer: row.employer,
            description: row.description,
            skills: row.skills,
            salary: row.salary,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl OfferRepository for PostgresOfferRepository {
    async fn create(&self, offer: Offer) -> Result<Offer, OfferError> {
        sqlx::query(
            "INSERT INTO offers (id, title, employer, description, skills, salary, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(offer.id.0)
        .bind(&offer.title)
        .bind(&offer.employer)
        .bind(&offer.description)
        .bind(&offer.skills)
        .bind(&offer.salary)
        .bind(offer.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| OfferError::DatabaseError(e.to_string()))?;

        Ok(offer)
    }

    async fn list_all(&self) -> Result<Vec<Offer>, OfferError> {
        let rows = sqlx::query_as::<_, OfferRow>(
            "SELECT id, title, employer, description, skills, salary, created_at
             FROM offers
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| OfferError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Offer::from).collect())
    }
}
