use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::principal::errors::PrincipalError;
use crate::domain::principal::models::EmailAddress;
use crate::domain::principal::models::Principal;
use crate::domain::principal::models::PrincipalId;
use crate::domain::principal::models::PrincipalKind;
use crate::domain::principal::models::Username;
use crate::domain::principal::ports::PrincipalRepository;

pub struct PostgresPrincipalRepository {
    pool: PgPool,
}

impl PostgresPrincipalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PrincipalRow {
    id: Uuid,
    kind: String,
    name: String,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl PrincipalRow {
    fn try_into_principal(self) -> Result<Principal, PrincipalError> {
        Ok(Principal {
            id: PrincipalId(self.id),
            kind: self.kind.parse::<PrincipalKind>()?,
            name: self.name,
            username: Username::new(self.username)?,
            email: EmailAddress::new(self.email)?,
            password_hash: self.password_hash,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl PrincipalRepository for PostgresPrincipalRepository {
    async fn create(&self, principal: Principal) -> Result<Principal, PrincipalError> {
        sqlx::query(
            "INSERT INTO principals (id, kind, name, username, email, password_hash, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(principal.id.0)
        .bind(principal.kind.as_str())
        .bind(&principal.name)
        .bind(principal.username.as_str())
        .bind(principal.email.as_str())
        .bind(&principal.password_hash)
        .bind(principal.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    if db_err.constraint() == Some("principals_kind_email_key") {
                        return PrincipalError::EmailAlreadyExists(
                            principal.email.as_str().to_string(),
                        );
                    }
                    if db_err.constraint() == Some("principals_kind_username_key") {
                        return PrincipalError::UsernameAlreadyExists(
                            principal.username.as_str().to_string(),
                        );
                    }
                }
            }
            PrincipalError::DatabaseError(e.to_string())
        })?;

        Ok(principal)
    }

    async fn find_by_kind_and_email(
        &self,
        kind: PrincipalKind,
        email: &str,
    ) -> Result<Option<Principal>, PrincipalError> {
        let row = sqlx::query_as::<_, PrincipalRow>(
            "SELECT id, kind, name, username, email, password_hash, created_at
             FROM principals
             WHERE kind = $1 AND email = $2",
        )
        .bind(kind.as_str())
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PrincipalError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(r.try_into_principal()?)),
            None => Ok(None),
        }
    }

    async fn list_by_kind(&self, kind: PrincipalKind) -> Result<Vec<Principal>, PrincipalError> {
        let rows = sqlx::query_as::<_, PrincipalRow>(
            "SELECT id, kind, name, username, email, password_hash, created_at
             FROM principals
             WHERE kind = $1
             ORDER BY created_at DESC",
        )
        .bind(kind.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PrincipalError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(|r| r.try_into_principal()).collect()
    }
}
