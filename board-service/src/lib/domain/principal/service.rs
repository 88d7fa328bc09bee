use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::principal::errors::PrincipalError;
use crate::domain::principal::models::Principal;
use crate::domain::principal::models::PrincipalId;
use crate::domain::principal::models::PrincipalKind;
use crate::domain::principal::models::RegisterPrincipalCommand;
use crate::domain::principal::ports::PrincipalRepository;
use crate::domain::principal::ports::PrincipalServicePort;

/// Domain service implementation for principal operations.
///
/// Concrete implementation of PrincipalServicePort with dependency injection.
pub struct PrincipalService<PR>
where
    PR: PrincipalRepository,
{
    repository: Arc<PR>,
    password_hasher: auth::PasswordHasher,
}

impl<PR> PrincipalService<PR>
where
    PR: PrincipalRepository,
{
    /// Create a new principal service over the given store.
    pub fn new(repository: Arc<PR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<PR> PrincipalServicePort for PrincipalService<PR>
where
    PR: PrincipalRepository,
{
    async fn register(
        &self,
        command: RegisterPrincipalCommand,
    ) -> Result<Principal, PrincipalError> {
        // The plaintext never reaches the store.
        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| PrincipalError::Password(e.to_string()))?;

        let principal = Principal {
            id: PrincipalId::new(),
            kind: command.kind,
            name: command.name,
            username: command.username,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        self.repository.create(principal).await
    }

    async fn get_by_email(
        &self,
        kind: PrincipalKind,
        email: &str,
    ) -> Result<Principal, PrincipalError> {
        self.repository
            .find_by_kind_and_email(kind, email)
            .await?
            .ok_or_else(|| PrincipalError::NotFound(format!("{}:{}", kind, email)))
    }

    async fn list(&self, kind: PrincipalKind) -> Result<Vec<Principal>, PrincipalError> {
        self.repository.list_by_kind(kind).await
    }
}
