use async_trait::async_trait;

use crate::domain::principal::errors::PrincipalError;
use crate::domain::principal::models::Principal;
use crate::domain::principal::models::PrincipalKind;
use crate::domain::principal::models::RegisterPrincipalCommand;

/// Port for principal domain service operations.
#[async_trait]
pub trait PrincipalServicePort: Send + Sync + 'static {
    /// Register a new principal, hashing the password before persistence.
    ///
    /// # Arguments
    /// * `command` - Validated command with kind, name, username, email, and
    ///   plaintext password
    ///
    /// # Returns
    /// Created principal entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered under this kind
    /// * `UsernameAlreadyExists` - Username is already taken under this kind
    /// * `Password` - Password hashing failed
    /// * `DatabaseError` - Store operation failed
    async fn register(
        &self,
        command: RegisterPrincipalCommand,
    ) -> Result<Principal, PrincipalError>;

    /// Retrieve the principal registered under `kind` with exactly `email`.
    ///
    /// The match is case-sensitive, against the email as persisted.
    ///
    /// # Returns
    /// Principal entity, password hash included
    ///
    /// # Errors
    /// * `NotFound` - No principal of this kind has this email
    /// * `DatabaseError` - Store operation failed
    async fn get_by_email(
        &self,
        kind: PrincipalKind,
        email: &str,
    ) -> Result<Principal, PrincipalError>;

    /// List all principals of one kind.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list(&self, kind: PrincipalKind) -> Result<Vec<Principal>, PrincipalError>;
}

/// Persistence operations for the principal aggregate.
///
/// One store partition per kind: every operation takes the kind, and
/// uniqueness of email and username holds within a kind only.
#[async_trait]
pub trait PrincipalRepository: Send + Sync + 'static {
    /// Persist a new principal.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered under this kind
    /// * `UsernameAlreadyExists` - Username is already taken under this kind
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, principal: Principal) -> Result<Principal, PrincipalError>;

    /// Point-read by kind and exact email.
    ///
    /// # Returns
    /// Optional principal entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_kind_and_email(
        &self,
        kind: PrincipalKind,
        email: &str,
    ) -> Result<Option<Principal>, PrincipalError>;

    /// Retrieve all principals of one kind.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_by_kind(&self, kind: PrincipalKind) -> Result<Vec<Principal>, PrincipalError>;
}
