use thiserror::Error;

/// Error for PrincipalId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PrincipalIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for PrincipalKind parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PrincipalKindError {
    #[error("Unknown principal kind: {0} (expected \"postulant\" or \"company\")")]
    Unknown(String),
}

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all principal-related operations
#[derive(Debug, Clone, Error)]
pub enum PrincipalError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid principal ID: {0}")]
    InvalidPrincipalId(#[from] PrincipalIdError),

    #[error("Invalid principal kind: {0}")]
    InvalidKind(#[from] PrincipalKindError),

    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    // Domain-level errors
    #[error("Principal not found: {0}")]
    NotFound(String),

    #[error("Email already registered: {0}")]
    EmailAlreadyExists(String),

    #[error("Username already taken: {0}")]
    UsernameAlreadyExists(String),

    #[error("Password error: {0}")]
    Password(String),

    // Infrastructure errors; kept distinct from credential failures so the
    // caller can tell a broken store apart from a bad password.
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for PrincipalError {
    fn from(err: anyhow::Error) -> Self {
        PrincipalError::Unknown(err.to_string())
    }
}
