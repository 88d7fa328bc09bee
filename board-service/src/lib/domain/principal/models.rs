use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::principal::errors::EmailError;
use crate::domain::principal::errors::PrincipalIdError;
use crate::domain::principal::errors::PrincipalKindError;
use crate::domain::principal::errors::UsernameError;

/// Principal aggregate entity.
///
/// An authenticatable account: a job seeker (postulant) or an employer
/// (company). Both kinds share one canonical schema; the kind partitions the
/// store, so a postulant and a company may register the same email and remain
/// distinct accounts.
#[derive(Debug, Clone)]
pub struct Principal {
    pub id: PrincipalId,
    pub kind: PrincipalKind,
    pub name: String,
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Principal unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrincipalId(pub Uuid);

impl PrincipalId {
    /// Generate a new random principal ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a principal ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, PrincipalIdError> {
        Uuid::parse_str(s)
            .map(PrincipalId)
            .map_err(|e| PrincipalIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for PrincipalId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Account kind. Serialized as `"postulant"` / `"company"`, the values
/// clients send in the login request's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalKind {
    Postulant,
    Company,
}

impl PrincipalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrincipalKind::Postulant => "postulant",
            PrincipalKind::Company => "company",
        }
    }
}

impl FromStr for PrincipalKind {
    type Err = PrincipalKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postulant" => Ok(PrincipalKind::Postulant),
            "company" => Ok(PrincipalKind::Company),
            other => Err(PrincipalKindError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Username value type
///
/// Ensures username is 3-32 characters and contains only alphanumeric,
/// underscore, and hyphen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 32;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `TooShort` - Username shorter than 3 characters
    /// * `TooLong` - Username longer than 32 characters
    /// * `InvalidCharacters` - Contains non-alphanumeric characters (except _ and -)
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let username = Self::with_valid_length(username)?;
        let username = Self::with_valid_chars(username)?;
        Ok(Self(username))
    }

    fn with_valid_length(username: String) -> Result<String, UsernameError> {
        let length = username.len();
        if length < Self::MIN_LENGTH {
            Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(username)
        }
    }

    fn with_valid_chars(username: String) -> Result<String, UsernameError> {
        if username
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
            Ok(username)
        } else {
            Err(UsernameError::InvalidCharacters)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Stored and
/// compared exactly as given; lookups are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to register a new principal with domain types
#[derive(Debug)]
pub struct RegisterPrincipalCommand {
    pub kind: PrincipalKind,
    pub name: String,
    pub username: Username,
    pub email: EmailAddress,
    pub password: String,
}

impl RegisterPrincipalCommand {
    /// Construct a new register command.
    ///
    /// # Arguments
    /// * `kind` - Account kind to register under
    /// * `name` - Display name
    /// * `username` - Validated username
    /// * `email` - Validated email address
    /// * `password` - Plain text password (hashed by the service)
    pub fn new(
        kind: PrincipalKind,
        name: String,
        username: Username,
        email: EmailAddress,
        password: String,
    ) -> Self {
        Self {
            kind,
            name,
            username,
            email,
            password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in [PrincipalKind::Postulant, PrincipalKind::Company] {
            assert_eq!(kind.as_str().parse::<PrincipalKind>().unwrap(), kind);
        }
        assert!("employer".parse::<PrincipalKind>().is_err());
    }

    #[test]
    fn test_kind_serde_uses_lowercase() {
        let value = serde_json::to_value(PrincipalKind::Postulant).unwrap();
        assert_eq!(value, "postulant");

        let kind: PrincipalKind = serde_json::from_str("\"company\"").unwrap();
        assert_eq!(kind, PrincipalKind::Company);
    }

    #[test]
    fn test_username_validation() {
        assert!(Username::new("ab".to_string()).is_err());
        assert!(Username::new("a".repeat(33)).is_err());
        assert!(Username::new("with spaces".to_string()).is_err());
        assert_eq!(
            Username::new("dev-ana_1".to_string()).unwrap().as_str(),
            "dev-ana_1"
        );
    }

    #[test]
    fn test_email_validation() {
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
        assert_eq!(
            EmailAddress::new("a@b.com".to_string()).unwrap().as_str(),
            "a@b.com"
        );
    }
}
