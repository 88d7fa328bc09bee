use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Default token lifetime: one week.
pub const DEFAULT_TTL_HOURS: i64 = 24 * 7;

/// Token subject: which account the token was issued to.
///
/// Serialized with the account kind under `type`, the field name clients
/// already send in login requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subject {
    pub email: String,

    /// Account kind, `"postulant"` or `"company"`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Claim set carried by an access token.
///
/// Self-contained: a verifier needs the signing secret and the `exp` claim,
/// never a store lookup. There is no revocation; tokens die by expiry only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: Subject,

    /// Expiration instant (Unix timestamp).
    pub exp: i64,

    /// Issue instant (Unix timestamp).
    pub iat: i64,
}

impl Claims {
    /// Claims for a principal, issued now, expiring after `ttl_hours`.
    pub fn for_principal(
        email: impl Into<String>,
        kind: impl Into<String>,
        ttl_hours: i64,
    ) -> Self {
        Self::issued_at(email, kind, Utc::now(), ttl_hours)
    }

    /// Claims with an explicit issue instant.
    ///
    /// # Arguments
    /// * `email` - Subject email
    /// * `kind` - Subject account kind
    /// * `issued_at` - Issue instant; expiry is `issued_at + ttl_hours`
    /// * `ttl_hours` - Token lifetime in hours
    pub fn issued_at(
        email: impl Into<String>,
        kind: impl Into<String>,
        issued_at: DateTime<Utc>,
        ttl_hours: i64,
    ) -> Self {
        let expires_at = issued_at + Duration::hours(ttl_hours);

        Self {
            sub: Subject {
                email: email.into(),
                kind: kind.into(),
            },
            exp: expires_at.timestamp(),
            iat: issued_at.timestamp(),
        }
    }

    pub fn email(&self) -> &str {
        &self.sub.email
    }

    pub fn kind(&self) -> &str {
        &self.sub.kind
    }

    /// Whether the token is past its expiry at `now` (Unix timestamp).
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_principal_sets_ttl() {
        let claims = Claims::for_principal("a@b.com", "postulant", DEFAULT_TTL_HOURS);

        assert_eq!(claims.email(), "a@b.com");
        assert_eq!(claims.kind(), "postulant");
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_wire_shape() {
        let issued = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let claims = Claims::issued_at("a@b.com", "company", issued, 1);

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["sub"]["email"], "a@b.com");
        assert_eq!(value["sub"]["type"], "company");
        assert_eq!(value["iat"], 1_700_000_000);
        assert_eq!(value["exp"], 1_700_003_600);
    }

    #[test]
    fn test_is_expired() {
        let issued = DateTime::from_timestamp(1_000, 0).unwrap();
        let claims = Claims::issued_at("a@b.com", "postulant", issued, 1);

        assert!(!claims.is_expired(1_000));
        assert!(!claims.is_expired(1_000 + 3599));
        assert!(claims.is_expired(1_000 + 3600));
        assert!(claims.is_expired(1_000 + 3601));
    }
}
