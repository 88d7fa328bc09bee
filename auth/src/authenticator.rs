use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Token-type label returned alongside every issued access token.
pub const TOKEN_TYPE: &str = "bearer";

/// Coordinates password verification and token issuance.
///
/// The caller supplies the stored hash (looked up however it likes) and the
/// claim set to issue on success; "wrong password" is the single failure the
/// caller is expected to surface, undifferentiated from "no such account".
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Result of a successful authentication.
pub struct AuthenticationResult {
    /// Signed access token.
    pub access_token: String,
    /// Always [`TOKEN_TYPE`].
    pub token_type: &'static str,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Jwt(#[from] JwtError),
}

impl Authenticator {
    /// Authenticator signing tokens with `jwt_secret`.
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a stored hash and, on match, issue a token
    /// carrying `claims`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - password does not match
    /// * `Password` - the stored hash could not be parsed
    /// * `Jwt` - token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        claims: &Claims,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.jwt_handler.encode(claims)?;

        Ok(AuthenticationResult {
            access_token,
            token_type: TOKEN_TYPE,
        })
    }

    /// Issue a token without verifying a password.
    ///
    /// For flows where the caller has already proven the subject's identity.
    ///
    /// # Errors
    /// * `JwtError` - token signing failed
    pub fn issue_token(&self, claims: &Claims) -> Result<String, JwtError> {
        self.jwt_handler.encode(claims)
    }

    /// Validate a token's signature and expiry and return its claims.
    ///
    /// # Errors
    /// * `JwtError` - signature invalid, token malformed, or expired
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        let password = "secret123";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let claims = Claims::for_principal("a@b.com", "postulant", 168);
        let result = authenticator
            .authenticate(password, &hash, &claims)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());
        assert_eq!(result.token_type, "bearer");

        let decoded = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(decoded.email(), "a@b.com");
        assert_eq!(decoded.kind(), "postulant");
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        let hash = authenticator
            .hash_password("secret123")
            .expect("Failed to hash password");

        let claims = Claims::for_principal("a@b.com", "postulant", 168);
        let result = authenticator.authenticate("wrong", &hash, &claims);

        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_issue_and_validate_token() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        let claims = Claims::for_principal("hr@acme.example", "company", 168);
        let token = authenticator
            .issue_token(&claims)
            .expect("Failed to issue token");

        let decoded = authenticator
            .validate_token(&token)
            .expect("Failed to validate token");
        assert_eq!(decoded.email(), "hr@acme.example");
        assert_eq!(decoded.kind(), "company");
    }

    #[test]
    fn test_validate_garbage_token() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        assert!(authenticator.validate_token("invalid.token.here").is_err());
    }
}
