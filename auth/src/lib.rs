//! Authentication infrastructure for the job-board services:
//! - Password hashing (Argon2id, salted per hash)
//! - Access-token issuance and validation (HS256 JWT)
//! - An [`Authenticator`] coordinating the two
//!
//! The service crate owns the account lookup; this crate only knows how to
//! hash, verify, sign, and check expiry. Tokens are self-contained: checking
//! one needs the shared secret and nothing else.
//!
//! # Examples
//!
//! ## Password hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("secret123").unwrap();
//! assert!(hasher.verify("secret123", &hash).unwrap());
//! ```
//!
//! ## Full login flow
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Registration stores the hash, never the plaintext.
//! let stored_hash = auth.hash_password("secret123").unwrap();
//!
//! // Login verifies the password and issues a token for the subject.
//! let claims = Claims::for_principal("a@b.com", "postulant", 168);
//! let result = auth.authenticate("secret123", &stored_hash, &claims).unwrap();
//! assert_eq!(result.token_type, "bearer");
//!
//! // Later requests present the token.
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.email(), "a@b.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::TOKEN_TYPE;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::Subject;
pub use password::PasswordError;
pub use password::PasswordHasher;
