//! Authentication utilities library
//!
//! Provides the authentication core shared by the service crates:
//! - Password hashing (Argon2id) behind [`CredentialHasher`]
//! - Signed, time-bound identity tokens (HS256 JWT) behind [`TokenCodec`]
//! - Login coordination via [`Authenticator`]
//!
//! Nothing here keeps state between calls; the signing secret is supplied once
//! at construction by the composition root.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify(&hash, "my_password"));
//! ```
//!
//! ## Identity Tokens
//! ```
//! use auth::{JwtHandler, TokenCodec};
//!
//! let handler = JwtHandler::with_default_ttl(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let token = handler.issue("user123").unwrap();
//! assert_eq!(handler.validate(&token).unwrap(), "user123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::from_secret(
//!     b"secret_key_at_least_32_bytes_long!",
//!     chrono::Duration::hours(6),
//! )
//! .unwrap();
//!
//! let hash = auth.hash_password("password123").unwrap();
//! let token = auth.authenticate("password123", &hash, "user123").unwrap();
//! assert_eq!(auth.validate_token(&token).unwrap(), "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::handler::DEFAULT_TOKEN_TTL_HOURS;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenCodec;
pub use password::CredentialHasher;
pub use password::PasswordError;
pub use password::PasswordHasher;
