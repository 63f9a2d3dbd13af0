use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;
use super::TokenCodec;

/// Default lifetime of issued tokens.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 6;

/// JWT token handler for issuing and validating identity tokens.
///
/// Uses HS256 (HMAC with SHA-256) with one process-wide secret. The secret is
/// held only as signing keys and never appears in a token.
#[derive(Clone)]
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl JwtHandler {
    /// Create a new JWT handler.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `ttl` - Lifetime of issued tokens
    ///
    /// # Errors
    /// * `EmptySecret` - `secret` has no bytes
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], ttl: Duration) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::EmptySecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        })
    }

    /// Create a handler with the default six hour token lifetime.
    pub fn with_default_ttl(secret: &[u8]) -> Result<Self, JwtError> {
        Self::new(secret, Duration::hours(DEFAULT_TOKEN_TTL_HOURS))
    }

    /// Lifetime applied to issued tokens.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `subject` as if the current time were `now`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> Result<String, JwtError> {
        self.encode(&Claims::for_subject(subject, now, self.ttl))
    }

    /// Sign arbitrary claims with this handler's key.
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        encode(&Header::new(self.algorithm), claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Validate `token` as if the current time were `now` and return its subject.
    ///
    /// The signature is checked before the payload is trusted; expiry is
    /// checked against `now` with no leeway.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                    ErrorKind::ExpiredSignature => JwtError::Expired,
                    _ => JwtError::Malformed(e.to_string()),
                }
            })?;

        if token_data.claims.is_expired(now.timestamp()) {
            return Err(JwtError::Expired);
        }

        Ok(token_data.claims.sub)
    }
}

impl TokenCodec for JwtHandler {
    fn issue(&self, subject: &str) -> Result<String, JwtError> {
        self.issue_at(subject, Utc::now())
    }

    fn validate(&self, token: &str) -> Result<String, JwtError> {
        self.validate_at(token, Utc::now())
    }
}
