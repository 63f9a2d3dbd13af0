pub mod claims;
pub mod errors;
pub mod handler;

pub use claims::Claims;
pub use errors::JwtError;
pub use handler::JwtHandler;

/// Issue and validate signed identity tokens.
pub trait TokenCodec: Send + Sync + 'static {
    /// Issue a token binding `subject` until now + the codec's lifetime.
    fn issue(&self, subject: &str) -> Result<String, JwtError>;

    /// Validate `token` and return its subject.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not match payload and secret
    /// * `Expired` - Current time is at or past the embedded expiry
    /// * `Malformed` - Token cannot be decoded into the expected shape
    fn validate(&self, token: &str) -> Result<String, JwtError>;
}
