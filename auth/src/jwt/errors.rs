use thiserror::Error;

/// Error type for JWT operations.
///
/// `InvalidSignature`, `Expired` and `Malformed` exist for diagnostics only;
/// callers at a trust boundary must treat all three as a rejected token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Signing secret is empty")]
    EmptySecret,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token is malformed: {0}")]
    Malformed(String),
}
