use thiserror::Error;

/// Error type for password operations.
///
/// Verification has no error case: a wrong password or an unreadable digest
/// is simply a negative answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    /// Salt generation or the Argon2 computation itself failed.
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
