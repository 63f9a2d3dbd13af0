pub mod argon2;
pub mod errors;

pub use argon2::PasswordHasher;
pub use errors::PasswordError;

/// One-way credential hashing capability.
///
/// Implementations must salt every digest and keep verification free of
/// early exits on the compared bytes.
pub trait CredentialHasher: Send + Sync + 'static {
    /// Hash a plaintext credential into a self-describing digest.
    fn hash(&self, credential: &str) -> Result<String, PasswordError>;

    /// Check a candidate credential against a stored digest.
    ///
    /// A mismatch and an unparseable digest both yield `false`.
    fn verify(&self, digest: &str, candidate: &str) -> bool;
}
