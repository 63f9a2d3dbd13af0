use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;
use super::CredentialHasher;

/// Argon2id credential hasher.
///
/// Digests are PHC strings, so salt and cost parameters travel with the hash
/// and verification needs nothing but the stored string.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Random source or Argon2 failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a candidate password against a stored PHC hash.
    ///
    /// Returns `false` for a wrong password and for a hash that cannot be
    /// parsed; neither case is an error for the caller.
    pub fn verify(&self, hash: &str, candidate: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl CredentialHasher for PasswordHasher {
    fn hash(&self, credential: &str) -> Result<String, PasswordError> {
        PasswordHasher::hash(self, credential)
    }

    fn verify(&self, digest: &str, candidate: &str) -> bool {
        PasswordHasher::verify(self, digest, candidate)
    }
}
