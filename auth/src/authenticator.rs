use std::sync::OnceLock;

use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::TokenCodec;
use crate::password::CredentialHasher;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining credential verification and token issuance.
///
/// Generic over both capabilities so services can swap either for a test double.
pub struct Authenticator<H = PasswordHasher, C = JwtHandler>
where
    H: CredentialHasher,
    C: TokenCodec,
{
    password_hasher: H,
    token_codec: C,
    decoy_digest: OnceLock<Option<String>>,
}

/// Hashed once, verified against when the account does not exist.
const DECOY_CREDENTIAL: &str = "decoy-credential-for-unknown-accounts";

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator<PasswordHasher, JwtHandler> {
    /// Create an Argon2 + HS256 authenticator from a signing secret.
    ///
    /// # Errors
    /// * `EmptySecret` - `jwt_secret` has no bytes
    pub fn from_secret(jwt_secret: &[u8], ttl: chrono::Duration) -> Result<Self, JwtError> {
        Ok(Self::new(PasswordHasher::new(), JwtHandler::new(jwt_secret, ttl)?))
    }
}

impl<H, C> Authenticator<H, C>
where
    H: CredentialHasher,
    C: TokenCodec,
{
    pub fn new(password_hasher: H, token_codec: C) -> Self {
        Self {
            password_hasher,
            token_codec,
            decoy_digest: OnceLock::new(),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token for `subject`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identity to bind into the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match or hash is unusable
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<String, AuthenticationError> {
        if !self.password_hasher.verify(stored_hash, password) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_codec.issue(subject)?)
    }

    /// Validate a token and return its subject.
    pub fn validate_token(&self, token: &str) -> Result<String, JwtError> {
        self.token_codec.validate(token)
    }

    /// Spend the same verification work as a real login attempt, then fail.
    ///
    /// Used when no stored hash exists for the presented account, so that
    /// unknown accounts and wrong passwords take comparable time.
    pub fn reject_without_account(&self, password: &str) -> AuthenticationError {
        let decoy = self
            .decoy_digest
            .get_or_init(|| self.password_hasher.hash(DECOY_CREDENTIAL).ok());

        if let Some(digest) = decoy {
            // Only the work matters.
            let _ = self.password_hasher.verify(digest, password);
        }

        AuthenticationError::InvalidCredentials
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use chrono::Duration;

    use super::*;

    fn authenticator() -> Authenticator {
        Authenticator::from_secret(b"test_secret_key_at_least_32_bytes!", Duration::hours(6))
            .expect("Failed to build authenticator")
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("124")
            .expect("Failed to hash password");

        let token = authenticator
            .authenticate("124", &hash, "user123")
            .expect("Authentication failed");
        assert!(!token.is_empty());

        let subject = authenticator
            .validate_token(&token)
            .expect("Token validation failed");
        assert_eq!(subject, "user123");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = authenticator.hash_password("124").unwrap();

        let result = authenticator.authenticate("wrong", &hash, "user123");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_corrupt_hash_is_invalid_credentials() {
        let authenticator = authenticator();

        let result = authenticator.authenticate("124", "not-a-phc-string", "user123");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_from_secret_rejects_empty_secret() {
        let result = Authenticator::from_secret(b"", Duration::hours(6));
        assert!(matches!(result, Err(JwtError::EmptySecret)));
    }

    #[test]
    fn test_validate_invalid_token() {
        let result = authenticator().validate_token("invalid.token.here");
        assert!(result.is_err());
    }

    #[derive(Default)]
    struct CountingHasher {
        hashes: AtomicUsize,
        verifies: AtomicUsize,
    }

    impl CredentialHasher for Arc<CountingHasher> {
        fn hash(&self, credential: &str) -> Result<String, PasswordError> {
            self.hashes.fetch_add(1, Ordering::SeqCst);
            Ok(format!("plain:{credential}"))
        }

        fn verify(&self, digest: &str, candidate: &str) -> bool {
            self.verifies.fetch_add(1, Ordering::SeqCst);
            digest == format!("plain:{candidate}")
        }
    }

    #[test]
    fn test_reject_without_account_runs_verification() {
        let hasher = Arc::new(CountingHasher::default());
        let codec = JwtHandler::with_default_ttl(b"test_secret_key_at_least_32_bytes!").unwrap();
        let authenticator = Authenticator::new(hasher.clone(), codec);

        let err = authenticator.reject_without_account("124");
        assert!(matches!(err, AuthenticationError::InvalidCredentials));
        assert_eq!(hasher.verifies.load(Ordering::SeqCst), 1);

        // The decoy digest is computed once and reused.
        authenticator.reject_without_account("other");
        assert_eq!(hasher.hashes.load(Ordering::SeqCst), 1);
        assert_eq!(hasher.verifies.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_reject_without_account_never_accepts_decoy_credential() {
        let authenticator = authenticator();

        let err = authenticator.reject_without_account(DECOY_CREDENTIAL);
        assert!(matches!(err, AuthenticationError::InvalidCredentials));
    }

    struct PlainHasher;

    impl CredentialHasher for PlainHasher {
        fn hash(&self, credential: &str) -> Result<String, PasswordError> {
            Ok(format!("plain:{credential}"))
        }

        fn verify(&self, digest: &str, candidate: &str) -> bool {
            digest == format!("plain:{candidate}")
        }
    }

    #[test]
    fn test_substitute_hasher() {
        let codec = JwtHandler::with_default_ttl(b"test_secret_key_at_least_32_bytes!").unwrap();
        let authenticator = Authenticator::new(PlainHasher, codec);

        let hash = authenticator.hash_password("pw").unwrap();
        assert_eq!(hash, "plain:pw");
        assert!(authenticator.authenticate("pw", &hash, "u1").is_ok());
    }
}
