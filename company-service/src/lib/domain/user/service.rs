use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::CredentialHasher;
use auth::JwtHandler;
use auth::PasswordHasher;
use auth::TokenCodec;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Owns the login flow: credential verification through the injected
/// [`Authenticator`] and token issuance for the verified user's ID.
pub struct UserService<UR, H = PasswordHasher, C = JwtHandler>
where
    UR: UserRepository,
    H: CredentialHasher,
    C: TokenCodec,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator<H, C>>,
}

impl<UR, H, C> UserService<UR, H, C>
where
    UR: UserRepository,
    H: CredentialHasher,
    C: TokenCodec,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator<H, C>>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    /// Rejects a login with no matching account after the same hash
    /// verification a wrong password costs.
    fn reject_without_account(&self, password: &str) -> UserError {
        match self.authenticator.reject_without_account(password) {
            AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
            AuthenticationError::JwtError(err) => UserError::TokenGeneration(err.to_string()),
        }
    }
}

#[async_trait]
impl<UR, H, C> UserServicePort for UserService<UR, H, C>
where
    UR: UserRepository,
    H: CredentialHasher,
    C: TokenCodec,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        if command.name.trim().is_empty() {
            return Err(UserError::EmptyName);
        }

        if command.password.is_empty() {
            return Err(UserError::EmptyPassword);
        }

        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| UserError::PasswordHashing(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            name: command.name,
            username: command.username,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User created");

        Ok(created_user)
    }

    async fn authenticate(&self, username: &str, password: &str) -> Result<String, UserError> {
        let Ok(username) = Username::new(username.to_string()) else {
            tracing::warn!("Login rejected: malformed username");
            return Err(self.reject_without_account(password));
        };

        let Some(user) = self.repository.find_by_username(&username).await? else {
            tracing::warn!(username = %username, "Login rejected: unknown username");
            return Err(self.reject_without_account(password));
        };

        let token = self
            .authenticator
            .authenticate(password, &user.password_hash, &user.id.to_string())
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::warn!(user_id = %user.id, "Login rejected: wrong password");
                    UserError::InvalidCredentials
                }
                AuthenticationError::JwtError(err) => {
                    tracing::error!(user_id = %user.id, error = %err, "Token generation failed");
                    UserError::TokenGeneration(err.to_string())
                }
            })?;

        tracing::info!(user_id = %user.id, "User authenticated");
        Ok(token)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }
}
