use std::sync::Arc;

use anyhow::Context;
use auth::Authenticator;
use company_service::config::Config;
use company_service::domain::user::errors::UserError;
use company_service::domain::user::models::CreateUserCommand;
use company_service::domain::user::models::Username;
use company_service::domain::user::ports::UserServicePort;
use company_service::domain::user::service::UserService;
use company_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Apply migrations, then create the seed account if one is configured.
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "company_service=debug,company_migrate=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;

    let pg_pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database.url)
        .await?;

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let Some(seed) = config.seed else {
        tracing::info!("No seed account configured");
        return Ok(());
    };

    let authenticator = Arc::new(
        Authenticator::from_secret(
            config.jwt.secret.as_bytes(),
            config.jwt.token_ttl()?,
        )
        .context("invalid token signing configuration")?,
    );
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));
    let user_service = UserService::new(user_repository, authenticator);

    let command = CreateUserCommand::new(
        seed.name,
        Username::new(seed.username).context("invalid seed username")?,
        seed.password,
    );

    match user_service.create_user(command).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, username = %user.username.as_str(), "Seed user created")
        }
        Err(UserError::UsernameAlreadyExists(username)) => {
            tracing::info!(username = %username, "Seed user already present")
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
