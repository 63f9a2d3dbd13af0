use std::sync::Arc;

use anyhow::Context;
use auth::Authenticator;
use auth::JwtHandler;
use auth::PasswordHasher;
use auth::TokenCodec;
use company_service::config::Config;
use company_service::domain::company::service::CompanyService;
use company_service::domain::user::service::UserService;
use company_service::inbound::http::router::create_router;
use company_service::outbound::events::KafkaEventProducer;
use company_service::outbound::repositories::PostgresCompanyRepository;
use company_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "company_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "company-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        kafka_brokers = %config.kafka.brokers,
        kafka_topic = %config.kafka.topic,
        token_ttl_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    // Fails fast on an empty signing secret.
    let token_handler = JwtHandler::new(
        config.jwt.secret.as_bytes(),
        config.jwt.token_ttl()?,
    )
    .context("invalid token signing configuration")?;

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        PasswordHasher::new(),
        token_handler.clone(),
    ));
    let token_codec: Arc<dyn TokenCodec> = Arc::new(token_handler);

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let company_repository = Arc::new(PostgresCompanyRepository::new(pg_pool));
    let event_producer = Arc::new(KafkaEventProducer::new(&config.kafka)?);

    let user_service = Arc::new(UserService::new(user_repository, authenticator));
    let company_service = Arc::new(CompanyService::new(company_repository, event_producer));

    let http_address = config.http_address();
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, company_service, token_codec);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
