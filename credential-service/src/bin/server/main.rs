use std::sync::Arc;

use credential_service::config::Config;
use credential_service::domain::user::service::CredentialService;
use credential_service::inbound::http::router::create_router;
use credential_service::outbound::hashing::Argon2PasswordHasher;
use credential_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "credential_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "credential-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        max_connections = config.database.max_connections,
        hashing_memory_kib = config.hashing.memory_kib,
        hashing_iterations = config.hashing.iterations,
        "Configuration loaded"
    );

    let password_hasher = Arc::new(Argon2PasswordHasher::new(
        auth::PasswordHasher::with_params(&config.hashing)?,
    ));

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

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));
    let credential_service = Arc::new(CredentialService::new(user_repository, password_hasher));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(credential_service)).await?;

    tracing::info!("Server exited");

    Ok(())
}
