use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use persistence::db::{close_postgres_pool, create_postgres_pool};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// City Tags API entry point
///
/// Loads configuration, builds the database pool, wires dependencies and
/// serves until Ctrl-C. Layout:
/// - config/: environment-driven configuration (server, CORS, database, auth)
/// - setup/: dependency injection and server assembly
/// - api/: routes, DTOs, validation, error envelope and middleware
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;
    let db_config = database_config::from_env()?;
    if config.auth.secret.is_none() {
        tracing::warn!("ENC_KEY is not set, /v0 routes accept unauthenticated requests");
    }

    // 4. Initialize database
    let pool = create_postgres_pool(&db_config);

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool.clone());

    // 6. Run server, then release the pool
    Server::run(config, container).await?;
    close_postgres_pool(&pool, &db_config).await;

    Ok(())
}
