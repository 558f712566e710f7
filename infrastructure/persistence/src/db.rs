use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
};
use std::time::Duration;

/// Configuration for the database connection
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database_name: String,
    /// Require TLS to the server; local databases usually run without it.
    pub require_tls: bool,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default pool settings
    pub fn new(
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
        database_name: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            username: username.into(),
            password: password.into(),
            database_name: database_name.into(),
            require_tls: true,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(60),
        }
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        let ssl_mode = if self.require_tls {
            PgSslMode::Require
        } else {
            PgSslMode::Disable
        };

        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database_name)
            .ssl_mode(ssl_mode)
    }
}

/// Creates the process-wide PostgreSQL pool.
///
/// Connections are opened on first use, so an unreachable database surfaces
/// as a query error (and on `/health`) instead of aborting startup.
pub fn create_postgres_pool(config: &DatabaseConfig) -> PgPool {
    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.database_name,
        max_connections = config.max_connections,
        "Creating database pool"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .connect_lazy_with(config.connect_options())
}

/// Closes every pooled connection, waiting for leased ones to come back.
pub async fn close_postgres_pool(pool: &PgPool, config: &DatabaseConfig) {
    pool.close().await;
    tracing::info!("Disconnected from database: {}", config.database_name);
}
