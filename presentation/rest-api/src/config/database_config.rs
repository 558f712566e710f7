use anyhow::{Context, anyhow};
use persistence::db::DatabaseConfig;

use super::env_var;

/// Build the database configuration from environment variables
///
/// Environment variables:
/// - DB_HOST, DB_PORT, DB_USERNAME, DB_PASSWORD, DB_NAME (required)
/// - ENV: "LOCAL" connects without TLS, any other value requires it
/// - DB_MAX_CONNECTIONS: pool size (default: 5)
///
/// # Errors
/// Returns error if a required variable is missing or malformed
pub fn from_env() -> anyhow::Result<DatabaseConfig> {
    from_lookup(env_var)
}

pub(crate) fn from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<DatabaseConfig> {
    let required = |name: &str| lookup(name).ok_or_else(|| anyhow!("{name} must be set"));

    let port = required("DB_PORT")?;
    let port = port
        .parse::<u16>()
        .with_context(|| format!("DB_PORT is not a valid port: {port}"))?;

    let mut config = DatabaseConfig::new(
        required("DB_HOST")?,
        port,
        required("DB_USERNAME")?,
        required("DB_PASSWORD")?,
        required("DB_NAME")?,
    );
    config.require_tls = lookup("ENV").as_deref() != Some("LOCAL");
    if let Some(max) = lookup("DB_MAX_CONNECTIONS") {
        config.max_connections = max
            .parse::<u32>()
            .with_context(|| format!("DB_MAX_CONNECTIONS is not a number: {max}"))?;
    }

    Ok(config)
}
