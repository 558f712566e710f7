use std::time::Duration;

use anyhow::Context;

use super::env_var;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVER_HOST: IP address to bind (default: "0.0.0.0")
    /// - SERVER_PORT: Port to bind (default: "8080")
    /// - REQUEST_TIMEOUT_SECS: Per-request deadline in seconds (default: "30")
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(env_var)
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("SERVER_PORT") {
            Some(port) => port
                .parse::<u16>()
                .with_context(|| format!("SERVER_PORT is not a valid port: {port}"))?,
            None => 8080,
        };
        let timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(secs) => secs
                .parse::<u64>()
                .with_context(|| format!("REQUEST_TIMEOUT_SECS is not a number: {secs}"))?,
            None => 30,
        };

        Ok(Self {
            host,
            port,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Get the bind address as "host:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
