pub mod app_config;
pub mod auth_config;
pub mod cors_config;
pub mod database_config;
pub mod server_config;

/// Reads a variable, treating an empty value as unset.
pub(crate) fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
