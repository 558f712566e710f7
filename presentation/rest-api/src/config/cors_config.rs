use poem::middleware::Cors;

use super::env_var;

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: "http://localhost:3000,http://localhost:8080")
///
/// The API is read-only, so only GET and preflight requests are allowed.
pub fn init_cors() -> Cors {
    let allowed_origins = env_var("CORS_ALLOWED_ORIGINS")
        .unwrap_or_else(|| "http://localhost:3000,http://localhost:8080".to_string());

    let origins: Vec<&str> = allowed_origins.split(',').map(str::trim).collect();

    Cors::new()
        .allow_origins(origins)
        .allow_methods(vec!["GET", "OPTIONS"])
        .allow_headers(vec!["content-type", "authorization"])
}
