use super::env_var;

/// Bearer-token settings for the `/v0` routes.
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret; `None` leaves the API unauthenticated.
    pub secret: Option<String>,
}

impl AuthConfig {
    /// Environment variables:
    /// - ENC_KEY: HS256 signing secret (optional)
    pub fn from_env() -> Self {
        Self {
            secret: env_var("ENC_KEY"),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("enabled", &self.secret.is_some())
            .finish()
    }
}
