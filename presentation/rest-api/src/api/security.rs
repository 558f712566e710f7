use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::http::header;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response};

use crate::api::error::{ApiError, ClientError};
use crate::config::auth_config::AuthConfig;

const BEARER_SCHEME: &str = "bearerAuth";

/// Verifies HS256-signed bearer tokens.
///
/// No claim is mandatory; `exp` and `nbf` are checked when the token has them.
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_aud = false;
        validation.validate_nbf = true;

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> Result<(), String> {
        decode::<serde_json::Value>(token, &self.key, &self.validation)
            .map(|_| ())
            .map_err(|e| format!("auth.token_validation_failed: {e}"))
    }
}

fn bearer_token(req: &Request) -> Result<&str, String> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or("auth.missing_header")?
        .to_str()
        .map_err(|_| "auth.malformed_header")?;

    // Scheme names are case-insensitive.
    value
        .split_once(' ')
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| "auth.not_bearer".to_string())
}

/// Declares the bearer scheme in an OpenAPI document and requires it on every
/// operation. Enforcement stays in [`BearerAuth`].
pub fn document_bearer_auth(document: &str) -> Result<String, serde_json::Error> {
    let mut document: serde_json::Value = serde_json::from_str(document)?;
    if let Some(root) = document.as_object_mut() {
        if let Some(components) = root
            .entry("components")
            .or_insert_with(|| serde_json::json!({}))
            .as_object_mut()
        {
            if let Some(schemes) = components
                .entry("securitySchemes")
                .or_insert_with(|| serde_json::json!({}))
                .as_object_mut()
            {
                schemes.insert(
                    BEARER_SCHEME.to_string(),
                    serde_json::json!({"type": "http", "scheme": "bearer", "bearerFormat": "JWT"}),
                );
            }
        }
        root.insert(
            "security".to_string(),
            serde_json::json!([{ BEARER_SCHEME: [] }]),
        );
    }
    serde_json::to_string(&document)
}

/// Rejects requests without a valid bearer token with `401`.
/// Built without a secret it lets every request through.
pub struct BearerAuth {
    verifier: Option<Arc<TokenVerifier>>,
}

impl BearerAuth {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            verifier: config
                .secret
                .as_deref()
                .map(|secret| Arc::new(TokenVerifier::new(secret))),
        }
    }
}

impl<E: Endpoint> Middleware<E> for BearerAuth {
    type Output = BearerAuthEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        BearerAuthEndpoint {
            inner: ep,
            verifier: self.verifier.clone(),
        }
    }
}

pub struct BearerAuthEndpoint<E> {
    inner: E,
    verifier: Option<Arc<TokenVerifier>>,
}

impl<E: Endpoint> Endpoint for BearerAuthEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> poem::Result<Self::Output> {
        if let Some(verifier) = &self.verifier {
            let verdict = bearer_token(&req).and_then(|token| verifier.verify(token));
            if let Err(reason) = verdict {
                return Ok(ApiError::from(ClientError::unauthorized(reason)).into_response());
            }
        }

        self.inner.call(req).await.map(IntoResponse::into_response)
    }
}
