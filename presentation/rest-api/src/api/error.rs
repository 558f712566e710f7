use std::collections::HashMap;

use poem::http::StatusCode;
use poem::{IntoResponse, Response};
use poem_openapi::{Object, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::responses::respond_with_json;

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Error body shared by every endpoint.
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body
    pub code: u16,
    pub message: String,
    /// Per-parameter detail for validation failures
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, String>>,
}

/// A failure the caller can fix: bad parameters, missing credentials or an
/// unknown resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientError {
    pub http_code: StatusCode,
    pub message: String,
    /// Server-side detail, never sent to the client.
    pub log_message: String,
    pub field_errors: Option<HashMap<String, String>>,
}

impl ClientError {
    pub fn new(http_code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            http_code,
            message: message.into(),
            log_message: String::new(),
            field_errors: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn unauthorized(log_message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized").with_log_message(log_message)
    }

    pub fn with_log_message(mut self, log_message: impl Into<String>) -> Self {
        self.log_message = log_message.into();
        self
    }

    pub fn with_field_errors(mut self, field_errors: HashMap<String, String>) -> Self {
        self.field_errors = Some(field_errors);
        self
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.log_message.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}", self.log_message)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Client,
    Internal,
}

/// Every failure a handler can return. The boundary adapter switches on
/// [`ErrorKind`] to pick status and body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Client(ClientError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        ApiError::Internal(cause.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Client(_) => ErrorKind::Client,
            ApiError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Logs the error and turns it into the public status and body.
    /// Internal causes stay in the log.
    fn into_parts(self) -> (StatusCode, ErrorResponse) {
        match self.kind() {
            ErrorKind::Client => tracing::warn!("client error: {}", self),
            ErrorKind::Internal => tracing::error!("{}", self),
        }

        match self {
            ApiError::Client(err) => (
                err.http_code,
                ErrorResponse {
                    code: err.http_code.as_u16(),
                    message: err.message,
                    errors: err.field_errors,
                },
            ),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                    message: INTERNAL_MESSAGE.to_string(),
                    errors: None,
                },
            ),
        }
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        ApiError::Client(err)
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

impl IntoErrorResponse for ApiError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, body) = self.into_parts();
        (status, Json(body))
    }
}

/// Used outside the OpenAPI routes (middleware, fallbacks).
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.into_parts();
        respond_with_json(status, &body)
    }
}
