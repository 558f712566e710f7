use std::time::Duration;

use poem::http::{Method, StatusCode};
use poem::{Endpoint, IntoResponse, Middleware, Request, Response};

use crate::api::error::ErrorResponse;
use crate::api::responses::respond_with_json;

/// Answers `GET`/`HEAD <path>` with `pong` before any other middleware runs.
pub struct Heartbeat {
    path: &'static str,
}

impl Heartbeat {
    pub fn new(path: &'static str) -> Self {
        Self { path }
    }
}

impl<E: Endpoint> Middleware<E> for Heartbeat {
    type Output = HeartbeatEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        HeartbeatEndpoint {
            inner: ep,
            path: self.path,
        }
    }
}

pub struct HeartbeatEndpoint<E> {
    inner: E,
    path: &'static str,
}

impl<E: Endpoint> Endpoint for HeartbeatEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> poem::Result<Self::Output> {
        let is_probe = matches!(*req.method(), Method::GET | Method::HEAD);
        if is_probe && req.uri().path() == self.path {
            return Ok(Response::builder()
                .status(StatusCode::OK)
                .content_type("text/plain; charset=utf-8")
                .body("pong"));
        }

        self.inner.call(req).await.map(IntoResponse::into_response)
    }
}

/// Drops requests that outlive `timeout`. Dropping the handler future also
/// drops any database query it was awaiting.
pub struct RequestTimeout {
    timeout: Duration,
}

impl RequestTimeout {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl<E: Endpoint> Middleware<E> for RequestTimeout {
    type Output = RequestTimeoutEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        RequestTimeoutEndpoint {
            inner: ep,
            timeout: self.timeout,
        }
    }
}

pub struct RequestTimeoutEndpoint<E> {
    inner: E,
    timeout: Duration,
}

impl<E: Endpoint> Endpoint for RequestTimeoutEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> poem::Result<Self::Output> {
        let path = req.uri().path().to_string();
        match tokio::time::timeout(self.timeout, self.inner.call(req)).await {
            Ok(result) => result.map(IntoResponse::into_response),
            Err(_) => {
                tracing::warn!(%path, timeout = ?self.timeout, "request timed out");
                let status = StatusCode::SERVICE_UNAVAILABLE;
                Ok(respond_with_json(
                    status,
                    &ErrorResponse {
                        code: status.as_u16(),
                        message: "Request timed out".to_string(),
                        errors: None,
                    },
                ))
            }
        }
    }
}
