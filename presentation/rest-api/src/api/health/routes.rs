use std::sync::Arc;

use chrono::Utc;
use poem::http::StatusCode;
use poem::web::Data;
use poem::{Response, handler};
use serde::{Deserialize, Serialize};

use business::domain::health::model::DatabaseHealth;
use business::domain::health::services::HealthProbeService;

use crate::api::responses::respond_with_json;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Database status and pool gauges
    #[serde(flatten)]
    pub database: DatabaseHealth,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Health check endpoint
///
/// Pings the database and reports the connection pool gauges. Public,
/// never authenticated. Answers `503` while the database is unreachable so
/// load balancers can take the instance out of rotation.
#[handler]
pub async fn health_check(probe: Data<&Arc<dyn HealthProbeService>>) -> Response {
    let database = probe.0.check().await;
    let status = if database.is_up() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    respond_with_json(
        status,
        &HealthCheckResponse {
            database,
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    )
}
