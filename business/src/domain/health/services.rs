use async_trait::async_trait;

use super::model::DatabaseHealth;

/// Probes the backing database and reports pool gauges.
#[async_trait]
pub trait HealthProbeService: Send + Sync {
    async fn check(&self) -> DatabaseHealth;
}
