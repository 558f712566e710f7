use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::health::model::DatabaseHealth;
use business::domain::health::services::HealthProbeService;

const PING_TIMEOUT: Duration = Duration::from_secs(1);

pub struct PostgresHealthProbe {
    pool: PgPool,
    timeout: Duration,
}

impl PostgresHealthProbe {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            timeout: PING_TIMEOUT,
        }
    }

    async fn ping(&self) -> Result<(), String> {
        match tokio::time::timeout(self.timeout, sqlx::query("SELECT 1").execute(&self.pool)).await
        {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(format!("db down: {e}")),
            Err(_) => Err(format!("db down: no answer within {:?}", self.timeout)),
        }
    }
}

#[async_trait]
impl HealthProbeService for PostgresHealthProbe {
    async fn check(&self) -> DatabaseHealth {
        let result = self.ping().await;
        let total = self.pool.size();
        let idle = u32::try_from(self.pool.num_idle()).unwrap_or(u32::MAX);

        match result {
            Ok(()) => DatabaseHealth::up(total, idle),
            Err(error) => {
                tracing::error!("{error}");
                DatabaseHealth::down(error, total, idle)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DatabaseConfig, create_postgres_pool};
    use business::domain::health::model::HealthStatus;

    #[tokio::test]
    async fn should_report_down_when_database_is_unreachable() {
        let mut config = DatabaseConfig::new("127.0.0.1", 1, "nobody", "nothing", "none");
        config.require_tls = false;
        config.acquire_timeout = Duration::from_millis(200);
        let probe = PostgresHealthProbe::new(create_postgres_pool(&config));

        let health = probe.check().await;

        assert_eq!(health.status, HealthStatus::Down);
        assert!(health.error.unwrap().starts_with("db down"));
        assert!(health.message.is_none());
    }
}
