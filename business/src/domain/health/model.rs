use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Up,
    Down,
}

/// Snapshot of the database connection pool.
///
/// `message` is set when the database answered, `error` when it did not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseHealth {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub total_connections: u32,
    pub idle_connections: u32,
    pub used_connections: u32,
}

impl DatabaseHealth {
    pub fn up(total_connections: u32, idle_connections: u32) -> Self {
        Self {
            status: HealthStatus::Up,
            message: Some("It's healthy".to_string()),
            error: None,
            total_connections,
            idle_connections,
            used_connections: total_connections.saturating_sub(idle_connections),
        }
    }

    pub fn down(error: impl Into<String>, total_connections: u32, idle_connections: u32) -> Self {
        Self {
            status: HealthStatus::Down,
            message: None,
            error: Some(error.into()),
            total_connections,
            idle_connections,
            used_connections: total_connections.saturating_sub(idle_connections),
        }
    }

    pub fn is_up(&self) -> bool {
        self.status == HealthStatus::Up
    }
}
