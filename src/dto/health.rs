use serde::Serialize;
use utoipa::ToSchema;

/// Health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Health status ("ok" or "degraded").
    pub status: String,
    /// Number of currently mounted ticker consumers.
    pub active_consumers: usize,
}

impl HealthResponse {
    /// Create a health response indicating the system is operational.
    pub fn ok(active_consumers: usize) -> Self {
        Self {
            status: "ok".to_string(),
            active_consumers,
        }
    }

    /// Create a health response indicating storage is unreachable.
    pub fn degraded(active_consumers: usize) -> Self {
        Self {
            status: "degraded".to_string(),
            active_consumers,
        }
    }
}
