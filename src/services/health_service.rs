use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Report storage reachability and how many ticker consumers are mounted.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let active_consumers = state.ticker().active_consumers().await;

    match state.storage().health_check().await {
        Ok(()) => HealthResponse::ok(active_consumers),
        Err(err) => {
            warn!(error = %err, "storage health check failed");
            HealthResponse::degraded(active_consumers)
        }
    }
}
