use serde::Serialize;
use utoipa::ToSchema;

/// Generic action acknowledgement used by control endpoints that have no
/// richer payload to return.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActionResponse {
    /// Human-readable confirmation of what happened.
    pub message: String,
}

impl ActionResponse {
    /// Build an acknowledgement with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
