//! Request payloads for the timer control endpoints.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Move the stopped clock to a whole-minute position.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct TimerPositionRequest {
    /// Target minute, e.g. 45 for the second half.
    #[validate(range(max = 600))]
    pub minutes: u32,
}

/// Set or clear the auto-stop threshold.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimerEndRequest {
    /// Threshold in minutes; `null` clears it.
    pub end_minutes: Option<u32>,
}

/// Announce stoppage time.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AddedTimeRequest {
    /// Minutes to accumulate; zero clears the accumulated added time.
    #[validate(range(max = 60))]
    pub minutes: u32,
}
