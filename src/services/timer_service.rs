use validator::Validate;

use crate::{
    dto::timer::{AddedTimeRequest, TimerEndRequest, TimerPositionRequest},
    error::ServiceError,
    state::SharedState,
    state::records::TimerRecord,
};

/// Start the match clock.
pub async fn start(state: &SharedState) -> TimerRecord {
    state.store().start_timer().await
}

/// Stop the match clock.
pub async fn stop(state: &SharedState) -> TimerRecord {
    state.store().stop_timer().await
}

/// Zero the clock and clear thresholds and banner state.
pub async fn reset(state: &SharedState) -> TimerRecord {
    state.store().reset_timer().await
}

/// Move the stopped clock to a whole-minute position.
pub async fn set_position(
    state: &SharedState,
    request: TimerPositionRequest,
) -> Result<TimerRecord, ServiceError> {
    request.validate().map_err(ServiceError::from)?;
    Ok(state.store().set_timer_position(request.minutes).await)
}

/// Set or clear the auto-stop threshold.
pub async fn set_end(state: &SharedState, request: TimerEndRequest) -> TimerRecord {
    state.store().set_timer_end(request.end_minutes).await
}

/// Announce stoppage time (zero clears it).
pub async fn set_added_time(
    state: &SharedState,
    request: AddedTimeRequest,
) -> Result<TimerRecord, ServiceError> {
    request.validate().map_err(ServiceError::from)?;
    Ok(state.store().set_added_time(request.minutes).await)
}
