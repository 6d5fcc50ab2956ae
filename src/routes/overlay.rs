use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::theme::SavedThemeSummary,
    services::theme_service,
    state::SharedState,
    state::records::{MatchRecord, TimerRecord},
};

/// Read-only snapshot endpoints views hit once on mount, before switching to
/// the SSE stream for live updates.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/overlay/match", get(match_snapshot))
        .route("/overlay/timer", get(timer_snapshot))
        .route("/overlay/themes", get(themes_snapshot))
}

/// Current match record.
#[utoipa::path(
    get,
    path = "/overlay/match",
    tag = "overlay",
    responses((status = 200, description = "Current match record", body = MatchRecord))
)]
pub async fn match_snapshot(State(state): State<SharedState>) -> Json<MatchRecord> {
    Json(state.store().match_record().await)
}

/// Current timer record.
#[utoipa::path(
    get,
    path = "/overlay/timer",
    tag = "overlay",
    responses((status = 200, description = "Current timer record", body = TimerRecord))
)]
pub async fn timer_snapshot(State(state): State<SharedState>) -> Json<TimerRecord> {
    Json(state.store().timer().await)
}

/// Saved themes available to the control panel.
#[utoipa::path(
    get,
    path = "/overlay/themes",
    tag = "overlay",
    responses((status = 200, description = "Saved themes", body = [SavedThemeSummary]))
)]
pub async fn themes_snapshot(State(state): State<SharedState>) -> Json<Vec<SavedThemeSummary>> {
    Json(theme_service::list_saved(&state).await)
}
