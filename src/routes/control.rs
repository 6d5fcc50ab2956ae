use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post, put},
};

use crate::{
    dto::{
        common::ActionResponse,
        control::{
            CardRequest, GoalRequest, LogoUploadRequest, MatchPatchRequest,
            ScoreAdjustmentRequest, TeamPatchRequest,
        },
        theme::{PresetThemeSummary, SaveThemeRequest, SavedThemeSummary},
        timer::{AddedTimeRequest, TimerEndRequest, TimerPositionRequest},
    },
    error::AppError,
    services::{match_service, theme_service, timer_service},
    state::{SharedState, TeamSide},
    state::records::{MatchRecord, ThemePatch, TimerRecord},
};

/// Control-panel endpoints mutating match, timer, and theme state.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/control/match", patch(update_match))
        .route("/control/match/reset", post(reset_match))
        .route("/control/match/{side}", patch(update_team))
        .route("/control/match/{side}/goals", post(add_goal))
        .route("/control/match/{side}/goals/{index}", delete(remove_goal))
        .route("/control/match/{side}/cards", post(add_card))
        .route("/control/match/{side}/cards/{index}", delete(remove_card))
        .route("/control/match/{side}/score", post(adjust_score))
        .route("/control/logos", post(add_custom_logo))
        .route("/control/logos/{index}", delete(remove_custom_logo))
        .route("/control/timer/start", post(start_timer))
        .route("/control/timer/stop", post(stop_timer))
        .route("/control/timer/reset", post(reset_timer))
        .route("/control/timer/position", put(set_timer_position))
        .route("/control/timer/end", put(set_timer_end))
        .route("/control/timer/added-time", post(set_added_time))
        .route("/control/theme", patch(update_theme))
        .route("/control/theme/reset", post(reset_theme))
        .route("/control/themes", get(list_saved_themes).post(save_theme))
        .route("/control/themes/presets", get(list_preset_themes))
        .route("/control/themes/{id}/load", post(load_theme))
        .route("/control/themes/{id}", delete(delete_theme))
}

/// Update the top-level match fields (stadium, league, date).
#[utoipa::path(
    patch,
    path = "/control/match",
    tag = "control",
    request_body = MatchPatchRequest,
    responses((status = 200, description = "Updated match record", body = MatchRecord))
)]
pub async fn update_match(
    State(state): State<SharedState>,
    Json(payload): Json<MatchPatchRequest>,
) -> Result<Json<MatchRecord>, AppError> {
    Ok(Json(match_service::update_match(&state, payload).await?))
}

/// Update one team's display fields or score.
#[utoipa::path(
    patch,
    path = "/control/match/{side}",
    tag = "control",
    params(("side" = TeamSide, Path, description = "Which team to update")),
    request_body = TeamPatchRequest,
    responses((status = 200, description = "Updated match record", body = MatchRecord))
)]
pub async fn update_team(
    State(state): State<SharedState>,
    Path(side): Path<TeamSide>,
    Json(payload): Json<TeamPatchRequest>,
) -> Result<Json<MatchRecord>, AppError> {
    Ok(Json(match_service::update_team(&state, side, payload).await?))
}

/// Record a goal for one side, stamped with the current clock.
#[utoipa::path(
    post,
    path = "/control/match/{side}/goals",
    tag = "control",
    params(("side" = TeamSide, Path, description = "Scoring team")),
    request_body = GoalRequest,
    responses((status = 200, description = "Updated match record", body = MatchRecord))
)]
pub async fn add_goal(
    State(state): State<SharedState>,
    Path(side): Path<TeamSide>,
    Json(payload): Json<GoalRequest>,
) -> Result<Json<MatchRecord>, AppError> {
    Ok(Json(match_service::add_goal(&state, side, payload).await?))
}

/// Remove a goal by its position in the list.
#[utoipa::path(
    delete,
    path = "/control/match/{side}/goals/{index}",
    tag = "control",
    params(
        ("side" = TeamSide, Path, description = "Team owning the goal"),
        ("index" = usize, Path, description = "Zero-based goal index")
    ),
    responses((status = 200, description = "Updated match record", body = MatchRecord))
)]
pub async fn remove_goal(
    State(state): State<SharedState>,
    Path((side, index)): Path<(TeamSide, usize)>,
) -> Json<MatchRecord> {
    Json(match_service::remove_goal(&state, side, index).await)
}

/// Record a yellow or red card for one side.
#[utoipa::path(
    post,
    path = "/control/match/{side}/cards",
    tag = "control",
    params(("side" = TeamSide, Path, description = "Carded team")),
    request_body = CardRequest,
    responses((status = 200, description = "Updated match record", body = MatchRecord))
)]
pub async fn add_card(
    State(state): State<SharedState>,
    Path(side): Path<TeamSide>,
    Json(payload): Json<CardRequest>,
) -> Result<Json<MatchRecord>, AppError> {
    Ok(Json(match_service::add_card(&state, side, payload).await?))
}

/// Remove a card by its position in the list.
#[utoipa::path(
    delete,
    path = "/control/match/{side}/cards/{index}",
    tag = "control",
    params(
        ("side" = TeamSide, Path, description = "Team owning the card"),
        ("index" = usize, Path, description = "Zero-based card index")
    ),
    responses((status = 200, description = "Updated match record", body = MatchRecord))
)]
pub async fn remove_card(
    State(state): State<SharedState>,
    Path((side, index)): Path<(TeamSide, usize)>,
) -> Json<MatchRecord> {
    Json(match_service::remove_card(&state, side, index).await)
}

/// Bulk-adjust one side's score, rebuilding placeholder goals.
#[utoipa::path(
    post,
    path = "/control/match/{side}/score",
    tag = "control",
    params(("side" = TeamSide, Path, description = "Team to adjust")),
    request_body = ScoreAdjustmentRequest,
    responses((status = 200, description = "Updated match record", body = MatchRecord))
)]
pub async fn adjust_score(
    State(state): State<SharedState>,
    Path(side): Path<TeamSide>,
    Json(payload): Json<ScoreAdjustmentRequest>,
) -> Result<Json<MatchRecord>, AppError> {
    Ok(Json(match_service::adjust_score(&state, side, payload).await?))
}

/// Zero scores, goals, cards, and the clock while keeping the fixture setup.
#[utoipa::path(
    post,
    path = "/control/match/reset",
    tag = "control",
    responses((status = 200, description = "Reset match record", body = MatchRecord))
)]
pub async fn reset_match(State(state): State<SharedState>) -> Json<MatchRecord> {
    Json(match_service::reset_match(&state).await)
}

/// Add an uploaded logo to the shared list.
#[utoipa::path(
    post,
    path = "/control/logos",
    tag = "control",
    request_body = LogoUploadRequest,
    responses((status = 200, description = "Updated match record", body = MatchRecord))
)]
pub async fn add_custom_logo(
    State(state): State<SharedState>,
    Json(payload): Json<LogoUploadRequest>,
) -> Result<Json<MatchRecord>, AppError> {
    Ok(Json(match_service::add_custom_logo(&state, payload).await?))
}

/// Remove an uploaded logo by position.
#[utoipa::path(
    delete,
    path = "/control/logos/{index}",
    tag = "control",
    params(("index" = usize, Path, description = "Zero-based logo index")),
    responses((status = 200, description = "Updated match record", body = MatchRecord))
)]
pub async fn remove_custom_logo(
    State(state): State<SharedState>,
    Path(index): Path<usize>,
) -> Json<MatchRecord> {
    Json(match_service::remove_custom_logo(&state, index).await)
}

/// Start the match clock.
#[utoipa::path(
    post,
    path = "/control/timer/start",
    tag = "timer",
    responses((status = 200, description = "Updated timer record", body = TimerRecord))
)]
pub async fn start_timer(State(state): State<SharedState>) -> Json<TimerRecord> {
    Json(timer_service::start(&state).await)
}

/// Stop the match clock.
#[utoipa::path(
    post,
    path = "/control/timer/stop",
    tag = "timer",
    responses((status = 200, description = "Updated timer record", body = TimerRecord))
)]
pub async fn stop_timer(State(state): State<SharedState>) -> Json<TimerRecord> {
    Json(timer_service::stop(&state).await)
}

/// Zero the clock and clear thresholds.
#[utoipa::path(
    post,
    path = "/control/timer/reset",
    tag = "timer",
    responses((status = 200, description = "Updated timer record", body = TimerRecord))
)]
pub async fn reset_timer(State(state): State<SharedState>) -> Json<TimerRecord> {
    Json(timer_service::reset(&state).await)
}

/// Move the stopped clock to a whole-minute position.
#[utoipa::path(
    put,
    path = "/control/timer/position",
    tag = "timer",
    request_body = TimerPositionRequest,
    responses((status = 200, description = "Updated timer record", body = TimerRecord))
)]
pub async fn set_timer_position(
    State(state): State<SharedState>,
    Json(payload): Json<TimerPositionRequest>,
) -> Result<Json<TimerRecord>, AppError> {
    Ok(Json(timer_service::set_position(&state, payload).await?))
}

/// Set or clear the auto-stop threshold.
#[utoipa::path(
    put,
    path = "/control/timer/end",
    tag = "timer",
    request_body = TimerEndRequest,
    responses((status = 200, description = "Updated timer record", body = TimerRecord))
)]
pub async fn set_timer_end(
    State(state): State<SharedState>,
    Json(payload): Json<TimerEndRequest>,
) -> Json<TimerRecord> {
    Json(timer_service::set_end(&state, payload).await)
}

/// Announce stoppage time (zero clears it).
#[utoipa::path(
    post,
    path = "/control/timer/added-time",
    tag = "timer",
    request_body = AddedTimeRequest,
    responses((status = 200, description = "Updated timer record", body = TimerRecord))
)]
pub async fn set_added_time(
    State(state): State<SharedState>,
    Json(payload): Json<AddedTimeRequest>,
) -> Result<Json<TimerRecord>, AppError> {
    Ok(Json(timer_service::set_added_time(&state, payload).await?))
}

/// Merge a partial update into the live theme.
#[utoipa::path(
    patch,
    path = "/control/theme",
    tag = "theme",
    request_body = ThemePatch,
    responses((status = 200, description = "Updated match record", body = MatchRecord))
)]
pub async fn update_theme(
    State(state): State<SharedState>,
    Json(payload): Json<ThemePatch>,
) -> Json<MatchRecord> {
    Json(theme_service::update_theme(&state, payload).await)
}

/// Restore the hard-coded default theme.
#[utoipa::path(
    post,
    path = "/control/theme/reset",
    tag = "theme",
    responses((status = 200, description = "Updated match record", body = MatchRecord))
)]
pub async fn reset_theme(State(state): State<SharedState>) -> Json<MatchRecord> {
    Json(theme_service::reset_theme(&state).await)
}

/// List user-saved themes.
#[utoipa::path(
    get,
    path = "/control/themes",
    tag = "theme",
    responses((status = 200, description = "Saved themes", body = [SavedThemeSummary]))
)]
pub async fn list_saved_themes(State(state): State<SharedState>) -> Json<Vec<SavedThemeSummary>> {
    Json(theme_service::list_saved(&state).await)
}

/// List built-in preset themes.
#[utoipa::path(
    get,
    path = "/control/themes/presets",
    tag = "theme",
    responses((status = 200, description = "Preset themes", body = [PresetThemeSummary]))
)]
pub async fn list_preset_themes() -> Json<Vec<PresetThemeSummary>> {
    Json(theme_service::list_presets())
}

/// Save the live theme under a new name.
#[utoipa::path(
    post,
    path = "/control/themes",
    tag = "theme",
    request_body = SaveThemeRequest,
    responses((status = 200, description = "Saved theme", body = SavedThemeSummary))
)]
pub async fn save_theme(
    State(state): State<SharedState>,
    Json(payload): Json<SaveThemeRequest>,
) -> Result<Json<SavedThemeSummary>, AppError> {
    Ok(Json(theme_service::save_theme(&state, payload).await?))
}

/// Replace the live theme with a preset or saved theme.
#[utoipa::path(
    post,
    path = "/control/themes/{id}/load",
    tag = "theme",
    params(("id" = String, Path, description = "Preset or saved theme id")),
    responses((status = 200, description = "Updated match record", body = MatchRecord))
)]
pub async fn load_theme(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<MatchRecord>, AppError> {
    Ok(Json(theme_service::load_theme(&state, &id).await?))
}

/// Delete a saved theme by id; presets cannot be deleted.
#[utoipa::path(
    delete,
    path = "/control/themes/{id}",
    tag = "theme",
    params(("id" = String, Path, description = "Saved theme id")),
    responses(
        (status = 200, description = "Theme deleted", body = ActionResponse),
        (status = 404, description = "Unknown theme id")
    )
)]
pub async fn delete_theme(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ActionResponse>), AppError> {
    theme_service::delete_theme(&state, &id).await?;
    Ok((
        StatusCode::OK,
        Json(ActionResponse::new(format!("theme `{id}` deleted"))),
    ))
}
