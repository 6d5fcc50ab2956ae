use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Pitchside Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::sse::events_stream,
        crate::routes::overlay::match_snapshot,
        crate::routes::overlay::timer_snapshot,
        crate::routes::overlay::themes_snapshot,
        crate::routes::control::update_match,
        crate::routes::control::update_team,
        crate::routes::control::add_goal,
        crate::routes::control::remove_goal,
        crate::routes::control::add_card,
        crate::routes::control::remove_card,
        crate::routes::control::adjust_score,
        crate::routes::control::reset_match,
        crate::routes::control::add_custom_logo,
        crate::routes::control::remove_custom_logo,
        crate::routes::control::start_timer,
        crate::routes::control::stop_timer,
        crate::routes::control::reset_timer,
        crate::routes::control::set_timer_position,
        crate::routes::control::set_timer_end,
        crate::routes::control::set_added_time,
        crate::routes::control::update_theme,
        crate::routes::control::reset_theme,
        crate::routes::control::list_saved_themes,
        crate::routes::control::list_preset_themes,
        crate::routes::control::save_theme,
        crate::routes::control::load_theme,
        crate::routes::control::delete_theme,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::common::ActionResponse,
            crate::state::records::MatchRecord,
            crate::state::records::TeamRecord,
            crate::state::records::GoalEvent,
            crate::state::records::CardEvent,
            crate::state::records::CardKind,
            crate::state::records::ThemeSettings,
            crate::state::records::GradientStop,
            crate::state::records::BackgroundKind,
            crate::state::records::TimerRecord,
            crate::state::records::SavedTheme,
            crate::state::store::TeamSide,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "sse", description = "Server-sent change event stream"),
        (name = "overlay", description = "Read-only snapshots for scoreboard views"),
        (name = "control", description = "Match control panel operations"),
        (name = "timer", description = "Match clock operations"),
        (name = "theme", description = "Theme customization and presets"),
    )
)]
pub struct ApiDoc;
