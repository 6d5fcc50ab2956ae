use validator::Validate;

use crate::{
    dto::theme::{PresetThemeSummary, SaveThemeRequest, SavedThemeSummary},
    error::ServiceError,
    state::SharedState,
    state::records::{MatchRecord, ThemePatch, preset_themes},
};

/// Shallow-merge the patch into the live theme.
pub async fn update_theme(state: &SharedState, patch: ThemePatch) -> MatchRecord {
    state.store().update_theme(patch).await
}

/// Restore the hard-coded default theme.
pub async fn reset_theme(state: &SharedState) -> MatchRecord {
    state.store().reset_theme().await
}

/// Built-in preset catalog.
pub fn list_presets() -> Vec<PresetThemeSummary> {
    preset_themes().into_iter().map(Into::into).collect()
}

/// User-saved themes in insertion order.
pub async fn list_saved(state: &SharedState) -> Vec<SavedThemeSummary> {
    state
        .store()
        .saved_themes()
        .await
        .into_iter()
        .map(Into::into)
        .collect()
}

/// Snapshot the live theme under a new name.
pub async fn save_theme(
    state: &SharedState,
    request: SaveThemeRequest,
) -> Result<SavedThemeSummary, ServiceError> {
    request.validate().map_err(ServiceError::from)?;
    Ok(state.store().save_theme(request.name.trim()).await.into())
}

/// Replace the live theme with the preset or saved theme named by `id`.
pub async fn load_theme(state: &SharedState, id: &str) -> Result<MatchRecord, ServiceError> {
    if !state.store().load_theme(id).await {
        return Err(ServiceError::NotFound(format!("theme `{id}` not found")));
    }
    Ok(state.store().match_record().await)
}

/// Delete a saved theme. Presets are not deletable and report not-found.
pub async fn delete_theme(state: &SharedState, id: &str) -> Result<(), ServiceError> {
    if !state.store().delete_theme(id).await {
        return Err(ServiceError::NotFound(format!(
            "saved theme `{id}` not found"
        )));
    }
    Ok(())
}
