//! Request payloads and projections for theme management.

use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::format_unix_millis;
use crate::state::records::{PresetTheme, SavedTheme, ThemeSettings};

/// Payload saving the live theme under a new name.
#[derive(Debug, serde::Deserialize, ToSchema, Validate)]
pub struct SaveThemeRequest {
    /// Display name for the saved theme.
    #[validate(length(min = 1, max = 60))]
    pub name: String,
}

/// Projection of a saved theme for listings.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedThemeSummary {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// The stored theme payload.
    pub theme: ThemeSettings,
}

impl From<SavedTheme> for SavedThemeSummary {
    fn from(value: SavedTheme) -> Self {
        Self {
            id: value.id,
            name: value.name,
            created_at: format_unix_millis(value.created_at),
            theme: value.theme,
        }
    }
}

/// Projection of a built-in preset theme.
#[derive(Debug, Serialize, ToSchema)]
pub struct PresetThemeSummary {
    /// Stable identifier accepted by the load endpoint.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The full preset payload.
    pub theme: ThemeSettings,
}

impl From<PresetTheme> for PresetThemeSummary {
    fn from(value: PresetTheme) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.to_string(),
            theme: value.theme,
        }
    }
}
