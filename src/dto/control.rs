//! Request payloads for the match control endpoints.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::validation::{validate_image_data_url, validate_logo_value};
use crate::state::records::{CardKind, MatchPatch, TeamPatch};

/// Partial update of the top-level match fields.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchPatchRequest {
    /// New stadium line.
    #[validate(length(max = 120))]
    pub stadium: Option<String>,
    /// New league name.
    #[validate(length(max = 120))]
    pub league: Option<String>,
    /// New free-form date display text.
    #[validate(length(max = 120))]
    pub match_date: Option<String>,
}

impl From<MatchPatchRequest> for MatchPatch {
    fn from(value: MatchPatchRequest) -> Self {
        MatchPatch {
            stadium: value.stadium,
            league: value.league,
            match_date: value.match_date,
            custom_logos: None,
        }
    }
}

/// Partial update of one team's display fields and score.
///
/// `score` edits here bypass the goal list; only the explicit goal
/// operations re-couple the two.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamPatchRequest {
    /// New display name.
    #[validate(length(max = 80))]
    pub name: Option<String>,
    /// New short code.
    #[validate(length(max = 8))]
    pub short_name: Option<String>,
    /// New logo: emoji literal or embedded image data URL.
    #[validate(custom(function = validate_logo_value))]
    pub logo: Option<String>,
    /// New score, independent of the goal list.
    pub score: Option<u32>,
}

impl From<TeamPatchRequest> for TeamPatch {
    fn from(value: TeamPatchRequest) -> Self {
        TeamPatch {
            name: value.name,
            short_name: value.short_name,
            logo: value.logo,
            score: value.score,
            goals: None,
            cards: None,
        }
    }
}

/// Payload recording a goal for one side.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct GoalRequest {
    /// Scorer name as typed by the operator; placeholder labels are fine.
    #[validate(length(max = 80))]
    pub player: String,
}

/// Payload recording a card for one side.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CardRequest {
    /// Player name as typed by the operator.
    #[validate(length(max = 80))]
    pub player: String,
    /// Yellow or red.
    #[serde(rename = "type")]
    pub kind: CardKind,
}

/// Bulk score adjustment relative to the current score.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ScoreAdjustmentRequest {
    /// Signed number of goals to add or remove; must be non-zero.
    pub delta: i32,
}

/// Payload adding an uploaded logo to the shared list.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LogoUploadRequest {
    /// The uploaded image as a `data:image/...` URL.
    #[validate(custom(function = validate_image_data_url))]
    pub data_url: String,
}
