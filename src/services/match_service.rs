use validator::Validate;

use crate::{
    dto::control::{
        CardRequest, GoalRequest, LogoUploadRequest, MatchPatchRequest, ScoreAdjustmentRequest,
        TeamPatchRequest,
    },
    error::ServiceError,
    state::{SharedState, TeamSide},
    state::records::{CUSTOM_LOGO_CAP, GoalEvent, MatchPatch, MatchRecord, TeamPatch},
};

/// Shallow-merge the patch into the top-level match fields.
pub async fn update_match(
    state: &SharedState,
    request: MatchPatchRequest,
) -> Result<MatchRecord, ServiceError> {
    request.validate().map_err(ServiceError::from)?;
    Ok(state.store().update_match(request.into()).await)
}

/// Shallow-merge the patch into one team.
pub async fn update_team(
    state: &SharedState,
    side: TeamSide,
    request: TeamPatchRequest,
) -> Result<MatchRecord, ServiceError> {
    request.validate().map_err(ServiceError::from)?;
    Ok(state.store().update_team(side, request.into()).await)
}

/// Record a goal, stamped with the clock at the moment of the call.
pub async fn add_goal(
    state: &SharedState,
    side: TeamSide,
    request: GoalRequest,
) -> Result<MatchRecord, ServiceError> {
    request.validate().map_err(ServiceError::from)?;
    Ok(state.store().add_goal(request.player, side).await)
}

/// Remove a goal by position. Out-of-range indexes are a no-op; the score is
/// recomputed from the remaining goals either way.
pub async fn remove_goal(state: &SharedState, side: TeamSide, index: usize) -> MatchRecord {
    state.store().remove_goal(side, index).await
}

/// Record a card, stamped like a goal; never affects the score.
pub async fn add_card(
    state: &SharedState,
    side: TeamSide,
    request: CardRequest,
) -> Result<MatchRecord, ServiceError> {
    request.validate().map_err(ServiceError::from)?;
    Ok(state.store().add_card(request.player, request.kind, side).await)
}

/// Remove a card by position. Out-of-range indexes are a no-op.
pub async fn remove_card(state: &SharedState, side: TeamSide, index: usize) -> MatchRecord {
    state.store().remove_card(side, index).await
}

/// Bulk score adjustment: shift the score by `delta` (floored at zero) and
/// rebuild the goal list as placeholder entries sized to the new score.
///
/// This is the legacy control-panel path, separate from the per-goal
/// operations: placeholders carry no real clock stamps and replace whatever
/// goal detail existed before.
pub async fn adjust_score(
    state: &SharedState,
    side: TeamSide,
    request: ScoreAdjustmentRequest,
) -> Result<MatchRecord, ServiceError> {
    if request.delta == 0 {
        return Err(ServiceError::InvalidInput(
            "score delta must be non-zero".into(),
        ));
    }

    let record = state.store().match_record().await;
    let team = match side {
        TeamSide::Home => &record.home_team,
        TeamSide::Away => &record.away_team,
    };

    let new_score = if request.delta >= 0 {
        team.score.saturating_add(request.delta as u32)
    } else {
        team.score.saturating_sub(request.delta.unsigned_abs())
    };

    let goals = (1..=new_score)
        .map(|number| GoalEvent {
            player: format!("Goal {number}"),
            minute: 0,
            second: 0,
        })
        .collect();

    Ok(state
        .store()
        .update_team(
            side,
            TeamPatch {
                score: Some(new_score),
                goals: Some(goals),
                ..TeamPatch::default()
            },
        )
        .await)
}

/// Add an uploaded logo to the shared list, most recent first, keeping only
/// the last [`CUSTOM_LOGO_CAP`] uploads.
pub async fn add_custom_logo(
    state: &SharedState,
    request: LogoUploadRequest,
) -> Result<MatchRecord, ServiceError> {
    request.validate().map_err(ServiceError::from)?;

    let mut logos = state.store().match_record().await.custom_logos;
    logos.insert(0, request.data_url);
    logos.truncate(CUSTOM_LOGO_CAP);

    Ok(state
        .store()
        .update_match(MatchPatch {
            custom_logos: Some(logos),
            ..MatchPatch::default()
        })
        .await)
}

/// Remove an uploaded logo by position. Out-of-range indexes are a no-op.
pub async fn remove_custom_logo(state: &SharedState, index: usize) -> MatchRecord {
    let mut logos = state.store().match_record().await.custom_logos;
    if index < logos.len() {
        logos.remove(index);
    }

    state
        .store()
        .update_match(MatchPatch {
            custom_logos: Some(logos),
            ..MatchPatch::default()
        })
        .await
}

/// Zero both teams' play state and the clock, keeping the fixture setup.
pub async fn reset_match(state: &SharedState) -> MatchRecord {
    state.store().reset_match().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::dao::overlay_store::memory::MemoryOverlayStore;
    use crate::state::AppState;

    async fn test_state() -> SharedState {
        AppState::new(Arc::new(MemoryOverlayStore::new()), 64).await
    }

    #[tokio::test]
    async fn adjust_score_rebuilds_placeholder_goals() {
        let state = test_state().await;
        state
            .store()
            .add_goal("Real Scorer", TeamSide::Home)
            .await;

        let record = adjust_score(&state, TeamSide::Home, ScoreAdjustmentRequest { delta: 2 })
            .await
            .unwrap();

        assert_eq!(record.home_team.score, 3);
        let players: Vec<&str> = record
            .home_team
            .goals
            .iter()
            .map(|goal| goal.player.as_str())
            .collect();
        assert_eq!(players, vec!["Goal 1", "Goal 2", "Goal 3"]);
        for goal in &record.home_team.goals {
            assert_eq!((goal.minute, goal.second), (0, 0));
        }
    }

    #[tokio::test]
    async fn adjust_score_floors_at_zero() {
        let state = test_state().await;

        let record = adjust_score(&state, TeamSide::Away, ScoreAdjustmentRequest { delta: -5 })
            .await
            .unwrap();

        assert_eq!(record.away_team.score, 0);
        assert!(record.away_team.goals.is_empty());
    }

    #[tokio::test]
    async fn adjust_score_rejects_zero_delta() {
        let state = test_state().await;
        let result = adjust_score(&state, TeamSide::Home, ScoreAdjustmentRequest { delta: 0 }).await;
        assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn custom_logos_are_most_recent_first_and_capped() {
        let state = test_state().await;

        for index in 0..12 {
            add_custom_logo(
                &state,
                LogoUploadRequest {
                    data_url: format!("data:image/png;base64,LOGO{index}"),
                },
            )
            .await
            .unwrap();
        }

        let record = state.store().match_record().await;
        assert_eq!(record.custom_logos.len(), CUSTOM_LOGO_CAP);
        assert_eq!(record.custom_logos[0], "data:image/png;base64,LOGO11");
        // The two oldest uploads fell off the end.
        assert!(
            !record
                .custom_logos
                .iter()
                .any(|logo| logo.ends_with("LOGO0") || logo.ends_with("LOGO1"))
        );
    }

    #[tokio::test]
    async fn remove_custom_logo_by_index() {
        let state = test_state().await;
        for index in 0..3 {
            add_custom_logo(
                &state,
                LogoUploadRequest {
                    data_url: format!("data:image/png;base64,LOGO{index}"),
                },
            )
            .await
            .unwrap();
        }

        let record = remove_custom_logo(&state, 1).await;
        assert_eq!(record.custom_logos.len(), 2);
        assert_eq!(record.custom_logos[0], "data:image/png;base64,LOGO2");
        assert_eq!(record.custom_logos[1], "data:image/png;base64,LOGO0");

        let record = remove_custom_logo(&state, 99).await;
        assert_eq!(record.custom_logos.len(), 2);
    }

    #[tokio::test]
    async fn upload_rejects_non_image_payloads() {
        let state = test_state().await;
        let result = add_custom_logo(
            &state,
            LogoUploadRequest {
                data_url: "https://example.com/logo.png".into(),
            },
        )
        .await;
        assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
    }
}
