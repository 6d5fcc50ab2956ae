//! Persisted record types shared by every view of the overlay.
//!
//! These structs double as the wire format: they serialize to the exact JSON
//! documents written to storage and broadcast on the change bus (camelCase
//! keys, matching what older deployments already persisted). Container-level
//! `#[serde(default)]` makes every parse a merge against the default record,
//! so documents written by older versions backfill missing fields instead of
//! failing to decode.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Current wall-clock time as unix milliseconds.
pub fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

/// Which disciplinary card was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    /// Caution.
    Yellow,
    /// Sending off.
    Red,
}

/// A goal credited to one team, stamped with the match clock at scoring time.
///
/// Immutable once appended; removed only by explicit removal-by-index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GoalEvent {
    /// Scorer display name. May be a placeholder label for bulk adjustments.
    pub player: String,
    /// Match minute at the moment the goal was recorded.
    pub minute: u32,
    /// Match second (0-59) at the moment the goal was recorded.
    pub second: u32,
}

/// A card shown to a player, stamped like [`GoalEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CardEvent {
    /// Player display name.
    pub player: String,
    /// Match minute at the moment the card was recorded.
    pub minute: u32,
    /// Match second (0-59) at the moment the card was recorded.
    pub second: u32,
    /// Yellow or red.
    #[serde(rename = "type")]
    pub kind: CardKind,
}

/// One team's slice of the match record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamRecord {
    /// Full display name.
    pub name: String,
    /// Short code shown in compact layouts (e.g. "ARG").
    pub short_name: String,
    /// Emoji literal or embedded `data:` image URL.
    pub logo: String,
    /// Current score. Expected to equal `goals.len()` in normal play, but the
    /// bulk score-adjustment path may set it independently.
    pub score: u32,
    /// Goals in insertion order.
    pub goals: Vec<GoalEvent>,
    /// Cards in insertion order.
    pub cards: Vec<CardEvent>,
}

impl Default for TeamRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            short_name: String::new(),
            logo: String::new(),
            score: 0,
            goals: Vec::new(),
            cards: Vec::new(),
        }
    }
}

/// How the scoreboard background is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    /// Single flat color.
    Solid,
    /// Linear gradient built from [`ThemeSettings::gradient_stops`].
    Linear,
}

/// A single color stop of the background gradient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GradientStop {
    /// CSS color value.
    pub color: String,
    /// Position along the gradient, 0-100.
    pub percentage: u8,
}

/// Flat record of every color the overlay renders with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeSettings {
    /// Flat background color used when `background_type` is `solid`.
    pub background_color: String,
    /// Solid or linear background.
    pub background_type: BackgroundKind,
    /// Legacy two-stop gradient start color, kept for documents that predate
    /// `gradient_stops`.
    pub background_gradient_start: String,
    /// Legacy two-stop gradient end color.
    pub background_gradient_end: String,
    /// Gradient angle in degrees.
    pub background_gradient_angle: i32,
    /// Ordered gradient stops, ascending by percentage. Empty on legacy
    /// documents; see [`ThemeSettings::effective_gradient_stops`].
    pub gradient_stops: Vec<GradientStop>,
    /// Main text color.
    pub primary_text_color: String,
    /// Dimmed text color (stadium line, goal list).
    pub secondary_text_color: String,
    /// Match clock color.
    pub timer_color: String,
    /// Score digits color.
    pub score_color: String,
    /// Home team accent.
    pub home_team_color: String,
    /// Away team accent.
    pub away_team_color: String,
    /// CSS background behind the home badge.
    pub home_badge_background: String,
    /// CSS background behind the away badge.
    pub away_badge_background: String,
    /// League icon backdrop color.
    pub league_icon_background: String,
    /// Goal/card list card background.
    pub goal_card_background: String,
    /// Goal/card list text color.
    pub goal_card_text_color: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            background_color: "#0f1729".into(),
            background_type: BackgroundKind::Linear,
            background_gradient_start: "#0f1729".into(),
            background_gradient_end: "#080a12".into(),
            background_gradient_angle: 180,
            gradient_stops: vec![
                GradientStop {
                    color: "#0f1729".into(),
                    percentage: 0,
                },
                GradientStop {
                    color: "#080a12".into(),
                    percentage: 100,
                },
            ],
            primary_text_color: "#fafafa".into(),
            secondary_text_color: "#94a3b8".into(),
            timer_color: "#fafafa".into(),
            score_color: "#fafafa".into(),
            home_team_color: "#60a5fa".into(),
            away_team_color: "#2db97c".into(),
            home_badge_background:
                "radial-gradient(circle at center, hsla(200, 70%, 65%, 0.2), transparent 70%)"
                    .into(),
            away_badge_background:
                "radial-gradient(circle at center, hsla(340, 70%, 30%, 0.2), transparent 70%)"
                    .into(),
            league_icon_background: "#fbbf24".into(),
            goal_card_background: "rgba(255, 255, 255, 0.05)".into(),
            goal_card_text_color: "#94a3b8".into(),
        }
    }
}

impl ThemeSettings {
    /// Gradient stops to render with.
    ///
    /// Documents written before `gradient_stops` existed carry only the
    /// start/end pair; for those the two-stop equivalent is synthesized here,
    /// at read time, and never written back.
    pub fn effective_gradient_stops(&self) -> Vec<GradientStop> {
        if !self.gradient_stops.is_empty() {
            return self.gradient_stops.clone();
        }
        vec![
            GradientStop {
                color: self.background_gradient_start.clone(),
                percentage: 0,
            },
            GradientStop {
                color: self.background_gradient_end.clone(),
                percentage: 100,
            },
        ]
    }
}

/// Aggregate root for everything the scoreboard displays except the clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchRecord {
    /// Home side.
    pub home_team: TeamRecord,
    /// Away side.
    pub away_team: TeamRecord,
    /// Stadium line shown above the clock.
    pub stadium: String,
    /// Competition name.
    pub league: String,
    /// Free-form date/kickoff display text.
    pub match_date: String,
    /// Live visual theme.
    pub theme: ThemeSettings,
    /// Uploaded logo images as `data:` URLs, most recent first, shared by
    /// both teams. Capped at [`CUSTOM_LOGO_CAP`] entries.
    pub custom_logos: Vec<String>,
}

/// Maximum number of retained custom logo uploads.
pub const CUSTOM_LOGO_CAP: usize = 10;

impl Default for MatchRecord {
    fn default() -> Self {
        Self {
            home_team: TeamRecord {
                name: "ARGENTINA".into(),
                short_name: "ARG".into(),
                logo: "\u{1f1e6}\u{1f1f7}".into(),
                ..TeamRecord::default()
            },
            away_team: TeamRecord {
                name: "BRAZIL".into(),
                short_name: "BRA".into(),
                logo: "\u{1f1e7}\u{1f1f7}".into(),
                ..TeamRecord::default()
            },
            stadium: "Maracan\u{e3} Stadium".into(),
            league: "FIFA WORLD CUP".into(),
            match_date: "17.11.2021 - 10:30".into(),
            theme: ThemeSettings::default(),
            custom_logos: Vec::new(),
        }
    }
}

/// The authoritative match clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TimerRecord {
    /// Elapsed whole minutes.
    pub minutes: u32,
    /// Elapsed seconds within the current minute, 0-59.
    pub seconds: u32,
    /// Whether the clock is advancing.
    pub is_running: bool,
    /// Auto-stop threshold in minutes; `None` means run indefinitely.
    pub end_minutes: Option<u32>,
    /// Stoppage minutes appended beyond `end_minutes`.
    pub added_time: u32,
    /// Transient hint telling views to show the added-time banner.
    pub show_added_time: bool,
    /// Unix-millisecond timestamp of the last committed tick, used to
    /// suppress double-advances when schedulers briefly overlap.
    pub last_update: u64,
}

impl Default for TimerRecord {
    fn default() -> Self {
        Self {
            minutes: 0,
            seconds: 0,
            is_running: false,
            end_minutes: None,
            added_time: 0,
            show_added_time: false,
            last_update: unix_millis(),
        }
    }
}

impl TimerRecord {
    /// Elapsed time expressed in fractional minutes.
    pub fn elapsed_minutes(&self) -> f64 {
        f64::from(self.minutes) + f64::from(self.seconds) / 60.0
    }

    /// Stamp `last_update` with the current wall clock.
    pub fn stamp(&mut self) {
        self.last_update = unix_millis();
    }
}

/// A user-saved named snapshot of [`ThemeSettings`].
///
/// Saved themes live in their own collection document; loading one copies
/// its payload into the live match record without linking back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedTheme {
    /// Unique identifier (UUID simple form).
    pub id: String,
    /// Operator-chosen display name.
    pub name: String,
    /// Snapshot taken at save time.
    pub theme: ThemeSettings,
    /// Unix-millisecond creation timestamp.
    pub created_at: u64,
}

/// A built-in theme shipped with the binary, never persisted.
#[derive(Debug, Clone)]
pub struct PresetTheme {
    /// Stable identifier looked up by `load_theme`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Full theme payload.
    pub theme: ThemeSettings,
}

/// Built-in preset catalog, distinct from user-saved themes.
pub fn preset_themes() -> Vec<PresetTheme> {
    vec![
        PresetTheme {
            id: "midnight",
            name: "Midnight Broadcast",
            theme: ThemeSettings::default(),
        },
        PresetTheme {
            id: "dark-mode",
            name: "Dark Mode",
            theme: ThemeSettings {
                background_color: "#09090b".into(),
                background_type: BackgroundKind::Solid,
                background_gradient_start: "#09090b".into(),
                background_gradient_end: "#09090b".into(),
                gradient_stops: vec![
                    GradientStop {
                        color: "#09090b".into(),
                        percentage: 0,
                    },
                    GradientStop {
                        color: "#09090b".into(),
                        percentage: 100,
                    },
                ],
                primary_text_color: "#f4f4f5".into(),
                secondary_text_color: "#71717a".into(),
                timer_color: "#f4f4f5".into(),
                score_color: "#f4f4f5".into(),
                home_team_color: "#a1a1aa".into(),
                away_team_color: "#d4d4d8".into(),
                home_badge_background: "rgba(255, 255, 255, 0.06)".into(),
                away_badge_background: "rgba(255, 255, 255, 0.06)".into(),
                league_icon_background: "#3f3f46".into(),
                goal_card_background: "rgba(255, 255, 255, 0.04)".into(),
                goal_card_text_color: "#a1a1aa".into(),
                ..ThemeSettings::default()
            },
        },
        PresetTheme {
            id: "daylight",
            name: "Daylight",
            theme: ThemeSettings {
                background_color: "#f8fafc".into(),
                background_type: BackgroundKind::Linear,
                background_gradient_start: "#f8fafc".into(),
                background_gradient_end: "#e2e8f0".into(),
                gradient_stops: vec![
                    GradientStop {
                        color: "#f8fafc".into(),
                        percentage: 0,
                    },
                    GradientStop {
                        color: "#e2e8f0".into(),
                        percentage: 100,
                    },
                ],
                primary_text_color: "#0f172a".into(),
                secondary_text_color: "#475569".into(),
                timer_color: "#0f172a".into(),
                score_color: "#0f172a".into(),
                home_team_color: "#2563eb".into(),
                away_team_color: "#059669".into(),
                home_badge_background: "rgba(37, 99, 235, 0.08)".into(),
                away_badge_background: "rgba(5, 150, 105, 0.08)".into(),
                league_icon_background: "#f59e0b".into(),
                goal_card_background: "rgba(15, 23, 42, 0.04)".into(),
                goal_card_text_color: "#475569".into(),
                ..ThemeSettings::default()
            },
        },
        PresetTheme {
            id: "crimson-touchline",
            name: "Crimson Touchline",
            theme: ThemeSettings {
                background_color: "#1c0a0e".into(),
                background_type: BackgroundKind::Linear,
                background_gradient_start: "#2b0c13".into(),
                background_gradient_end: "#12060a".into(),
                gradient_stops: vec![
                    GradientStop {
                        color: "#2b0c13".into(),
                        percentage: 0,
                    },
                    GradientStop {
                        color: "#611326".into(),
                        percentage: 55,
                    },
                    GradientStop {
                        color: "#12060a".into(),
                        percentage: 100,
                    },
                ],
                primary_text_color: "#fef2f2".into(),
                secondary_text_color: "#fda4af".into(),
                timer_color: "#fef2f2".into(),
                score_color: "#fecdd3".into(),
                home_team_color: "#fb7185".into(),
                away_team_color: "#fbbf24".into(),
                home_badge_background:
                    "radial-gradient(circle at center, hsla(350, 80%, 60%, 0.25), transparent 70%)"
                        .into(),
                away_badge_background:
                    "radial-gradient(circle at center, hsla(40, 90%, 55%, 0.2), transparent 70%)"
                        .into(),
                league_icon_background: "#e11d48".into(),
                goal_card_background: "rgba(254, 242, 242, 0.05)".into(),
                goal_card_text_color: "#fda4af".into(),
                ..ThemeSettings::default()
            },
        },
        PresetTheme {
            id: "emerald-pitch",
            name: "Emerald Pitch",
            theme: ThemeSettings {
                background_color: "#052e16".into(),
                background_type: BackgroundKind::Linear,
                background_gradient_start: "#064e3b".into(),
                background_gradient_end: "#022c22".into(),
                gradient_stops: vec![
                    GradientStop {
                        color: "#064e3b".into(),
                        percentage: 0,
                    },
                    GradientStop {
                        color: "#022c22".into(),
                        percentage: 100,
                    },
                ],
                primary_text_color: "#ecfdf5".into(),
                secondary_text_color: "#6ee7b7".into(),
                timer_color: "#ecfdf5".into(),
                score_color: "#d1fae5".into(),
                home_team_color: "#34d399".into(),
                away_team_color: "#fde047".into(),
                home_badge_background:
                    "radial-gradient(circle at center, hsla(160, 70%, 45%, 0.25), transparent 70%)"
                        .into(),
                away_badge_background:
                    "radial-gradient(circle at center, hsla(55, 85%, 55%, 0.2), transparent 70%)"
                        .into(),
                league_icon_background: "#10b981".into(),
                goal_card_background: "rgba(236, 253, 245, 0.05)".into(),
                goal_card_text_color: "#6ee7b7".into(),
                ..ThemeSettings::default()
            },
        },
    ]
}

/// Look up a preset theme payload by id.
pub fn preset_theme(id: &str) -> Option<ThemeSettings> {
    preset_themes()
        .into_iter()
        .find(|preset| preset.id == id)
        .map(|preset| preset.theme)
}

/// Shallow-merge partial for the top-level match fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchPatch {
    /// New stadium line.
    pub stadium: Option<String>,
    /// New league name.
    pub league: Option<String>,
    /// New date display text.
    pub match_date: Option<String>,
    /// Replacement custom logo list.
    pub custom_logos: Option<Vec<String>>,
}

impl MatchPatch {
    /// Merge the set fields into `record`.
    pub fn apply(self, record: &mut MatchRecord) {
        if let Some(stadium) = self.stadium {
            record.stadium = stadium;
        }
        if let Some(league) = self.league {
            record.league = league;
        }
        if let Some(match_date) = self.match_date {
            record.match_date = match_date;
        }
        if let Some(custom_logos) = self.custom_logos {
            record.custom_logos = custom_logos;
        }
    }
}

/// Shallow-merge partial for one team.
///
/// `score` and `goals` merge independently; the bulk score-adjustment path
/// patches both at once with placeholder goals, and nothing here re-couples
/// them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamPatch {
    /// New display name.
    pub name: Option<String>,
    /// New short code.
    pub short_name: Option<String>,
    /// New logo (emoji or `data:` URL).
    pub logo: Option<String>,
    /// New score, independent of the goal list.
    pub score: Option<u32>,
    /// Replacement goal list.
    pub goals: Option<Vec<GoalEvent>>,
    /// Replacement card list.
    pub cards: Option<Vec<CardEvent>>,
}

impl TeamPatch {
    /// Merge the set fields into `team`.
    pub fn apply(self, team: &mut TeamRecord) {
        if let Some(name) = self.name {
            team.name = name;
        }
        if let Some(short_name) = self.short_name {
            team.short_name = short_name;
        }
        if let Some(logo) = self.logo {
            team.logo = logo;
        }
        if let Some(score) = self.score {
            team.score = score;
        }
        if let Some(goals) = self.goals {
            team.goals = goals;
        }
        if let Some(cards) = self.cards {
            team.cards = cards;
        }
    }
}

/// Shallow-merge partial for the live theme.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemePatch {
    /// New flat background color.
    pub background_color: Option<String>,
    /// Switch between solid and linear backgrounds.
    pub background_type: Option<BackgroundKind>,
    /// New legacy gradient start color.
    pub background_gradient_start: Option<String>,
    /// New legacy gradient end color.
    pub background_gradient_end: Option<String>,
    /// New gradient angle in degrees.
    pub background_gradient_angle: Option<i32>,
    /// Replacement gradient stops; re-sorted ascending by percentage.
    pub gradient_stops: Option<Vec<GradientStop>>,
    /// New main text color.
    pub primary_text_color: Option<String>,
    /// New dimmed text color.
    pub secondary_text_color: Option<String>,
    /// New clock color.
    pub timer_color: Option<String>,
    /// New score color.
    pub score_color: Option<String>,
    /// New home accent.
    pub home_team_color: Option<String>,
    /// New away accent.
    pub away_team_color: Option<String>,
    /// New home badge backdrop.
    pub home_badge_background: Option<String>,
    /// New away badge backdrop.
    pub away_badge_background: Option<String>,
    /// New league icon backdrop.
    pub league_icon_background: Option<String>,
    /// New goal list card background.
    pub goal_card_background: Option<String>,
    /// New goal list text color.
    pub goal_card_text_color: Option<String>,
}

impl ThemePatch {
    /// Merge the set fields into `theme`, keeping gradient stops ordered.
    pub fn apply(self, theme: &mut ThemeSettings) {
        if let Some(background_color) = self.background_color {
            theme.background_color = background_color;
        }
        if let Some(background_type) = self.background_type {
            theme.background_type = background_type;
        }
        if let Some(start) = self.background_gradient_start {
            theme.background_gradient_start = start;
        }
        if let Some(end) = self.background_gradient_end {
            theme.background_gradient_end = end;
        }
        if let Some(angle) = self.background_gradient_angle {
            theme.background_gradient_angle = angle;
        }
        if let Some(mut stops) = self.gradient_stops {
            stops.sort_by_key(|stop| stop.percentage);
            theme.gradient_stops = stops;
        }
        if let Some(primary) = self.primary_text_color {
            theme.primary_text_color = primary;
        }
        if let Some(secondary) = self.secondary_text_color {
            theme.secondary_text_color = secondary;
        }
        if let Some(timer_color) = self.timer_color {
            theme.timer_color = timer_color;
        }
        if let Some(score_color) = self.score_color {
            theme.score_color = score_color;
        }
        if let Some(home) = self.home_team_color {
            theme.home_team_color = home;
        }
        if let Some(away) = self.away_team_color {
            theme.away_team_color = away;
        }
        if let Some(home_badge) = self.home_badge_background {
            theme.home_badge_background = home_badge;
        }
        if let Some(away_badge) = self.away_badge_background {
            theme.away_badge_background = away_badge;
        }
        if let Some(league_icon) = self.league_icon_background {
            theme.league_icon_background = league_icon;
        }
        if let Some(card_background) = self.goal_card_background {
            theme.goal_card_background = card_background;
        }
        if let Some(card_text) = self.goal_card_text_color {
            theme.goal_card_text_color = card_text;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_record_serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&MatchRecord::default()).unwrap();
        assert!(json.contains("\"homeTeam\""));
        assert!(json.contains("\"shortName\""));
        assert!(json.contains("\"matchDate\""));
        assert!(json.contains("\"customLogos\""));
        assert!(json.contains("\"gradientStops\""));
    }

    #[test]
    fn timer_record_serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&TimerRecord::default()).unwrap();
        assert!(json.contains("\"isRunning\""));
        assert!(json.contains("\"endMinutes\""));
        assert!(json.contains("\"addedTime\""));
        assert!(json.contains("\"showAddedTime\""));
        assert!(json.contains("\"lastUpdate\""));
    }

    #[test]
    fn card_kind_uses_type_key_on_the_wire() {
        let card = CardEvent {
            player: "R. Defender".into(),
            minute: 41,
            second: 12,
            kind: CardKind::Yellow,
        };
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"type\":\"yellow\""));
    }

    #[test]
    fn partial_document_backfills_from_defaults() {
        let record: MatchRecord =
            serde_json::from_str(r#"{"stadium":"Camp Nou","homeTeam":{"name":"FCB"}}"#).unwrap();
        assert_eq!(record.stadium, "Camp Nou");
        assert_eq!(record.home_team.name, "FCB");
        // Absent fields come from the default record.
        assert_eq!(record.away_team.name, "BRAZIL");
        assert_eq!(record.league, "FIFA WORLD CUP");
        assert_eq!(record.theme.primary_text_color, "#fafafa");
        assert_eq!(record.theme.gradient_stops.len(), 2);
    }

    #[test]
    fn partial_theme_backfills_missing_subfields() {
        let record: MatchRecord =
            serde_json::from_str(r##"{"theme":{"timerColor":"#ff0000"}}"##).unwrap();
        assert_eq!(record.theme.timer_color, "#ff0000");
        assert_eq!(record.theme.score_color, "#fafafa");
        assert_eq!(record.theme.background_type, BackgroundKind::Linear);
    }

    #[test]
    fn legacy_theme_without_stops_synthesizes_two_stop_gradient() {
        let theme = ThemeSettings {
            background_gradient_start: "#111111".into(),
            background_gradient_end: "#222222".into(),
            gradient_stops: Vec::new(),
            ..ThemeSettings::default()
        };

        let stops = theme.effective_gradient_stops();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].color, "#111111");
        assert_eq!(stops[0].percentage, 0);
        assert_eq!(stops[1].color, "#222222");
        assert_eq!(stops[1].percentage, 100);
        // The synthesized stops are not written back.
        assert!(theme.gradient_stops.is_empty());
    }

    #[test]
    fn theme_patch_sorts_gradient_stops() {
        let mut theme = ThemeSettings::default();
        ThemePatch {
            gradient_stops: Some(vec![
                GradientStop {
                    color: "#b".into(),
                    percentage: 80,
                },
                GradientStop {
                    color: "#a".into(),
                    percentage: 10,
                },
                GradientStop {
                    color: "#c".into(),
                    percentage: 50,
                },
            ]),
            ..ThemePatch::default()
        }
        .apply(&mut theme);

        let order: Vec<u8> = theme
            .gradient_stops
            .iter()
            .map(|stop| stop.percentage)
            .collect();
        assert_eq!(order, vec![10, 50, 80]);
    }

    #[test]
    fn team_patch_sets_score_and_goals_independently() {
        let mut team = TeamRecord::default();
        TeamPatch {
            score: Some(4),
            ..TeamPatch::default()
        }
        .apply(&mut team);
        assert_eq!(team.score, 4);
        assert!(team.goals.is_empty());

        TeamPatch {
            goals: Some(vec![GoalEvent {
                player: "L. Striker".into(),
                minute: 9,
                second: 30,
            }]),
            ..TeamPatch::default()
        }
        .apply(&mut team);
        assert_eq!(team.score, 4);
        assert_eq!(team.goals.len(), 1);
    }

    #[test]
    fn preset_catalog_ships_five_distinct_ids() {
        let presets = preset_themes();
        assert_eq!(presets.len(), 5);
        let ids: Vec<&str> = presets.iter().map(|preset| preset.id).collect();
        assert!(ids.contains(&"dark-mode"));
        assert!(ids.contains(&"midnight"));
        let mut unique = ids.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn preset_lookup_misses_unknown_ids() {
        assert!(preset_theme("dark-mode").is_some());
        assert!(preset_theme("definitely-not-a-theme").is_none());
    }
}
