//! The match state store: single source of truth for the match record, the
//! timer record, and the saved-theme collection.
//!
//! Every mutation follows one commit path: update the in-memory copy,
//! persist the full document, publish it on the change bus. The store also
//! subscribes to its own bus, so remote writes (another store over the same
//! storage, or the ticker) and its own writes converge through the same
//! code, with no special case for local updates.

use std::sync::{Arc, Weak};

use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{Mutex, RwLock, broadcast};
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tracing::warn;
use uuid::Uuid;

use crate::dao::overlay_store::OverlayStore;
use crate::state::bus::{ChangeBus, ChangeEvent, StateKey};
use crate::state::records::{
    CardEvent, CardKind, GoalEvent, MatchPatch, MatchRecord, SavedTheme, TeamPatch, TeamRecord,
    ThemePatch, ThemeSettings, TimerRecord, preset_theme, unix_millis,
};

/// How long the added-time banner stays up before the deferred hide fires.
const ADDED_TIME_BANNER: Duration = Duration::from_millis(3000);

/// Which side of the pitch an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    /// The home team.
    Home,
    /// The away team.
    Away,
}

/// Handle to the shared match state. Cloning is cheap (one `Arc` bump);
/// clones share the same in-memory copies and background tasks.
#[derive(Clone)]
pub struct MatchStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    storage: Arc<dyn OverlayStore>,
    bus: ChangeBus,
    match_record: RwLock<MatchRecord>,
    timer: RwLock<TimerRecord>,
    themes: RwLock<IndexMap<String, SavedTheme>>,
    listener: Mutex<Option<JoinHandle<()>>>,
    hide_task: Mutex<Option<JoinHandle<()>>>,
}

impl MatchStore {
    /// Hydrate a store from persisted storage and subscribe it to the bus.
    ///
    /// Absent, corrupt, or unreadable documents fall back to the hard-coded
    /// defaults; the failure is logged and never surfaced.
    pub async fn open(storage: Arc<dyn OverlayStore>, bus: ChangeBus) -> Self {
        let match_record = hydrate::<MatchRecord>(storage.as_ref(), StateKey::Match).await;
        let timer = hydrate::<TimerRecord>(storage.as_ref(), StateKey::Timer).await;
        let saved: Vec<SavedTheme> = hydrate(storage.as_ref(), StateKey::Themes).await;
        let themes = saved
            .into_iter()
            .map(|theme| (theme.id.clone(), theme))
            .collect();

        let inner = Arc::new(StoreInner {
            storage,
            bus: bus.clone(),
            match_record: RwLock::new(match_record),
            timer: RwLock::new(timer),
            themes: RwLock::new(themes),
            listener: Mutex::new(None),
            hide_task: Mutex::new(None),
        });

        let handle = tokio::spawn(run_listener(Arc::downgrade(&inner), bus.subscribe()));
        *inner.listener.lock().await = Some(handle);

        Self { inner }
    }

    /// Current match record.
    pub async fn match_record(&self) -> MatchRecord {
        self.inner.match_record.read().await.clone()
    }

    /// Current timer record.
    pub async fn timer(&self) -> TimerRecord {
        self.inner.timer.read().await.clone()
    }

    /// User-saved themes in insertion order.
    pub async fn saved_themes(&self) -> Vec<SavedTheme> {
        self.inner.themes.read().await.values().cloned().collect()
    }

    /// Shallow-merge the patch into the top-level match fields.
    pub async fn update_match(&self, patch: MatchPatch) -> MatchRecord {
        let mut guard = self.inner.match_record.write().await;
        patch.apply(&mut guard);
        self.inner.commit(StateKey::Match, &*guard).await;
        guard.clone()
    }

    /// Shallow-merge the patch into one team's record.
    pub async fn update_team(&self, side: TeamSide, patch: TeamPatch) -> MatchRecord {
        let mut guard = self.inner.match_record.write().await;
        patch.apply(team_mut(&mut guard, side));
        self.inner.commit(StateKey::Match, &*guard).await;
        guard.clone()
    }

    /// Record a goal: bumps the side's score by one and appends an event
    /// stamped with the timer value current at this moment (never a value
    /// captured earlier by the caller).
    pub async fn add_goal(&self, player: impl Into<String>, side: TeamSide) -> MatchRecord {
        let (minute, second) = {
            let timer = self.inner.timer.read().await;
            (timer.minutes, timer.seconds)
        };

        let mut guard = self.inner.match_record.write().await;
        let team = team_mut(&mut guard, side);
        team.score += 1;
        team.goals.push(GoalEvent {
            player: player.into(),
            minute,
            second,
        });
        self.inner.commit(StateKey::Match, &*guard).await;
        guard.clone()
    }

    /// Record a card with the same clock stamping as [`MatchStore::add_goal`].
    /// Cards never affect the score.
    pub async fn add_card(
        &self,
        player: impl Into<String>,
        kind: CardKind,
        side: TeamSide,
    ) -> MatchRecord {
        let (minute, second) = {
            let timer = self.inner.timer.read().await;
            (timer.minutes, timer.seconds)
        };

        let mut guard = self.inner.match_record.write().await;
        team_mut(&mut guard, side).cards.push(CardEvent {
            player: player.into(),
            minute,
            second,
            kind,
        });
        self.inner.commit(StateKey::Match, &*guard).await;
        guard.clone()
    }

    /// Remove the goal at `index` and recompute the score from the remaining
    /// goals. Out-of-range indexes leave the list untouched.
    pub async fn remove_goal(&self, side: TeamSide, index: usize) -> MatchRecord {
        let mut guard = self.inner.match_record.write().await;
        let team = team_mut(&mut guard, side);
        if index < team.goals.len() {
            team.goals.remove(index);
        }
        team.score = team.goals.len() as u32;
        self.inner.commit(StateKey::Match, &*guard).await;
        guard.clone()
    }

    /// Remove the card at `index`. Out-of-range indexes leave the list
    /// untouched; the score is never involved.
    pub async fn remove_card(&self, side: TeamSide, index: usize) -> MatchRecord {
        let mut guard = self.inner.match_record.write().await;
        let team = team_mut(&mut guard, side);
        if index < team.cards.len() {
            team.cards.remove(index);
        }
        self.inner.commit(StateKey::Match, &*guard).await;
        guard.clone()
    }

    /// Start the clock. Starting an already-running clock still persists and
    /// publishes (idempotent in effect, not silent).
    pub async fn start_timer(&self) -> TimerRecord {
        self.mutate_timer(|timer| timer.is_running = true).await
    }

    /// Stop the clock, with the same idempotent-but-not-silent behavior.
    pub async fn stop_timer(&self) -> TimerRecord {
        self.mutate_timer(|timer| timer.is_running = false).await
    }

    /// Zero the clock and clear every threshold and banner flag.
    pub async fn reset_timer(&self) -> TimerRecord {
        self.mutate_timer(|timer| {
            timer.minutes = 0;
            timer.seconds = 0;
            timer.is_running = false;
            timer.end_minutes = None;
            timer.added_time = 0;
            timer.show_added_time = false;
        })
        .await
    }

    /// Move the stopped clock to a whole-minute position (e.g. 45:00 for the
    /// second half).
    pub async fn set_timer_position(&self, minutes: u32) -> TimerRecord {
        self.mutate_timer(|timer| {
            timer.minutes = minutes;
            timer.seconds = 0;
            timer.is_running = false;
        })
        .await
    }

    /// Set or clear the auto-stop threshold without touching the running
    /// state.
    pub async fn set_timer_end(&self, end_minutes: Option<u32>) -> TimerRecord {
        self.mutate_timer(|timer| timer.end_minutes = end_minutes)
            .await
    }

    /// Announce stoppage time.
    ///
    /// Zero clears the accumulated added time and hides the banner. Anything
    /// else ACCUMULATES onto the existing added time, shows the banner, and
    /// auto-starts a stopped clock. Each announcement re-arms the deferred
    /// banner hide, cancelling the previous one so a stale hide can never
    /// clobber a newer announcement.
    pub async fn set_added_time(&self, minutes: u32) -> TimerRecord {
        if let Some(handle) = self.inner.hide_task.lock().await.take() {
            handle.abort();
        }

        let updated = self
            .mutate_timer(|timer| {
                if minutes == 0 {
                    timer.added_time = 0;
                    timer.show_added_time = false;
                } else {
                    timer.added_time += minutes;
                    timer.show_added_time = true;
                    timer.is_running = true;
                }
            })
            .await;

        if minutes > 0 {
            let weak = Arc::downgrade(&self.inner);
            let handle = tokio::spawn(async move {
                tokio::time::sleep(ADDED_TIME_BANNER).await;
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let mut guard = inner.timer.write().await;
                guard.show_added_time = false;
                guard.stamp();
                inner.commit(StateKey::Timer, &*guard).await;
            });
            *self.inner.hide_task.lock().await = Some(handle);
        }

        updated
    }

    /// Start a fresh match on the same fixture: zero both teams' score,
    /// goals, and cards and reset the clock, while preserving team
    /// names/logos, stadium, league, date, theme, and uploaded logos so the
    /// fixture setup survives halves and replays.
    pub async fn reset_match(&self) -> MatchRecord {
        let updated = {
            let mut guard = self.inner.match_record.write().await;
            let record = &mut *guard;
            for team in [&mut record.home_team, &mut record.away_team] {
                team.score = 0;
                team.goals.clear();
                team.cards.clear();
            }
            self.inner.commit(StateKey::Match, record).await;
            record.clone()
        };
        self.reset_timer().await;
        updated
    }

    /// Shallow-merge the patch into the live theme.
    pub async fn update_theme(&self, patch: ThemePatch) -> MatchRecord {
        let mut guard = self.inner.match_record.write().await;
        patch.apply(&mut guard.theme);
        self.inner.commit(StateKey::Match, &*guard).await;
        guard.clone()
    }

    /// Restore the hard-coded default theme (not any saved theme).
    pub async fn reset_theme(&self) -> MatchRecord {
        let mut guard = self.inner.match_record.write().await;
        guard.theme = ThemeSettings::default();
        self.inner.commit(StateKey::Match, &*guard).await;
        guard.clone()
    }

    /// Snapshot the live theme into the saved collection under a fresh id.
    pub async fn save_theme(&self, name: impl Into<String>) -> SavedTheme {
        let theme = self.inner.match_record.read().await.theme.clone();
        let saved = SavedTheme {
            id: Uuid::new_v4().simple().to_string(),
            name: name.into(),
            theme,
            created_at: unix_millis(),
        };

        let mut guard = self.inner.themes.write().await;
        guard.insert(saved.id.clone(), saved.clone());
        self.inner.commit_themes(&guard).await;
        saved
    }

    /// Replace the live theme entirely with the preset or saved theme named
    /// by `id` (presets are consulted first). Unknown ids are a no-op and
    /// return `false`.
    pub async fn load_theme(&self, id: &str) -> bool {
        let payload = match preset_theme(id) {
            Some(theme) => Some(theme),
            None => self
                .inner
                .themes
                .read()
                .await
                .get(id)
                .map(|saved| saved.theme.clone()),
        };

        let Some(theme) = payload else {
            return false;
        };

        let mut guard = self.inner.match_record.write().await;
        guard.theme = theme;
        self.inner.commit(StateKey::Match, &*guard).await;
        true
    }

    /// Delete a saved theme by id. Unknown ids are a no-op returning
    /// `false`; preset ids are never in the saved collection, so presets
    /// cannot be deleted.
    pub async fn delete_theme(&self, id: &str) -> bool {
        let mut guard = self.inner.themes.write().await;
        if guard.shift_remove(id).is_none() {
            return false;
        }
        self.inner.commit_themes(&guard).await;
        true
    }

    /// Abort the bus listener and any pending banner hide. Call on teardown
    /// so no dangling task writes to storage after the owning context is
    /// gone.
    pub async fn close(&self) {
        if let Some(handle) = self.inner.listener.lock().await.take() {
            handle.abort();
        }
        if let Some(handle) = self.inner.hide_task.lock().await.take() {
            handle.abort();
        }
    }

    async fn mutate_timer(&self, mutate: impl FnOnce(&mut TimerRecord)) -> TimerRecord {
        let mut guard = self.inner.timer.write().await;
        mutate(&mut guard);
        guard.stamp();
        self.inner.commit(StateKey::Timer, &*guard).await;
        guard.clone()
    }
}

impl StoreInner {
    /// One commit path for every mutation: persist, then publish. A failed
    /// persist keeps the optimistic in-memory update and is only logged.
    async fn commit<T: Serialize>(&self, key: StateKey, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(err) => {
                warn!(key = key.as_str(), error = %err, "failed to serialize document");
                return;
            }
        };

        if let Err(err) = self.storage.save_document(key, json.clone()).await {
            warn!(key = key.as_str(), error = %err, "failed to persist document; keeping in-memory update");
        }

        self.bus.publish(key, json);
    }

    async fn commit_themes(&self, themes: &IndexMap<String, SavedTheme>) {
        let list: Vec<SavedTheme> = themes.values().cloned().collect();
        self.commit(StateKey::Themes, &list).await;
    }

    /// Apply a change-bus event to the in-memory copies. Malformed payloads
    /// are dropped; the previous state is kept.
    async fn apply_event(&self, event: ChangeEvent) {
        match event.key {
            StateKey::Match => match serde_json::from_str::<MatchRecord>(&event.payload) {
                Ok(record) => *self.match_record.write().await = record,
                Err(err) => warn!(error = %err, "dropping malformed match change event"),
            },
            StateKey::Timer => match serde_json::from_str::<TimerRecord>(&event.payload) {
                Ok(record) => *self.timer.write().await = record,
                Err(err) => warn!(error = %err, "dropping malformed timer change event"),
            },
            StateKey::Themes => match serde_json::from_str::<Vec<SavedTheme>>(&event.payload) {
                Ok(list) => {
                    let map = list
                        .into_iter()
                        .map(|theme| (theme.id.clone(), theme))
                        .collect();
                    *self.themes.write().await = map;
                }
                Err(err) => warn!(error = %err, "dropping malformed themes change event"),
            },
        }
    }
}

impl Drop for StoreInner {
    fn drop(&mut self) {
        if let Some(handle) = self.listener.get_mut().take() {
            handle.abort();
        }
        if let Some(handle) = self.hide_task.get_mut().take() {
            handle.abort();
        }
    }
}

fn team_mut(record: &mut MatchRecord, side: TeamSide) -> &mut TeamRecord {
    match side {
        TeamSide::Home => &mut record.home_team,
        TeamSide::Away => &mut record.away_team,
    }
}

/// Load and parse a document, falling back to `T::default()` on any failure.
pub(crate) async fn hydrate<T>(storage: &dyn OverlayStore, key: StateKey) -> T
where
    T: DeserializeOwned + Default,
{
    match storage.load_document(key).await {
        Ok(Some(json)) => match serde_json::from_str(&json) {
            Ok(value) => value,
            Err(err) => {
                warn!(key = key.as_str(), error = %err, "corrupt persisted document; using defaults");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(err) => {
            warn!(key = key.as_str(), error = %err, "failed to load persisted document; using defaults");
            T::default()
        }
    }
}

/// Forward bus events into the owning store until it is dropped or the bus
/// closes.
async fn run_listener(inner: Weak<StoreInner>, mut receiver: broadcast::Receiver<ChangeEvent>) {
    loop {
        match receiver.recv().await {
            Ok(event) => {
                let Some(inner) = inner.upgrade() else {
                    break;
                };
                inner.apply_event(event).await;
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "change bus listener lagged; continuing");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::overlay_store::memory::MemoryOverlayStore;

    async fn open_store() -> (MatchStore, MemoryOverlayStore, ChangeBus) {
        let storage = MemoryOverlayStore::new();
        let bus = ChangeBus::new(64);
        let store = MatchStore::open(Arc::new(storage.clone()), bus.clone()).await;
        (store, storage, bus)
    }

    /// Spin the current-thread runtime until `check` passes or we give up.
    async fn wait_until(mut check: impl AsyncFnMut() -> bool) {
        for _ in 0..200 {
            if check().await {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("condition not reached");
    }

    #[tokio::test]
    async fn add_goal_stamps_from_current_timer_and_bumps_score() {
        let storage = MemoryOverlayStore::new();
        storage
            .seed(StateKey::Timer, r#"{"minutes":12,"seconds":34}"#)
            .await;
        let bus = ChangeBus::new(64);
        let store = MatchStore::open(Arc::new(storage), bus).await;

        store.add_goal("L. Striker", TeamSide::Home).await;
        let record = store.add_goal("M. Winger", TeamSide::Home).await;

        assert_eq!(record.home_team.score, 2);
        assert_eq!(record.home_team.goals.len(), 2);
        for goal in &record.home_team.goals {
            assert_eq!((goal.minute, goal.second), (12, 34));
        }
        assert_eq!(record.away_team.score, 0);
    }

    #[tokio::test]
    async fn remove_goal_recomputes_score_and_keeps_order() {
        let (store, _storage, _bus) = open_store().await;
        for player in ["A", "B", "C"] {
            store.add_goal(player, TeamSide::Away).await;
        }

        let record = store.remove_goal(TeamSide::Away, 1).await;
        assert_eq!(record.away_team.score, 2);
        let players: Vec<&str> = record
            .away_team
            .goals
            .iter()
            .map(|goal| goal.player.as_str())
            .collect();
        assert_eq!(players, vec!["A", "C"]);

        // Out-of-range removal leaves the list untouched.
        let record = store.remove_goal(TeamSide::Away, 99).await;
        assert_eq!(record.away_team.goals.len(), 2);
        assert_eq!(record.away_team.score, 2);
    }

    #[tokio::test]
    async fn cards_never_touch_the_score() {
        let (store, _storage, _bus) = open_store().await;
        let record = store
            .add_card("R. Defender", CardKind::Yellow, TeamSide::Home)
            .await;
        assert_eq!(record.home_team.score, 0);
        assert_eq!(record.home_team.cards.len(), 1);
        assert_eq!(record.home_team.cards[0].kind, CardKind::Yellow);

        let record = store.remove_card(TeamSide::Home, 0).await;
        assert!(record.home_team.cards.is_empty());
        assert_eq!(record.home_team.score, 0);
    }

    #[tokio::test]
    async fn reset_match_zeroes_play_state_and_preserves_identity() {
        let (store, _storage, _bus) = open_store().await;
        store
            .update_match(MatchPatch {
                stadium: Some("Camp Nou".into()),
                ..MatchPatch::default()
            })
            .await;
        store
            .update_team(
                TeamSide::Home,
                TeamPatch {
                    name: Some("FC United".into()),
                    ..TeamPatch::default()
                },
            )
            .await;
        store.add_goal("A", TeamSide::Home).await;
        store.add_card("B", CardKind::Red, TeamSide::Away).await;
        store.start_timer().await;
        store.set_timer_end(Some(90)).await;

        let record = store.reset_match().await;
        assert_eq!(record.stadium, "Camp Nou");
        assert_eq!(record.home_team.name, "FC United");
        assert_eq!(record.home_team.score, 0);
        assert!(record.home_team.goals.is_empty());
        assert!(record.away_team.cards.is_empty());
        assert_eq!(record.theme, ThemeSettings::default());

        let timer = store.timer().await;
        assert!(!timer.is_running);
        assert_eq!((timer.minutes, timer.seconds), (0, 0));
        assert_eq!(timer.end_minutes, None);

        // Idempotent: a second reset changes nothing.
        let again = store.reset_match().await;
        assert_eq!(again, record);
    }

    #[tokio::test(start_paused = true)]
    async fn added_time_accumulates_and_rearms_a_single_hide() {
        let (store, _storage, _bus) = open_store().await;

        let timer = store.set_added_time(3).await;
        assert_eq!(timer.added_time, 3);
        assert!(timer.show_added_time);
        assert!(timer.is_running);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        let timer = store.set_added_time(2).await;
        assert_eq!(timer.added_time, 5);

        // Past the first announcement's deadline: its hide was cancelled, so
        // the banner is still up.
        tokio::time::sleep(Duration::from_millis(2000)).await;
        tokio::task::yield_now().await;
        let timer = store.timer().await;
        assert!(timer.show_added_time);

        // Past the re-armed deadline the banner drops, keeping the total.
        tokio::time::sleep(Duration::from_millis(1600)).await;
        wait_until(async || !store.timer().await.show_added_time).await;
        assert_eq!(store.timer().await.added_time, 5);
    }

    #[tokio::test]
    async fn added_time_zero_clears_and_hides() {
        let (store, _storage, _bus) = open_store().await;
        store.set_added_time(4).await;

        let timer = store.set_added_time(0).await;
        assert_eq!(timer.added_time, 0);
        assert!(!timer.show_added_time);
    }

    #[tokio::test]
    async fn redundant_timer_commands_still_publish() {
        let (store, _storage, bus) = open_store().await;
        let mut receiver = bus.subscribe();

        store.stop_timer().await;
        store.stop_timer().await;

        assert_eq!(receiver.recv().await.unwrap().key, StateKey::Timer);
        assert_eq!(receiver.recv().await.unwrap().key, StateKey::Timer);
    }

    #[tokio::test]
    async fn timer_position_and_end_threshold() {
        let (store, _storage, _bus) = open_store().await;
        store.start_timer().await;

        let timer = store.set_timer_position(45).await;
        assert_eq!((timer.minutes, timer.seconds), (45, 0));
        assert!(!timer.is_running);

        store.start_timer().await;
        let timer = store.set_timer_end(Some(90)).await;
        assert_eq!(timer.end_minutes, Some(90));
        assert!(timer.is_running);

        let timer = store.set_timer_end(None).await;
        assert_eq!(timer.end_minutes, None);
    }

    #[tokio::test]
    async fn load_preset_fully_replaces_theme() {
        let (store, _storage, _bus) = open_store().await;
        store
            .update_theme(ThemePatch {
                timer_color: Some("#123456".into()),
                background_gradient_angle: Some(45),
                ..ThemePatch::default()
            })
            .await;

        assert!(store.load_theme("dark-mode").await);
        let record = store.match_record().await;
        assert_eq!(record.theme, preset_theme("dark-mode").unwrap());
    }

    #[tokio::test]
    async fn saved_themes_round_trip_and_unknown_ids_are_noops() {
        let (store, _storage, _bus) = open_store().await;
        store
            .update_theme(ThemePatch {
                score_color: Some("#ff00ff".into()),
                ..ThemePatch::default()
            })
            .await;
        let saved = store.save_theme("Club colors").await;

        store.reset_theme().await;
        assert!(store.load_theme(&saved.id).await);
        assert_eq!(
            store.match_record().await.theme.score_color,
            "#ff00ff".to_string()
        );

        let before = store.match_record().await.theme;
        assert!(!store.load_theme("no-such-theme").await);
        assert_eq!(store.match_record().await.theme, before);

        assert!(store.delete_theme(&saved.id).await);
        assert!(!store.delete_theme(&saved.id).await);
        assert!(store.saved_themes().await.is_empty());
        // Presets are not deletable but stay loadable.
        assert!(!store.delete_theme("dark-mode").await);
        assert!(store.load_theme("dark-mode").await);
    }

    #[tokio::test]
    async fn remote_context_observes_local_mutation() {
        let storage = MemoryOverlayStore::new();
        let bus = ChangeBus::new(64);
        let context_a = MatchStore::open(Arc::new(storage.clone()), bus.clone()).await;
        let context_b = MatchStore::open(Arc::new(storage), bus).await;

        context_a
            .update_team(
                TeamSide::Home,
                TeamPatch {
                    name: Some("X".into()),
                    ..TeamPatch::default()
                },
            )
            .await;

        wait_until(async || context_b.match_record().await.home_team.name == "X").await;
    }

    #[tokio::test]
    async fn malformed_match_document_falls_back_to_defaults() {
        let storage = MemoryOverlayStore::new();
        storage.seed(StateKey::Match, "{definitely not json").await;
        let bus = ChangeBus::new(64);
        let store = MatchStore::open(Arc::new(storage), bus).await;

        assert_eq!(store.match_record().await, MatchRecord::default());
    }

    #[tokio::test]
    async fn partial_persisted_document_backfills_defaults() {
        let storage = MemoryOverlayStore::new();
        storage
            .seed(StateKey::Match, r#"{"stadium":"Camp Nou"}"#)
            .await;
        let bus = ChangeBus::new(64);
        let store = MatchStore::open(Arc::new(storage), bus).await;

        let record = store.match_record().await;
        assert_eq!(record.stadium, "Camp Nou");
        assert_eq!(record.away_team.name, "BRAZIL");
    }

    #[tokio::test]
    async fn persist_failure_keeps_optimistic_update() {
        let (store, storage, _bus) = open_store().await;
        storage.set_fail_writes(true);

        let record = store
            .update_match(MatchPatch {
                league: Some("COPA".into()),
                ..MatchPatch::default()
            })
            .await;

        assert_eq!(record.league, "COPA");
        assert_eq!(store.match_record().await.league, "COPA");
        assert!(
            storage
                .load_document(StateKey::Match)
                .await
                .unwrap()
                .is_none()
        );
    }
}
