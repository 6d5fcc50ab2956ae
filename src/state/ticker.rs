//! The reference-counted tick scheduler advancing the shared match clock.
//!
//! Any number of consumers (SSE subscribers, embedded views) may mount the
//! ticker; exactly one tick task runs while at least one consumer is
//! mounted, and none after the last leaves. Each tick re-reads the timer
//! document from storage rather than trusting an in-memory copy, so timer
//! edits committed by sibling contexts take effect even though the tick task
//! lives in only one of them.

use std::sync::{Arc, Weak};

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior, interval};
use tracing::{debug, warn};

use crate::dao::overlay_store::OverlayStore;
use crate::state::bus::{ChangeBus, StateKey};
use crate::state::records::{TimerRecord, unix_millis};
use crate::state::store::hydrate;

/// Cadence of the tick task.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Minimum spacing between two committed ticks. Two schedulers can briefly
/// overlap during a reference-count handoff; the spacing guard keeps the
/// clock from double-advancing in that window.
const MIN_TICK_SPACING_MS: u64 = 950;

/// Reference-counted singleton scheduler for the match clock.
#[derive(Clone)]
pub struct TimerTicker {
    inner: Arc<TickerInner>,
}

struct TickerInner {
    storage: Arc<dyn OverlayStore>,
    bus: ChangeBus,
    state: Mutex<TickerState>,
}

#[derive(Default)]
struct TickerState {
    consumers: usize,
    task: Option<JoinHandle<()>>,
}

impl TimerTicker {
    /// Build a ticker over the shared storage backend and change bus. No
    /// task runs until the first consumer mounts.
    pub fn new(storage: Arc<dyn OverlayStore>, bus: ChangeBus) -> Self {
        Self {
            inner: Arc::new(TickerInner {
                storage,
                bus,
                state: Mutex::new(TickerState::default()),
            }),
        }
    }

    /// Mount a consumer. The tick task starts lazily on the 0→1 transition.
    pub async fn acquire(&self) {
        let mut state = self.inner.state.lock().await;
        state.consumers += 1;
        if state.task.is_none() {
            debug!("first consumer mounted; starting tick task");
            let weak = Arc::downgrade(&self.inner);
            state.task = Some(tokio::spawn(run_tick_loop(weak)));
        }
    }

    /// Unmount a consumer. The tick task stops exactly when the count
    /// returns to zero, leaving no orphaned interval behind.
    pub async fn release(&self) {
        let mut state = self.inner.state.lock().await;
        state.consumers = state.consumers.saturating_sub(1);
        if state.consumers == 0 {
            if let Some(handle) = state.task.take() {
                debug!("last consumer unmounted; stopping tick task");
                handle.abort();
            }
        }
    }

    /// Number of currently mounted consumers.
    pub async fn active_consumers(&self) -> usize {
        self.inner.state.lock().await.consumers
    }

    /// Whether the tick task is currently running.
    pub async fn is_ticking(&self) -> bool {
        self.inner.state.lock().await.task.is_some()
    }
}

impl Drop for TickerInner {
    fn drop(&mut self) {
        if let Some(handle) = self.state.get_mut().task.take() {
            handle.abort();
        }
    }
}

async fn run_tick_loop(inner: Weak<TickerInner>) {
    let mut cadence = interval(TICK_INTERVAL);
    cadence.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        cadence.tick().await;
        let Some(inner) = inner.upgrade() else {
            break;
        };
        inner.run_tick().await;
    }
}

impl TickerInner {
    /// One tick: read the authoritative timer from storage, advance it, and
    /// commit through the same persist-then-publish path mutations use, so
    /// the owning context's views update via the bus like everyone else's.
    async fn run_tick(&self) {
        let timer = hydrate::<TimerRecord>(self.storage.as_ref(), StateKey::Timer).await;
        let Some(next) = advance(&timer, unix_millis()) else {
            return;
        };

        match serde_json::to_string(&next) {
            Ok(json) => {
                if let Err(err) = self
                    .storage
                    .save_document(StateKey::Timer, json.clone())
                    .await
                {
                    warn!(error = %err, "failed to persist tick; broadcasting anyway");
                }
                self.bus.publish(StateKey::Timer, json);
            }
            Err(err) => warn!(error = %err, "failed to serialize ticked timer"),
        }
    }
}

/// Compute the next timer state for a tick at `now_ms`, or `None` when no
/// tick should be committed (clock stopped, or the previous tick is less
/// than [`MIN_TICK_SPACING_MS`] old).
fn advance(timer: &TimerRecord, now_ms: u64) -> Option<TimerRecord> {
    if !timer.is_running {
        return None;
    }
    if now_ms.saturating_sub(timer.last_update) < MIN_TICK_SPACING_MS {
        return None;
    }

    let mut next = timer.clone();
    next.seconds += 1;
    if next.seconds >= 60 {
        next.minutes += 1;
        next.seconds = 0;
    }
    next.last_update = now_ms;

    // Auto-stop once the clock reaches the threshold plus stoppage time.
    if let Some(end_minutes) = next.end_minutes {
        let threshold = f64::from(end_minutes + next.added_time);
        if next.elapsed_minutes() >= threshold {
            next.is_running = false;
        }
    }

    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::overlay_store::memory::MemoryOverlayStore;

    fn running_timer(minutes: u32, seconds: u32) -> TimerRecord {
        TimerRecord {
            minutes,
            seconds,
            is_running: true,
            last_update: 0,
            ..TimerRecord::default()
        }
    }

    #[test]
    fn advance_skips_stopped_clock() {
        let timer = TimerRecord {
            is_running: false,
            last_update: 0,
            ..TimerRecord::default()
        };
        assert!(advance(&timer, 10_000).is_none());
    }

    #[test]
    fn advance_respects_minimum_spacing() {
        let mut timer = running_timer(10, 0);
        timer.last_update = 10_000;
        assert!(advance(&timer, 10_900).is_none());
        assert!(advance(&timer, 10_951).is_some());
    }

    #[test]
    fn advance_increments_and_rolls_over_minutes() {
        let next = advance(&running_timer(3, 41), 5_000).unwrap();
        assert_eq!((next.minutes, next.seconds), (3, 42));
        assert_eq!(next.last_update, 5_000);

        let next = advance(&running_timer(3, 59), 5_000).unwrap();
        assert_eq!((next.minutes, next.seconds), (4, 0));
    }

    #[test]
    fn three_ticks_advance_exactly_three_seconds() {
        let mut timer = running_timer(44, 58);
        for tick in 1..=3u64 {
            timer = advance(&timer, tick * 1_000).unwrap();
        }
        assert_eq!(timer.minutes * 60 + timer.seconds, 44 * 60 + 58 + 3);
        assert_eq!((timer.minutes, timer.seconds), (45, 1));
    }

    #[test]
    fn advance_auto_stops_at_threshold_plus_added_time() {
        let mut timer = running_timer(91, 58);
        timer.end_minutes = Some(90);
        timer.added_time = 2;

        // 91:59 is still short of 92 minutes.
        let next = advance(&timer, 5_000).unwrap();
        assert!(next.is_running);

        // The tick landing exactly on 92:00 stops the clock.
        let mut timer = next;
        timer.last_update = 0;
        let next = advance(&timer, 6_000).unwrap();
        assert_eq!((next.minutes, next.seconds), (92, 0));
        assert!(!next.is_running);
    }

    #[test]
    fn advance_without_threshold_never_stops() {
        let next = advance(&running_timer(500, 0), 5_000).unwrap();
        assert!(next.is_running);
    }

    #[tokio::test]
    async fn reference_counting_starts_and_stops_exactly_once() {
        let storage: Arc<dyn OverlayStore> = Arc::new(MemoryOverlayStore::new());
        let ticker = TimerTicker::new(storage, ChangeBus::new(8));
        assert!(!ticker.is_ticking().await);

        ticker.acquire().await;
        assert!(ticker.is_ticking().await);
        assert_eq!(ticker.active_consumers().await, 1);

        ticker.acquire().await;
        assert_eq!(ticker.active_consumers().await, 2);
        assert!(ticker.is_ticking().await);

        ticker.release().await;
        assert!(ticker.is_ticking().await);

        ticker.release().await;
        assert!(!ticker.is_ticking().await);
        assert_eq!(ticker.active_consumers().await, 0);

        // Releasing with no consumers left is harmless.
        ticker.release().await;
        assert_eq!(ticker.active_consumers().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn tick_task_advances_persisted_timer_once_per_wall_second() {
        let storage = MemoryOverlayStore::new();
        storage
            .seed(
                StateKey::Timer,
                r#"{"minutes":0,"seconds":5,"isRunning":true,"lastUpdate":0}"#,
            )
            .await;
        let bus = ChangeBus::new(8);
        let mut receiver = bus.subscribe();
        let ticker = TimerTicker::new(Arc::new(storage.clone()), bus);

        ticker.acquire().await;

        // The first tick advances 0:05 to 0:06 and stamps last_update with
        // the real wall clock; with virtual time frozen relative to the wall
        // clock, every later tick is blocked by the spacing guard.
        let event = receiver.recv().await.unwrap();
        assert_eq!(event.key, StateKey::Timer);
        let ticked: TimerRecord = serde_json::from_str(&event.payload).unwrap();
        assert_eq!((ticked.minutes, ticked.seconds), (0, 6));

        let persisted = storage.load_document(StateKey::Timer).await.unwrap();
        let persisted: TimerRecord = serde_json::from_str(&persisted.unwrap()).unwrap();
        assert_eq!((persisted.minutes, persisted.seconds), (0, 6));

        tokio::time::sleep(Duration::from_secs(3)).await;
        let persisted = storage.load_document(StateKey::Timer).await.unwrap();
        let persisted: TimerRecord = serde_json::from_str(&persisted.unwrap()).unwrap();
        assert_eq!((persisted.minutes, persisted.seconds), (0, 6));

        ticker.release().await;
    }

    #[tokio::test(start_paused = true)]
    async fn no_tick_while_clock_is_stopped() {
        let storage = MemoryOverlayStore::new();
        storage
            .seed(
                StateKey::Timer,
                r#"{"minutes":7,"seconds":30,"isRunning":false,"lastUpdate":0}"#,
            )
            .await;
        let ticker = TimerTicker::new(Arc::new(storage.clone()), ChangeBus::new(8));

        ticker.acquire().await;
        tokio::time::sleep(Duration::from_secs(5)).await;

        let persisted = storage.load_document(StateKey::Timer).await.unwrap();
        let persisted: TimerRecord = serde_json::from_str(&persisted.unwrap()).unwrap();
        assert_eq!((persisted.minutes, persisted.seconds), (7, 30));

        ticker.release().await;
    }
}
