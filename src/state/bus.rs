use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use utoipa::ToSchema;

/// Identifies which persisted document a change event refers to.
///
/// The string forms double as storage document names and SSE event names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StateKey {
    /// The match record document.
    Match,
    /// The timer record document.
    Timer,
    /// The saved-theme collection document.
    Themes,
}

impl StateKey {
    /// Stable string form used for storage keys and SSE event names.
    pub fn as_str(self) -> &'static str {
        match self {
            StateKey::Match => "match",
            StateKey::Timer => "timer",
            StateKey::Themes => "themes",
        }
    }
}

/// A committed change: which document changed and its full new serialization.
///
/// Consumers re-parse the payload and merge it against their default record,
/// so documents written by older versions backfill missing fields.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    /// Document that changed.
    pub key: StateKey,
    /// Full serialized document after the change.
    pub payload: String,
}

/// In-process change bus fanning every committed mutation out to all
/// subscribed contexts.
///
/// Every mutation publishes here unconditionally, including to the context
/// that performed it; a store's own subscription is how its in-memory copy
/// converges with remote writes and with the ticker, with no special case
/// for local updates.
#[derive(Clone)]
pub struct ChangeBus {
    sender: broadcast::Sender<ChangeEvent>,
}

impl ChangeBus {
    /// Construct a bus backed by a Tokio broadcast channel with the given
    /// capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Register a new subscriber that will receive subsequent events.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }

    /// Publish a change to all current subscribers, ignoring delivery errors
    /// (a bus with no subscribers is fine).
    pub fn publish(&self, key: StateKey, payload: String) {
        let _ = self.sender.send(ChangeEvent { key, payload });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_reaches_all_subscribers() {
        let bus = ChangeBus::new(8);
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();

        bus.publish(StateKey::Timer, "{}".into());

        let event = first.recv().await.unwrap();
        assert_eq!(event.key, StateKey::Timer);
        assert_eq!(event.payload, "{}");
        assert_eq!(second.recv().await.unwrap().key, StateKey::Timer);
    }

    #[test]
    fn publish_without_subscribers_is_a_no_op() {
        let bus = ChangeBus::new(8);
        bus.publish(StateKey::Match, "{}".into());
    }
}
