use crate::state::bus::ChangeEvent;

#[derive(Clone, Debug)]
/// Dispatched payload carried to SSE subscribers.
pub struct ServerEvent {
    /// SSE event name.
    pub event: Option<String>,
    /// Serialized event data.
    pub data: String,
}

impl From<ChangeEvent> for ServerEvent {
    fn from(change: ChangeEvent) -> Self {
        Self {
            event: Some(change.key.as_str().to_string()),
            data: change.payload,
        }
    }
}
