pub mod bus;
pub mod records;
pub mod store;
pub mod ticker;

use std::sync::Arc;

use crate::dao::overlay_store::OverlayStore;
use crate::state::bus::ChangeBus;
use crate::state::store::MatchStore;
use crate::state::ticker::TimerTicker;

pub use self::store::TeamSide;

/// Shared handle to the central application state.
pub type SharedState = Arc<AppState>;

/// Central application state wiring the match store, the tick scheduler, and
/// the change bus over one storage backend.
pub struct AppState {
    storage: Arc<dyn OverlayStore>,
    bus: ChangeBus,
    store: MatchStore,
    ticker: TimerTicker,
}

impl AppState {
    /// Hydrate the store from `storage` and assemble the shared state.
    pub async fn new(storage: Arc<dyn OverlayStore>, bus_capacity: usize) -> SharedState {
        let bus = ChangeBus::new(bus_capacity);
        let store = MatchStore::open(storage.clone(), bus.clone()).await;
        let ticker = TimerTicker::new(storage.clone(), bus.clone());

        Arc::new(Self {
            storage,
            bus,
            store,
            ticker,
        })
    }

    /// The match state store.
    pub fn store(&self) -> &MatchStore {
        &self.store
    }

    /// The shared tick scheduler.
    pub fn ticker(&self) -> &TimerTicker {
        &self.ticker
    }

    /// The change bus fanning mutations out to subscribers.
    pub fn bus(&self) -> &ChangeBus {
        &self.bus
    }

    /// The storage backend documents are persisted to.
    pub fn storage(&self) -> &Arc<dyn OverlayStore> {
        &self.storage
    }

    /// Tear down background tasks owned by the store.
    pub async fn close(&self) {
        self.store.close().await;
    }
}
