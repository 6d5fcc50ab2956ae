pub mod file;
pub mod memory;

use futures::future::BoxFuture;

use crate::dao::storage::StorageResult;
use crate::state::bus::StateKey;

/// Abstraction over the persistence layer for the overlay's keyed JSON
/// documents (`match`, `timer`, `themes`).
///
/// Documents are opaque strings at this layer; serialization and the
/// fall-back-to-defaults policy for corrupt payloads live with the callers.
pub trait OverlayStore: Send + Sync {
    /// Read the serialized document for `key`, `None` when absent.
    fn load_document(&self, key: StateKey) -> BoxFuture<'static, StorageResult<Option<String>>>;
    /// Write the full serialized document for `key`, replacing any previous
    /// value.
    fn save_document(&self, key: StateKey, json: String) -> BoxFuture<'static, StorageResult<()>>;
    /// Verify the backend is reachable/writable.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
