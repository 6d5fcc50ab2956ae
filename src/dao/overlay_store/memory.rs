use std::collections::HashMap;
use std::io::Error as IoError;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::future::BoxFuture;
use tokio::sync::Mutex;

use crate::dao::overlay_store::OverlayStore;
use crate::dao::storage::{StorageError, StorageResult};
use crate::state::bus::StateKey;

/// Volatile in-process backend.
///
/// Cloning shares the underlying document map, so several stores (or a store
/// and a ticker) opened over one clone see each other's writes, the same
/// shape a shared data directory gives the file backend. Tests use
/// [`MemoryOverlayStore::set_fail_writes`] to exercise the
/// keep-optimistic-update-on-write-failure path.
#[derive(Clone, Default)]
pub struct MemoryOverlayStore {
    documents: Arc<Mutex<HashMap<StateKey, String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryOverlayStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a document, bypassing the save path.
    pub async fn seed(&self, key: StateKey, json: impl Into<String>) {
        self.documents.lock().await.insert(key, json.into());
    }

    /// Make every subsequent save fail, simulating an exhausted backend.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl OverlayStore for MemoryOverlayStore {
    fn load_document(&self, key: StateKey) -> BoxFuture<'static, StorageResult<Option<String>>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.documents.lock().await.get(&key).cloned()) })
    }

    fn save_document(&self, key: StateKey, json: String) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            if store.fail_writes.load(Ordering::SeqCst) {
                return Err(StorageError::write(
                    key.as_str(),
                    "memory store rejecting writes",
                    IoError::other("writes disabled"),
                ));
            }
            store.documents.lock().await.insert(key, json);
            Ok(())
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clones_share_documents() {
        let store = MemoryOverlayStore::new();
        let sibling = store.clone();

        store
            .save_document(StateKey::Match, r#"{"stadium":"Anfield"}"#.into())
            .await
            .unwrap();

        let loaded = sibling.load_document(StateKey::Match).await.unwrap();
        assert_eq!(loaded.as_deref(), Some(r#"{"stadium":"Anfield"}"#));
    }

    #[tokio::test]
    async fn failing_writes_return_an_error() {
        let store = MemoryOverlayStore::new();
        store.set_fail_writes(true);

        let result = store.save_document(StateKey::Timer, "{}".into()).await;
        assert!(result.is_err());
        assert!(store.load_document(StateKey::Timer).await.unwrap().is_none());
    }
}
