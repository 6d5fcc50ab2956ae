use std::io::ErrorKind;
use std::path::PathBuf;

use futures::future::BoxFuture;
use tokio::fs;
use tracing::warn;

use crate::dao::overlay_store::OverlayStore;
use crate::dao::storage::{StorageError, StorageResult};
use crate::state::bus::StateKey;

/// File-backed store keeping each document as `<key>.json` inside one data
/// directory.
///
/// Writes go through a temp file followed by a rename so readers never see a
/// half-written document, even if the process dies mid-write.
#[derive(Clone)]
pub struct FileOverlayStore {
    dir: PathBuf,
}

impl FileOverlayStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// Creation failure is logged rather than returned: the store stays
    /// usable and individual operations surface their own errors, so the
    /// application can keep serving defaults.
    pub async fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if let Err(err) = fs::create_dir_all(&dir).await {
            warn!(path = %dir.display(), error = %err, "failed to create data directory");
        }
        Self { dir }
    }

    fn document_path(&self, key: StateKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }

    fn temp_path(&self, key: StateKey) -> PathBuf {
        self.dir.join(format!("{}.json.tmp", key.as_str()))
    }
}

impl OverlayStore for FileOverlayStore {
    fn load_document(&self, key: StateKey) -> BoxFuture<'static, StorageResult<Option<String>>> {
        let path = self.document_path(key);
        Box::pin(async move {
            match fs::read_to_string(&path).await {
                Ok(contents) => Ok(Some(contents)),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
                Err(err) => Err(StorageError::read(
                    key.as_str(),
                    format!("reading {}", path.display()),
                    err,
                )),
            }
        })
    }

    fn save_document(&self, key: StateKey, json: String) -> BoxFuture<'static, StorageResult<()>> {
        let path = self.document_path(key);
        let temp = self.temp_path(key);
        Box::pin(async move {
            fs::write(&temp, json.as_bytes()).await.map_err(|err| {
                StorageError::write(key.as_str(), format!("writing {}", temp.display()), err)
            })?;
            fs::rename(&temp, &path).await.map_err(|err| {
                StorageError::write(
                    key.as_str(),
                    format!("renaming {} into place", temp.display()),
                    err,
                )
            })
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let dir = self.dir.clone();
        Box::pin(async move {
            fs::create_dir_all(&dir).await.map_err(|err| {
                StorageError::write("data-dir", format!("ensuring {}", dir.display()), err)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trips_a_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileOverlayStore::open(dir.path()).await;

        store
            .save_document(StateKey::Timer, r#"{"minutes":45}"#.into())
            .await
            .unwrap();

        let loaded = store.load_document(StateKey::Timer).await.unwrap();
        assert_eq!(loaded.as_deref(), Some(r#"{"minutes":45}"#));
    }

    #[tokio::test]
    async fn absent_document_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileOverlayStore::open(dir.path()).await;

        assert!(store.load_document(StateKey::Match).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileOverlayStore::open(dir.path()).await;

        store
            .save_document(StateKey::Themes, "[]".into())
            .await
            .unwrap();
        store
            .save_document(StateKey::Themes, r#"[{"id":"a"}]"#.into())
            .await
            .unwrap();

        let loaded = store.load_document(StateKey::Themes).await.unwrap();
        assert_eq!(loaded.as_deref(), Some(r#"[{"id":"a"}]"#));
        // No temp file left behind once the rename lands.
        assert!(!dir.path().join("themes.json.tmp").exists());
    }
}
