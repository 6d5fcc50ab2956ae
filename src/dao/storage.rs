use std::error::Error;
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by overlay storage backends regardless of where the
/// documents actually live.
///
/// Callers never propagate these to clients: reads fall back to the default
/// record and writes keep the optimistic in-memory update, both logged.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A document could not be read from the backend.
    #[error("failed to read `{key}` document: {message}")]
    Read {
        /// Storage key of the document.
        key: &'static str,
        /// Human-readable description of the failure.
        message: String,
        /// Underlying backend error.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// A document could not be written to the backend.
    #[error("failed to write `{key}` document: {message}")]
    Write {
        /// Storage key of the document.
        key: &'static str,
        /// Human-readable description of the failure.
        message: String,
        /// Underlying backend error.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Construct a read error from any backend failure.
    pub fn read(
        key: &'static str,
        message: impl Into<String>,
        source: impl Error + Send + Sync + 'static,
    ) -> Self {
        StorageError::Read {
            key,
            message: message.into(),
            source: Box::new(source),
        }
    }

    /// Construct a write error from any backend failure.
    pub fn write(
        key: &'static str,
        message: impl Into<String>,
        source: impl Error + Send + Sync + 'static,
    ) -> Self {
        StorageError::Write {
            key,
            message: message.into(),
            source: Box::new(source),
        }
    }
}
