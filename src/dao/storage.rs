use std::error::Error;

use thiserror::Error;

/// Outcome of a [`GameStore`](crate::dao::game_store::GameStore) call.
pub type StorageResult<T> = Result<T, StorageError>;

/// Backend failure as seen by the services, whichever store produced it.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The store could not complete the call; reported to clients as 500.
    #[error("storage unavailable: {message}")]
    Unavailable {
        /// Human-readable summary, logged and echoed in the error body.
        message: String,
        /// Backend error that caused the failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Wrap a backend error under `message`.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message,
            source: Box::new(source),
        }
    }
}
