//! Storage layer for atomic JSON file operations.

mod atomic_json;

pub use atomic_json::{AtomicJsonError, AtomicJsonFile};

use con_core::{ConError, Result};

/// Runs synchronous file work on the blocking pool.
pub(crate) async fn run_blocking<T, F>(task: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| ConError::internal(format!("Storage task failed: {}", e)))?
}
