//! Conference repository trait.

use async_trait::async_trait;

use super::model::Conference;
use crate::error::Result;

/// Persistence for the conference collection of the configured website repository.
///
/// Implementations resolve the repository root on every call, so a root
/// configured while the app is running takes effect immediately.
#[async_trait]
pub trait ConferenceRepository: Send + Sync {
    /// Lists all conferences in file order.
    ///
    /// Returns an empty list when the root is unconfigured or the file is absent.
    async fn list(&self) -> Result<Vec<Conference>>;

    /// Loads a conference by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Conference))`: found
    /// - `Ok(None)`: no record with this id (or no collection file yet)
    /// - `Err(NotConfigured)`: root path unset
    /// - `Err(Corrupt)`: collection file is malformed
    async fn load(&self, id: &str) -> Result<Option<Conference>>;

    /// Replaces the conference with the same id in place, or appends it.
    async fn save(&self, conference: &Conference) -> Result<()>;

    /// Removes the conference. Deleting an unknown id is a no-op.
    async fn delete(&self, id: &str) -> Result<()>;
}
