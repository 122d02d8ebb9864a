//! Session repository trait.

use async_trait::async_trait;

use super::model::Session;
use crate::error::Result;

/// Persistence for the per-conference session collections.
///
/// Every operation is scoped by `conference_id`; the uniqueness of session ids
/// holds within one conference's file only.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Lists the sessions of a conference in file order.
    ///
    /// Returns an empty list when the root is unconfigured or the file is absent.
    async fn list(&self, conference_id: &str) -> Result<Vec<Session>>;

    /// Loads a session by id within a conference.
    async fn load(&self, conference_id: &str, session_id: &str) -> Result<Option<Session>>;

    /// Replaces the session with the same id in place, or appends it.
    async fn save(&self, conference_id: &str, session: &Session) -> Result<()>;

    /// Removes a session. Deleting an unknown id is a no-op.
    async fn delete(&self, conference_id: &str, session_id: &str) -> Result<()>;

    /// Removes the whole session file of a conference. Absence is not an error.
    async fn delete_all(&self, conference_id: &str) -> Result<()>;
}
