//! Persistent application settings.

use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::error::Result;

/// Settings key holding the local website repository path.
///
/// Its absence is what puts the app in the unconfigured (welcome) state.
pub const REPO_PATH_KEY: &str = "websiteRepoPath";

/// A flat key/value store that survives restarts.
///
/// Values are opaque JSON; no schema is enforced. Writers are last-writer-wins.
pub trait ConfigStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Stores `value` under `key` and persists the whole map.
    fn set(&self, key: &str, value: Value) -> Result<()>;

    /// Returns a snapshot of every stored setting.
    fn get_all(&self) -> Result<Map<String, Value>>;

    /// The configured website repository root.
    ///
    /// A missing, empty or non-string value counts as unconfigured.
    fn repo_root(&self) -> Option<PathBuf> {
        match self.get(REPO_PATH_KEY) {
            Ok(Some(Value::String(path))) if !path.trim().is_empty() => Some(PathBuf::from(path)),
            _ => None,
        }
    }
}
