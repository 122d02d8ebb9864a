//! Persistent settings backed by `config.json` in the user config directory.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use con_core::config::ConfigStore;
use con_core::{ConError, Result};
use serde_json::{Map, Value};

use crate::paths::ConPaths;
use crate::storage::{AtomicJsonError, AtomicJsonFile};

type Settings = Map<String, Value>;

/// Settings store that loads `config.json` once and caches it.
///
/// Writes hold the cache write guard across the locked read-modify-write of
/// the file, so the cache always matches the last write.
#[derive(Clone)]
pub struct JsonConfigService {
    file: Arc<AtomicJsonFile<Settings>>,
    cache: Arc<RwLock<Option<Settings>>>,
}

impl JsonConfigService {
    /// Creates a service over the platform config file, or under `base_dir`.
    pub fn new(base_dir: Option<&std::path::Path>) -> Result<Self> {
        let path = ConPaths::new(base_dir).config_file()?;
        Ok(Self::with_path(path))
    }

    /// Creates a service over an explicit settings file.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicJsonFile::new(path)),
            cache: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }

    fn snapshot(&self) -> Result<Settings> {
        {
            let cache = self.cache.read().map_err(poisoned)?;
            if let Some(ref cached) = *cache {
                return Ok(cached.clone());
            }
        }

        let mut cache = self.cache.write().map_err(poisoned)?;
        if let Some(ref cached) = *cache {
            return Ok(cached.clone());
        }

        let loaded = match self.file.load() {
            Ok(settings) => settings.unwrap_or_default(),
            Err(e) => {
                // Unreadable settings behave like a fresh install; the file is
                // rewritten on the next set.
                tracing::warn!(
                    "[Config] Ignoring unreadable settings file {}: {}",
                    self.file.path().display(),
                    e
                );
                Settings::new()
            }
        };

        *cache = Some(loaded.clone());
        Ok(loaded)
    }
}

impl ConfigStore for JsonConfigService {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.snapshot()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut cache = self.cache.write().map_err(poisoned)?;

        let entry = (key.to_string(), value.clone());
        let written = match self.file.update(Settings::new(), move |settings| {
            settings.insert(entry.0, entry.1);
            settings.clone()
        }) {
            Ok(written) => written,
            Err(AtomicJsonError::Parse(e)) => {
                tracing::warn!(
                    "[Config] Replacing unreadable settings file {}: {}",
                    self.file.path().display(),
                    e
                );
                let mut settings = Settings::new();
                settings.insert(key.to_string(), value);
                self.file
                    .save(&settings)
                    .map_err(|e| e.into_con_error(self.file.path()))?;
                settings
            }
            Err(e) => return Err(e.into_con_error(self.file.path())),
        };

        *cache = Some(written);
        tracing::info!("[Config] Setting '{}' saved", key);
        Ok(())
    }

    fn get_all(&self) -> Result<Map<String, Value>> {
        self.snapshot()
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> ConError {
    ConError::internal("Settings cache lock poisoned")
}
