//! JSON-file backed ConferenceRepository.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use con_core::config::ConfigStore;
use con_core::conference::{Conference, ConferenceDocument, ConferenceRepository};
use con_core::record::{self, Record, Upsert};
use con_core::{ConError, Result};

use crate::paths::DataLayout;
use crate::storage::{AtomicJsonFile, run_blocking};

/// Conference collection stored in `<root>/data/conferences.json`.
///
/// The root is read from the settings store on every call. Session files of
/// a deleted conference are removed by the caller through the session store.
pub struct JsonConferenceRepository {
    config: Arc<dyn ConfigStore>,
}

impl JsonConferenceRepository {
    pub fn new(config: Arc<dyn ConfigStore>) -> Self {
        Self { config }
    }

    fn layout(&self) -> Option<DataLayout> {
        self.config.repo_root().map(DataLayout::new)
    }

    fn require_layout(&self) -> Result<DataLayout> {
        self.layout().ok_or(ConError::NotConfigured)
    }
}

fn collection(layout: &DataLayout) -> (PathBuf, AtomicJsonFile<ConferenceDocument>) {
    let path = layout.conferences_file();
    (path.clone(), AtomicJsonFile::new(path))
}

#[async_trait]
impl ConferenceRepository for JsonConferenceRepository {
    async fn list(&self) -> Result<Vec<Conference>> {
        let Some(layout) = self.layout() else {
            return Ok(Vec::new());
        };

        run_blocking(move || {
            let (path, file) = collection(&layout);
            match file.load() {
                Ok(document) => Ok(document.unwrap_or_default().conferences),
                Err(e) => {
                    tracing::warn!(
                        "[ConferenceRepository] Reading {} failed, listing nothing: {}",
                        path.display(),
                        e
                    );
                    Ok(Vec::new())
                }
            }
        })
        .await
    }

    async fn load(&self, id: &str) -> Result<Option<Conference>> {
        let layout = self.require_layout()?;
        let id = id.to_string();

        run_blocking(move || {
            let (path, file) = collection(&layout);
            let document = file
                .load()
                .map_err(|e| e.into_con_error(&path))?
                .unwrap_or_default();
            Ok(record::find(&document.conferences, &id).cloned())
        })
        .await
    }

    async fn save(&self, conference: &Conference) -> Result<()> {
        let layout = self.require_layout()?;
        let conference = conference.clone();

        run_blocking(move || {
            let (path, file) = collection(&layout);
            let id = conference.id.clone();
            let outcome = file
                .update(ConferenceDocument::default(), |document| {
                    record::upsert(&mut document.conferences, conference)
                })
                .map_err(|e| e.into_con_error(&path))?;

            match outcome {
                Upsert::Inserted { index } => {
                    tracing::info!("[ConferenceRepository] Added {} '{}' at {}", Conference::KIND, id, index)
                }
                Upsert::Replaced { index } => {
                    tracing::info!("[ConferenceRepository] Updated {} '{}' at {}", Conference::KIND, id, index)
                }
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let layout = self.require_layout()?;
        let id = id.to_string();

        run_blocking(move || {
            let (path, file) = collection(&layout);
            let removed = file
                .update_existing(|document| record::remove(&mut document.conferences, &id) > 0)
                .map_err(|e| e.into_con_error(&path))?;

            if removed {
                tracing::info!("[ConferenceRepository] Deleted conference '{}'", id);
            } else {
                tracing::debug!("[ConferenceRepository] Conference '{}' not present, nothing to delete", id);
            }

            Ok(())
        })
        .await
    }
}
