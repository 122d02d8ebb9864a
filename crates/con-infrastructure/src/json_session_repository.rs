//! JSON-file backed SessionRepository.

use std::sync::Arc;

use async_trait::async_trait;
use con_core::config::ConfigStore;
use con_core::record::{self, Upsert};
use con_core::session::{Session, SessionDocument, SessionRepository};
use con_core::{ConError, Result};

use crate::paths::DataLayout;
use crate::storage::{AtomicJsonFile, run_blocking};

/// Session collections stored one file per conference:
///
/// ```text
/// <root>/data/sessions/
/// ├── rustconf-sessions.json
/// └── jsconf-sessions.json
/// ```
pub struct JsonSessionRepository {
    config: Arc<dyn ConfigStore>,
}

impl JsonSessionRepository {
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

#[async_trait]
impl SessionRepository for JsonSessionRepository {
    async fn list(&self, conference_id: &str) -> Result<Vec<Session>> {
        let Some(layout) = self.layout() else {
            return Ok(Vec::new());
        };
        let path = match layout.sessions_file(conference_id) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("[SessionRepository] Listing nothing: {}", e);
                return Ok(Vec::new());
            }
        };

        run_blocking(move || match AtomicJsonFile::<SessionDocument>::new(path.clone()).load() {
            Ok(document) => Ok(document.map(|d| d.sessions).unwrap_or_default()),
            Err(e) => {
                tracing::warn!(
                    "[SessionRepository] Reading {} failed, listing nothing: {}",
                    path.display(),
                    e
                );
                Ok(Vec::new())
            }
        })
        .await
    }

    async fn load(&self, conference_id: &str, session_id: &str) -> Result<Option<Session>> {
        let path = self.require_layout()?.sessions_file(conference_id)?;
        let session_id = session_id.to_string();

        run_blocking(move || {
            let document = AtomicJsonFile::<SessionDocument>::new(path.clone())
                .load()
                .map_err(|e| e.into_con_error(&path))?;
            Ok(document.and_then(|d| record::find(&d.sessions, &session_id).cloned()))
        })
        .await
    }

    async fn save(&self, conference_id: &str, session: &Session) -> Result<()> {
        let path = self.require_layout()?.sessions_file(conference_id)?;
        let conference_id = conference_id.to_string();
        let session = session.clone();

        run_blocking(move || {
            let session_id = session.id.clone();
            let file = AtomicJsonFile::new(path.clone());
            let outcome = file
                .update(SessionDocument::empty(conference_id.clone()), |document| {
                    if document.conference_id.is_empty() {
                        document.conference_id = conference_id.clone();
                    }
                    record::upsert(&mut document.sessions, session)
                })
                .map_err(|e| e.into_con_error(&path))?;

            let verb = match outcome {
                Upsert::Inserted { .. } => "Added",
                Upsert::Replaced { .. } => "Updated",
            };
            tracing::info!(
                "[SessionRepository] {} session '{}' in conference '{}'",
                verb,
                session_id,
                conference_id
            );
            Ok(())
        })
        .await
    }

    async fn delete(&self, conference_id: &str, session_id: &str) -> Result<()> {
        let path = self.require_layout()?.sessions_file(conference_id)?;
        let conference_id = conference_id.to_string();
        let session_id = session_id.to_string();

        run_blocking(move || {
            let removed = AtomicJsonFile::<SessionDocument>::new(path.clone())
                .update_existing(|document| record::remove(&mut document.sessions, &session_id) > 0)
                .map_err(|e| e.into_con_error(&path))?;
            if removed {
                tracing::info!(
                    "[SessionRepository] Deleted session '{}' from conference '{}'",
                    session_id,
                    conference_id
                );
            }
            Ok(())
        })
        .await
    }

    async fn delete_all(&self, conference_id: &str) -> Result<()> {
        let path = self.require_layout()?.sessions_file(conference_id)?;

        run_blocking(move || {
            let removed = AtomicJsonFile::<SessionDocument>::new(path.clone())
                .remove()
                .map_err(|e| e.into_con_error(&path))?;
            if removed {
                tracing::info!("[SessionRepository] Removed {}", path.display());
            }
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_service::JsonConfigService;
    use con_core::config::REPO_PATH_KEY;
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct Fixture {
        _config_dir: TempDir,
        site: TempDir,
        repository: JsonSessionRepository,
    }

    impl Fixture {
        fn new() -> Self {
            let config_dir = TempDir::new().unwrap();
            let site = TempDir::new().unwrap();
            let config: Arc<dyn ConfigStore> =
                Arc::new(JsonConfigService::new(Some(config_dir.path())).unwrap());
            config
                .set(REPO_PATH_KEY, json!(site.path().to_string_lossy()))
                .unwrap();
            Self {
                _config_dir: config_dir,
                site,
                repository: JsonSessionRepository::new(config),
            }
        }

        fn sessions_file(&self, conference_id: &str) -> PathBuf {
            self.site
                .path()
                .join(format!("data/sessions/{}-sessions.json", conference_id))
        }
    }

    fn session(id: &str, title: &str) -> Session {
        Session {
            id: id.to_string(),
            title: title.to_string(),
            speaker: "Ferris".to_string(),
            ..Session::default()
        }
    }

    #[tokio::test]
    async fn test_save_creates_directories_and_document() {
        let fixture = Fixture::new();
        fixture
            .repository
            .save("rustconf", &session("intro", "Intro"))
            .await
            .unwrap();

        let raw: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(fixture.sessions_file("rustconf")).unwrap(),
        )
        .unwrap();
        assert_eq!(raw["conferenceId"], "rustconf");
        assert_eq!(raw["sessions"][0]["id"], "intro");
    }

    #[tokio::test]
    async fn test_sessions_are_scoped_by_conference() {
        let fixture = Fixture::new();
        fixture.repository.save("a", &session("s1", "One")).await.unwrap();
        fixture.repository.save("b", &session("s1", "Other")).await.unwrap();

        let a = fixture.repository.list("a").await.unwrap();
        let b = fixture.repository.list("b").await.unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].title, "One");
        assert_eq!(b[0].title, "Other");
        assert!(fixture.repository.list("c").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_then_replace() {
        let fixture = Fixture::new();
        fixture.repository.save("a", &session("s1", "One")).await.unwrap();
        fixture.repository.save("a", &session("s2", "Two")).await.unwrap();
        fixture
            .repository
            .save("a", &session("s1", "One again"))
            .await
            .unwrap();

        let list = fixture.repository.list("a").await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].title, "One again");
        assert_eq!(
            fixture.repository.load("a", "s2").await.unwrap(),
            Some(session("s2", "Two"))
        );
    }

    #[tokio::test]
    async fn test_delete_one_and_missing() {
        let fixture = Fixture::new();
        fixture.repository.delete("a", "nothing").await.unwrap();
        assert!(!fixture.sessions_file("a").exists());

        fixture.repository.save("a", &session("s1", "One")).await.unwrap();
        fixture.repository.save("a", &session("s2", "Two")).await.unwrap();
        fixture.repository.delete("a", "s1").await.unwrap();
        fixture.repository.delete("a", "nothing").await.unwrap();

        let list = fixture.repository.list("a").await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "s2");
    }

    #[tokio::test]
    async fn test_delete_all_tolerates_absence() {
        let fixture = Fixture::new();
        fixture.repository.delete_all("a").await.unwrap();
        fixture.repository.save("a", &session("s1", "One")).await.unwrap();
        fixture.repository.delete_all("a").await.unwrap();
        assert!(!fixture.sessions_file("a").exists());
    }

    #[tokio::test]
    async fn test_bad_conference_id_is_rejected() {
        let fixture = Fixture::new();
        let err = fixture
            .repository
            .save("../escape", &session("s1", "One"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_list_with_unusable_conference_id_is_empty() {
        let fixture = Fixture::new();
        fixture.repository.save("a", &session("s1", "One")).await.unwrap();

        assert!(fixture.repository.list("a/b").await.unwrap().is_empty());
        assert!(fixture.repository.list("..").await.unwrap().is_empty());
        assert!(fixture.repository.list("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let fixture = Fixture::new();
        let path = fixture.sessions_file("a");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[1, 2").unwrap();

        assert!(fixture.repository.list("a").await.unwrap().is_empty());
        assert!(fixture.repository.load("a", "s1").await.unwrap_err().is_corrupt());
        assert!(
            fixture
                .repository
                .save("a", &session("s1", "One"))
                .await
                .unwrap_err()
                .is_corrupt()
        );
    }

    #[tokio::test]
    async fn test_unconfigured_root() {
        let config_dir = TempDir::new().unwrap();
        let config = JsonConfigService::new(Some(config_dir.path())).unwrap();
        let repository = JsonSessionRepository::new(Arc::new(config));

        assert!(repository.list("a").await.unwrap().is_empty());
        assert!(
            repository
                .save("a", &session("s1", "One"))
                .await
                .unwrap_err()
                .is_not_configured()
        );
        assert!(repository.load("a", "s1").await.unwrap_err().is_not_configured());
    }
}
