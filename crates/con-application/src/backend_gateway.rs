//! The privileged side of the gateway.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use con_core::conference::{Conference, ConferenceRepository};
use con_core::config::ConfigStore;
use con_core::gateway::{ConGateway, GatewayResult};
use con_core::git::{AddTarget, BranchList, GitStatus, SaveOutcome, VersionControl};
use con_core::session::{Session, SessionRepository};
use con_core::validation::ValidationReport;
use con_core::youtube::{self, VideoInfo};
use con_infrastructure::LocalFileAccess;
use serde_json::{Map, Value};

use crate::save_workflow::SaveWorkflow;
use crate::validation_service::DataValidationService;

/// Implements every gateway operation on top of the stores and the git adapter.
///
/// Built once in the composition root; all collaborators are injected.
pub struct BackendGateway {
    config: Arc<dyn ConfigStore>,
    conferences: Arc<dyn ConferenceRepository>,
    sessions: Arc<dyn SessionRepository>,
    git: Arc<dyn VersionControl>,
    files: LocalFileAccess,
    save_workflow: SaveWorkflow,
    validation: DataValidationService,
}

impl BackendGateway {
    pub fn new(
        config: Arc<dyn ConfigStore>,
        conferences: Arc<dyn ConferenceRepository>,
        sessions: Arc<dyn SessionRepository>,
        git: Arc<dyn VersionControl>,
    ) -> Self {
        Self {
            save_workflow: SaveWorkflow::new(config.clone(), git.clone()),
            validation: DataValidationService::new(conferences.clone(), sessions.clone()),
            files: LocalFileAccess::new(),
            config,
            conferences,
            sessions,
            git,
        }
    }
}

#[async_trait]
impl ConGateway for BackendGateway {
    async fn config_get(&self, key: &str) -> GatewayResult<Option<Value>> {
        Ok(self.config.get(key)?)
    }

    async fn config_set(&self, key: &str, value: Value) -> GatewayResult<()> {
        self.config.set(key, value)?;
        Ok(())
    }

    async fn config_get_all(&self) -> GatewayResult<Map<String, Value>> {
        Ok(self.config.get_all()?)
    }

    async fn fs_read_file(&self, path: &Path) -> GatewayResult<Value> {
        Ok(self.files.read_json(path).await?)
    }

    async fn fs_write_file(&self, path: &Path, data: Value) -> GatewayResult<()> {
        self.files.write(path, &data).await?;
        Ok(())
    }

    async fn fs_read_dir(&self, path: &Path) -> GatewayResult<Vec<String>> {
        Ok(self.files.read_dir(path).await?)
    }

    async fn fs_exists(&self, path: &Path) -> GatewayResult<bool> {
        Ok(self.files.exists(path).await?)
    }

    async fn conference_list(&self) -> GatewayResult<Vec<Conference>> {
        Ok(self.conferences.list().await?)
    }

    async fn conference_load(&self, conference_id: &str) -> GatewayResult<Option<Conference>> {
        Ok(self.conferences.load(conference_id).await?)
    }

    async fn conference_save(&self, data: Conference) -> GatewayResult<()> {
        self.conferences.save(&data).await?;
        Ok(())
    }

    async fn conference_delete(&self, conference_id: &str) -> GatewayResult<()> {
        self.conferences.delete(conference_id).await?;
        // Sessions follow their conference; a failed cleanup does not undo the delete.
        if let Err(e) = self.sessions.delete_all(conference_id).await {
            tracing::warn!(
                "[Gateway] Sessions of conference '{}' not removed: {}",
                conference_id,
                e
            );
        }
        Ok(())
    }

    async fn session_list(&self, conference_id: &str) -> GatewayResult<Vec<Session>> {
        Ok(self.sessions.list(conference_id).await?)
    }

    async fn session_load(
        &self,
        conference_id: &str,
        session_id: &str,
    ) -> GatewayResult<Option<Session>> {
        Ok(self.sessions.load(conference_id, session_id).await?)
    }

    async fn session_save(&self, conference_id: &str, data: Session) -> GatewayResult<()> {
        self.sessions.save(conference_id, &data).await?;
        Ok(())
    }

    async fn session_delete(&self, conference_id: &str, session_id: &str) -> GatewayResult<()> {
        self.sessions.delete(conference_id, session_id).await?;
        Ok(())
    }

    async fn youtube_validate_url(&self, url: &str) -> GatewayResult<bool> {
        Ok(youtube::is_valid_url(url))
    }

    async fn youtube_extract_info(&self, url: &str) -> GatewayResult<VideoInfo> {
        Ok(youtube::extract_info(url)?)
    }

    async fn git_status(&self, repo_path: &Path) -> GatewayResult<GitStatus> {
        Ok(self.git.status(repo_path).await?)
    }

    async fn git_clone(&self, repo_url: &str, local_path: &Path) -> GatewayResult<()> {
        self.git.clone_repository(repo_url, local_path).await?;
        Ok(())
    }

    async fn git_add(&self, repo_path: &Path, files: Option<Vec<String>>) -> GatewayResult<()> {
        self.git.add(repo_path, &AddTarget::from(files)).await?;
        Ok(())
    }

    async fn git_commit(&self, repo_path: &Path, message: &str) -> GatewayResult<()> {
        self.git.commit(repo_path, message).await?;
        Ok(())
    }

    async fn git_push(&self, repo_path: &Path, branch: Option<String>) -> GatewayResult<()> {
        self.git.push(repo_path, branch.as_deref()).await?;
        Ok(())
    }

    async fn git_list_branches(&self, repo_path: &Path) -> GatewayResult<BranchList> {
        Ok(self.git.list_branches(repo_path).await?)
    }

    async fn git_create_branch(
        &self,
        repo_path: &Path,
        branch_name: &str,
        from_branch: Option<String>,
    ) -> GatewayResult<()> {
        self.save_workflow
            .start_branch(repo_path, branch_name, from_branch.as_deref())
            .await?;
        Ok(())
    }

    async fn git_switch_branch(&self, repo_path: &Path, branch_name: &str) -> GatewayResult<()> {
        self.git.switch_branch(repo_path, branch_name).await?;
        Ok(())
    }

    async fn git_get_current_branch(&self, repo_path: &Path) -> GatewayResult<Option<String>> {
        Ok(self.git.current_branch(repo_path).await?)
    }

    async fn git_has_uncommitted_changes(&self, repo_path: &Path) -> GatewayResult<bool> {
        Ok(self.git.has_uncommitted_changes(repo_path).await?)
    }

    async fn repo_save_changes(&self, message: &str, push: bool) -> GatewayResult<SaveOutcome> {
        Ok(self.save_workflow.save_changes(message, push).await?)
    }

    async fn data_validate(&self) -> GatewayResult<ValidationReport> {
        Ok(self.validation.validate_dataset().await?)
    }
}
