//! The typed gateway interface.

use std::path::Path;

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::error::GatewayResult;
use super::request::GatewayRequest;
use crate::conference::Conference;
use crate::git::{BranchList, GitStatus, SaveOutcome};
use crate::session::Session;
use crate::validation::ValidationReport;
use crate::youtube::VideoInfo;

/// Every operation the UI may invoke on the privileged back end.
///
/// Implemented by the back-end service and by the client proxy that forwards
/// calls over a [`GatewayTransport`]. Each method maps to one catalogue entry
/// of [`super::Operation`].
#[async_trait]
pub trait ConGateway: Send + Sync {
    // Settings
    async fn config_get(&self, key: &str) -> GatewayResult<Option<Value>>;
    async fn config_set(&self, key: &str, value: Value) -> GatewayResult<()>;
    async fn config_get_all(&self) -> GatewayResult<Map<String, Value>>;

    // Raw file access
    async fn fs_read_file(&self, path: &Path) -> GatewayResult<Value>;
    /// String data is written verbatim, anything else as 2-space indented JSON.
    async fn fs_write_file(&self, path: &Path, data: Value) -> GatewayResult<()>;
    async fn fs_read_dir(&self, path: &Path) -> GatewayResult<Vec<String>>;
    async fn fs_exists(&self, path: &Path) -> GatewayResult<bool>;

    // Conferences
    async fn conference_list(&self) -> GatewayResult<Vec<Conference>>;
    async fn conference_load(&self, conference_id: &str) -> GatewayResult<Option<Conference>>;
    async fn conference_save(&self, data: Conference) -> GatewayResult<()>;
    /// Also removes the conference's session file.
    async fn conference_delete(&self, conference_id: &str) -> GatewayResult<()>;

    // Sessions
    async fn session_list(&self, conference_id: &str) -> GatewayResult<Vec<Session>>;
    async fn session_load(
        &self,
        conference_id: &str,
        session_id: &str,
    ) -> GatewayResult<Option<Session>>;
    async fn session_save(&self, conference_id: &str, data: Session) -> GatewayResult<()>;
    async fn session_delete(&self, conference_id: &str, session_id: &str) -> GatewayResult<()>;

    // YouTube
    async fn youtube_validate_url(&self, url: &str) -> GatewayResult<bool>;
    async fn youtube_extract_info(&self, url: &str) -> GatewayResult<VideoInfo>;

    // Git
    async fn git_status(&self, repo_path: &Path) -> GatewayResult<GitStatus>;
    async fn git_clone(&self, repo_url: &str, local_path: &Path) -> GatewayResult<()>;
    async fn git_add(&self, repo_path: &Path, files: Option<Vec<String>>) -> GatewayResult<()>;
    async fn git_commit(&self, repo_path: &Path, message: &str) -> GatewayResult<()>;
    async fn git_push(&self, repo_path: &Path, branch: Option<String>) -> GatewayResult<()>;
    async fn git_list_branches(&self, repo_path: &Path) -> GatewayResult<BranchList>;
    async fn git_create_branch(
        &self,
        repo_path: &Path,
        branch_name: &str,
        from_branch: Option<String>,
    ) -> GatewayResult<()>;
    async fn git_switch_branch(&self, repo_path: &Path, branch_name: &str) -> GatewayResult<()>;
    async fn git_get_current_branch(&self, repo_path: &Path) -> GatewayResult<Option<String>>;
    async fn git_has_uncommitted_changes(&self, repo_path: &Path) -> GatewayResult<bool>;

    // Workflows
    async fn repo_save_changes(&self, message: &str, push: bool) -> GatewayResult<SaveOutcome>;
    async fn data_validate(&self) -> GatewayResult<ValidationReport>;
}

/// Carries a named request to the back end and returns its JSON result.
#[async_trait]
pub trait GatewayTransport: Send + Sync {
    async fn send(&self, request: GatewayRequest) -> GatewayResult<Value>;
}
