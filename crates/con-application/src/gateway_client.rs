//! Typed client proxy over a gateway transport.

use std::path::Path;

use async_trait::async_trait;
use con_core::conference::Conference;
use con_core::gateway::{
    ConGateway, GatewayError, GatewayRequest, GatewayResult, GatewayTransport,
};
use con_core::git::{BranchList, GitStatus, SaveOutcome};
use con_core::session::Session;
use con_core::validation::ValidationReport;
use con_core::youtube::VideoInfo;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Implements [`ConGateway`] by sending named requests through `T` and
/// decoding the JSON answers.
pub struct GatewayClient<T> {
    transport: T,
}

impl<T: GatewayTransport> GatewayClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    async fn call<R: DeserializeOwned>(&self, request: GatewayRequest) -> GatewayResult<R> {
        let value = self.transport.send(request).await?;
        serde_json::from_value(value)
            .map_err(|e| GatewayError::internal(format!("Unexpected gateway result: {}", e)))
    }

    /// For operations whose only answer is success.
    async fn call_unit(&self, request: GatewayRequest) -> GatewayResult<()> {
        self.transport.send(request).await?;
        Ok(())
    }
}

#[async_trait]
impl<T: GatewayTransport> ConGateway for GatewayClient<T> {
    async fn config_get(&self, key: &str) -> GatewayResult<Option<Value>> {
        self.call(GatewayRequest::ConfigGet {
            key: key.to_string(),
        })
        .await
    }

    async fn config_set(&self, key: &str, value: Value) -> GatewayResult<()> {
        self.call_unit(GatewayRequest::ConfigSet {
            key: key.to_string(),
            value,
        })
        .await
    }

    async fn config_get_all(&self) -> GatewayResult<Map<String, Value>> {
        self.call(GatewayRequest::ConfigGetAll).await
    }

    async fn fs_read_file(&self, path: &Path) -> GatewayResult<Value> {
        self.call(GatewayRequest::FsReadFile {
            path: path.to_path_buf(),
        })
        .await
    }

    async fn fs_write_file(&self, path: &Path, data: Value) -> GatewayResult<()> {
        self.call_unit(GatewayRequest::FsWriteFile {
            path: path.to_path_buf(),
            data,
        })
        .await
    }

    async fn fs_read_dir(&self, path: &Path) -> GatewayResult<Vec<String>> {
        self.call(GatewayRequest::FsReadDir {
            path: path.to_path_buf(),
        })
        .await
    }

    async fn fs_exists(&self, path: &Path) -> GatewayResult<bool> {
        self.call(GatewayRequest::FsExists {
            path: path.to_path_buf(),
        })
        .await
    }

    async fn conference_list(&self) -> GatewayResult<Vec<Conference>> {
        self.call(GatewayRequest::ConferenceList).await
    }

    async fn conference_load(&self, conference_id: &str) -> GatewayResult<Option<Conference>> {
        self.call(GatewayRequest::ConferenceLoad {
            conference_id: conference_id.to_string(),
        })
        .await
    }

    async fn conference_save(&self, data: Conference) -> GatewayResult<()> {
        self.call_unit(GatewayRequest::ConferenceSave { data }).await
    }

    async fn conference_delete(&self, conference_id: &str) -> GatewayResult<()> {
        self.call_unit(GatewayRequest::ConferenceDelete {
            conference_id: conference_id.to_string(),
        })
        .await
    }

    async fn session_list(&self, conference_id: &str) -> GatewayResult<Vec<Session>> {
        self.call(GatewayRequest::SessionList {
            conference_id: conference_id.to_string(),
        })
        .await
    }

    async fn session_load(
        &self,
        conference_id: &str,
        session_id: &str,
    ) -> GatewayResult<Option<Session>> {
        self.call(GatewayRequest::SessionLoad {
            conference_id: conference_id.to_string(),
            session_id: session_id.to_string(),
        })
        .await
    }

    async fn session_save(&self, conference_id: &str, data: Session) -> GatewayResult<()> {
        self.call_unit(GatewayRequest::SessionSave {
            conference_id: conference_id.to_string(),
            data,
        })
        .await
    }

    async fn session_delete(&self, conference_id: &str, session_id: &str) -> GatewayResult<()> {
        self.call_unit(GatewayRequest::SessionDelete {
            conference_id: conference_id.to_string(),
            session_id: session_id.to_string(),
        })
        .await
    }

    async fn youtube_validate_url(&self, url: &str) -> GatewayResult<bool> {
        self.call(GatewayRequest::YoutubeValidateUrl {
            url: url.to_string(),
        })
        .await
    }

    async fn youtube_extract_info(&self, url: &str) -> GatewayResult<VideoInfo> {
        self.call(GatewayRequest::YoutubeExtractInfo {
            url: url.to_string(),
        })
        .await
    }

    async fn git_status(&self, repo_path: &Path) -> GatewayResult<GitStatus> {
        self.call(GatewayRequest::GitStatus {
            repo_path: repo_path.to_path_buf(),
        })
        .await
    }

    async fn git_clone(&self, repo_url: &str, local_path: &Path) -> GatewayResult<()> {
        self.call_unit(GatewayRequest::GitClone {
            repo_url: repo_url.to_string(),
            local_path: local_path.to_path_buf(),
        })
        .await
    }

    async fn git_add(&self, repo_path: &Path, files: Option<Vec<String>>) -> GatewayResult<()> {
        self.call_unit(GatewayRequest::GitAdd {
            repo_path: repo_path.to_path_buf(),
            files,
        })
        .await
    }

    async fn git_commit(&self, repo_path: &Path, message: &str) -> GatewayResult<()> {
        self.call_unit(GatewayRequest::GitCommit {
            repo_path: repo_path.to_path_buf(),
            message: message.to_string(),
        })
        .await
    }

    async fn git_push(&self, repo_path: &Path, branch: Option<String>) -> GatewayResult<()> {
        self.call_unit(GatewayRequest::GitPush {
            repo_path: repo_path.to_path_buf(),
            branch,
        })
        .await
    }

    async fn git_list_branches(&self, repo_path: &Path) -> GatewayResult<BranchList> {
        self.call(GatewayRequest::GitListBranches {
            repo_path: repo_path.to_path_buf(),
        })
        .await
    }

    async fn git_create_branch(
        &self,
        repo_path: &Path,
        branch_name: &str,
        from_branch: Option<String>,
    ) -> GatewayResult<()> {
        self.call_unit(GatewayRequest::GitCreateBranch {
            repo_path: repo_path.to_path_buf(),
            branch_name: branch_name.to_string(),
            from_branch,
        })
        .await
    }

    async fn git_switch_branch(&self, repo_path: &Path, branch_name: &str) -> GatewayResult<()> {
        self.call_unit(GatewayRequest::GitSwitchBranch {
            repo_path: repo_path.to_path_buf(),
            branch_name: branch_name.to_string(),
        })
        .await
    }

    async fn git_get_current_branch(&self, repo_path: &Path) -> GatewayResult<Option<String>> {
        self.call(GatewayRequest::GitGetCurrentBranch {
            repo_path: repo_path.to_path_buf(),
        })
        .await
    }

    async fn git_has_uncommitted_changes(&self, repo_path: &Path) -> GatewayResult<bool> {
        self.call(GatewayRequest::GitHasUncommittedChanges {
            repo_path: repo_path.to_path_buf(),
        })
        .await
    }

    async fn repo_save_changes(&self, message: &str, push: bool) -> GatewayResult<SaveOutcome> {
        self.call(GatewayRequest::RepoSaveChanges {
            message: message.to_string(),
            push,
        })
        .await
    }

    async fn data_validate(&self) -> GatewayResult<ValidationReport> {
        self.call(GatewayRequest::DataValidate).await
    }
}
