//! Routes string-named requests to the typed gateway.

use std::sync::Arc;

use async_trait::async_trait;
use con_core::gateway::{
    ConGateway, GatewayError, GatewayRequest, GatewayResult, GatewayTransport,
};
use serde::Serialize;
use serde_json::Value;

/// Executes a [`GatewayRequest`] against a [`ConGateway`] and returns the
/// JSON result. Operations without a result answer `true`.
#[derive(Clone)]
pub struct GatewayDispatcher {
    gateway: Arc<dyn ConGateway>,
}

fn to_value<T: Serialize>(result: GatewayResult<T>) -> GatewayResult<Value> {
    serde_json::to_value(result?)
        .map_err(|e| GatewayError::internal(format!("Unserializable result: {}", e)))
}

fn done(result: GatewayResult<()>) -> GatewayResult<Value> {
    result.map(|()| Value::Bool(true))
}

impl GatewayDispatcher {
    pub fn new(gateway: Arc<dyn ConGateway>) -> Self {
        Self { gateway }
    }

    pub async fn dispatch(&self, request: GatewayRequest) -> GatewayResult<Value> {
        let operation = request.operation();
        if operation.is_mutating() {
            tracing::info!("[Gateway] Dispatching {}", operation.name());
        } else {
            tracing::debug!("[Gateway] Dispatching {}", operation.name());
        }

        let gateway = &self.gateway;
        let result = match request {
            GatewayRequest::ConfigGet { key } => to_value(gateway.config_get(&key).await),
            GatewayRequest::ConfigSet { key, value } => done(gateway.config_set(&key, value).await),
            GatewayRequest::ConfigGetAll => to_value(gateway.config_get_all().await),
            GatewayRequest::FsReadFile { path } => gateway.fs_read_file(&path).await,
            GatewayRequest::FsWriteFile { path, data } => {
                done(gateway.fs_write_file(&path, data).await)
            }
            GatewayRequest::FsReadDir { path } => to_value(gateway.fs_read_dir(&path).await),
            GatewayRequest::FsExists { path } => to_value(gateway.fs_exists(&path).await),
            GatewayRequest::ConferenceList => to_value(gateway.conference_list().await),
            GatewayRequest::ConferenceLoad { conference_id } => {
                to_value(gateway.conference_load(&conference_id).await)
            }
            GatewayRequest::ConferenceSave { data } => done(gateway.conference_save(data).await),
            GatewayRequest::ConferenceDelete { conference_id } => {
                done(gateway.conference_delete(&conference_id).await)
            }
            GatewayRequest::SessionList { conference_id } => {
                to_value(gateway.session_list(&conference_id).await)
            }
            GatewayRequest::SessionLoad {
                conference_id,
                session_id,
            } => to_value(gateway.session_load(&conference_id, &session_id).await),
            GatewayRequest::SessionSave {
                conference_id,
                data,
            } => done(gateway.session_save(&conference_id, data).await),
            GatewayRequest::SessionDelete {
                conference_id,
                session_id,
            } => done(gateway.session_delete(&conference_id, &session_id).await),
            GatewayRequest::YoutubeValidateUrl { url } => {
                to_value(gateway.youtube_validate_url(&url).await)
            }
            GatewayRequest::YoutubeExtractInfo { url } => {
                to_value(gateway.youtube_extract_info(&url).await)
            }
            GatewayRequest::GitStatus { repo_path } => to_value(gateway.git_status(&repo_path).await),
            GatewayRequest::GitClone {
                repo_url,
                local_path,
            } => done(gateway.git_clone(&repo_url, &local_path).await),
            GatewayRequest::GitAdd { repo_path, files } => {
                done(gateway.git_add(&repo_path, files).await)
            }
            GatewayRequest::GitCommit { repo_path, message } => {
                done(gateway.git_commit(&repo_path, &message).await)
            }
            GatewayRequest::GitPush { repo_path, branch } => {
                done(gateway.git_push(&repo_path, branch).await)
            }
            GatewayRequest::GitListBranches { repo_path } => {
                to_value(gateway.git_list_branches(&repo_path).await)
            }
            GatewayRequest::GitCreateBranch {
                repo_path,
                branch_name,
                from_branch,
            } => done(
                gateway
                    .git_create_branch(&repo_path, &branch_name, from_branch)
                    .await,
            ),
            GatewayRequest::GitSwitchBranch {
                repo_path,
                branch_name,
            } => done(gateway.git_switch_branch(&repo_path, &branch_name).await),
            GatewayRequest::GitGetCurrentBranch { repo_path } => {
                to_value(gateway.git_get_current_branch(&repo_path).await)
            }
            GatewayRequest::GitHasUncommittedChanges { repo_path } => {
                to_value(gateway.git_has_uncommitted_changes(&repo_path).await)
            }
            GatewayRequest::RepoSaveChanges { message, push } => {
                to_value(gateway.repo_save_changes(&message, push).await)
            }
            GatewayRequest::DataValidate => to_value(gateway.data_validate().await),
        };

        if let Err(e) = &result {
            tracing::warn!("[Gateway] {} failed ({}): {}", operation.name(), e.kind, e.message);
        }
        result
    }

    /// Parses and dispatches a raw JSON request.
    pub async fn dispatch_json(&self, request: Value) -> GatewayResult<Value> {
        let request: GatewayRequest = serde_json::from_value(request)?;
        self.dispatch(request).await
    }
}

#[async_trait]
impl GatewayTransport for GatewayDispatcher {
    async fn send(&self, request: GatewayRequest) -> GatewayResult<Value> {
        self.dispatch(request).await
    }
}
