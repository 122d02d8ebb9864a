//! The string-named wire form of a gateway call.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::operation::Operation;
use crate::conference::Conference;
use crate::session::Session;

/// A call as it crosses the process boundary:
/// `{"operation": "session-load", "args": {"conferenceId": "...", "sessionId": "..."}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "operation",
    content = "args",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum GatewayRequest {
    ConfigGet {
        key: String,
    },
    ConfigSet {
        key: String,
        value: Value,
    },
    ConfigGetAll,
    FsReadFile {
        path: PathBuf,
    },
    FsWriteFile {
        path: PathBuf,
        data: Value,
    },
    FsReadDir {
        path: PathBuf,
    },
    FsExists {
        path: PathBuf,
    },
    ConferenceList,
    ConferenceLoad {
        conference_id: String,
    },
    ConferenceSave {
        data: Conference,
    },
    ConferenceDelete {
        conference_id: String,
    },
    SessionList {
        conference_id: String,
    },
    SessionLoad {
        conference_id: String,
        session_id: String,
    },
    SessionSave {
        conference_id: String,
        data: Session,
    },
    SessionDelete {
        conference_id: String,
        session_id: String,
    },
    YoutubeValidateUrl {
        url: String,
    },
    YoutubeExtractInfo {
        url: String,
    },
    GitStatus {
        repo_path: PathBuf,
    },
    GitClone {
        repo_url: String,
        local_path: PathBuf,
    },
    GitAdd {
        repo_path: PathBuf,
        #[serde(default)]
        files: Option<Vec<String>>,
    },
    GitCommit {
        repo_path: PathBuf,
        message: String,
    },
    GitPush {
        repo_path: PathBuf,
        #[serde(default)]
        branch: Option<String>,
    },
    GitListBranches {
        repo_path: PathBuf,
    },
    GitCreateBranch {
        repo_path: PathBuf,
        branch_name: String,
        #[serde(default)]
        from_branch: Option<String>,
    },
    GitSwitchBranch {
        repo_path: PathBuf,
        branch_name: String,
    },
    GitGetCurrentBranch {
        repo_path: PathBuf,
    },
    GitHasUncommittedChanges {
        repo_path: PathBuf,
    },
    RepoSaveChanges {
        message: String,
        #[serde(default)]
        push: bool,
    },
    DataValidate,
}

impl GatewayRequest {
    /// The catalogue entry this request invokes.
    pub fn operation(&self) -> Operation {
        match self {
            GatewayRequest::ConfigGet { .. } => Operation::ConfigGet,
            GatewayRequest::ConfigSet { .. } => Operation::ConfigSet,
            GatewayRequest::ConfigGetAll => Operation::ConfigGetAll,
            GatewayRequest::FsReadFile { .. } => Operation::FsReadFile,
            GatewayRequest::FsWriteFile { .. } => Operation::FsWriteFile,
            GatewayRequest::FsReadDir { .. } => Operation::FsReadDir,
            GatewayRequest::FsExists { .. } => Operation::FsExists,
            GatewayRequest::ConferenceList => Operation::ConferenceList,
            GatewayRequest::ConferenceLoad { .. } => Operation::ConferenceLoad,
            GatewayRequest::ConferenceSave { .. } => Operation::ConferenceSave,
            GatewayRequest::ConferenceDelete { .. } => Operation::ConferenceDelete,
            GatewayRequest::SessionList { .. } => Operation::SessionList,
            GatewayRequest::SessionLoad { .. } => Operation::SessionLoad,
            GatewayRequest::SessionSave { .. } => Operation::SessionSave,
            GatewayRequest::SessionDelete { .. } => Operation::SessionDelete,
            GatewayRequest::YoutubeValidateUrl { .. } => Operation::YoutubeValidateUrl,
            GatewayRequest::YoutubeExtractInfo { .. } => Operation::YoutubeExtractInfo,
            GatewayRequest::GitStatus { .. } => Operation::GitStatus,
            GatewayRequest::GitClone { .. } => Operation::GitClone,
            GatewayRequest::GitAdd { .. } => Operation::GitAdd,
            GatewayRequest::GitCommit { .. } => Operation::GitCommit,
            GatewayRequest::GitPush { .. } => Operation::GitPush,
            GatewayRequest::GitListBranches { .. } => Operation::GitListBranches,
            GatewayRequest::GitCreateBranch { .. } => Operation::GitCreateBranch,
            GatewayRequest::GitSwitchBranch { .. } => Operation::GitSwitchBranch,
            GatewayRequest::GitGetCurrentBranch { .. } => Operation::GitGetCurrentBranch,
            GatewayRequest::GitHasUncommittedChanges { .. } => {
                Operation::GitHasUncommittedChanges
            }
            GatewayRequest::RepoSaveChanges { .. } => Operation::RepoSaveChanges,
            GatewayRequest::DataValidate => Operation::DataValidate,
        }
    }
}
