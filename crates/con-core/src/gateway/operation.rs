//! The catalogue of named gateway operations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Every operation the UI can invoke, by wire name (`conference-save`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Operation {
    ConfigGet,
    ConfigSet,
    ConfigGetAll,
    FsReadFile,
    FsWriteFile,
    FsReadDir,
    FsExists,
    ConferenceList,
    ConferenceLoad,
    ConferenceSave,
    ConferenceDelete,
    SessionList,
    SessionLoad,
    SessionSave,
    SessionDelete,
    YoutubeValidateUrl,
    YoutubeExtractInfo,
    GitStatus,
    GitClone,
    GitAdd,
    GitCommit,
    GitPush,
    GitListBranches,
    GitCreateBranch,
    GitSwitchBranch,
    GitGetCurrentBranch,
    GitHasUncommittedChanges,
    RepoSaveChanges,
    DataValidate,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    /// Whether the operation writes to the record store, the settings or the repository.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Operation::ConfigSet
                | Operation::FsWriteFile
                | Operation::ConferenceSave
                | Operation::ConferenceDelete
                | Operation::SessionSave
                | Operation::SessionDelete
                | Operation::GitClone
                | Operation::GitAdd
                | Operation::GitCommit
                | Operation::GitPush
                | Operation::GitCreateBranch
                | Operation::GitSwitchBranch
                | Operation::RepoSaveChanges
        )
    }
}
