//! Version-control data models exposed across the gateway.

use serde::{Deserialize, Serialize};

/// A path renamed in the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamedPath {
    pub from: String,
    pub to: String,
}

/// Snapshot of a repository's working tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitStatus {
    /// Checked-out branch, `None` on a detached HEAD.
    pub current_branch: Option<String>,
    /// Upstream tracking branch, e.g. `origin/main`.
    pub tracking: Option<String>,
    pub ahead_count: u32,
    pub behind_count: u32,
    pub staged_paths: Vec<String>,
    pub modified_paths: Vec<String>,
    pub created_paths: Vec<String>,
    pub deleted_paths: Vec<String>,
    pub renamed_paths: Vec<RenamedPath>,
    pub conflicted_paths: Vec<String>,
    pub untracked_paths: Vec<String>,
    pub is_clean: bool,
}

impl GitStatus {
    /// Recomputes `is_clean` from the path lists.
    pub fn refresh_clean_flag(&mut self) {
        self.is_clean = self.staged_paths.is_empty()
            && self.modified_paths.is_empty()
            && self.created_paths.is_empty()
            && self.deleted_paths.is_empty()
            && self.renamed_paths.is_empty()
            && self.conflicted_paths.is_empty()
            && self.untracked_paths.is_empty();
    }
}

/// Which paths `git add` should stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddTarget {
    /// Everything under the repository root.
    All,
    /// Only the listed paths, relative to the repository root.
    Paths(Vec<String>),
}

impl From<Option<Vec<String>>> for AddTarget {
    fn from(files: Option<Vec<String>>) -> Self {
        match files {
            Some(paths) if !paths.is_empty() => AddTarget::Paths(paths),
            _ => AddTarget::All,
        }
    }
}

/// A local branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchInfo {
    pub name: String,
    pub is_current: bool,
    pub commit_hash: String,
    /// Subject line of the branch tip commit.
    pub label: String,
}

/// All local branches of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchList {
    pub current: String,
    pub all: Vec<String>,
    pub branches: Vec<BranchInfo>,
}

/// Result of the "save to repository" workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SaveOutcome {
    /// The working tree was already clean.
    NothingToSave,
    /// Changes were committed, and pushed when requested.
    #[serde(rename_all = "camelCase")]
    Committed {
        branch: Option<String>,
        pushed: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_flag_tracks_every_list() {
        let mut status = GitStatus::default();
        status.refresh_clean_flag();
        assert!(status.is_clean);

        status.untracked_paths.push("data/new.json".to_string());
        status.refresh_clean_flag();
        assert!(!status.is_clean);

        status.untracked_paths.clear();
        status.conflicted_paths.push("data/conferences.json".to_string());
        status.refresh_clean_flag();
        assert!(!status.is_clean);
    }

    #[test]
    fn test_add_target_from_files() {
        assert_eq!(AddTarget::from(None), AddTarget::All);
        assert_eq!(AddTarget::from(Some(vec![])), AddTarget::All);
        assert_eq!(
            AddTarget::from(Some(vec!["a".to_string()])),
            AddTarget::Paths(vec!["a".to_string()])
        );
    }

    #[test]
    fn test_save_outcome_wire_shape() {
        let value = serde_json::to_value(SaveOutcome::Committed {
            branch: Some("main".to_string()),
            pushed: false,
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({"status": "committed", "branch": "main", "pushed": false})
        );
    }
}
