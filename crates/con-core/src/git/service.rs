//! Version-control service trait.

use std::path::Path;

use async_trait::async_trait;

use super::model::{AddTarget, BranchList, GitStatus};
use crate::error::Result;

/// A minimal, repository-scoped view of git.
///
/// Every operation takes the repository root. Failures of the underlying
/// process surface as `ConError::External` carrying git's own message.
///
/// Per repository the working tree moves between *clean* and *dirty*; only
/// `commit` makes a dirty tree clean again, and `switch_branch` is legal from
/// a clean tree only.
#[async_trait]
pub trait VersionControl: Send + Sync {
    /// Reads branch, tracking and path status of the working tree.
    async fn status(&self, repo: &Path) -> Result<GitStatus>;

    /// Clones `url` into `destination`.
    async fn clone_repository(&self, url: &str, destination: &Path) -> Result<()>;

    async fn add(&self, repo: &Path, target: &AddTarget) -> Result<()>;

    /// Commits the index. Fails when there is nothing to commit.
    async fn commit(&self, repo: &Path, message: &str) -> Result<()>;

    /// Pushes `branch` (or `HEAD` when `None`) to `origin`.
    async fn push(&self, repo: &Path, branch: Option<&str>) -> Result<()>;

    async fn list_branches(&self, repo: &Path) -> Result<BranchList>;

    /// Creates and checks out `name`, optionally checking out `from` first.
    ///
    /// Fails with `Precondition(BranchExists)` when `name` already exists.
    async fn create_branch(&self, repo: &Path, name: &str, from: Option<&str>) -> Result<()>;

    /// Checks out `name`.
    ///
    /// Fails with `Precondition(UncommittedChanges)` unless the tree is clean;
    /// the checked-out branch is unchanged on failure.
    async fn switch_branch(&self, repo: &Path, name: &str) -> Result<()>;

    async fn current_branch(&self, repo: &Path) -> Result<Option<String>> {
        Ok(self.status(repo).await?.current_branch)
    }

    async fn has_uncommitted_changes(&self, repo: &Path) -> Result<bool> {
        Ok(!self.status(repo).await?.is_clean)
    }
}
