//! "Save to repository" and branch start-up on the configured website repo.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use con_core::config::ConfigStore;
use con_core::git::{AddTarget, SaveOutcome, VersionControl};
use con_core::{ConError, Result};

/// Wraps git around the user's edits.
///
/// Saving runs against the repository root from the settings store; branch
/// start-up takes the repository explicitly.
pub struct SaveWorkflow {
    config: Arc<dyn ConfigStore>,
    git: Arc<dyn VersionControl>,
}

impl SaveWorkflow {
    pub fn new(config: Arc<dyn ConfigStore>, git: Arc<dyn VersionControl>) -> Self {
        Self { config, git }
    }

    fn repo_root(&self) -> Result<PathBuf> {
        self.config.repo_root().ok_or(ConError::NotConfigured)
    }

    /// Stages everything, commits with `message` and optionally pushes the
    /// current branch to `origin`.
    ///
    /// A clean working tree is not an error; nothing is committed then.
    pub async fn save_changes(&self, message: &str, push: bool) -> Result<SaveOutcome> {
        let repo = self.repo_root()?;
        let message = message.trim();
        if message.is_empty() {
            return Err(ConError::validation("message", "Commit message is required"));
        }

        let status = self.git.status(&repo).await?;
        if status.is_clean {
            tracing::info!("[SaveWorkflow] Nothing to save in {}", repo.display());
            return Ok(SaveOutcome::NothingToSave);
        }

        self.git.add(&repo, &AddTarget::All).await?;
        self.git.commit(&repo, message).await?;

        let branch = status.current_branch;
        if push {
            self.git.push(&repo, branch.as_deref()).await?;
        }

        tracing::info!(
            "[SaveWorkflow] Saved changes on {} (pushed: {})",
            branch.as_deref().unwrap_or("detached HEAD"),
            push
        );
        Ok(SaveOutcome::Committed {
            branch,
            pushed: push,
        })
    }

    /// Creates `name` from `from` (or the current branch) and checks it out.
    pub async fn start_branch(&self, repo: &Path, name: &str, from: Option<&str>) -> Result<()> {
        validate_branch_name(name)?;
        if let Some(from) = from {
            validate_branch_name(from)?;
        }
        self.git.create_branch(repo, name, from).await?;
        tracing::info!(
            "[SaveWorkflow] Started branch {} from {}",
            name,
            from.unwrap_or("current branch")
        );
        Ok(())
    }
}

/// A branch name must be non-empty, free of whitespace and must not start
/// with `-` (git would read it as an option).
pub fn validate_branch_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ConError::validation("branchName", "Branch name is required"));
    }
    if name.starts_with('-') {
        return Err(ConError::validation(
            "branchName",
            "Branch name must not start with '-'",
        ));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(ConError::validation(
            "branchName",
            "Branch name must not contain whitespace",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeGit, GitCall, InMemoryConfig};
    use con_core::PreconditionFailure;

    fn workflow(git: Arc<FakeGit>) -> SaveWorkflow {
        SaveWorkflow::new(Arc::new(InMemoryConfig::with_root("/site")), git)
    }

    #[tokio::test]
    async fn test_clean_tree_saves_nothing() {
        let git = Arc::new(FakeGit::clean("main"));
        let outcome = workflow(git.clone())
            .save_changes("Update", true)
            .await
            .unwrap();
        assert_eq!(outcome, SaveOutcome::NothingToSave);
        assert_eq!(git.calls(), vec![GitCall::Status]);
    }

    #[tokio::test]
    async fn test_dirty_tree_commits_and_pushes_current_branch() {
        let git = Arc::new(FakeGit::dirty("add-rustconf"));
        let outcome = workflow(git.clone())
            .save_changes("  Add RustConf  ", true)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SaveOutcome::Committed {
                branch: Some("add-rustconf".to_string()),
                pushed: true,
            }
        );
        assert_eq!(
            git.calls(),
            vec![
                GitCall::Status,
                GitCall::Add(AddTarget::All),
                GitCall::Commit("Add RustConf".to_string()),
                GitCall::Push(Some("add-rustconf".to_string())),
            ]
        );
    }

    #[tokio::test]
    async fn test_commit_without_push() {
        let git = Arc::new(FakeGit::dirty("main"));
        let outcome = workflow(git.clone())
            .save_changes("Fix typo", false)
            .await
            .unwrap();
        assert!(matches!(outcome, SaveOutcome::Committed { pushed: false, .. }));
        assert!(!git.calls().iter().any(|c| matches!(c, GitCall::Push(_))));
    }

    #[tokio::test]
    async fn test_empty_message_rejected_before_git() {
        let git = Arc::new(FakeGit::dirty("main"));
        let err = workflow(git.clone()).save_changes("   ", false).await.unwrap_err();
        assert!(matches!(err, ConError::Validation { .. }));
        assert!(git.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unconfigured_root() {
        let git = Arc::new(FakeGit::dirty("main"));
        let workflow = SaveWorkflow::new(Arc::new(InMemoryConfig::default()), git);
        assert!(
            workflow
                .save_changes("msg", false)
                .await
                .unwrap_err()
                .is_not_configured()
        );
    }

    #[tokio::test]
    async fn test_start_branch_validates_name() {
        let git = Arc::new(FakeGit::clean("main"));
        let workflow = workflow(git.clone());
        let repo = Path::new("/site");
        assert!(workflow.start_branch(repo, "", None).await.is_err());
        assert!(workflow.start_branch(repo, "my branch", None).await.is_err());
        assert!(workflow.start_branch(repo, "-f", None).await.is_err());
        assert!(
            workflow
                .start_branch(repo, "ok", Some("--orphan"))
                .await
                .is_err()
        );

        workflow
            .start_branch(repo, "add-jsconf", Some("main"))
            .await
            .unwrap();
        assert_eq!(
            git.calls(),
            vec![GitCall::CreateBranch(
                "add-jsconf".to_string(),
                Some("main".to_string())
            )]
        );
    }

    #[tokio::test]
    async fn test_start_existing_branch_is_precondition() {
        let git = Arc::new(FakeGit::clean("main"));
        let err = workflow(git)
            .start_branch(Path::new("/site"), "main", None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ConError::Precondition(PreconditionFailure::BranchExists(_))
        ));
    }
}
