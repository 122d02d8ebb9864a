//! `VersionControl` backed by the `git` executable.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Output;

use async_trait::async_trait;
use con_core::git::{AddTarget, BranchList, GitStatus, VersionControl};
use con_core::{ConError, PreconditionFailure, Result};
use tokio::process::Command;

use super::porcelain::{self, BRANCH_FORMAT};

/// Runs git as a subprocess, one invocation per operation.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
}

impl GitCli {
    /// Uses `git` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("git")
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn output<I, S>(&self, repo: Option<&Path>, args: I) -> Result<Output>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new(&self.program);
        if let Some(repo) = repo {
            cmd.current_dir(repo);
        }
        cmd.args(args)
            .env("GIT_TERMINAL_PROMPT", "0")
            .kill_on_drop(true);

        tracing::debug!("[Git] Executing {:?}", cmd.as_std());

        cmd.output().await.map_err(|e| {
            ConError::external("git", format!("Failed to run {}: {}", self.program.display(), e))
        })
    }

    /// Runs git and returns stdout, or `External` with git's message.
    async fn run<I, S>(&self, operation: &str, repo: Option<&Path>, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = self.output(repo, args).await?;
        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let message = if stderr.is_empty() {
            // `commit` with nothing staged reports on stdout.
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        } else {
            stderr
        };
        tracing::warn!("[Git] {} failed: {}", operation, message);
        Err(ConError::external(operation, message))
    }

    async fn branch_exists(&self, repo: &Path, name: &str) -> Result<bool> {
        let reference = format!("refs/heads/{}", name);
        let output = self
            .output(Some(repo), ["rev-parse", "--verify", "--quiet", reference.as_str()])
            .await?;
        Ok(output.status.success())
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VersionControl for GitCli {
    async fn status(&self, repo: &Path) -> Result<GitStatus> {
        let stdout = self
            .run(
                "git status",
                Some(repo),
                ["status", "--porcelain=v1", "--branch", "-z"],
            )
            .await?;
        Ok(porcelain::parse_status(&stdout))
    }

    async fn clone_repository(&self, url: &str, destination: &Path) -> Result<()> {
        let args = [
            OsStr::new("clone"),
            OsStr::new("--"),
            OsStr::new(url),
            destination.as_os_str(),
        ];
        self.run("git clone", None, args).await?;
        tracing::info!("[Git] Cloned {} into {}", url, destination.display());
        Ok(())
    }

    async fn add(&self, repo: &Path, target: &AddTarget) -> Result<()> {
        let mut args = vec!["add".to_string()];
        match target {
            AddTarget::All => args.push("--all".to_string()),
            AddTarget::Paths(paths) => {
                args.push("--".to_string());
                args.extend(paths.iter().cloned());
            }
        }
        self.run("git add", Some(repo), args).await?;
        Ok(())
    }

    async fn commit(&self, repo: &Path, message: &str) -> Result<()> {
        self.run("git commit", Some(repo), ["commit", "-m", message])
            .await?;
        tracing::info!("[Git] Committed in {}", repo.display());
        Ok(())
    }

    async fn push(&self, repo: &Path, branch: Option<&str>) -> Result<()> {
        let branch = branch.unwrap_or("HEAD");
        self.run("git push", Some(repo), ["push", "origin", branch])
            .await?;
        tracing::info!("[Git] Pushed {} to origin", branch);
        Ok(())
    }

    async fn list_branches(&self, repo: &Path) -> Result<BranchList> {
        let format = format!("--format={}", BRANCH_FORMAT);
        let stdout = self
            .run(
                "git for-each-ref",
                Some(repo),
                ["for-each-ref", format.as_str(), "refs/heads"],
            )
            .await?;
        Ok(porcelain::parse_branches(&stdout))
    }

    async fn create_branch(&self, repo: &Path, name: &str, from: Option<&str>) -> Result<()> {
        if self.branch_exists(repo, name).await? {
            return Err(PreconditionFailure::BranchExists(name.to_string()).into());
        }
        if let Some(from) = from {
            self.run("git checkout", Some(repo), ["checkout", from])
                .await?;
        }
        self.run("git checkout", Some(repo), ["checkout", "-b", name])
            .await?;
        tracing::info!(
            "[Git] Created branch '{}' from '{}'",
            name,
            from.unwrap_or("HEAD")
        );
        Ok(())
    }

    async fn switch_branch(&self, repo: &Path, name: &str) -> Result<()> {
        if !self.status(repo).await?.is_clean {
            return Err(PreconditionFailure::UncommittedChanges.into());
        }
        if !self.branch_exists(repo, name).await? {
            return Err(ConError::not_found("branch", name));
        }
        self.run("git checkout", Some(repo), ["checkout", name])
            .await?;
        tracing::info!("[Git] Switched to branch '{}'", name);
        Ok(())
    }
}
