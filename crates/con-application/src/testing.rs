//! In-memory stand-ins for the settings store and git, for unit tests.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use con_core::config::{ConfigStore, REPO_PATH_KEY};
use con_core::git::{AddTarget, BranchInfo, BranchList, GitStatus, VersionControl};
use con_core::{ConError, PreconditionFailure, Result};
use serde_json::{Map, Value};

#[derive(Default)]
pub struct InMemoryConfig {
    values: RwLock<Map<String, Value>>,
}

impl InMemoryConfig {
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        let config = Self::default();
        config
            .set(
                REPO_PATH_KEY,
                Value::String(root.as_ref().to_string_lossy().into_owned()),
            )
            .unwrap();
        config
    }
}

impl ConfigStore for InMemoryConfig {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.values.read().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        self.values.write().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    fn get_all(&self) -> Result<Map<String, Value>> {
        Ok(self.values.read().unwrap().clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    Status,
    Clone(String, PathBuf),
    Add(AddTarget),
    Commit(String),
    Push(Option<String>),
    ListBranches,
    CreateBranch(String, Option<String>),
    SwitchBranch(String),
}

struct FakeGitState {
    current: String,
    branches: Vec<String>,
    dirty: bool,
    calls: Vec<GitCall>,
}

/// Scripted git: one repository, a dirty flag and a branch list.
pub struct FakeGit {
    state: Mutex<FakeGitState>,
}

impl FakeGit {
    fn new(branch: &str, dirty: bool) -> Self {
        Self {
            state: Mutex::new(FakeGitState {
                current: branch.to_string(),
                branches: vec![branch.to_string()],
                dirty,
                calls: Vec::new(),
            }),
        }
    }

    pub fn clean(branch: &str) -> Self {
        Self::new(branch, false)
    }

    pub fn dirty(branch: &str) -> Self {
        Self::new(branch, true)
    }

    pub fn calls(&self) -> Vec<GitCall> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(&self, call: GitCall) -> std::sync::MutexGuard<'_, FakeGitState> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        state
    }
}

#[async_trait]
impl VersionControl for FakeGit {
    async fn status(&self, _repo: &Path) -> Result<GitStatus> {
        let state = self.record(GitCall::Status);
        let mut status = GitStatus {
            current_branch: Some(state.current.clone()),
            ..GitStatus::default()
        };
        if state.dirty {
            status.modified_paths.push("data/conferences.json".to_string());
        }
        status.refresh_clean_flag();
        Ok(status)
    }

    async fn clone_repository(&self, url: &str, destination: &Path) -> Result<()> {
        self.record(GitCall::Clone(url.to_string(), destination.to_path_buf()));
        Ok(())
    }

    async fn add(&self, _repo: &Path, target: &AddTarget) -> Result<()> {
        self.record(GitCall::Add(target.clone()));
        Ok(())
    }

    async fn commit(&self, _repo: &Path, message: &str) -> Result<()> {
        let mut state = self.record(GitCall::Commit(message.to_string()));
        if !state.dirty {
            return Err(ConError::external("git commit", "nothing to commit, working tree clean"));
        }
        state.dirty = false;
        Ok(())
    }

    async fn push(&self, _repo: &Path, branch: Option<&str>) -> Result<()> {
        self.record(GitCall::Push(branch.map(str::to_string)));
        Ok(())
    }

    async fn list_branches(&self, _repo: &Path) -> Result<BranchList> {
        let state = self.record(GitCall::ListBranches);
        Ok(BranchList {
            current: state.current.clone(),
            all: state.branches.clone(),
            branches: state
                .branches
                .iter()
                .map(|name| BranchInfo {
                    name: name.clone(),
                    is_current: *name == state.current,
                    commit_hash: "0000000".to_string(),
                    label: String::new(),
                })
                .collect(),
        })
    }

    async fn create_branch(&self, _repo: &Path, name: &str, from: Option<&str>) -> Result<()> {
        let mut state = self.record(GitCall::CreateBranch(
            name.to_string(),
            from.map(str::to_string),
        ));
        if state.branches.iter().any(|b| b == name) {
            return Err(PreconditionFailure::BranchExists(name.to_string()).into());
        }
        state.branches.push(name.to_string());
        state.current = name.to_string();
        Ok(())
    }

    async fn switch_branch(&self, _repo: &Path, name: &str) -> Result<()> {
        let mut state = self.record(GitCall::SwitchBranch(name.to_string()));
        if state.dirty {
            return Err(PreconditionFailure::UncommittedChanges.into());
        }
        if !state.branches.iter().any(|b| b == name) {
            return Err(ConError::not_found("branch", name));
        }
        state.current = name.to_string();
        Ok(())
    }
}
