use std::path::PathBuf;

use con_core::gateway::ConGateway;
use con_core::git::{BranchList, GitStatus};
use tauri::State;

use super::CommandResult;
use crate::app::AppState;

#[tauri::command]
pub async fn git_status(repo_path: PathBuf, state: State<'_, AppState>) -> CommandResult<GitStatus> {
    state.gateway.git_status(&repo_path).await
}

#[tauri::command]
pub async fn git_clone(
    repo_url: String,
    local_path: PathBuf,
    state: State<'_, AppState>,
) -> CommandResult<bool> {
    state.gateway.git_clone(&repo_url, &local_path).await?;
    Ok(true)
}

/// Stages `files`, or every change when omitted.
#[tauri::command]
pub async fn git_add(
    repo_path: PathBuf,
    files: Option<Vec<String>>,
    state: State<'_, AppState>,
) -> CommandResult<bool> {
    state.gateway.git_add(&repo_path, files).await?;
    Ok(true)
}

#[tauri::command]
pub async fn git_commit(
    repo_path: PathBuf,
    message: String,
    state: State<'_, AppState>,
) -> CommandResult<bool> {
    state.gateway.git_commit(&repo_path, &message).await?;
    Ok(true)
}

#[tauri::command]
pub async fn git_push(
    repo_path: PathBuf,
    branch: Option<String>,
    state: State<'_, AppState>,
) -> CommandResult<bool> {
    state.gateway.git_push(&repo_path, branch).await?;
    Ok(true)
}

#[tauri::command]
pub async fn git_list_branches(
    repo_path: PathBuf,
    state: State<'_, AppState>,
) -> CommandResult<BranchList> {
    state.gateway.git_list_branches(&repo_path).await
}

#[tauri::command]
pub async fn git_create_branch(
    repo_path: PathBuf,
    branch_name: String,
    from_branch: Option<String>,
    state: State<'_, AppState>,
) -> CommandResult<bool> {
    state
        .gateway
        .git_create_branch(&repo_path, &branch_name, from_branch)
        .await?;
    Ok(true)
}

/// Refused with a precondition error while the working tree has changes.
#[tauri::command]
pub async fn git_switch_branch(
    repo_path: PathBuf,
    branch_name: String,
    state: State<'_, AppState>,
) -> CommandResult<bool> {
    state.gateway.git_switch_branch(&repo_path, &branch_name).await?;
    Ok(true)
}

#[tauri::command]
pub async fn git_get_current_branch(
    repo_path: PathBuf,
    state: State<'_, AppState>,
) -> CommandResult<Option<String>> {
    state.gateway.git_get_current_branch(&repo_path).await
}

#[tauri::command]
pub async fn git_has_uncommitted_changes(
    repo_path: PathBuf,
    state: State<'_, AppState>,
) -> CommandResult<bool> {
    state.gateway.git_has_uncommitted_changes(&repo_path).await
}
