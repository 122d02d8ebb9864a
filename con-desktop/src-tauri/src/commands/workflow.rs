use con_core::gateway::ConGateway;
use con_core::git::SaveOutcome;
use con_core::validation::ValidationReport;
use tauri::State;

use super::CommandResult;
use crate::app::AppState;

/// Stages everything in the website repository, commits with `message` and
/// optionally pushes the current branch.
#[tauri::command]
pub async fn repo_save_changes(
    message: String,
    push: bool,
    state: State<'_, AppState>,
) -> CommandResult<SaveOutcome> {
    state.gateway.repo_save_changes(&message, push).await
}

#[tauri::command]
pub async fn data_validate(state: State<'_, AppState>) -> CommandResult<ValidationReport> {
    state.gateway.data_validate().await
}
