use con_core::conference::Conference;
use con_core::gateway::ConGateway;
use tauri::State;

use super::CommandResult;
use crate::app::AppState;

#[tauri::command]
pub async fn conference_list(state: State<'_, AppState>) -> CommandResult<Vec<Conference>> {
    state.gateway.conference_list().await
}

#[tauri::command]
pub async fn conference_load(
    conference_id: String,
    state: State<'_, AppState>,
) -> CommandResult<Option<Conference>> {
    state.gateway.conference_load(&conference_id).await
}

/// Inserts or replaces the conference with the same id.
#[tauri::command]
pub async fn conference_save(data: Conference, state: State<'_, AppState>) -> CommandResult<bool> {
    state.gateway.conference_save(data).await?;
    Ok(true)
}

/// Removes the conference and its session collection.
#[tauri::command]
pub async fn conference_delete(
    conference_id: String,
    state: State<'_, AppState>,
) -> CommandResult<bool> {
    state.gateway.conference_delete(&conference_id).await?;
    Ok(true)
}
