use con_core::gateway::ConGateway;
use con_core::session::Session;
use tauri::State;

use super::CommandResult;
use crate::app::AppState;

#[tauri::command]
pub async fn session_list(
    conference_id: String,
    state: State<'_, AppState>,
) -> CommandResult<Vec<Session>> {
    state.gateway.session_list(&conference_id).await
}

#[tauri::command]
pub async fn session_load(
    conference_id: String,
    session_id: String,
    state: State<'_, AppState>,
) -> CommandResult<Option<Session>> {
    state.gateway.session_load(&conference_id, &session_id).await
}

#[tauri::command]
pub async fn session_save(
    conference_id: String,
    data: Session,
    state: State<'_, AppState>,
) -> CommandResult<bool> {
    state.gateway.session_save(&conference_id, data).await?;
    Ok(true)
}

#[tauri::command]
pub async fn session_delete(
    conference_id: String,
    session_id: String,
    state: State<'_, AppState>,
) -> CommandResult<bool> {
    state.gateway.session_delete(&conference_id, &session_id).await?;
    Ok(true)
}
