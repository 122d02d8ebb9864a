use con_core::gateway::ConGateway;
use serde_json::{Map, Value};
use tauri::State;

use super::CommandResult;
use crate::app::AppState;

#[tauri::command]
pub async fn config_get(key: String, state: State<'_, AppState>) -> CommandResult<Option<Value>> {
    state.gateway.config_get(&key).await
}

/// Persists one setting. Setting `websiteRepoPath` switches the app out of
/// the welcome state without a restart.
#[tauri::command]
pub async fn config_set(key: String, value: Value, state: State<'_, AppState>) -> CommandResult<bool> {
    state.gateway.config_set(&key, value).await?;
    Ok(true)
}

#[tauri::command]
pub async fn config_get_all(state: State<'_, AppState>) -> CommandResult<Map<String, Value>> {
    state.gateway.config_get_all().await
}
