use std::path::PathBuf;

use con_core::gateway::ConGateway;
use serde_json::Value;
use tauri::State;

use super::CommandResult;
use crate::app::AppState;

/// Reads and parses a JSON file.
#[tauri::command]
pub async fn fs_read_file(path: PathBuf, state: State<'_, AppState>) -> CommandResult<Value> {
    state.gateway.fs_read_file(&path).await
}

/// Writes `data` to `path`, creating parent directories. Strings are written
/// verbatim, anything else as pretty JSON.
#[tauri::command]
pub async fn fs_write_file(
    path: PathBuf,
    data: Value,
    state: State<'_, AppState>,
) -> CommandResult<bool> {
    state.gateway.fs_write_file(&path, data).await?;
    Ok(true)
}

#[tauri::command]
pub async fn fs_read_dir(path: PathBuf, state: State<'_, AppState>) -> CommandResult<Vec<String>> {
    state.gateway.fs_read_dir(&path).await
}

#[tauri::command]
pub async fn fs_exists(path: PathBuf, state: State<'_, AppState>) -> CommandResult<bool> {
    state.gateway.fs_exists(&path).await
}
