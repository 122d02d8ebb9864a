use con_core::ConError;
use tauri::State;

use super::CommandResult;
use crate::app::AppState;

#[tauri::command]
pub fn get_config_path(state: State<'_, AppState>) -> CommandResult<String> {
    let path = state
        .paths
        .config_file()
        .map_err(ConError::from)?;
    Ok(path.to_string_lossy().into_owned())
}

#[tauri::command]
pub fn get_logs_directory(state: State<'_, AppState>) -> CommandResult<String> {
    let path = state
        .paths
        .logs_dir()
        .map_err(ConError::from)?;
    Ok(path.to_string_lossy().into_owned())
}
