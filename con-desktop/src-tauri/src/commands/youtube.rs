use con_core::gateway::ConGateway;
use con_core::youtube::VideoInfo;
use tauri::State;

use super::CommandResult;
use crate::app::AppState;

#[tauri::command]
pub async fn youtube_validate_url(url: String, state: State<'_, AppState>) -> CommandResult<bool> {
    state.gateway.youtube_validate_url(&url).await
}

/// Placeholder metadata for a valid link; no network lookup.
#[tauri::command]
pub async fn youtube_extract_info(
    url: String,
    state: State<'_, AppState>,
) -> CommandResult<VideoInfo> {
    state.gateway.youtube_extract_info(&url).await
}
