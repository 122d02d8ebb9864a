use con_core::gateway::GatewayRequest;
use serde_json::Value;
use tauri::State;

use super::CommandResult;
use crate::app::AppState;

/// Runs any gateway operation by name:
/// `invoke("gateway_invoke", { request: { operation: "conference-list" } })`.
#[tauri::command]
pub async fn gateway_invoke(request: GatewayRequest, state: State<'_, AppState>) -> CommandResult<Value> {
    state.dispatcher.dispatch(request).await
}
