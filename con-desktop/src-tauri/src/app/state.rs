use std::sync::Arc;

use con_application::{GatewayDispatcher, MenuNotifier};
use con_core::gateway::ConGateway;
use con_infrastructure::paths::ConPaths;

/// Application state shared across Tauri commands.
pub struct AppState {
    /// Typed gateway behind the one-command-per-operation surface.
    pub gateway: Arc<dyn ConGateway>,
    /// Same gateway, addressed by operation name.
    pub dispatcher: GatewayDispatcher,
    pub menu_notifier: MenuNotifier,
    pub paths: ConPaths,
}
