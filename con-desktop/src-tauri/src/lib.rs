mod app;
mod commands;
mod menu;

use con_infrastructure::paths::ConPaths;
use tauri::{AppHandle, Emitter, Manager};
use tokio::sync::broadcast::error::RecvError;

use crate::app::{AppBootstrap, AppState, init_logging};

/// Relays menu commands from the notifier to the webview as payload-less events.
fn spawn_menu_bridge(app: AppHandle) {
    let mut commands = app.state::<AppState>().menu_notifier.subscribe();
    tauri::async_runtime::spawn(async move {
        loop {
            match commands.recv().await {
                Ok(command) => {
                    if let Err(e) = app.emit(command.event_name(), ()) {
                        tracing::warn!("[Menu] Failed to emit {}: {}", command.event_name(), e);
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("[Menu] Bridge lagged, {} command(s) dropped", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    });
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let paths = ConPaths::new(None);
    let _log_guard = match init_logging(&paths) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("[Logging] {:#}", e);
            None
        }
    };

    let bootstrap = match AppBootstrap::build(paths) {
        Ok(bootstrap) => bootstrap,
        Err(e) => {
            tracing::error!("[Bootstrap] {:#}", e);
            std::process::exit(1);
        }
    };

    let result = tauri::Builder::default()
        .manage(bootstrap.app_state)
        .menu(menu::build_menu)
        .on_menu_event(|app, event| menu::handle_menu_event(app, event.id().as_ref()))
        .setup(|app| {
            spawn_menu_bridge(app.handle().clone());
            tracing::info!("[Startup] Con Desktop ready");
            Ok(())
        })
        .invoke_handler(commands::handlers())
        .run(tauri::generate_context!());

    if let Err(e) = result {
        tracing::error!("[Startup] Error while running tauri application: {}", e);
        std::process::exit(1);
    }
}
