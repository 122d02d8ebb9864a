use std::sync::Arc;

use anyhow::{Context, Result};
use con_application::{BackendGateway, GatewayDispatcher, MenuNotifier};
use con_core::config::ConfigStore;
use con_core::gateway::ConGateway;
use con_infrastructure::paths::ConPaths;
use con_infrastructure::{GitCli, JsonConfigService, JsonConferenceRepository, JsonSessionRepository};

use crate::app::AppState;

pub struct AppBootstrap {
    pub app_state: AppState,
}

impl AppBootstrap {
    /// Composition root: wires the file-backed stores and the git adapter
    /// behind a single gateway.
    pub fn build(paths: ConPaths) -> Result<Self> {
        let config_file = paths
            .config_file()
            .context("Failed to resolve config file path")?;
        let config = Arc::new(JsonConfigService::with_path(config_file));
        tracing::info!("[Bootstrap] Settings file: {}", config.path().display());

        match config.repo_root() {
            Some(root) => tracing::info!("[Bootstrap] Website repository: {}", root.display()),
            None => tracing::info!("[Bootstrap] No website repository configured yet"),
        }

        let config_store: Arc<dyn ConfigStore> = config;
        let conferences = Arc::new(JsonConferenceRepository::new(config_store.clone()));
        let sessions = Arc::new(JsonSessionRepository::new(config_store.clone()));
        let git = Arc::new(GitCli::new());

        let gateway: Arc<dyn ConGateway> =
            Arc::new(BackendGateway::new(config_store, conferences, sessions, git));
        let dispatcher = GatewayDispatcher::new(gateway.clone());

        Ok(Self {
            app_state: AppState {
                gateway,
                dispatcher,
                menu_notifier: MenuNotifier::new(),
                paths,
            },
        })
    }
}
