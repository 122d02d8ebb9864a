mod bootstrap;
mod logging;
mod state;

pub use bootstrap::AppBootstrap;
pub use logging::init_logging;
pub use state::AppState;
