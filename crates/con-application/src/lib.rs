//! Application layer for Con Desktop.
//!
//! Use cases that coordinate the repositories, the settings store and the git
//! adapter, plus the gateway plumbing that exposes them to the UI.

pub mod backend_gateway;
pub mod dispatcher;
pub mod gateway_client;
pub mod menu_notifier;
pub mod save_workflow;
pub mod validation_service;

pub use backend_gateway::BackendGateway;
pub use dispatcher::GatewayDispatcher;
pub use gateway_client::GatewayClient;
pub use menu_notifier::MenuNotifier;
pub use save_workflow::SaveWorkflow;
pub use validation_service::DataValidationService;

#[cfg(test)]
mod testing;
