//! Domain layer for Con Desktop.
//!
//! Records, the error taxonomy, persistence and version-control traits, and
//! the gateway contract shared by the back end and its clients.

pub mod conference;
pub mod config;
pub mod error;
pub mod gateway;
pub mod git;
pub mod lenient;
pub mod menu;
pub mod record;
pub mod session;
pub mod slug;
pub mod validation;
pub mod youtube;

// Re-export common error type
pub use error::{ConError, PreconditionFailure, Result};
