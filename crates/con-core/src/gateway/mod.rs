//! The request/response contract between the privileged back end and the UI.
//!
//! - `service`: the typed `ConGateway` trait and the `GatewayTransport` seam
//! - `operation`: the catalogue of named operations
//! - `request`: the string-named wire form of a call
//! - `error`: the single, structured error channel

mod error;
mod operation;
mod request;
mod service;

pub use error::{ErrorKind, GatewayError, GatewayResult};
pub use operation::Operation;
pub use request::GatewayRequest;
pub use service::{ConGateway, GatewayTransport};
