//! The error value every gateway call fails with.

use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

use crate::error::ConError;

/// Coarse error category carried across the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum ErrorKind {
    NotConfigured,
    NotFound,
    Corrupt,
    Precondition,
    External,
    Validation,
    Io,
    Internal,
}

/// A failed gateway call: a kind to branch on plus a human-readable message.
///
/// Serialized as `{"kind": "...", "message": "..."}`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct GatewayError {
    pub kind: ErrorKind,
    pub message: String,
}

impl GatewayError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl From<ConError> for GatewayError {
    fn from(err: ConError) -> Self {
        let kind = match &err {
            ConError::NotConfigured => ErrorKind::NotConfigured,
            ConError::NotFound { .. } => ErrorKind::NotFound,
            ConError::Corrupt { .. } => ErrorKind::Corrupt,
            ConError::Precondition(_) => ErrorKind::Precondition,
            ConError::External { .. } => ErrorKind::External,
            ConError::Validation { .. } => ErrorKind::Validation,
            ConError::Io { .. } => ErrorKind::Io,
            ConError::Internal(_) => ErrorKind::Internal,
        };
        Self::new(kind, err.to_string())
    }
}

/// A request payload that does not decode is the caller's mistake.
impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(
            ErrorKind::Validation,
            format!("Malformed gateway payload: {}", err),
        )
    }
}

pub type GatewayResult<T> = std::result::Result<T, GatewayError>;
