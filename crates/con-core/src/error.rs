//! Error types for Con Desktop.

use thiserror::Error;

/// A violated precondition that the caller must resolve before retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreconditionFailure {
    /// The working tree has uncommitted changes.
    #[error("Cannot switch branches with uncommitted changes. Please save your changes first.")]
    UncommittedChanges,

    /// A branch with the requested name already exists.
    #[error("Branch '{0}' already exists")]
    BranchExists(String),
}

/// A shared error type for the whole back end.
///
/// Variants follow the error taxonomy of the data store and the git adapter,
/// so callers can branch on the kind instead of matching message text.
#[derive(Error, Debug, Clone)]
pub enum ConError {
    /// The website repository root has not been configured yet.
    #[error("Website repository not configured")]
    NotConfigured,

    /// Entity not found error with type information
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    /// A collection file exists but is not valid JSON of the expected shape.
    #[error("Corrupt data file {path}: {message}")]
    Corrupt { path: String, message: String },

    /// A precondition for the operation does not hold.
    #[error("{0}")]
    Precondition(PreconditionFailure),

    /// An external process (git) or network operation failed.
    #[error("{operation} failed: {message}")]
    External { operation: String, message: String },

    /// Caller supplied input that breaks a field rule.
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ConError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Creates a Corrupt error for the file at `path`.
    pub fn corrupt(path: impl AsRef<std::path::Path>, message: impl ToString) -> Self {
        Self::Corrupt {
            path: path.as_ref().display().to_string(),
            message: message.to_string(),
        }
    }

    /// Creates an External error for a failed subprocess or network operation.
    pub fn external(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::External {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }
}

impl From<PreconditionFailure> for ConError {
    fn from(failure: PreconditionFailure) -> Self {
        Self::Precondition(failure)
    }
}

impl From<std::io::Error> for ConError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ConError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Conversion from anyhow::Error, used at the composition root.
impl From<anyhow::Error> for ConError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, ConError>`.
pub type Result<T> = std::result::Result<T, ConError>;
