//! Path management for settings, logs and the website repository layout.

use std::path::{Path, PathBuf};

use con_core::validation::is_usable_conference_id;
use con_core::{ConError, Result};

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find the user config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for ConError {
    fn from(err: PathError) -> Self {
        ConError::io(err.to_string())
    }
}

/// Per-user application paths.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/con-desktop/       # Config directory (platform default)
/// ├── config.json              # Persistent settings
/// └── logs/                    # Application logs
///     └── con-desktop.log.YYYY-MM-DD
/// ```
#[derive(Debug, Clone)]
pub struct ConPaths {
    base_dir: Option<PathBuf>,
}

impl ConPaths {
    const APP_DIR: &'static str = "con-desktop";

    /// Creates path management rooted at `base_dir`, or at the platform config
    /// directory when `None`. Tests pass a temporary directory.
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            base_dir: base_dir.map(Path::to_path_buf),
        }
    }

    /// Returns the application config directory.
    pub fn config_dir(&self) -> std::result::Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(Self::APP_DIR))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    /// Returns the path to the settings file.
    pub fn config_file(&self) -> std::result::Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.json"))
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir(&self) -> std::result::Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("logs"))
    }
}

/// Fixed layout of the collection files inside a website repository.
///
/// ```text
/// <root>/data/
/// ├── conferences.json
/// └── sessions/
///     └── <conferenceId>-sessions.json
/// ```
#[derive(Debug, Clone)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join("data")
    }

    pub fn conferences_file(&self) -> PathBuf {
        self.data_dir().join("conferences.json")
    }

    pub fn sessions_dir(&self) -> PathBuf {
        self.data_dir().join("sessions")
    }

    /// Session file of a conference.
    ///
    /// Rejects ids that would resolve outside the sessions directory.
    pub fn sessions_file(&self, conference_id: &str) -> Result<PathBuf> {
        if !is_usable_conference_id(conference_id) {
            return Err(ConError::validation(
                "conferenceId",
                format!("'{}' is not a usable conference id", conference_id),
            ));
        }
        Ok(self
            .sessions_dir()
            .join(format!("{}-sessions.json", conference_id)))
    }
}
