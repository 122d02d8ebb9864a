//! File-system and process adapters for Con Desktop.

pub mod config_service;
pub mod file_access;
pub mod git;
pub mod json_conference_repository;
pub mod json_session_repository;
pub mod paths;
pub mod storage;

pub use crate::config_service::JsonConfigService;
pub use crate::file_access::LocalFileAccess;
pub use crate::git::GitCli;
pub use crate::json_conference_repository::JsonConferenceRepository;
pub use crate::json_session_repository::JsonSessionRepository;
