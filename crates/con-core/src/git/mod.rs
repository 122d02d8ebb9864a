//! Version-control domain module.
//!
//! - `model`: working tree status, branch listings and save outcomes
//! - `service`: the narrow git interface used by the save workflow and the gateway

mod model;
pub mod service;

pub use model::{AddTarget, BranchInfo, BranchList, GitStatus, RenamedPath, SaveOutcome};
pub use service::VersionControl;
