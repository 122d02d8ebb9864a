//! Git adapter.
//!
//! - `cli`: `VersionControl` over the git executable
//! - `porcelain`: parsers for git's machine-readable status and ref output

mod cli;
pub mod porcelain;

pub use cli::GitCli;
