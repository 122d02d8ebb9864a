//! Session domain module.
//!
//! Sessions are scoped under a parent conference and stored one collection
//! file per conference.

mod model;
pub mod repository;

pub use model::{Session, SessionDocument, Timestamp};
pub use repository::SessionRepository;
