//! Conference domain module.
//!
//! - `model`: the `Conference` record and its collection document
//! - `repository`: persistence trait for the conference collection

mod model;
pub mod repository;

pub use model::{Conference, ConferenceDocument};
pub use repository::ConferenceRepository;
