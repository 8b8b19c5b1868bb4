//! Data model for the GitHub entities the dashboard reads.
//!
//! Everything here is a read-only projection of remote state; nothing is
//! written back or persisted.

mod languages;
mod profile;
mod repository;

pub use languages::LanguageTally;
pub use profile::UserProfile;
pub use repository::{top_projects, Repository};
