//! Error handling for the dashboard.
//!
//! - [`FetchError`]: failures of a single GitHub read, recovered at the call
//!   site that produced them
//! - [`FailureKind`]: not-found versus transient classification
//!
//! Terminal and IO failures in the binary use `color_eyre::Result`.

mod category;
mod fetch;

pub use category::FailureKind;
pub use fetch::FetchError;

/// Result alias for data access operations.
pub type FetchResult<T> = Result<T, FetchError>;
