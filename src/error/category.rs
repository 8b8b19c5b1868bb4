//! Failure classification for the data access layer.

use std::fmt;

/// High-level categorization of a failed fetch.
///
/// The dashboard reacts to both kinds the same way at the profile call site
/// (inline warning, pass halts); the split exists for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The remote reported that the user does not exist.
    NotFound,

    /// Network, status, or decoding failure.
    Transient,
}

impl FailureKind {
    /// Returns a short label for the kind suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::NotFound => "not_found",
            FailureKind::Transient => "transient",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
