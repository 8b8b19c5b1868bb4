//! Errors produced while reading from the GitHub REST API.

use thiserror::Error;

use super::category::FailureKind;
use crate::traits::HttpError;

/// A failed read against the remote API.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The API answered 404 for the requested user.
    #[error("user '{username}' not found")]
    NotFound { username: String },

    /// The request never produced a response.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: HttpError,
    },

    /// The API answered with a non-success status other than 404.
    #[error("GitHub API returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// The response body did not match the expected shape.
    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl FetchError {
    /// Classify this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::NotFound { .. } => FailureKind::NotFound,
            FetchError::Transport { .. }
            | FetchError::Status { .. }
            | FetchError::Decode { .. } => FailureKind::Transient,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == FailureKind::NotFound
    }

    /// Inline message shown when a profile fetch fails.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::NotFound { username } => format!("User '{}' not found", username),
            other => format!("Error fetching user data: {}", other),
        }
    }
}
