//! User profile model for `/users/{username}` responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public account metadata of a GitHub user.
///
/// Optional fields stay `None` here; fallback text is substituted only when
/// the dashboard view is built.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserProfile {
    pub login: String,
    /// Display name
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    /// Browser URL of the profile page
    pub html_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    /// Website; GitHub reports an unset blog as an empty string
    pub blog: Option<String>,
    pub twitter_username: Option<String>,
    pub hireable: Option<bool>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub public_gists: u32,
    pub created_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Name shown in the dashboard header.
    ///
    /// Falls back to the login when the display name is missing or blank.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.login)
    }

    /// Account creation date as `YYYY-MM-DD`.
    pub fn member_since(&self) -> Option<String> {
        self.created_at
            .map(|created| created.format("%Y-%m-%d").to_string())
    }

    /// Whether the user flagged themselves as available for hire.
    pub fn is_hireable(&self) -> bool {
        self.hireable.unwrap_or(false)
    }
}
