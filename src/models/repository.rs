//! Repository models for `/users/{username}/repos` responses.

use serde::{Deserialize, Serialize};

/// A single public repository as listed by the GitHub REST API.
///
/// Missing fields fall back to their defaults so a partially populated
/// listing still deserializes.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Repository {
    /// Repository name without the owner prefix
    pub name: String,

    /// Browser URL of the repository
    #[serde(rename = "html_url")]
    pub url: String,

    /// Repository description (may be null)
    pub description: Option<String>,

    /// Stargazer count
    #[serde(rename = "stargazers_count")]
    pub stars: u32,

    /// Fork count
    #[serde(rename = "forks_count")]
    pub forks: u32,

    /// Primary language as detected by GitHub (may be null)
    pub language: Option<String>,
}

/// Fixture builders for unit tests.
#[cfg(test)]
impl Repository {
    /// Create a repository with the given name and star count.
    pub fn new(name: impl Into<String>, stars: u32) -> Self {
        let name = name.into();
        Self {
            url: format!("https://github.com/{}", name),
            name,
            stars,
            ..Self::default()
        }
    }

    /// Set the primary language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the fork count.
    pub fn with_forks(mut self, forks: u32) -> Self {
        self.forks = forks;
        self
    }
}

/// Select the `count` most starred repositories.
///
/// The sort is stable, so repositories with equal star counts keep the
/// order in which the API returned them.
pub fn top_projects(repos: &[Repository], count: usize) -> Vec<&Repository> {
    let mut sorted: Vec<&Repository> = repos.iter().collect();
    sorted.sort_by(|a, b| b.stars.cmp(&a.stars));
    sorted.truncate(count);
    sorted
}
