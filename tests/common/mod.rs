//! Common test utilities for integration tests.
//!
//! Fixtures for the mock GitHub API and helpers for reading a rendered
//! `TestBackend` buffer.

#![allow(dead_code)]

use std::sync::Arc;

use ghdash::adapters::mock::{MockHttpClient, MockResponse};
use ghdash::app::App;
use ghdash::config::DashboardConfig;
use ghdash::github::GithubApi;
use ratatui::{backend::TestBackend, Terminal};

/// API base served by [`MockHttpClient`] in tests.
pub const BASE: &str = "https://api.test";

/// Profile of the scenario user: 8 repos, 100 followers, no company.
pub const OCTOCAT_PROFILE: &str = r#"{
    "login": "octocat",
    "name": "The Octocat",
    "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
    "html_url": "https://github.com/octocat",
    "bio": null,
    "location": "San Francisco",
    "company": null,
    "email": null,
    "blog": "https://github.blog",
    "twitter_username": null,
    "hireable": null,
    "public_repos": 8,
    "public_gists": 8,
    "followers": 100,
    "following": 9,
    "created_at": "2011-01-25T18:44:36Z"
}"#;

/// Repository listing with stars 5, 5, 3 (in that order) and mixed languages.
pub const ABC_REPOS: &str = r#"[
    {"name": "A", "html_url": "https://github.com/octocat/A", "description": "first",
     "stargazers_count": 5, "forks_count": 1, "language": "Rust"},
    {"name": "B", "html_url": "https://github.com/octocat/B", "description": null,
     "stargazers_count": 5, "forks_count": 0, "language": "Go"},
    {"name": "C", "html_url": "https://github.com/octocat/C", "description": "",
     "stargazers_count": 3, "forks_count": 2, "language": null},
    {"name": "D", "html_url": "https://github.com/octocat/D", "description": "fourth",
     "stargazers_count": 0, "forks_count": 0, "language": "Rust"}
]"#;

/// Config pointing at [`BASE`] with logging disabled.
pub fn test_config() -> DashboardConfig {
    DashboardConfig::new()
        .with_api_base(BASE)
        .with_log_file(None)
}

pub fn profile_url(username: &str) -> String {
    format!("{}/users/{}", BASE, username)
}

pub fn repos_url(username: &str) -> String {
    format!("{}/users/{}/repos?sort=updated&per_page=100", BASE, username)
}

/// Register a user's profile and repository listing on `mock`.
pub fn mock_user(mock: &MockHttpClient, username: &str, profile: &str, repos: &str) {
    mock.set_response(&profile_url(username), MockResponse::json(profile));
    mock.set_response(&repos_url(username), MockResponse::json(repos));
}

/// A data access layer backed by `mock`.
pub fn api_with(mock: &MockHttpClient) -> GithubApi {
    GithubApi::new(Arc::new(mock.clone()), &test_config())
}

/// An app backed by `mock` whose username field holds `username`.
pub fn app_with(mock: &MockHttpClient, username: &str) -> App {
    App::new(
        Arc::new(mock.clone()),
        test_config().with_default_username(username),
    )
}

/// Every row of the rendered buffer as a string.
pub fn buffer_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Whether any row of the rendered buffer contains `needle`.
pub fn buffer_contains(terminal: &Terminal<TestBackend>, needle: &str) -> bool {
    buffer_lines(terminal).iter().any(|line| line.contains(needle))
}
