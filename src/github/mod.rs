//! Data access layer for the GitHub REST API.
//!
//! [`GithubApi`] performs the three reads the dashboard needs and memoizes
//! successful responses per username in bounded caches it owns, one per
//! endpoint. The language tally is folded from the listing, so it always
//! matches the repositories it was counted from. Only the profile read
//! reports failures to the caller; the repository listing and the language
//! tally degrade to empty collections.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::cache::FetchCache;
use crate::config::DashboardConfig;
use crate::error::{FetchError, FetchResult};
use crate::models::{LanguageTally, Repository, UserProfile};
use crate::traits::{Headers, HttpClient};

/// Media type requested from the API.
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Client for the user and repository endpoints.
pub struct GithubApi {
    client: Arc<dyn HttpClient>,
    api_base: String,
    per_page: u32,
    profiles: FetchCache<UserProfile>,
    repositories: FetchCache<Vec<Repository>>,
}

impl GithubApi {
    /// Create an API client with caches sized from the config.
    pub fn new(client: Arc<dyn HttpClient>, config: &DashboardConfig) -> Self {
        Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            per_page: config.repos_per_page,
            profiles: FetchCache::new(config.cache_capacity, config.cache_ttl),
            repositories: FetchCache::new(config.cache_capacity, config.cache_ttl),
        }
    }

    /// URL of the profile endpoint for `username`.
    pub fn profile_url(&self, username: &str) -> String {
        format!("{}/users/{}", self.api_base, urlencoding::encode(username))
    }

    /// URL of the repository listing for `username` (one page, most
    /// recently updated first).
    pub fn repos_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.api_base,
            urlencoding::encode(username),
            self.per_page
        )
    }

    /// Fetch a user's public profile.
    ///
    /// # Errors
    ///
    /// [`FetchError::NotFound`] when the API answers 404; any other failure
    /// is transient.
    pub async fn fetch_profile(&mut self, username: &str) -> FetchResult<UserProfile> {
        if let Some(profile) = self.profiles.get(username) {
            debug!(username, "profile cache hit");
            return Ok(profile);
        }

        let url = self.profile_url(username);
        let profile: UserProfile = self.get_json(&url, username).await?;
        info!(username, public_repos = profile.public_repos, "profile fetched");

        self.profiles.insert(username, profile.clone());
        Ok(profile)
    }

    /// Fetch a user's repositories, surfacing the failure.
    pub async fn try_fetch_repositories(&mut self, username: &str) -> FetchResult<Vec<Repository>> {
        if let Some(repos) = self.repositories.get(username) {
            debug!(username, "repository cache hit");
            return Ok(repos);
        }

        let url = self.repos_url(username);
        let repos: Vec<Repository> = self.get_json(&url, username).await?;
        info!(username, count = repos.len(), "repositories fetched");

        self.repositories.insert(username, repos.clone());
        Ok(repos)
    }

    /// Fetch a user's repositories.
    ///
    /// Any failure yields an empty listing, indistinguishable from a user
    /// with no public repositories.
    pub async fn fetch_repositories(&mut self, username: &str) -> Vec<Repository> {
        match self.try_fetch_repositories(username).await {
            Ok(repos) => repos,
            Err(err) => {
                warn!(username, kind = %err.kind(), error = %err, "repository fetch failed, showing none");
                Vec::new()
            }
        }
    }

    /// Count repositories per primary language.
    ///
    /// Folded from the (cached) repository listing; empty when the listing
    /// cannot be fetched. A render pass that already holds the listing
    /// folds it directly instead, so one pass never requests it twice.
    pub async fn compute_language_tally(&mut self, username: &str) -> LanguageTally {
        let repos = self.fetch_repositories(username).await;
        LanguageTally::from_repositories(&repos)
    }

    /// Drop every cached read.
    pub fn clear_cache(&mut self) {
        self.profiles.clear();
        self.repositories.clear();
    }

    /// Whether a profile for `username` is currently cached.
    pub fn has_cached_profile(&self, username: &str) -> bool {
        self.profiles.contains(username)
    }

    fn request_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert(
            "User-Agent".to_string(),
            format!("ghdash/{}", env!("CARGO_PKG_VERSION")),
        );
        headers.insert("Accept".to_string(), GITHUB_ACCEPT.to_string());
        headers
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, username: &str) -> FetchResult<T> {
        let response = self
            .client
            .get(url, &Self::request_headers())
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        if response.status == 404 {
            return Err(FetchError::NotFound {
                username: username.to_string(),
            });
        }
        if !response.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }

        response.json().map_err(|e| FetchError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

impl std::fmt::Debug for GithubApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubApi")
            .field("api_base", &self.api_base)
            .field("per_page", &self.per_page)
            .field("cached_profiles", &self.profiles.len())
            .finish()
    }
}
