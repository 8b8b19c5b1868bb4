//! Dashboard configuration.
//!
//! Every value has a built-in default; nothing is read from or written to
//! disk. Two developer overrides are honored by [`DashboardConfig::from_env`].

use std::path::PathBuf;
use std::time::Duration;

/// Username shown in the input field on startup.
pub const DEFAULT_USERNAME: &str = "aldennabil";

/// Public GitHub REST API base.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Environment variable overriding the API base (e.g. a local mock server).
pub const API_BASE_ENV: &str = "GHDASH_API_BASE";

/// Environment variable overriding the log file location.
pub const LOG_FILE_ENV: &str = "GHDASH_LOG_FILE";

/// Configuration for the dashboard.
///
/// Use the builder methods to customize.
///
/// # Example
///
/// ```
/// use ghdash::config::DashboardConfig;
///
/// let config = DashboardConfig::default()
///     .with_default_username("octocat")
///     .with_cache_capacity(16);
/// assert_eq!(config.default_username, "octocat");
/// ```
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Initial value of the username field
    pub default_username: String,
    /// REST API base URL, without trailing slash
    pub api_base: String,
    /// Page size of the repository listing (one page only)
    pub repos_per_page: u32,
    /// Number of project cards shown
    pub top_project_count: usize,
    /// Maximum usernames kept per cache
    pub cache_capacity: usize,
    /// Age after which cached reads are refetched
    pub cache_ttl: Option<Duration>,
    /// Timeout of a single HTTP request
    pub request_timeout: Duration,
    /// Log file; `None` disables logging
    pub log_file: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_username: DEFAULT_USERNAME.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            repos_per_page: 100,
            top_project_count: 6,
            cache_capacity: 128,
            cache_ttl: Some(Duration::from_secs(10 * 60)),
            request_timeout: Duration::from_secs(30),
            log_file: default_log_file(),
        }
    }
}

impl DashboardConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial username.
    pub fn with_default_username(mut self, username: impl Into<String>) -> Self {
        self.default_username = username.into();
        self
    }

    /// Set the API base URL. A trailing slash is dropped.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the number of project cards.
    pub fn with_top_project_count(mut self, count: usize) -> Self {
        self.top_project_count = count;
        self
    }

    /// Set the cache capacity.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Set the cache TTL (`None` keeps entries until evicted by capacity).
    pub fn with_cache_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Set the HTTP request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the log file location.
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Create config with overrides from `GHDASH_API_BASE` and
    /// `GHDASH_LOG_FILE`. Empty values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(api_base) = non_empty_env(API_BASE_ENV) {
            config = config.with_api_base(api_base);
        }
        if let Some(log_file) = non_empty_env(LOG_FILE_ENV) {
            config = config.with_log_file(Some(PathBuf::from(log_file)));
        }

        config
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// `<cache dir>/ghdash/ghdash.log`, when the platform has a cache dir.
fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("ghdash").join("ghdash.log"))
}
