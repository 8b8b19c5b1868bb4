//! Dashboard view state
//!
//! View-only types describing one full screen of dashboard output, and the
//! render pass that builds them from the data access layer. The `ui` module
//! draws these without touching the network.

use chrono::{DateTime, Local};

use crate::github::GithubApi;
use crate::models::{top_projects, LanguageTally, Repository, UserProfile};

/// Fallback for any missing optional profile field.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Fallback for a repository without a description.
pub const NO_DESCRIPTION: &str = "No description";

/// Message shown while the username field is empty.
pub const PROMPT_MESSAGE: &str = "Please enter a GitHub username to view the dashboard";

/// Timestamp format of the footer.
pub const FOOTER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// DashboardView
// ============================================================================

/// The result of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    /// No username entered
    Prompt,
    /// A pass for `username` is in flight
    Loading { username: String },
    /// The profile could not be fetched; nothing else is shown
    Warning { username: String, message: String },
    /// Full dashboard
    Loaded(Box<ProfileDashboard>),
}

impl DashboardView {
    pub fn is_loaded(&self) -> bool {
        matches!(self, DashboardView::Loaded(_))
    }

    /// The loaded dashboard, if any.
    pub fn dashboard(&self) -> Option<&ProfileDashboard> {
        match self {
            DashboardView::Loaded(dashboard) => Some(&**dashboard),
            _ => None,
        }
    }

    /// Inline warning text, if the pass halted on a profile failure.
    pub fn warning(&self) -> Option<&str> {
        match self {
            DashboardView::Warning { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// A labelled scalar in the statistics row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

/// A labelled profile detail with fallback already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// One project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub name: String,
    pub url: String,
    pub description: String,
    pub stars: u32,
    pub forks: u32,
    pub language: Option<String>,
}

impl From<&Repository> for ProjectCard {
    fn from(repo: &Repository) -> Self {
        Self {
            name: repo.name.clone(),
            url: repo.url.clone(),
            description: present(repo.description.as_deref())
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
            stars: repo.stars,
            forks: repo.forks,
            language: present(repo.language.as_deref()).map(str::to_string),
        }
    }
}

/// One language in the charts.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageSlice {
    pub language: String,
    pub count: u32,
    /// Share of all languaged repositories, 0-100
    pub percent: f64,
}

/// Data shared by the bar and pie charts; both use the same key set.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageCharts {
    pub slices: Vec<LanguageSlice>,
}

impl LanguageCharts {
    /// Build chart data, or `None` when there is nothing to chart.
    pub fn from_tally(tally: &LanguageTally) -> Option<Self> {
        if tally.is_empty() {
            return None;
        }
        let slices = tally
            .iter()
            .map(|(language, count)| LanguageSlice {
                language: language.to_string(),
                count,
                percent: tally.share(language),
            })
            .collect();
        Some(Self { slices })
    }

    /// Largest repository count, for scaling the bar chart.
    pub fn max_count(&self) -> u32 {
        self.slices.iter().map(|s| s.count).max().unwrap_or(0)
    }
}

/// Everything shown for a successfully fetched profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDashboard {
    pub username: String,
    pub title: String,
    pub avatar_url: Option<String>,
    pub profile_url: Option<String>,
    pub bio: Option<String>,
    pub metrics: Vec<Metric>,
    pub details: Vec<DetailField>,
    pub hireable: bool,
    pub projects: Vec<ProjectCard>,
    /// `None` when the tally is empty; neither chart is drawn then
    pub languages: Option<LanguageCharts>,
    pub rendered_at: String,
}

impl ProfileDashboard {
    /// Assemble the dashboard from fetched data.
    pub fn build(
        username: &str,
        profile: &UserProfile,
        repos: &[Repository],
        tally: &LanguageTally,
        top_count: usize,
        now: DateTime<Local>,
    ) -> Self {
        let shown_name = if profile.login.is_empty() && present(profile.name.as_deref()).is_none() {
            username
        } else {
            profile.display_name()
        };

        Self {
            username: username.to_string(),
            title: format!("Welcome to {}'s Dashboard", shown_name),
            avatar_url: present(profile.avatar_url.as_deref()).map(str::to_string),
            profile_url: present(profile.html_url.as_deref()).map(str::to_string),
            bio: present(profile.bio.as_deref()).map(str::to_string),
            metrics: metrics(profile),
            details: details(profile),
            hireable: profile.is_hireable(),
            projects: top_projects(repos, top_count)
                .into_iter()
                .map(ProjectCard::from)
                .collect(),
            languages: LanguageCharts::from_tally(tally),
            rendered_at: now.format(FOOTER_TIME_FORMAT).to_string(),
        }
    }

    /// Look up a metric value by label.
    pub fn metric(&self, label: &str) -> Option<&str> {
        self.metrics
            .iter()
            .find(|m| m.label == label)
            .map(|m| m.value.as_str())
    }

    /// Look up a detail value by label.
    pub fn detail(&self, label: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|d| d.label == label)
            .map(|d| d.value.as_str())
    }
}

fn metrics(profile: &UserProfile) -> Vec<Metric> {
    vec![
        Metric {
            label: "Public Repos",
            value: profile.public_repos.to_string(),
        },
        Metric {
            label: "Followers",
            value: profile.followers.to_string(),
        },
        Metric {
            label: "Following",
            value: profile.following.to_string(),
        },
        Metric {
            label: "Public Gists",
            value: profile.public_gists.to_string(),
        },
        Metric {
            label: "Member Since",
            value: profile
                .member_since()
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
        },
    ]
}

fn details(profile: &UserProfile) -> Vec<DetailField> {
    let field = |label: &'static str, value: Option<&str>| DetailField {
        label,
        value: present(value).unwrap_or(NOT_SPECIFIED).to_string(),
    };

    vec![
        field("Location", profile.location.as_deref()),
        field("Company", profile.company.as_deref()),
        field("Email", profile.email.as_deref()),
        field("Blog", profile.blog.as_deref()),
        field("Twitter", profile.twitter_username.as_deref()),
    ]
}

/// Treat blank strings the same as missing ones.
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// ============================================================================
// Render pass
// ============================================================================

/// Run one render pass for `username`.
///
/// Resolves the profile first and halts on failure; otherwise fetches the
/// repository listing once and counts its languages. Never fails:
/// every data layer failure ends up in the returned view.
pub async fn render_pass(
    api: &mut GithubApi,
    username: &str,
    top_count: usize,
    now: DateTime<Local>,
) -> DashboardView {
    let username = username.trim();
    if username.is_empty() {
        return DashboardView::Prompt;
    }

    let profile = match api.fetch_profile(username).await {
        Ok(profile) => profile,
        Err(err) => {
            tracing::warn!(username, kind = %err.kind(), error = %err, "profile unavailable");
            return DashboardView::Warning {
                username: username.to_string(),
                message: err.user_message(),
            };
        }
    };

    // One listing per pass: projects and charts are both built from it
    let repos = api.fetch_repositories(username).await;
    let tally = LanguageTally::from_repositories(&repos);

    DashboardView::Loaded(Box::new(ProfileDashboard::build(
        username, &profile, &repos, &tally, top_count, now,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 17, 9, 30, 15).unwrap()
    }

    fn sample_profile() -> UserProfile {
        UserProfile {
            login: "octocat".to_string(),
            name: Some("The Octocat".to_string()),
            location: Some("San Francisco".to_string()),
            blog: Some(String::new()),
            public_repos: 8,
            followers: 100,
            following: 9,
            public_gists: 2,
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_build_fills_metrics_in_order() {
        let dashboard = ProfileDashboard::build(
            "octocat",
            &sample_profile(),
            &[],
            &LanguageTally::new(),
            6,
            fixed_now(),
        );

        let labels: Vec<&str> = dashboard.metrics.iter().map(|m| m.label).collect();
        assert_eq!(
            labels,
            vec!["Public Repos", "Followers", "Following", "Public Gists", "Member Since"]
        );
        assert_eq!(dashboard.metric("Public Repos"), Some("8"));
        assert_eq!(dashboard.metric("Followers"), Some("100"));
        assert_eq!(dashboard.metric("Member Since"), Some(NOT_SPECIFIED));
    }

    #[test]
    fn test_missing_details_use_fallback() {
        let dashboard = ProfileDashboard::build(
            "octocat",
            &sample_profile(),
            &[],
            &LanguageTally::new(),
            6,
            fixed_now(),
        );

        assert_eq!(dashboard.detail("Location"), Some("San Francisco"));
        assert_eq!(dashboard.detail("Company"), Some(NOT_SPECIFIED));
        assert_eq!(dashboard.detail("Email"), Some(NOT_SPECIFIED));
        // Empty blog string counts as missing
        assert_eq!(dashboard.detail("Blog"), Some(NOT_SPECIFIED));
        assert_eq!(dashboard.detail("Twitter"), Some(NOT_SPECIFIED));
    }

    #[test]
    fn test_title_and_footer() {
        let dashboard = ProfileDashboard::build(
            "octocat",
            &sample_profile(),
            &[],
            &LanguageTally::new(),
            6,
            fixed_now(),
        );
        assert_eq!(dashboard.title, "Welcome to The Octocat's Dashboard");
        assert_eq!(dashboard.rendered_at, "2024-05-17 09:30:15");
    }

    #[test]
    fn test_title_falls_back_to_typed_username() {
        let dashboard = ProfileDashboard::build(
            "typed",
            &UserProfile::default(),
            &[],
            &LanguageTally::new(),
            6,
            fixed_now(),
        );
        assert_eq!(dashboard.title, "Welcome to typed's Dashboard");
    }

    #[test]
    fn test_project_cards_are_sorted_and_capped() {
        let repos: Vec<Repository> = (0..8)
            .map(|i| Repository::new(format!("r{}", i), i))
            .collect();
        let dashboard = ProfileDashboard::build(
            "octocat",
            &sample_profile(),
            &repos,
            &LanguageTally::new(),
            6,
            fixed_now(),
        );

        let names: Vec<&str> = dashboard.projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["r7", "r6", "r5", "r4", "r3", "r2"]);
        assert!(dashboard.projects.iter().all(|p| p.description == NO_DESCRIPTION));
    }

    #[test]
    fn test_project_card_keeps_description_and_language() {
        let repo = Repository::new("ghdash", 3)
            .with_description("Terminal dashboard")
            .with_language("Rust")
            .with_forks(2);
        let card = ProjectCard::from(&repo);
        assert_eq!(card.description, "Terminal dashboard");
        assert_eq!(card.language.as_deref(), Some("Rust"));
        assert_eq!(card.forks, 2);
    }

    #[test]
    fn test_language_charts_absent_for_empty_tally() {
        assert!(LanguageCharts::from_tally(&LanguageTally::new()).is_none());
    }

    #[test]
    fn test_language_charts_share_key_set() {
        let repos = vec![
            Repository::new("a", 0).with_language("Rust"),
            Repository::new("b", 0).with_language("Rust"),
            Repository::new("c", 0).with_language("Go"),
            Repository::new("d", 0).with_language("Python"),
        ];
        let charts = LanguageCharts::from_tally(&LanguageTally::from_repositories(&repos)).unwrap();

        let languages: Vec<&str> = charts.slices.iter().map(|s| s.language.as_str()).collect();
        assert_eq!(languages, vec!["Rust", "Go", "Python"]);
        assert_eq!(charts.max_count(), 2);
        let total: f64 = charts.slices.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_view_accessors() {
        let warning = DashboardView::Warning {
            username: "x".to_string(),
            message: "User 'x' not found".to_string(),
        };
        assert_eq!(warning.warning(), Some("User 'x' not found"));
        assert!(warning.dashboard().is_none());
        assert!(!DashboardView::Prompt.is_loaded());
    }
}
