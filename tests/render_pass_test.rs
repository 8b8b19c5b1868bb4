// Scenario tests for one render pass: what the dashboard shows for a given
// username and API state.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Local, TimeZone};
use common::*;
use ghdash::adapters::mock::{MockHttpClient, MockResponse};
use ghdash::github::GithubApi;
use ghdash::traits::{Headers, HttpClient, HttpError, Response};
use ghdash::view_state::{render_pass, DashboardView, NOT_SPECIFIED, NO_DESCRIPTION};

fn now() -> chrono::DateTime<Local> {
    Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
}

#[tokio::test]
async fn test_blank_username_prompts_without_requests() {
    let mock = MockHttpClient::new();
    let mut api = api_with(&mock);

    for username in ["", "   "] {
        let view = render_pass(&mut api, username, 6, now()).await;
        assert_eq!(view, DashboardView::Prompt);
    }
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_not_found_is_exactly_the_warning() {
    let mock = MockHttpClient::new();
    mock.set_response(&profile_url("ghost"), MockResponse::status(404));
    let mut api = api_with(&mock);

    let view = render_pass(&mut api, "ghost", 6, now()).await;
    assert_eq!(
        view,
        DashboardView::Warning {
            username: "ghost".to_string(),
            message: "User 'ghost' not found".to_string(),
        }
    );
    // The pass halts: no repository request
    assert_eq!(mock.request_count_for(&repos_url("ghost")), 0);
}

#[tokio::test]
async fn test_transport_failure_is_warning() {
    let mock = MockHttpClient::new();
    mock.set_response(
        &profile_url("octocat"),
        MockResponse::Error(HttpError::Timeout("30s".to_string())),
    );
    let mut api = api_with(&mock);

    let view = render_pass(&mut api, "octocat", 6, now()).await;
    let message = view.warning().expect("warning state");
    assert!(message.starts_with("Error fetching user data: "));
}

#[tokio::test]
async fn test_octocat_scenario_with_no_repositories() {
    let mock = MockHttpClient::new();
    mock_user(&mock, "octocat", OCTOCAT_PROFILE, "[]");
    let mut api = api_with(&mock);

    let view = render_pass(&mut api, "octocat", 6, now()).await;
    let dashboard = view.dashboard().expect("loaded dashboard");

    assert_eq!(dashboard.metric("Public Repos"), Some("8"));
    assert_eq!(dashboard.metric("Followers"), Some("100"));
    assert_eq!(dashboard.metric("Member Since"), Some("2011-01-25"));
    assert!(dashboard.projects.is_empty());
    assert!(dashboard.languages.is_none());
    assert_eq!(dashboard.rendered_at, "2024-01-02 03:04:05");
}

#[tokio::test]
async fn test_missing_company_shows_fallback() {
    let mock = MockHttpClient::new();
    mock_user(&mock, "octocat", OCTOCAT_PROFILE, "[]");
    let mut api = api_with(&mock);

    let view = render_pass(&mut api, "octocat", 6, now()).await;
    let dashboard = view.dashboard().unwrap();

    assert_eq!(dashboard.detail("Company"), Some(NOT_SPECIFIED));
    assert_eq!(dashboard.detail("Location"), Some("San Francisco"));
    assert_eq!(dashboard.detail("Blog"), Some("https://github.blog"));
    assert!(!dashboard.hireable);
}

#[tokio::test]
async fn test_top_projects_are_stable_by_stars() {
    let mock = MockHttpClient::new();
    mock_user(&mock, "octocat", OCTOCAT_PROFILE, ABC_REPOS);
    let mut api = api_with(&mock);

    let view = render_pass(&mut api, "octocat", 3, now()).await;
    let dashboard = view.dashboard().unwrap();

    let names: Vec<&str> = dashboard.projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(dashboard.projects[1].description, NO_DESCRIPTION);
    assert_eq!(dashboard.projects[2].description, NO_DESCRIPTION);
    assert_eq!(dashboard.projects[2].language, None);
}

#[tokio::test]
async fn test_bar_and_pie_share_languages() {
    let mock = MockHttpClient::new();
    mock_user(&mock, "octocat", OCTOCAT_PROFILE, ABC_REPOS);
    let mut api = api_with(&mock);

    let view = render_pass(&mut api, "octocat", 6, now()).await;
    let charts = view.dashboard().unwrap().languages.as_ref().unwrap();

    let languages: Vec<&str> = charts.slices.iter().map(|s| s.language.as_str()).collect();
    assert_eq!(languages, vec!["Rust", "Go"]);
    assert_eq!(charts.slices[0].count, 2);
    assert!((charts.slices[0].percent - 200.0 / 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_repository_failure_degrades_silently() {
    let mock = MockHttpClient::new();
    mock.set_response(&profile_url("octocat"), MockResponse::json(OCTOCAT_PROFILE));
    mock.set_response(&repos_url("octocat"), MockResponse::status(500));
    let mut api = api_with(&mock);

    let view = render_pass(&mut api, "octocat", 6, now()).await;
    let dashboard = view.dashboard().expect("profile still shown");
    assert!(dashboard.projects.is_empty());
    assert!(dashboard.languages.is_none());
    assert!(view.warning().is_none());
    // No second attempt at the listing within the pass
    assert_eq!(mock.request_count_for(&repos_url("octocat")), 1);
}

/// Serves the profile, and fails the first repository listing with a
/// timeout before succeeding.
struct FlakyListing {
    listing_calls: AtomicUsize,
}

#[async_trait]
impl HttpClient for FlakyListing {
    async fn get(&self, url: &str, _headers: &Headers) -> Result<Response, HttpError> {
        if url == profile_url("octocat") {
            return Ok(Response::json_body(OCTOCAT_PROFILE));
        }
        if self.listing_calls.fetch_add(1, Ordering::SeqCst) == 0 {
            return Err(HttpError::Timeout("30s".to_string()));
        }
        Ok(Response::json_body(r#"[{"name":"a","language":"Rust"}]"#))
    }
}

#[tokio::test]
async fn test_projects_and_charts_come_from_one_listing() {
    let client = Arc::new(FlakyListing {
        listing_calls: AtomicUsize::new(0),
    });
    let mut api = GithubApi::new(client.clone(), &test_config());

    let view = render_pass(&mut api, "octocat", 6, now()).await;
    let dashboard = view.dashboard().unwrap();
    assert!(dashboard.projects.is_empty());
    assert!(dashboard.languages.is_none());
    assert_eq!(client.listing_calls.load(Ordering::SeqCst), 1);

    // The failure is not cached: the next pass sees the recovered listing
    let view = render_pass(&mut api, "octocat", 6, now()).await;
    let dashboard = view.dashboard().unwrap();
    assert_eq!(dashboard.projects.len(), 1);
    assert_eq!(dashboard.languages.as_ref().map(|c| c.slices.len()), Some(1));
}

#[tokio::test]
async fn test_username_is_trimmed() {
    let mock = MockHttpClient::new();
    mock_user(&mock, "octocat", OCTOCAT_PROFILE, "[]");
    let mut api = api_with(&mock);

    let view = render_pass(&mut api, "  octocat  ", 6, now()).await;
    assert_eq!(view.dashboard().unwrap().username, "octocat");
}
