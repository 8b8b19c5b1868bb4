//! GitHub API tests over real HTTP using wiremock.
//!
//! These tests verify that `GithubApi` on top of `ReqwestHttpClient` sends
//! the expected requests and classifies responses correctly.

use std::sync::Arc;

use ghdash::adapters::ReqwestHttpClient;
use ghdash::config::DashboardConfig;
use ghdash::error::FetchError;
use ghdash::github::{GithubApi, GITHUB_ACCEPT};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> GithubApi {
    let config = DashboardConfig::new()
        .with_api_base(server.uri())
        .with_log_file(None);
    GithubApi::new(Arc::new(ReqwestHttpClient::new()), &config)
}

#[tokio::test]
async fn test_profile_request_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .and(header("Accept", GITHUB_ACCEPT))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "login": "octocat",
            "name": "The Octocat",
            "public_repos": 8,
            "followers": 100
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut api = api_for(&server);
    let profile = api.fetch_profile("octocat").await.unwrap();
    assert_eq!(profile.display_name(), "The Octocat");

    // Served from cache; the `expect(1)` above is checked on drop
    api.fetch_profile("octocat").await.unwrap();
}

#[tokio::test]
async fn test_repository_request_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("sort", "updated"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"name": "Hello-World", "html_url": "https://github.com/octocat/Hello-World",
             "stargazers_count": 42, "forks_count": 7, "language": "C"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let mut api = api_for(&server);
    let repos = api.fetch_repositories("octocat").await;
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].stars, 42);
    assert_eq!(repos[0].forks, 7);

    let tally = api.compute_language_tally("octocat").await;
    assert_eq!(tally.get("C"), Some(1));
}

#[tokio::test]
async fn test_user_agent_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .and(header(
            "User-Agent",
            format!("ghdash/{}", env!("CARGO_PKG_VERSION")).as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"login": "octocat"})))
        .mount(&server)
        .await;

    let mut api = api_for(&server);
    assert!(api.fetch_profile("octocat").await.is_ok());
}

#[tokio::test]
async fn test_404_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "Not Found"
        })))
        .mount(&server)
        .await;

    let mut api = api_for(&server);
    let err = api.fetch_profile("ghost").await.unwrap_err();
    assert!(matches!(err, FetchError::NotFound { ref username } if username == "ghost"));
}

#[tokio::test]
async fn test_rate_limit_is_transient() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let mut api = api_for(&server);
    let err = api.fetch_profile("octocat").await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 403, .. }));
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let mut api = api_for(&server);
    let err = api.fetch_profile("octocat").await.unwrap_err();
    assert!(matches!(err, FetchError::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Nothing listens on the discard port
    let config = DashboardConfig::new()
        .with_api_base("http://127.0.0.1:9")
        .with_log_file(None);
    let mut api = GithubApi::new(Arc::new(ReqwestHttpClient::new()), &config);

    let err = api.fetch_profile("octocat").await.unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
    assert!(api.fetch_repositories("octocat").await.is_empty());
}
