// Rust guideline compliant 2026-10-17

//! Integration tests for the REST client against a mock tracker.

use jira_progress_client::JiraClient;
use jira_progress_core::{Config, Error, IssueSource};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(base_url: &str) -> JiraClient {
    JiraClient::new(Config {
        authentication_token: "secret".to_string(),
        jira_url: base_url.to_string(),
        issue_key: "PROJ".to_string(),
        filter_id: None,
    })
    .expect("client")
}

/// Runs a blocking client call off the async runtime.
async fn with_client<T, F>(server: &MockServer, call: F) -> T
where
    F: FnOnce(JiraClient) -> T + Send + 'static,
    T: Send + 'static,
{
    let base_url = server.uri();
    tokio::task::spawn_blocking(move || call(client_for(&base_url)))
        .await
        .expect("blocking call panicked")
}

fn issue_body() -> Value {
    json!({
        "key": "PROJ-1",
        "fields": {
            "subtasks": [],
            "issuetype": {"name": "Task", "subtask": false},
            "status": {"name": "Open"},
            "timetracking": {"originalEstimateSeconds": 3600},
            "progress": {"total": 3600, "progress": 0, "percent": 0},
            "timeestimate": 3600
        }
    })
}

#[tokio::test]
async fn test_fetch_issue_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/2/issue/PROJ-1"))
        .and(header("authorization", "Basic secret"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(issue_body()))
        .expect(1)
        .mount(&server)
        .await;

    let issue = with_client(&server, |client| client.fetch_issue("PROJ-1"))
        .await
        .expect("fetch should succeed");

    assert_eq!(issue.key, "PROJ-1");
    assert_eq!(issue.fields.original_estimate_seconds(), Some(3600));
}

#[tokio::test]
async fn test_fetch_issue_without_credentials_match_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/2/issue/PROJ-1"))
        .and(header("authorization", "Basic other"))
        .respond_with(ResponseTemplate::new(200).set_body_json(issue_body()))
        .expect(0)
        .mount(&server)
        .await;

    let err = with_client(&server, |client| client.fetch_issue("PROJ-1"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Fetch { status: 404, .. }));
}

#[tokio::test]
async fn test_fetch_issue_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/2/issue/PROJ-404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = with_client(&server, |client| client.fetch_issue("PROJ-404"))
        .await
        .unwrap_err();

    match err {
        Error::Fetch { key, status } => {
            assert_eq!(key, "PROJ-404");
            assert_eq!(status, 404);
        }
        other => panic!("expected fetch error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_issue_server_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/2/issue/PROJ-1"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = with_client(&server, |client| client.fetch_issue("PROJ-1"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Fetch { status: 503, .. }));
}

#[tokio::test]
async fn test_fetch_issue_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/2/issue/PROJ-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"key": "PROJ-1"})))
        .mount(&server)
        .await;

    let err = with_client(&server, |client| client.fetch_issue("PROJ-1"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::MalformedPayload(_)));
}

#[tokio::test]
async fn test_search_sends_encoded_query() {
    let jql = "project = \"PROJ\" ORDER BY created DESC";
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/2/search"))
        .and(query_param("jql", jql))
        .and(header("authorization", "Basic secret"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"maxResults": 50, "total": 120, "issues": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = with_client(&server, move |client| client.search(jql))
        .await
        .expect("search should succeed");

    assert_eq!(response.summary_line(), "max 50 out of 120");
    assert!(response.issues.is_empty());
}

#[tokio::test]
async fn test_search_failure_carries_query() {
    let jql = "project = \"PROJ\"";
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/2/search"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = with_client(&server, move |client| client.search(jql))
        .await
        .unwrap_err();

    match err {
        Error::Fetch { key, status } => {
            assert_eq!(key, jql);
            assert_eq!(status, 401);
        }
        other => panic!("expected fetch error, got {:?}", other),
    }
}

#[test]
fn test_connection_refused_is_transport_error() {
    // Nothing listens on port 1 of the loopback interface.
    let client = client_for("http://127.0.0.1:1");
    let err = client.fetch_issue("PROJ-1").unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
}
