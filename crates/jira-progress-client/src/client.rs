// Rust guideline compliant 2026-10-17

//! Blocking REST client for issue and search endpoints.

use crate::auth::TokenAuth;
use jira_progress_core::{Config, Error, Issue, IssueSource, Result, SearchResponse};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::ACCEPT;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("jira-progress/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Issue fetcher backed by the tracker's REST API.
///
/// One request is in flight at a time; failures are never retried.
#[derive(Debug)]
pub struct JiraClient {
    http: Client,
    auth: TokenAuth,
    config: Config,
}

impl JiraClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if the HTTP client cannot be constructed.
    pub fn new(config: Config) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self {
            http,
            auth: TokenAuth::new(config.authentication_token.clone()),
            config,
        })
    }

    /// Sends an authenticated request and returns the body of a 200 response.
    fn send(&self, request: RequestBuilder, key: &str) -> Result<String> {
        let response = self
            .auth
            .apply(request.header(ACCEPT, "application/json"))
            .send()
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(key, status = status.as_u16(), "tracker rejected request");
            return Err(Error::Fetch {
                key: key.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|e| Error::Transport(e.to_string()))
    }
}

impl IssueSource for JiraClient {
    fn fetch_issue(&self, key: &str) -> Result<Issue> {
        let url = self.config.issue_url(key);
        debug!(key, %url, "fetching issue");
        let body = self.send(self.http.get(&url), key)?;
        Issue::from_json(&body)
    }

    fn search(&self, jql: &str) -> Result<SearchResponse> {
        let url = self.config.search_url();
        debug!(jql, %url, "searching issues");
        let body = self.send(self.http.get(&url).query(&[("jql", jql)]), jql)?;
        SearchResponse::from_json(&body)
    }
}
