// Rust guideline compliant 2026-10-17

//! Abstraction over where issues come from.

use crate::models::{Issue, SearchResponse};
use crate::Result;

/// A source of issues, implemented by the HTTP client and by in-memory fakes.
///
/// Calls are blocking and expected to be made one at a time.
pub trait IssueSource {
    /// Fetches a single issue by key.
    ///
    /// # Errors
    ///
    /// Returns `Error::Fetch` on a non-success status, `Error::Transport` if
    /// the request could not be performed, or `Error::MalformedPayload` if the
    /// body is not an issue document.
    fn fetch_issue(&self, key: &str) -> Result<Issue>;

    /// Runs a structured query and returns the first page of results.
    ///
    /// # Errors
    ///
    /// Same as [`IssueSource::fetch_issue`].
    fn search(&self, jql: &str) -> Result<SearchResponse>;
}
