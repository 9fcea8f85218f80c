// Rust guideline compliant 2026-10-17

//! Typed payloads returned by the tracker's REST API.
//!
//! Optional upstream fields are modelled as `Option` and resolved once during
//! deserialization, so the calculation code never probes for key presence.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Status name used by the tracker for finished work.
pub const DONE_STATUS: &str = "Done";

/// A single issue as returned by `GET /rest/api/2/issue/{key}` or as an
/// element of a search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Project-scoped issue key (e.g. `PROJ-15`).
    pub key: String,
    /// Issue fields.
    pub fields: IssueFields,
}

impl Issue {
    /// Parses an issue from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedPayload` if a required field is missing or has
    /// the wrong type.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::MalformedPayload(e.to_string()))
    }

    /// Parses an issue from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedPayload` if the body is not a valid issue document.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| Error::MalformedPayload(e.to_string()))
    }
}

/// The `fields` object of an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueFields {
    /// References to subtasks (key and status only).
    #[serde(default)]
    pub subtasks: Vec<SubtaskRef>,
    /// Issue type descriptor.
    pub issuetype: IssueType,
    /// Workflow status.
    pub status: NamedField,
    /// Time tracking block; may be absent or empty.
    #[serde(default)]
    pub timetracking: Option<TimeTracking>,
    /// Own progress block.
    pub progress: ProgressBlock,
    /// Remaining estimate in seconds.
    #[serde(default)]
    pub timeestimate: Option<i64>,
    /// Tracker-computed roll-up of the issue and its subtasks.
    #[serde(default)]
    pub aggregateprogress: Option<ProgressBlock>,
    /// Roll-up of original estimates in seconds.
    #[serde(default)]
    pub aggregatetimeoriginalestimate: Option<i64>,
    /// Roll-up of remaining estimates in seconds.
    #[serde(default)]
    pub aggregatetimeestimate: Option<i64>,
}

impl IssueFields {
    /// Returns true when the issue is not itself a subtask and has at least one
    /// subtask reference.
    #[must_use]
    pub fn has_subtasks(&self) -> bool {
        !self.issuetype.subtask && !self.subtasks.is_empty()
    }

    /// Returns the original estimate in seconds from the time tracking block.
    #[must_use]
    pub fn original_estimate_seconds(&self) -> Option<i64> {
        self.timetracking
            .as_ref()
            .and_then(|tt| tt.original_estimate_seconds)
    }
}

/// Issue type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueType {
    /// Type name as configured in the tracker (Story, Task, Sub-task...).
    pub name: String,
    /// Whether this type is a subtask type.
    #[serde(default)]
    pub subtask: bool,
}

/// Any upstream object that only matters for its `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedField {
    /// Display name.
    pub name: String,
}

/// The `timetracking` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeTracking {
    /// Human-readable original estimate (e.g. `2h`).
    #[serde(default)]
    pub original_estimate: Option<String>,
    /// Original estimate in seconds.
    #[serde(default)]
    pub original_estimate_seconds: Option<i64>,
}

impl TimeTracking {
    /// Returns true when the block carries any original estimate.
    #[must_use]
    pub fn is_estimated(&self) -> bool {
        self.original_estimate.is_some() || self.original_estimate_seconds.is_some()
    }
}

/// A `progress` or `aggregateprogress` block. All durations are seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressBlock {
    /// Time spent plus remaining estimate.
    #[serde(default)]
    pub total: Option<i64>,
    /// Time spent.
    #[serde(default)]
    pub progress: Option<i64>,
    /// Completion percentage (0-100).
    #[serde(default)]
    pub percent: Option<f64>,
}

/// A subtask reference embedded in the parent issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtaskRef {
    /// Subtask key.
    pub key: String,
    /// Subset of the subtask's fields.
    pub fields: SubtaskRefFields,
}

impl SubtaskRef {
    /// Returns true when the subtask is in the Done status.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.fields.status.name == DONE_STATUS
    }
}

/// Fields carried by a subtask reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtaskRefFields {
    /// Workflow status of the subtask.
    pub status: NamedField,
}

/// Response of `GET /rest/api/2/search?jql=...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Page size applied by the tracker.
    pub max_results: u64,
    /// Total number of matching issues.
    pub total: u64,
    /// Issues on the first page.
    #[serde(default)]
    pub issues: Vec<Issue>,
}

impl SearchResponse {
    /// Parses a search response from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedPayload` if the body is not a valid search response.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| Error::MalformedPayload(e.to_string()))
    }

    /// One-line summary of how many results were returned.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!("max {} out of {}", self.max_results, self.total)
    }
}
