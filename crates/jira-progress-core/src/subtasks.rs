// Rust guideline compliant 2026-10-17

//! Subtask walking: fetch every subtask of an issue and fold their estimates.

use crate::hours::seconds_to_hours;
use crate::models::Issue;
use crate::source::IssueSource;
use crate::Result;
use serde::Serialize;
use tracing::debug;

/// Estimation figures collected from an issue's subtasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubtaskSummary {
    /// Number of subtask references on the parent.
    pub count: usize,
    /// Sum of original estimates of estimated subtasks, in seconds.
    pub estimated_seconds: i64,
    /// Subtasks with no original estimate that are not Done.
    pub unestimated_open: usize,
    /// Keys of subtasks with no original estimate, in enumeration order.
    pub unestimated: Vec<String>,
}

impl SubtaskSummary {
    /// Total original estimate of estimated subtasks, in hours.
    #[must_use]
    pub fn estimated_hours(&self) -> f64 {
        seconds_to_hours(self.estimated_seconds)
    }
}

/// Fetches each subtask of `issue` in order and folds their estimates.
///
/// Returns a zeroed summary without fetching anything when the issue has no
/// subtasks. The first failed fetch aborts the walk and its error is returned;
/// figures gathered before the failure are discarded.
///
/// # Arguments
///
/// * `source` - Where subtasks are fetched from
/// * `issue` - The parent issue
/// * `on_fetch` - Called before each fetch with `(current, count)`, 1-based
///
/// # Errors
///
/// Propagates the first error returned by `source`.
pub fn walk_subtasks(
    source: &dyn IssueSource,
    issue: &Issue,
    on_fetch: &mut dyn FnMut(usize, usize),
) -> Result<SubtaskSummary> {
    if !issue.fields.has_subtasks() {
        return Ok(SubtaskSummary::default());
    }

    let refs = &issue.fields.subtasks;
    let mut summary = SubtaskSummary {
        count: refs.len(),
        ..SubtaskSummary::default()
    };

    for (index, subtask_ref) in refs.iter().enumerate() {
        on_fetch(index + 1, refs.len());

        let subtask = source.fetch_issue(&subtask_ref.key)?;
        let timetracking = subtask.fields.timetracking.unwrap_or_default();

        if !timetracking.is_estimated() {
            debug!(key = %subtask_ref.key, "subtask has no original estimate");
            summary.unestimated.push(subtask_ref.key.clone());
            if !subtask_ref.is_done() {
                summary.unestimated_open += 1;
            }
        } else if let Some(seconds) = timetracking.original_estimate_seconds {
            summary.estimated_seconds = summary.estimated_seconds.saturating_add(seconds);
        }
    }

    debug!(
        parent = %issue.key,
        count = summary.count,
        unestimated = summary.unestimated.len(),
        "subtask walk complete"
    );

    Ok(summary)
}
