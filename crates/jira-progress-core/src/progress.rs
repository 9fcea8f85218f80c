// Rust guideline compliant 2026-10-17

//! Progress calculation for a single issue.
//!
//! Two records are derived per issue: the issue's own progress and the
//! aggregate progress the tracker rolls up from its subtasks. All values are
//! kept in seconds; conversion to hours happens at presentation time.

use crate::models::{Issue, IssueFields, ProgressBlock};
use crate::{Error, Result};
use serde::Serialize;

/// Display type name for issues that have subtasks.
pub const STORY_TYPE_NAME: &str = "Story";

/// Display type name for everything else.
pub const ISSUE_TYPE_NAME: &str = "Issue";

/// Normalized progress figures. Durations are in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ProgressRecord {
    /// Initially planned effort.
    pub original_estimate: i64,
    /// Time spent plus remaining estimate.
    pub total: i64,
    /// Time spent.
    pub progress: i64,
    /// Completion percentage (0-100).
    pub progress_percent: f64,
    /// Remaining estimate.
    pub time_left: i64,
    /// `original_estimate - progress` when an original estimate exists, else 0.
    pub time_left_original: i64,
}

impl ProgressRecord {
    /// Returns true when there is anything to report.
    #[must_use]
    pub fn has_estimation(&self) -> bool {
        self.total > 0 || self.original_estimate > 0
    }

    /// Returns true when the total exceeds the original estimate.
    #[must_use]
    pub fn is_overrun(&self) -> bool {
        self.total > self.original_estimate
    }

    fn refresh_time_left_original(&mut self) {
        self.time_left_original = if self.original_estimate > 0 {
            self.original_estimate.saturating_sub(self.progress)
        } else {
            0
        };
    }
}

/// Computes the own and aggregate progress records for an issue.
///
/// For issues without subtasks the own record's original estimate and
/// progress are backfilled from the aggregate block and then from the plain
/// progress block, the latter taking precedence when both are present.
///
/// # Arguments
///
/// * `fields` - The issue fields as returned by the tracker
///
/// # Returns
///
/// A tuple of `(own, aggregate)` progress records.
///
/// # Errors
///
/// Returns `Error::MalformedPayload` if the progress block lacks `total` or
/// `progress`, or if an aggregate block used for a story lacks them.
pub fn compute_progress(fields: &IssueFields) -> Result<(ProgressRecord, ProgressRecord)> {
    let has_subtasks = fields.has_subtasks();
    let (own_total, own_progress) = required_totals(&fields.progress, "progress")?;

    let mut own = ProgressRecord {
        original_estimate: fields.original_estimate_seconds().unwrap_or(0),
        total: own_total,
        progress: own_progress,
        progress_percent: fields.progress.percent.unwrap_or(0.0),
        time_left: fields.timeestimate.unwrap_or(0),
        time_left_original: 0,
    };

    let mut aggregate = ProgressRecord::default();

    if has_subtasks {
        if let Some(block) = &fields.aggregateprogress {
            if let Some(estimate) = fields.aggregatetimeoriginalestimate.filter(|v| *v != 0) {
                aggregate.original_estimate = estimate;
            }
            let (total, progress) = required_totals(block, "aggregateprogress")?;
            aggregate.total = total;
            aggregate.progress = progress;
            aggregate.progress_percent = block.percent.unwrap_or(0.0);
        }
    } else {
        // Leaf issues: aggregate block first, plain progress block wins.
        if let Some(block) = &fields.aggregateprogress {
            if let Some(total) = block.total {
                own.original_estimate = total;
                own.progress = block.progress.unwrap_or(0);
            }
        }
        if let Some(total) = fields.progress.total {
            own.original_estimate = total;
            own.progress = fields.progress.progress.unwrap_or(0);
        }
    }

    aggregate.time_left = fields.aggregatetimeestimate.unwrap_or(0);

    own.refresh_time_left_original();
    aggregate.refresh_time_left_original();

    Ok((own, aggregate))
}

fn required_totals(block: &ProgressBlock, name: &str) -> Result<(i64, i64)> {
    let total = block
        .total
        .ok_or_else(|| Error::MalformedPayload(format!("missing fields.{name}.total")))?;
    let progress = block
        .progress
        .ok_or_else(|| Error::MalformedPayload(format!("missing fields.{name}.progress")))?;
    Ok((total, progress))
}

/// Everything the reports need to know about one issue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueSummary {
    /// Issue key.
    pub key: String,
    /// Display type name: `Story` when the issue has subtask references, else `Issue`.
    pub type_name: &'static str,
    /// Type name as configured in the tracker.
    pub original_type_name: String,
    /// Workflow status name.
    pub status: String,
    /// Whether the issue is a non-subtask type with subtask references.
    pub has_subtasks: bool,
    /// Number of subtask references.
    pub subtask_count: usize,
    /// The issue's own progress.
    pub own: ProgressRecord,
    /// Progress rolled up across subtasks.
    pub aggregate: ProgressRecord,
}

impl IssueSummary {
    /// Builds a summary from a fetched issue.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedPayload` if the progress blocks are incomplete.
    pub fn from_issue(issue: &Issue) -> Result<Self> {
        let (own, aggregate) = compute_progress(&issue.fields)?;
        let subtask_count = issue.fields.subtasks.len();

        Ok(Self {
            key: issue.key.clone(),
            type_name: if subtask_count > 0 {
                STORY_TYPE_NAME
            } else {
                ISSUE_TYPE_NAME
            },
            original_type_name: issue.fields.issuetype.name.clone(),
            status: issue.fields.status.name.clone(),
            has_subtasks: issue.fields.has_subtasks(),
            subtask_count,
            own,
            aggregate,
        })
    }

    /// Returns true when the aggregated section is worth showing.
    #[must_use]
    pub fn shows_aggregate(&self) -> bool {
        self.has_subtasks && self.aggregate.total > 0
    }

    /// Returns true when the display type is Story.
    #[must_use]
    pub fn is_story(&self) -> bool {
        self.type_name == STORY_TYPE_NAME
    }
}
