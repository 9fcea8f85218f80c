// Rust guideline compliant 2026-10-17

//! Implementation of the `jira-board` command.
//!
//! Searches the configured project (optionally scoped to a saved filter) and
//! prints a compact progress summary for every issue on the first page.

use crate::report::ReportPrinter;
use anyhow::Result;
use jira_progress_core::{walk_subtasks, IssueSource, IssueSummary, SearchQuery, SearchResponse};
use tracing::info;

/// Issue types included in board reports unless overridden.
pub const BOARD_TASK_TYPES: [&str; 2] = ["Story", "Task"];

/// Builds the board query from configuration values and CLI overrides.
///
/// # Arguments
///
/// * `project_id` - Project key
/// * `filter_id` - Saved filter id, if any
/// * `include_done` - Keep Done issues
/// * `include_open` - Keep Open issues
/// * `task_types` - Issue types; board defaults when empty
#[must_use]
pub fn board_query(
    project_id: &str,
    filter_id: Option<u32>,
    include_done: bool,
    include_open: bool,
    task_types: &[String],
) -> SearchQuery {
    let task_types = if task_types.is_empty() {
        BOARD_TASK_TYPES.iter().map(|t| t.to_string()).collect()
    } else {
        task_types.to_vec()
    };

    SearchQuery {
        project_id: project_id.to_string(),
        exclude_done: !include_done,
        exclude_open: !include_open,
        filter_id: filter_id.unwrap_or(0),
        task_types,
    }
}

/// Renders the report for an already fetched search response.
///
/// Issues are taken from the response as-is; only their subtasks are fetched.
///
/// # Errors
///
/// Returns an error if an issue payload is malformed or a subtask cannot be
/// fetched.
pub fn render(
    source: &dyn IssueSource,
    response: &SearchResponse,
    printer: &ReportPrinter,
) -> Result<String> {
    let mut lines = vec![response.summary_line()];

    for issue in &response.issues {
        let summary = IssueSummary::from_issue(issue)?;
        lines.push(format!(
            "Issue: {}, type: {}, status: {}",
            issue.key, summary.type_name, summary.status
        ));

        if summary.has_subtasks {
            let subtasks = walk_subtasks(source, issue, &mut |_, _| {})?;
            if !subtasks.unestimated.is_empty() {
                lines.push(format!(
                    "Sub-tasks not estimated: {}",
                    subtasks.unestimated.join(",")
                ));
            }
        }

        let compact = printer.compact(&summary);
        if !compact.is_empty() {
            lines.push(compact);
        } else if !summary.is_story() {
            lines.push("No estimation".to_string());
        }

        lines.push(String::new());
    }

    Ok(lines.join("\n"))
}

/// Runs the board search and prints the report to stdout.
///
/// # Errors
///
/// Returns an error if the search fails or [`render`] fails.
pub fn execute(source: &dyn IssueSource, query: &SearchQuery, printer: &ReportPrinter) -> Result<()> {
    let jql = query.build();
    info!(%jql, "running board search");

    let response = source.search(&jql)?;
    println!("{}", render(source, &response, printer)?);
    Ok(())
}
