// Rust guideline compliant 2026-10-17

//! Implementation of the `jira-issue` command.
//!
//! Fetches one issue, walks its subtasks and prints the progress report.

use crate::progress::SubtaskSpinner;
use crate::report::ReportPrinter;
use anyhow::Result;
use jira_progress_core::{walk_subtasks, IssueSource, IssueSummary};
use tracing::info;

/// Options for the single-issue report.
#[derive(Debug, Clone, Copy, Default)]
pub struct IssueOptions {
    /// Print the compact summary instead of the detailed report.
    pub compact: bool,
    /// Show the subtask spinner on stderr.
    pub show_progress: bool,
}

/// Builds the report for a single issue.
///
/// # Arguments
///
/// * `source` - Where the issue and its subtasks are fetched from
/// * `key` - Issue key
/// * `options` - Report options
/// * `printer` - Report renderer
///
/// # Returns
///
/// The rendered report.
///
/// # Errors
///
/// Returns an error if:
/// - The issue or any subtask cannot be fetched
/// - The issue payload is malformed
pub fn render(
    source: &dyn IssueSource,
    key: &str,
    options: IssueOptions,
    printer: &ReportPrinter,
) -> Result<String> {
    let issue = source.fetch_issue(key)?;
    let summary = IssueSummary::from_issue(&issue)?;
    info!(key, has_subtasks = summary.has_subtasks, "issue parsed");

    if options.compact {
        return Ok(printer.compact(&summary));
    }

    let mut spinner = SubtaskSpinner::new(options.show_progress);
    let subtasks = walk_subtasks(source, &issue, &mut |current, count| {
        spinner.tick(current, count)
    })?;

    Ok(printer.detailed(&summary, &subtasks))
}

/// Prints the report for a single issue to stdout.
///
/// # Errors
///
/// See [`render`].
pub fn execute(
    source: &dyn IssueSource,
    key: &str,
    options: IssueOptions,
    printer: &ReportPrinter,
) -> Result<()> {
    let report = render(source, key, options, printer)?;
    if !report.is_empty() {
        println!("{}", report);
    }
    Ok(())
}
