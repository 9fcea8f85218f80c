// Rust guideline compliant 2026-10-17

//! Report rendering for issue progress.
//!
//! Reports are rendered into strings; colors are written as ANSI escape codes
//! through a `termcolor` buffer so the output can be captured and tested.

use jira_progress_core::hours::{format_decimal, format_hours};
use jira_progress_core::{IssueSummary, ProgressRecord, SubtaskSummary};
use std::io::Write;
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Marker appended to highlighted values when colors are disabled.
pub const PLAIN_MARKER: &str = "!";

/// Emphasis applied to a fragment of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Highlight {
    /// Positive remaining time.
    Favorable,
    /// Remaining time used up.
    Exhausted,
    /// Total exceeds the original estimate.
    Overrun,
    /// Issue is done.
    StatusDone,
    /// Issue has not been started.
    StatusWaiting,
    /// Issue is somewhere in between.
    StatusActive,
}

impl Highlight {
    fn spec(self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match self {
            Highlight::Favorable | Highlight::StatusDone => spec.set_fg(Some(Color::Green)),
            Highlight::Exhausted => spec.set_fg(Some(Color::Red)),
            Highlight::Overrun => spec.set_fg(Some(Color::Yellow)),
            Highlight::StatusWaiting => spec.set_fg(Some(Color::Blue)),
            Highlight::StatusActive => spec.set_bg(Some(Color::Yellow)),
        };
        spec
    }

    fn is_warning(self) -> bool {
        matches!(self, Highlight::Exhausted | Highlight::Overrun)
    }

    fn for_time_left(seconds: i64) -> Self {
        if seconds > 0 {
            Highlight::Favorable
        } else {
            Highlight::Exhausted
        }
    }

    fn for_status(status: &str) -> Self {
        match status {
            "Done" => Highlight::StatusDone,
            "To Do" | "Open" => Highlight::StatusWaiting,
            _ => Highlight::StatusActive,
        }
    }
}

/// Renders detailed and compact progress reports.
#[derive(Debug, Clone, Copy)]
pub struct ReportPrinter {
    use_color: bool,
}

impl ReportPrinter {
    /// Creates a new printer.
    ///
    /// # Arguments
    /// * `use_color` - Whether to emit ANSI colors
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Renders the multi-section report for a single issue.
    ///
    /// # Arguments
    /// * `issue` - Calculated issue state
    /// * `subtasks` - Result of walking the issue's subtasks
    pub fn detailed(&self, issue: &IssueSummary, subtasks: &SubtaskSummary) -> String {
        let mut lines = vec![
            format!("Issue type: {}", issue.original_type_name),
            format!("Are there subtasks?: {}", yes_no(issue.has_subtasks)),
            format!(
                "{} status: {}",
                issue.type_name,
                self.paint(&issue.status, Highlight::for_status(&issue.status))
            ),
        ];

        if issue.own.has_estimation() {
            lines.push(String::new());
            lines.push(format!(
                "Exact {} progress:",
                issue.type_name.to_lowercase()
            ));
            self.push_record(&mut lines, &issue.own);
        }

        if issue.shows_aggregate() {
            lines.push(String::new());
            lines.push("Aggregated progress:".to_string());
            self.push_record(&mut lines, &issue.aggregate);
        }

        if issue.has_subtasks {
            lines.push(String::new());
            lines.push(format!("Sub-tasks count: {}", subtasks.count));
            lines.push(format!(
                "Sub-tasks initial estimation: {}h",
                format_decimal(subtasks.estimated_hours())
            ));
            lines.push(format!(
                "Sub-tasks with NO estimation: {}",
                subtasks.unestimated_open
            ));
            if !subtasks.unestimated.is_empty() {
                lines.push(format!(
                    "Sub-tasks not estimated: {}",
                    subtasks.unestimated.join(",")
                ));
            }
        }

        lines.join("\n")
    }

    fn push_record(&self, lines: &mut Vec<String>, record: &ProgressRecord) {
        lines.push(format!(
            " Original estimation = {}",
            format_hours(record.original_estimate, true)
        ));
        lines.push(format!(" Total: {}", format_hours(record.total, true)));
        lines.push(format!(" Progress: {}", format_hours(record.progress, true)));
        lines.push(format!(" {}%", record.progress_percent));
        lines.push(format!(
            " Time left: {}",
            self.paint(
                &format_hours(record.time_left, true),
                Highlight::for_time_left(record.time_left)
            )
        ));
        lines.push(format!(
            " Time left (original): {}",
            self.paint(
                &format_hours(record.time_left_original, true),
                Highlight::for_time_left(record.time_left_original)
            )
        ));
    }

    /// Renders the one- or two-line summary used by board reports.
    ///
    /// Returns an empty string when neither the own nor the aggregated record
    /// has anything to show.
    pub fn compact(&self, issue: &IssueSummary) -> String {
        let mut lines = Vec::new();

        if issue.own.has_estimation() {
            lines.push(self.compact_line("Original", &issue.own));
        }

        if issue.shows_aggregate() {
            lines.push(self.compact_line("Aggregated", &issue.aggregate));
        }

        lines.join("\n")
    }

    fn compact_line(&self, label: &str, record: &ProgressRecord) -> String {
        let total = format_hours(record.total, true);
        let total = if record.is_overrun() {
            self.mark(&total, Highlight::Overrun)
        } else {
            total
        };

        format!(
            "{}: e{}, p{}/{}, {}%, l{}, lo{}",
            label,
            format_hours(record.original_estimate, true),
            format_hours(record.progress, false),
            total,
            record.progress_percent,
            self.mark(
                &format_hours(record.time_left, false),
                Highlight::for_time_left(record.time_left)
            ),
            self.mark(
                &format_hours(record.time_left_original, true),
                Highlight::for_time_left(record.time_left_original)
            ),
        )
    }

    /// Colors `text`, or returns it unchanged when colors are off.
    fn paint(&self, text: &str, highlight: Highlight) -> String {
        if !self.use_color {
            return text.to_string();
        }

        let mut buffer = Buffer::ansi();
        let _ = buffer.set_color(&highlight.spec());
        let _ = write!(buffer, "{}", text);
        let _ = buffer.reset();
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    /// Like [`Self::paint`], but warnings keep a visible marker without colors.
    fn mark(&self, text: &str, highlight: Highlight) -> String {
        if !self.use_color && highlight.is_warning() {
            return format!("{}{}", text, PLAIN_MARKER);
        }
        self.paint(text, highlight)
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
