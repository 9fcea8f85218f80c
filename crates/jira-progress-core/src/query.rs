// Rust guideline compliant 2026-10-17

//! Structured query (JQL) construction for board reports.

/// Issue types included when none are given.
pub const DEFAULT_TASK_TYPES: [&str; 3] = ["Task", "Story", "Bug"];

/// Parameters of a board search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Project key the issues belong to.
    pub project_id: String,
    /// Skip issues in the Done status.
    pub exclude_done: bool,
    /// Skip issues in the Open status.
    pub exclude_open: bool,
    /// Saved filter id; `0` means no filter.
    pub filter_id: u32,
    /// Allowed issue types.
    pub task_types: Vec<String>,
}

impl SearchQuery {
    /// Creates a query for a project with the default exclusions and types.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            exclude_done: true,
            exclude_open: true,
            filter_id: 0,
            task_types: DEFAULT_TASK_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Renders the query string, ordered by creation date descending.
    #[must_use]
    pub fn build(&self) -> String {
        let mut jql = format!(
            "project = \"{}\" and type in ({})",
            self.project_id,
            self.task_types.join(",")
        );
        if self.filter_id > 0 {
            jql.push_str(&format!(" AND filter = {}", self.filter_id));
        }
        if self.exclude_done {
            jql.push_str(" AND status != Done");
        }
        if self.exclude_open {
            jql.push_str(" AND status != Open");
        }
        jql.push_str(" ORDER BY created DESC");
        jql
    }
}

/// Builds a search query string.
///
/// # Arguments
///
/// * `project_id` - Project key
/// * `exclude_done` - Whether to exclude Done issues
/// * `exclude_open` - Whether to exclude Open issues
/// * `filter_id` - Saved filter id, `0` for none
/// * `task_types` - Allowed issue type names
#[must_use]
pub fn build_search_query(
    project_id: &str,
    exclude_done: bool,
    exclude_open: bool,
    filter_id: u32,
    task_types: &[&str],
) -> String {
    SearchQuery {
        project_id: project_id.to_string(),
        exclude_done,
        exclude_open,
        filter_id,
        task_types: task_types.iter().map(|t| t.to_string()).collect(),
    }
    .build()
}
