// Rust guideline compliant 2026-10-17

//! CLI entry point for the board/filter progress report.

use clap::Parser;
use jira_progress_cli::commands::board;
use jira_progress_cli::CommonArgs;
use jira_progress_client::JiraClient;

#[derive(Parser, Debug)]
#[command(
    name = "jira-board",
    version,
    about = "Print a compact progress summary for every issue of a project or saved filter",
    after_help = "Examples:\n  jira-board\n  jira-board --filter-id 7 --include-open\n  jira-board --types Story,Task,Bug\n"
)]
struct Cli {
    /// Saved filter id (overrides filterId from configuration)
    #[arg(long)]
    filter_id: Option<u32>,

    /// Include issues in the Done status
    #[arg(long)]
    include_done: bool,

    /// Include issues in the Open status
    #[arg(long)]
    include_open: bool,

    /// Issue types to include
    #[arg(long, value_delimiter = ',')]
    types: Vec<String>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = cli.common.init()?;
    let query = board::board_query(
        config.project_id()?,
        cli.filter_id.or(config.filter_id),
        cli.include_done,
        cli.include_open,
        &cli.types,
    );
    let client = JiraClient::new(config)?;

    board::execute(&client, &query, &cli.common.printer())?;
    Ok(())
}
