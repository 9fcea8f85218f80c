// Rust guideline compliant 2026-10-17

//! CLI entry point for the single-issue progress report.

use clap::Parser;
use jira_progress_cli::commands::issue::{self, IssueOptions};
use jira_progress_cli::{terminal, CommonArgs};
use jira_progress_client::JiraClient;

#[derive(Parser, Debug)]
#[command(
    name = "jira-issue",
    version,
    about = "Print progress and estimation details for a single issue",
    after_help = "Examples:\n  jira-issue JIRA-15\n  jira-issue JIRA-15 --compact\n  jira-issue JIRA-15 --config ~/.jira-progress.toml --no-color\n"
)]
struct Cli {
    /// Key of the issue to examine
    issue_key: Option<String>,

    /// Print a one-line summary instead of the detailed report
    #[arg(long)]
    compact: bool,

    /// Do not show the subtask spinner
    #[arg(long)]
    no_progress: bool,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(issue_key) = cli.issue_key else {
        terminal::print_missing_key_usage();
        std::process::exit(1);
    };

    let config = cli.common.init()?;
    let client = JiraClient::new(config)?;
    let options = IssueOptions {
        compact: cli.compact,
        show_progress: !cli.no_progress && atty::is(atty::Stream::Stderr),
    };

    issue::execute(&client, &issue_key, options, &cli.common.printer())?;
    Ok(())
}
