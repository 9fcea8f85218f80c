// Rust guideline compliant 2026-10-17

//! Arguments shared by both binaries.

use crate::logging::{init_logging, DEFAULT_LOG_LEVEL};
use crate::report::ReportPrinter;
use crate::terminal::should_use_color;
use anyhow::{Context, Result};
use jira_progress_core::config::{Config, DEFAULT_CONFIG_FILE};
use std::path::PathBuf;

/// Options common to `jira-issue` and `jira-board`.
#[derive(Debug, clap::Args)]
pub struct CommonArgs {
    /// Path to the configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl CommonArgs {
    /// Installs logging and loads configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the log level is unknown or configuration is invalid.
    pub fn init(&self) -> Result<Config> {
        init_logging(&self.log_level)?;
        let config = Config::load(&self.config)
            .with_context(|| format!("loading {}", self.config.display()))?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Creates a report printer honoring `--no-color` and the terminal.
    #[must_use]
    pub fn printer(&self) -> ReportPrinter {
        ReportPrinter::new(!self.no_color && should_use_color())
    }
}
