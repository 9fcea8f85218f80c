// Rust guideline compliant 2026-10-17

//! Tracing setup for the CLI binaries.
//!
//! Logs go to stderr so that reports on stdout stay machine-pipeable.

use anyhow::{bail, Result};
use tracing::Level;
use tracing_subscriber::fmt;

/// Default log level when none is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Installs a global `fmt` subscriber at the given level.
///
/// # Errors
///
/// Returns an error if the level name is unknown.
pub fn init_logging(level: &str) -> Result<()> {
    let level = parse_log_level(level)?;
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Parses a log level name (case-insensitive).
///
/// # Errors
///
/// Returns an error for anything other than error, warn, info, debug or trace.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => bail!("Unknown log level '{}'", other),
    }
}
