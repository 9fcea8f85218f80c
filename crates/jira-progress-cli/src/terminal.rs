// Rust guideline compliant 2026-10-17

//! Terminal UI utilities for the Jira progress CLI.
//!
//! This module provides color detection and colored status messages.

use std::env;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Prints a status message with a colored prefix to stdout.
///
/// # Arguments
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
pub fn print_status(prefix: &str, prefix_color: Color, message: &str) {
    let choice = if should_use_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(prefix_color)));
    let _ = write!(stdout, "{}", prefix);
    let _ = stdout.reset();
    let _ = writeln!(stdout, ": {}", message);
}

/// Prints a warning message.
///
/// # Arguments
/// * `message` - The message to print
pub fn print_warning(message: &str) {
    print_status("Warning", Color::Red, message);
}

/// Prints the usage hint shown when `jira-issue` is run without an issue key.
pub fn print_missing_key_usage() {
    print_warning("missing issue key");
    println!("Please pass the key of the issue to examine as a command line argument. Example:");
    println!("> jira-issue JIRA-15");
}
