// Rust guideline compliant 2026-10-17

//! Jira progress CLI library.
//!
//! Report rendering, terminal helpers and the command implementations shared
//! by the `jira-issue` and `jira-board` binaries.

pub mod args;
pub mod commands;
pub mod logging;
pub mod progress;
pub mod report;
pub mod terminal;

pub use args::CommonArgs;
pub use report::ReportPrinter;
pub use terminal::should_use_color;
