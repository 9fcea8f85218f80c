// Rust guideline compliant 2026-10-17

//! Jira Progress Core Library
//!
//! This crate provides the I/O-free building blocks of the Jira progress reporter:
//! - Typed upstream payloads (Issue, SearchResponse, progress blocks)
//! - Progress calculation (own and aggregate records per issue)
//! - Subtask walking over an abstract issue source
//! - Structured query (JQL) construction
//! - Seconds-to-hours conversion
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod hours;
pub mod models;
pub mod progress;
pub mod query;
pub mod source;
pub mod subtasks;

pub use config::Config;
pub use error::{Error, Result};
pub use hours::{format_hours, seconds_to_hours};
pub use models::{Issue, IssueFields, ProgressBlock, SearchResponse, SubtaskRef, TimeTracking};
pub use progress::{compute_progress, IssueSummary, ProgressRecord};
pub use query::{build_search_query, SearchQuery};
pub use source::IssueSource;
pub use subtasks::{walk_subtasks, SubtaskSummary};
