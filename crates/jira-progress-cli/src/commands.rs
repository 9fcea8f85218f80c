// Rust guideline compliant 2026-10-17

//! Command implementations for the Jira progress CLI.

pub mod board;
pub mod issue;
