// Rust guideline compliant 2026-10-17

//! HTTP access to the tracker's REST API.
//!
//! Provides the token authentication decorator and a blocking client that
//! implements [`jira_progress_core::IssueSource`].

pub mod auth;
pub mod client;

pub use auth::TokenAuth;
pub use client::JiraClient;
