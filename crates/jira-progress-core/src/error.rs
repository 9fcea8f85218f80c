// Rust guideline compliant 2026-10-17

//! Error types for the Jira progress core library.

use thiserror::Error;

/// Result type alias for Jira progress operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Jira progress operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Upstream answered with a non-success status code.
    #[error("Issue {key} details response code: {status}")]
    Fetch {
        /// Issue key (or query) that was requested.
        key: String,
        /// HTTP status code returned by the tracker.
        status: u16,
    },

    /// The request could not be performed or its body could not be read.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A required field is missing from an otherwise successful response.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
