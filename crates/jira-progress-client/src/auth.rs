// Rust guideline compliant 2026-10-17

//! Token authentication for outgoing requests.

use reqwest::blocking::RequestBuilder;
use reqwest::header::AUTHORIZATION;
use std::fmt;

/// Injects a fixed `Authorization` header into every request.
///
/// The token is sent as-is after the scheme prefix; it is neither validated
/// nor refreshed.
#[derive(Clone)]
pub struct TokenAuth {
    token: String,
}

impl TokenAuth {
    /// Scheme prefix placed before the token.
    pub const SCHEME: &'static str = "Basic";

    /// Creates an authenticator for the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Value of the `Authorization` header.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("{} {}", Self::SCHEME, self.token)
    }

    /// Adds the `Authorization` header to a request.
    #[must_use]
    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(AUTHORIZATION, self.header_value())
    }
}

impl fmt::Debug for TokenAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenAuth")
            .field("token", &"<redacted>")
            .finish()
    }
}
