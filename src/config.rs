//! Client configuration.
//!
//! The catalog API location comes from one place: the `--api-url` flag,
//! falling back to the `CURRENT_API_URL` environment variable, falling back
//! to the local development address. Nothing else is configurable and no
//! configuration is ever persisted.

use std::time::Duration;

/// Environment variable naming the API base URL.
pub const API_URL_ENV: &str = "CURRENT_API_URL";

/// API base used when neither the flag nor the environment sets one.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Per-request timeout for the blocking HTTP client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolved client configuration handed to every command.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the catalog API, without a trailing slash.
    pub base_url: String,

    /// Request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Configuration pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
