//! Error types for Current operations.
//!
//! This module defines [`CurrentError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CurrentError` for fetch failures that need distinct handling
//!   (transport vs. bad status vs. malformed body vs. missing stack)
//! - Use `anyhow::Error` (via `CurrentError::Other`) for unexpected errors
//! - Commands convert failures into the error view at their boundary; a
//!   failed fetch never panics and never retries

use thiserror::Error;

/// Core error type for Current operations.
#[derive(Debug, Error)]
pub enum CurrentError {
    /// Network-level failure before any response arrived.
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("API returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// The response body was not the JSON shape we asked for.
    #[error("Malformed response from {url}: {message}")]
    MalformedResponse { url: String, message: String },

    /// The detail endpoint had no stack under the requested name.
    #[error("Stack '{name}' not found")]
    StackNotFound { name: String },

    /// JSON encoding failure when printing `--json` output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Current operations.
pub type Result<T> = std::result::Result<T, CurrentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_code_and_url() {
        let err = CurrentError::Status {
            url: "http://localhost:8000/stacks".into(),
            status: 500,
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("http://localhost:8000/stacks"));
    }

    #[test]
    fn malformed_response_displays_url_and_message() {
        let err = CurrentError::MalformedResponse {
            url: "http://localhost:8000/stacks".into(),
            message: "expected value at line 1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("http://localhost:8000/stacks"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn stack_not_found_displays_name() {
        let err = CurrentError::StackNotFound {
            name: "Svelte".into(),
        };
        assert_eq!(err.to_string(), "Stack 'Svelte' not found");
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: CurrentError = io_err.into();
        assert!(matches!(err, CurrentError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(CurrentError::StackNotFound {
                name: "missing".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
