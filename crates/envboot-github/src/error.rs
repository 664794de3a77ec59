//! Internal error types for raw-content fetches.
//!
//! These errors are internal to `envboot-github` and are mapped to core port
//! errors at the boundary.

use thiserror::Error;

/// Result type alias for raw-content operations.
pub type GithubResult<T> = Result<T, GithubError>;

/// Errors related to fetching variable documents.
#[derive(Debug, Error)]
pub enum GithubError {
    /// Request completed with a non-success HTTP status.
    #[error("Request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The redacted URL that was requested
        url: String,
        /// Start of the response body
        body: String,
    },

    /// Network or HTTP client error. Never carries the request URL.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Body was not a valid variable document.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
