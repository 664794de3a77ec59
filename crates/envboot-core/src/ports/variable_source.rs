//! Variable source port.
//!
//! The bootstrapper fetches variable documents through this trait. The HTTP
//! implementation lives in `envboot-github`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{SourceUrl, VariableRecord};

/// Result alias for variable source operations.
pub type SourcePortResult<T> = Result<T, SourcePortError>;

/// Errors from fetching a variable document.
///
/// Implementation-specific errors (HTTP, JSON) are mapped to these. URLs are
/// always the redacted form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourcePortError {
    /// The document does not exist at the resolved location.
    #[error("Variable document not found: {url}")]
    NotFound {
        /// Redacted URL of the document
        url: String,
    },

    /// The host rejected the client credentials.
    #[error("Credentials rejected (HTTP {status}) for {url}{}", with_detail(.detail))]
    AuthRejected {
        /// HTTP status code (401 or 403)
        status: u16,
        /// Redacted URL of the document
        url: String,
        /// Start of the response body, empty if there was none
        detail: String,
    },

    /// The host is throttling requests.
    #[error("Rate limit exceeded for {url}")]
    RateLimited {
        /// Redacted URL of the document
        url: String,
    },

    /// Any other non-success HTTP status.
    #[error("Request failed with status {status}: {url}{}", with_detail(.detail))]
    Status {
        /// HTTP status code
        status: u16,
        /// Redacted URL of the document
        url: String,
        /// Start of the response body, empty if there was none
        detail: String,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The body was not a JSON array of `{key, value}` objects.
    #[error("Malformed variable document: {message}")]
    MalformedDocument {
        /// What was wrong with the body
        message: String,
    },
}

fn with_detail(detail: &str) -> String {
    if detail.is_empty() {
        String::new()
    } else {
        format!(" ({detail})")
    }
}

/// Port for fetching a variable document.
#[async_trait]
pub trait VariableSourcePort: Send + Sync {
    /// Fetch and decode the document at `url`.
    ///
    /// A document is returned whole or not at all.
    async fn fetch_variables(&self, url: &SourceUrl) -> SourcePortResult<Vec<VariableRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn VariableSourcePort>) {}

    #[test]
    fn test_error_messages() {
        let err = SourcePortError::AuthRejected {
            status: 401,
            url: "https://raw.example.com/a.json".to_string(),
            detail: "Bad credentials".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Credentials rejected (HTTP 401) for https://raw.example.com/a.json (Bad credentials)"
        );

        let err = SourcePortError::Status {
            status: 502,
            url: "https://raw.example.com/a.json".to_string(),
            detail: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "Request failed with status 502: https://raw.example.com/a.json"
        );

        let err = SourcePortError::MalformedDocument {
            message: "expected a sequence".to_string(),
        };
        assert!(err.to_string().contains("expected a sequence"));
    }
}
