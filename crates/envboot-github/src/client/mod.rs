//! Raw-content client for fetching variable documents.

mod documents;

use crate::config::RawClientConfig;
use crate::error::GithubResult;
use crate::http::{HttpBackend, ReqwestBackend};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default raw-content client using the reqwest HTTP backend.
pub type DefaultRawClient = RawContentClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for fetching variable documents from a raw-content host.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultRawClient` for production code.
pub struct RawContentClient<B: HttpBackend> {
    pub(crate) backend: B,
}

impl DefaultRawClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &RawClientConfig) -> GithubResult<Self> {
        Ok(Self {
            backend: ReqwestBackend::new(config)?,
        })
    }

    /// Create a new client with default configuration.
    pub fn default_client() -> GithubResult<Self> {
        Self::new(&RawClientConfig::default())
    }
}

impl<B: HttpBackend> RawContentClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(backend: B) -> Self {
        Self { backend }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use envboot_core::{ConfigSettings, SourceUrl};

    pub fn source_url(path: &str) -> SourceUrl {
        let settings = ConfigSettings::new(
            "https://raw.githubusercontent.com/",
            "acme",
            "cfg",
            "id-123",
            "s3cret",
            "prod",
            "envs/{0}/global.json",
            "envs/{0}/shared.json",
        );
        SourceUrl::resolve(&settings, path).unwrap()
    }

    #[test]
    fn test_default_client_creation() {
        assert!(DefaultRawClient::default_client().is_ok());
    }
}
