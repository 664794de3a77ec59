//! HTTP backend abstraction for raw-content fetches.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest and issues exactly one request per call.

use crate::config::RawClientConfig;
use crate::error::{GithubError, GithubResult};
use async_trait::async_trait;
use envboot_core::SourceUrl;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Longest body excerpt kept on a failed request.
const MAX_BODY_SNIPPET: usize = 200;

/// Trim a response body down to a short single-line excerpt.
fn body_snippet(body: &str) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= MAX_BODY_SNIPPET {
        return flat;
    }
    let mut snippet: String = flat.chars().take(MAX_BODY_SNIPPET).collect();
    snippet.push_str("...");
    snippet
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail - external code should use the
/// `VariableSourcePort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &SourceUrl) -> GithubResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// No retries: a failed request is reported as-is.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &RawClientConfig) -> GithubResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &SourceUrl) -> GithubResult<T> {
        // reqwest errors embed the request URL, which carries the secret
        let response = self
            .client
            .get(url.url().as_str())
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            // The body is only context for the status, so a failed read leaves it empty
            let body = response.text().await.unwrap_or_default();
            return Err(GithubError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.redacted(),
                body: body_snippet(&body),
            });
        }

        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        debug!(%url, bytes = body.len(), "Received variable document");

        Ok(serde_json::from_str(&body)?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use envboot_core::ConfigSettings;
    use serde_json::json;

    fn source_url(path: &str) -> SourceUrl {
        let settings = ConfigSettings::new(
            "https://raw.githubusercontent.com/",
            "acme",
            "cfg",
            "id",
            "secret",
            "prod",
            "g",
            "s",
        );
        SourceUrl::resolve(&settings, path).unwrap()
    }

    #[test]
    fn test_reqwest_backend_creation() {
        let backend = ReqwestBackend::new(&RawClientConfig::default());
        assert!(backend.is_ok());
    }

    #[tokio::test]
    async fn test_fake_backend_returns_canned_response() {
        let backend = FakeBackend::new().with_response(
            "global.json",
            CannedResponse::Json(json!([{"key": "a", "value": "1"}])),
        );

        let result: serde_json::Value =
            backend.get_json(&source_url("global.json")).await.unwrap();

        assert_eq!(result[0]["key"], "a");
        assert_eq!(backend.requests().len(), 1);
        assert!(backend.requests()[0].contains("client_secret=secret"));
    }

    #[tokio::test]
    async fn test_fake_backend_returns_404_for_unknown_url() {
        let backend = FakeBackend::new();

        let result: GithubResult<serde_json::Value> =
            backend.get_json(&source_url("missing.json")).await;

        match result {
            Err(GithubError::ApiRequestFailed { status, url, .. }) => {
                assert_eq!(status, 404);
                assert!(!url.contains("client_secret=secret"));
            }
            _ => panic!("Expected ApiRequestFailed"),
        }
    }

    #[test]
    fn test_body_snippet_flattens_and_truncates() {
        assert_eq!(body_snippet("  Bad\n credentials \n"), "Bad credentials");
        assert_eq!(body_snippet(""), "");

        let long = "x".repeat(MAX_BODY_SNIPPET + 50);
        let snippet = body_snippet(&long);
        assert_eq!(snippet.len(), MAX_BODY_SNIPPET + 3);
        assert!(snippet.ends_with("..."));
    }

    #[tokio::test]
    async fn test_fake_backend_invalid_body() {
        let backend = FakeBackend::new()
            .with_response("bad.json", CannedResponse::Body("<html>".to_string()));

        let result: GithubResult<serde_json::Value> =
            backend.get_json(&source_url("bad.json")).await;
        assert!(matches!(result, Err(GithubError::JsonParse(_))));
    }
}
