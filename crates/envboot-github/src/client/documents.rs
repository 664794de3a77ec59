//! Variable document retrieval.

use envboot_core::{SourceUrl, VariableRecord};

use crate::error::GithubResult;
use crate::http::HttpBackend;

use super::RawContentClient;

impl<B: HttpBackend> RawContentClient<B> {
    /// Fetch and decode one variable document.
    ///
    /// The body must be a JSON array of `{key, value}` objects; anything else
    /// fails the whole document.
    pub(crate) async fn fetch_document(&self, url: &SourceUrl) -> GithubResult<Vec<VariableRecord>> {
        self.backend.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::source_url;
    use crate::error::GithubError;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_document() {
        let backend = FakeBackend::new().with_response(
            "prod/global.json",
            CannedResponse::Json(json!([
                {"key": "host", "value": "api.local"},
                {"key": "port", "value": 8443, "enabled": true}
            ])),
        );
        let client = RawContentClient::with_backend(backend);

        let records = client
            .fetch_document(&source_url("envs/{0}/global.json"))
            .await
            .unwrap();

        assert_eq!(
            records,
            vec![
                VariableRecord::new("host", "api.local"),
                VariableRecord::new("port", "8443"),
            ]
        );
        assert_eq!(
            client.backend.requests(),
            vec![
                "https://raw.githubusercontent.com/acme/cfg/master/envs/prod/global.json?client_id=id-123&client_secret=s3cret"
                    .to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_document_rejects_object_body() {
        let backend = FakeBackend::new().with_response(
            "global.json",
            CannedResponse::Json(json!({"key": "host", "value": "api.local"})),
        );
        let client = RawContentClient::with_backend(backend);

        let result = client.fetch_document(&source_url("global.json")).await;
        assert!(matches!(result, Err(GithubError::JsonParse(_))));
    }
}
