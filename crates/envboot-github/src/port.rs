//! Port trait implementation for `RawContentClient`.
//!
//! This module implements the core-owned `VariableSourcePort` trait,
//! converting internal errors to core port errors.

use async_trait::async_trait;
use envboot_core::{SourcePortError, SourcePortResult, SourceUrl, VariableRecord, VariableSourcePort};

use crate::client::RawContentClient;
use crate::error::GithubError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `GithubError` to core `SourcePortError`.
fn map_error(err: GithubError) -> SourcePortError {
    match err {
        GithubError::ApiRequestFailed { status, url, body } => match status {
            404 => SourcePortError::NotFound { url },
            401 | 403 => SourcePortError::AuthRejected {
                status,
                url,
                detail: body,
            },
            429 => SourcePortError::RateLimited { url },
            _ => SourcePortError::Status {
                status,
                url,
                detail: body,
            },
        },
        GithubError::Network(e) => SourcePortError::Network {
            message: e.to_string(),
        },
        GithubError::JsonParse(e) => SourcePortError::MalformedDocument {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> VariableSourcePort for RawContentClient<B> {
    async fn fetch_variables(&self, url: &SourceUrl) -> SourcePortResult<Vec<VariableRecord>> {
        self.fetch_document(url).await.map_err(map_error)
    }
}
