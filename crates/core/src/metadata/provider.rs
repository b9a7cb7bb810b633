//! Metadata provider capability and its chat-backend implementation.

use thiserror::Error;

use super::backend::{BackendError, ChatBackend};
use super::prompt::{SYSTEM_PROMPT, wrap_content};
use super::types::Metadata;

/// Errors that can occur while generating metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The backend could not be reached or refused the request.
    #[error("metadata backend failed: {0}")]
    Backend(#[from] BackendError),

    /// The backend answered with something other than the expected JSON.
    #[error("backend reply is not valid metadata JSON: {source}")]
    ResponseFormat {
        #[source]
        source: serde_json::Error,
        response: String,
    },
}

/// Produces SEO metadata for the SEO view of a document.
pub trait MetadataProvider {
    fn metadata(&self, seo_view: &str) -> Result<Metadata, MetadataError>;
}

/// Provider that asks a chat backend with a fixed instruction prompt.
///
/// One instance is shared across a whole batch; it holds no mutable state.
pub struct LlmMetadataProvider<B> {
    backend: B,
}

impl<B: ChatBackend> LlmMetadataProvider<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: ChatBackend> MetadataProvider for LlmMetadataProvider<B> {
    fn metadata(&self, seo_view: &str) -> Result<Metadata, MetadataError> {
        let user = wrap_content(seo_view);
        let reply = self.backend.complete(SYSTEM_PROMPT, &user)?;
        tracing::debug!(model = self.backend.model_name(), reply = %reply, "backend reply");
        parse_metadata(&reply)
    }
}

/// Parse a backend reply as metadata JSON.
///
/// Surrounding whitespace is tolerated; anything else that is not a JSON
/// object with `description` and `keywords` is rejected.
pub fn parse_metadata(reply: &str) -> Result<Metadata, MetadataError> {
    serde_json::from_str(reply.trim()).map_err(|source| MetadataError::ResponseFormat {
        source,
        response: reply.to_string(),
    })
}
