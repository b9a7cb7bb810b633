//! SEO metadata generation through a chat-completion backend.

pub mod backend;
pub mod prompt;
pub mod provider;
pub mod types;

pub use backend::{ArkBackend, BackendError, ChatBackend};
pub use prompt::{SENTINEL, SYSTEM_PROMPT, wrap_content};
pub use provider::{LlmMetadataProvider, MetadataError, MetadataProvider, parse_metadata};
pub use types::Metadata;
