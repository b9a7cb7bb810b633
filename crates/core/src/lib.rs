//! Core library for seo-helper.
//!
//! Splits `+++`-delimited markdown into front matter and body, asks a
//! chat-completion backend for a description and keywords, and merges the
//! result back into the front matter.

#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod content;
pub mod document;
pub mod error;
pub mod frontmatter;
pub mod metadata;
pub mod processor;

pub use error::SeoError;
pub use processor::{BatchSummary, DocumentProcessor, ProcessOptions, ProcessedFile};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
