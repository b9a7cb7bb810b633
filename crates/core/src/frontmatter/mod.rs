//! Front matter parsing, merging, and serialization.
//!
//! This module provides functionality to:
//! - Parse TOML front matter into a generic table
//! - Merge generated SEO metadata into that table
//! - Serialize the table back and reassemble the document

pub mod merger;
pub mod parser;
pub mod serializer;
pub mod types;

pub use merger::{SchemaError, merge};
pub use parser::{FrontMatterError, parse};
pub use serializer::{render_document, serialize};
pub use types::{DESCRIPTION_KEY, EXTRA_KEY, FrontMatterTable, KEYWORDS_KEY};
