//! Markdown document splitting and SEO view extraction.
//!
//! This module provides functionality to:
//! - Split raw file text into a `+++` front matter block and a body
//! - Derive the SEO view of a body, skipping `SEO_IGNORE` regions

pub mod filter;
pub mod splitter;
pub mod types;

pub use filter::{SEO_IGNORE, SeoView, filter_seo_view};
pub use splitter::{FRONT_MATTER_DELIMITER, Split, split};
pub use types::Document;
