//! Per-file document model.

use super::filter::filter_seo_view;
use super::splitter::split;

/// A markdown file broken into the parts the pipeline works with.
///
/// Built fresh for every file and dropped once the file is rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Raw TOML between the `+++` lines.
    pub front_matter_raw: String,
    /// Body text, ignore markers included.
    pub body: String,
    /// Body with ignore regions removed.
    pub seo_view: String,
}

impl Document {
    /// Split raw file text and compute its SEO view.
    pub fn parse(raw: &str) -> Self {
        let parts = split(raw);
        let view = filter_seo_view(&parts.body);
        Self { front_matter_raw: parts.front_matter, body: parts.body, seo_view: view.text }
    }
}
