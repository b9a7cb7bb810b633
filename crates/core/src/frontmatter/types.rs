//! Front matter types and well-known keys.

/// Front matter as a generic TOML table.
///
/// Backed by a sorted map, so serialization order is stable for identical
/// content.
pub type FrontMatterTable = toml::Table;

/// Top-level key receiving the generated description.
pub const DESCRIPTION_KEY: &str = "description";

/// Nested table holding site-specific fields.
pub const EXTRA_KEY: &str = "extra";

/// Key inside [`EXTRA_KEY`] receiving the comma-joined keywords.
pub const KEYWORDS_KEY: &str = "keywords";
