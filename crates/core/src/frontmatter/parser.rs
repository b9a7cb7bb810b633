//! Front matter parsing from raw TOML text.

use super::types::FrontMatterTable;
use thiserror::Error;

/// Errors that can occur while reading or writing front matter.
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("invalid TOML front matter: {0}")]
    InvalidToml(#[from] toml::de::Error),

    #[error("failed to serialize front matter: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Parse the text found between the `+++` delimiters.
///
/// Blank input yields an empty table.
pub fn parse(raw: &str) -> Result<FrontMatterTable, FrontMatterError> {
    if raw.trim().is_empty() {
        return Ok(FrontMatterTable::new());
    }
    Ok(toml::from_str(raw)?)
}
