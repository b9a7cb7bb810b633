//! Front matter serialization back to markdown.

use super::parser::FrontMatterError;
use super::types::FrontMatterTable;
use crate::document::FRONT_MATTER_DELIMITER;

/// Serialize a front matter table to TOML text (without delimiters).
///
/// Keys come out sorted, so identical tables always produce identical text.
pub fn serialize(table: &FrontMatterTable) -> Result<String, FrontMatterError> {
    Ok(toml::to_string(table)?)
}

/// Reassemble a document from a front matter table and its body.
pub fn render_document(
    table: &FrontMatterTable,
    body: &str,
) -> Result<String, FrontMatterError> {
    let toml = serialize(table)?;
    Ok(format!("{FRONT_MATTER_DELIMITER}\n{toml}{FRONT_MATTER_DELIMITER}\n{body}"))
}
