//! Injection of generated metadata into front matter.

use super::types::{DESCRIPTION_KEY, EXTRA_KEY, FrontMatterTable, KEYWORDS_KEY};
use crate::metadata::Metadata;
use thiserror::Error;
use toml::Value;

/// Errors raised when the front matter has an unexpected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("front matter field 'extra' is a {found}, expected a table")]
    ExtraNotTable { found: &'static str },
}

/// Merge metadata into a front matter table.
///
/// Sets `description` at the top level and `extra.keywords` to the
/// comma-joined keyword list, creating `extra` when absent. Every other key
/// is left as it was.
pub fn merge(
    mut table: FrontMatterTable,
    metadata: &Metadata,
) -> Result<FrontMatterTable, SchemaError> {
    if let Some(extra) = table.get(EXTRA_KEY)
        && !extra.is_table()
    {
        return Err(SchemaError::ExtraNotTable { found: extra.type_str() });
    }

    table.insert(DESCRIPTION_KEY.to_string(), Value::String(metadata.description.clone()));

    if let Value::Table(extra) =
        table.entry(EXTRA_KEY).or_insert(Value::Table(FrontMatterTable::new()))
    {
        extra.insert(KEYWORDS_KEY.to_string(), Value::String(metadata.keywords.join(",")));
    }

    Ok(table)
}
