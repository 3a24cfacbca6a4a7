use std::path::Path;

use crate::errors::GenerationError;
use crate::generators::Row;

/// Render rows as a pretty-printed JSON array of objects, key order equal to
/// the field order.
pub fn format_rows(rows: &[Row]) -> Result<String, GenerationError> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// Write rows to a JSON file, returning the number of bytes written.
pub fn write_rows(path: &Path, rows: &[Row]) -> Result<u64, GenerationError> {
    let content = format_rows(rows)?;
    std::fs::write(path, &content)?;
    Ok(content.len() as u64)
}
