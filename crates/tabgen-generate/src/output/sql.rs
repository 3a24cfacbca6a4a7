use std::path::Path;

use crate::errors::GenerationError;
use crate::generators::{GeneratedValue, Row};

/// Table name used when the caller does not supply one.
pub const DEFAULT_TABLE: &str = "synthetic_data";

/// Render rows as one `INSERT INTO` statement per row.
///
/// An empty row set renders as an empty string.
pub fn format_rows(rows: &[Row], table: &str) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let columns: Vec<&str> = rows[0].names().collect();
    let columns_joined = columns.join(", ");

    let statements: Vec<String> = rows
        .iter()
        .map(|row| {
            let values: Vec<String> = columns
                .iter()
                .map(|name| {
                    row.get(name)
                        .map(sql_literal)
                        .unwrap_or_else(|| "NULL".to_string())
                })
                .collect();
            format!(
                "INSERT INTO {table} ({columns_joined}) VALUES ({});",
                values.join(", ")
            )
        })
        .collect();
    statements.join("\n")
}

/// Write rows to a SQL file, returning the number of bytes written.
pub fn write_rows(path: &Path, rows: &[Row], table: &str) -> Result<u64, GenerationError> {
    let content = format_rows(rows, table);
    std::fs::write(path, &content)?;
    Ok(content.len() as u64)
}

fn sql_literal(value: &GeneratedValue) -> String {
    match value {
        GeneratedValue::Null => "NULL".to_string(),
        GeneratedValue::Bool(true) => "TRUE".to_string(),
        GeneratedValue::Bool(false) => "FALSE".to_string(),
        GeneratedValue::Int(value) => value.to_string(),
        GeneratedValue::Float(value) => value.to_string(),
        GeneratedValue::Text(value) => format!("'{}'", value.replace('\'', "''")),
    }
}
