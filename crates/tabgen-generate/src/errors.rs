use thiserror::Error;

use tabgen_core::SchemaError;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid field: {0}")]
    InvalidField(#[from] SchemaError),
    #[error("no generator registered for field type '{0}'")]
    UnknownGenerator(String),
    #[error("invalid constraint: {0}")]
    Constraint(String),
    #[error("invalid date bounds: {0}")]
    DateParse(String),
    #[error("row count must be between 1 and 1000, got {0}")]
    RowCount(u64),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
