use thiserror::Error;

/// Validation errors for field schemas.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// Field name is empty.
    #[error("field name must be a non-empty string")]
    EmptyName,
    /// Type tag is not one of the registered field types.
    #[error("invalid field type '{0}'")]
    UnknownType(String),
    /// Two fields in the same request share a name.
    #[error("duplicate field name '{0}'")]
    DuplicateName(String),
}
