use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SchemaError;

/// Closed set of field types understood by the generation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Integer,
    Float,
    String,
    Email,
    Phone,
    Date,
    DateTime,
    Boolean,
    Uuid,
    Name,
    Address,
    City,
    Country,
    Company,
    Url,
}

impl FieldType {
    /// Every registered field type, in declaration order.
    pub const ALL: [FieldType; 15] = [
        FieldType::Integer,
        FieldType::Float,
        FieldType::String,
        FieldType::Email,
        FieldType::Phone,
        FieldType::Date,
        FieldType::DateTime,
        FieldType::Boolean,
        FieldType::Uuid,
        FieldType::Name,
        FieldType::Address,
        FieldType::City,
        FieldType::Country,
        FieldType::Company,
        FieldType::Url,
    ];

    /// Lowercase tag used in serialized schemas.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::String => "string",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::Date => "date",
            FieldType::DateTime => "datetime",
            FieldType::Boolean => "boolean",
            FieldType::Uuid => "uuid",
            FieldType::Name => "name",
            FieldType::Address => "address",
            FieldType::City => "city",
            FieldType::Country => "country",
            FieldType::Company => "company",
            FieldType::Url => "url",
        }
    }

    /// Resolve a raw type tag, if it names a registered type.
    pub fn parse(value: &str) -> Option<FieldType> {
        FieldType::ALL
            .iter()
            .copied()
            .find(|field_type| field_type.as_str() == value)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declaration of one output column: name, type tag, and constraints.
///
/// The type tag is kept as a raw string so that unknown tags are rejected by
/// [`FieldSchema::validate`] rather than at deserialization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldSchema {
    /// Column name; becomes the output key.
    pub name: String,
    /// Type tag; must resolve to a [`FieldType`].
    #[serde(rename = "type")]
    pub field_type: String,
    /// Type-specific generation constraints. Unknown keys are ignored.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub constraints: Map<String, Value>,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.as_str().to_string(),
            constraints: Map::new(),
        }
    }

    /// Add one constraint, builder-style.
    pub fn constraint(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.constraints.insert(key.to_string(), value.into());
        self
    }

    /// Validate name and type tag.
    ///
    /// Pure and idempotent; returns the resolved type on success.
    pub fn validate(&self) -> Result<FieldType, SchemaError> {
        if self.name.is_empty() {
            return Err(SchemaError::EmptyName);
        }
        FieldType::parse(&self.field_type)
            .ok_or_else(|| SchemaError::UnknownType(self.field_type.clone()))
    }
}

/// Transport-agnostic generation request: row count plus ordered fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GenerateRequest {
    /// Number of rows to generate.
    pub rows: u64,
    /// Field declarations, in output column order.
    pub fields: Vec<FieldSchema>,
}
