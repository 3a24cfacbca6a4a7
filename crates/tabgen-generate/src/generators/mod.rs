use std::collections::HashMap;

use rand::RngCore;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use tabgen_core::{FieldSchema, FieldType};

use crate::constraints::Constraints;
use crate::errors::GenerationError;

mod primitives;
mod semantic;

/// Value produced by a generator for one field in one row.
///
/// The engine never produces `Null`; the variant exists for the output
/// formatters, which must render missing values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeneratedValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl GeneratedValue {
    pub fn is_null(&self) -> bool {
        matches!(self, GeneratedValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            GeneratedValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            GeneratedValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GeneratedValue::Int(value) => Some(*value as f64),
            GeneratedValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GeneratedValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Plain-text rendering used by the CSV formatter.
    pub fn render(&self) -> String {
        match self {
            GeneratedValue::Null => String::new(),
            GeneratedValue::Bool(value) => value.to_string(),
            GeneratedValue::Int(value) => value.to_string(),
            GeneratedValue::Float(value) => value.to_string(),
            GeneratedValue::Text(value) => value.clone(),
        }
    }
}

/// One generated record: field name to value, in schema order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    entries: Vec<(String, GeneratedValue)>,
}

impl Row {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, name: String, value: GeneratedValue) {
        self.entries.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&GeneratedValue> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, value)| value)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GeneratedValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Per-field value generation strategy.
///
/// A generator is built once per field with that field's constraints and
/// carries no other state: repeated `generate` calls are independent and may
/// not observe one another.
pub trait Generator: Send + Sync {
    fn field_type(&self) -> FieldType;

    fn generate(&self, rng: &mut dyn RngCore) -> Result<GeneratedValue, GenerationError>;
}

pub type GeneratorFactory = fn(Constraints) -> Box<dyn Generator>;

/// Static, closed mapping from field type to generator factory.
pub struct GeneratorRegistry {
    factories: HashMap<FieldType, GeneratorFactory>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            factories: HashMap::new(),
        };
        primitives::register(&mut registry);
        semantic::register(&mut registry);
        registry
    }

    pub fn register(&mut self, field_type: FieldType, factory: GeneratorFactory) {
        self.factories.insert(field_type, factory);
    }

    /// Build the generator for a field, binding its constraints.
    ///
    /// Re-validates the schema defensively; construction itself never fails.
    pub fn build(&self, field: &FieldSchema) -> Result<Box<dyn Generator>, GenerationError> {
        let field_type = field.validate()?;
        let factory = self.factories.get(&field_type).ok_or_else(|| {
            GenerationError::UnknownGenerator(field_type.as_str().to_string())
        })?;
        Ok(factory(Constraints::new(field.constraints.clone())))
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
