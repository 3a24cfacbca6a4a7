use serde_json::{Map, Value};

/// Constraint mapping bound to a generator at construction.
///
/// Lookups are lazy: keys are interpreted inside `generate()`, and unknown or
/// mistyped keys fall back to the generator's defaults.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    map: Map<String, Value>,
}

impl Constraints {
    pub fn new(map: Map<String, Value>) -> Self {
        Self { map }
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.map.get(key).and_then(Value::as_i64)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.map.get(key).and_then(Value::as_f64)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.map.get(key).and_then(Value::as_bool)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.map.get(key).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for Constraints {
    fn from(map: Map<String, Value>) -> Self {
        Self::new(map)
    }
}
