use std::collections::HashSet;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use tabgen_core::{FieldSchema, SchemaError};

use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorRegistry, Row};

/// Inclusive row-count bounds enforced by [`GenerationEngine::generate`].
pub const MIN_ROWS: u64 = 1;
pub const MAX_ROWS: u64 = 1000;

/// Orchestrates generation: validates field schemas, binds one generator per
/// field, and assembles rows in schema order.
pub struct GenerationEngine {
    fields: Vec<FieldSchema>,
    generators: Vec<Box<dyn Generator>>,
    rng: ChaCha8Rng,
}

impl GenerationEngine {
    /// Build an engine with an entropy-seeded random source.
    pub fn new(fields: Vec<FieldSchema>) -> Result<Self, GenerationError> {
        Self::with_rng(fields, ChaCha8Rng::from_os_rng())
    }

    /// Build an engine with a fixed seed for reproducible output.
    pub fn with_seed(fields: Vec<FieldSchema>, seed: u64) -> Result<Self, GenerationError> {
        Self::with_rng(fields, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Build an engine around an explicit random source.
    ///
    /// Fails fast: every field is validated and resolved against the registry
    /// before any row is generated, and duplicate field names are rejected.
    pub fn with_rng(fields: Vec<FieldSchema>, rng: ChaCha8Rng) -> Result<Self, GenerationError> {
        let registry = GeneratorRegistry::new();
        let mut seen = HashSet::new();
        let mut generators = Vec::with_capacity(fields.len());
        for field in &fields {
            field.validate()?;
            if !seen.insert(field.name.clone()) {
                return Err(SchemaError::DuplicateName(field.name.clone()).into());
            }
            generators.push(registry.build(field)?);
        }
        Ok(Self {
            fields,
            generators,
            rng,
        })
    }

    /// Field schemas this engine was built with, in output order.
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Generate a single row in schema order.
    ///
    /// Any generator failure aborts the row; there is no partial recovery.
    pub fn generate_row(&mut self) -> Result<Row, GenerationError> {
        let mut row = Row::with_capacity(self.fields.len());
        for (field, generator) in self.fields.iter().zip(&self.generators) {
            let value = generator.generate(&mut self.rng)?;
            row.push(field.name.clone(), value);
        }
        Ok(row)
    }

    /// Generate `rows` independent rows.
    ///
    /// The batch is all-or-nothing: the first failing row discards the whole
    /// result.
    pub fn generate(&mut self, rows: u64) -> Result<Vec<Row>, GenerationError> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&rows) {
            return Err(GenerationError::RowCount(rows));
        }
        let start = Instant::now();
        info!(fields = self.fields.len(), rows, "generation started");
        let mut out = Vec::with_capacity(rows as usize);
        for _ in 0..rows {
            out.push(self.generate_row()?);
        }
        info!(
            rows = out.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "generation completed"
        );
        Ok(out)
    }
}
