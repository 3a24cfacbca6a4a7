//! Core contracts for tabgen.
//!
//! This crate defines the field schema model and the request shape shared by
//! the generation engine and its front-ends.

pub mod error;
pub mod schema;

pub use error::SchemaError;
pub use schema::{FieldSchema, FieldType, GenerateRequest};
