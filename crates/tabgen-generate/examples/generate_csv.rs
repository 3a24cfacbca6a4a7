use tabgen_core::{FieldSchema, FieldType};
use tabgen_generate::GenerationEngine;
use tabgen_generate::output::csv;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fields = vec![
        FieldSchema::new("id", FieldType::Integer)
            .constraint("min", 1)
            .constraint("max", 1000),
        FieldSchema::new("name", FieldType::Name),
        FieldSchema::new("email", FieldType::Email).constraint("domain", "example.com"),
        FieldSchema::new("signup", FieldType::Date),
        FieldSchema::new("active", FieldType::Boolean),
    ];

    let mut engine = GenerationEngine::with_seed(fields, 42)?;
    let rows = engine.generate(10)?;
    println!("{}", csv::format_rows(&rows)?);
    Ok(())
}
