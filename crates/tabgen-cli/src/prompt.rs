//! Interactive field setup for the CLI.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use tabgen_core::{FieldSchema, FieldType};

const MIN_FIELDS: usize = 1;
const MAX_FIELDS: usize = 10;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid {what}: '{input}'")]
    Invalid { what: &'static str, input: String },
}

/// Prompt for a field list on stdin, mirroring the flags-free setup flow:
/// field count, then per field a name, a type, and type-specific constraints.
pub fn interactive_fields() -> Result<Vec<FieldSchema>, PromptError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    read_fields(&mut input, &mut output)
}

fn read_fields(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Vec<FieldSchema>, PromptError> {
    writeln!(output, "Supported field types:")?;
    let tags: Vec<&str> = FieldType::ALL.iter().map(|t| t.as_str()).collect();
    writeln!(output, "  {}", tags.join(", "))?;
    writeln!(output)?;

    let count = loop {
        let answer = ask(input, output, "How many fields? (1-10): ")?;
        match answer.parse::<usize>() {
            Ok(count) if (MIN_FIELDS..=MAX_FIELDS).contains(&count) => break count,
            _ => writeln!(output, "Please enter a number between 1 and 10")?,
        }
    };

    let mut fields = Vec::with_capacity(count);
    for index in 0..count {
        writeln!(output, "\nField {}:", index + 1)?;
        let name = loop {
            let name = ask(input, output, "  Name: ")?;
            if name.is_empty() {
                writeln!(output, "  Field name cannot be empty")?;
            } else {
                break name;
            }
        };
        let field_type = loop {
            let answer = ask(input, output, "  Type: ")?.to_lowercase();
            match FieldType::parse(&answer) {
                Some(field_type) => break field_type,
                None => writeln!(output, "  Invalid type. Choose from: {}", tags.join(", "))?,
            }
        };
        let field = read_constraints(input, output, FieldSchema::new(name, field_type), field_type)?;
        fields.push(field);
    }

    Ok(fields)
}

fn read_constraints(
    input: &mut impl BufRead,
    output: &mut impl Write,
    field: FieldSchema,
    field_type: FieldType,
) -> Result<FieldSchema, PromptError> {
    let field = match field_type {
        FieldType::Integer => {
            let field = optional_i64(input, output, field, "min", "  Min value (default 0): ")?;
            optional_i64(input, output, field, "max", "  Max value (default 1000): ")?
        }
        FieldType::Float => {
            let field = optional_f64(input, output, field, "min", "  Min value (default 0.0): ")?;
            let field =
                optional_f64(input, output, field, "max", "  Max value (default 1000.0): ")?;
            optional_i64(
                input,
                output,
                field,
                "precision",
                "  Decimal precision (default 2): ",
            )?
        }
        FieldType::String => {
            optional_i64(input, output, field, "length", "  Length (default 10): ")?
        }
        FieldType::Date => {
            let field = optional_str(
                input,
                output,
                field,
                "start",
                "  Start date (YYYY-MM-DD, default 2020-01-01): ",
            )?;
            optional_str(
                input,
                output,
                field,
                "end",
                "  End date (YYYY-MM-DD, default 2024-12-31): ",
            )?
        }
        FieldType::DateTime => {
            let field = optional_str(
                input,
                output,
                field,
                "start",
                "  Start datetime (YYYY-MM-DD HH:MM:SS, default 2020-01-01 00:00:00): ",
            )?;
            optional_str(
                input,
                output,
                field,
                "end",
                "  End datetime (YYYY-MM-DD HH:MM:SS, default 2024-12-31 23:59:59): ",
            )?
        }
        FieldType::Email => optional_str(
            input,
            output,
            field,
            "domain",
            "  Email domain (optional, e.g. company.com): ",
        )?,
        FieldType::Name => optional_str(
            input,
            output,
            field,
            "type",
            "  Name type (full/first/last, default full): ",
        )?,
        FieldType::Boolean => optional_f64(
            input,
            output,
            field,
            "true_probability",
            "  Probability of TRUE (0.0-1.0, default 0.5): ",
        )?,
        _ => field,
    };

    Ok(field)
}

fn optional_i64(
    input: &mut impl BufRead,
    output: &mut impl Write,
    field: FieldSchema,
    key: &str,
    question: &str,
) -> Result<FieldSchema, PromptError> {
    let answer = ask(input, output, question)?;
    if answer.is_empty() {
        return Ok(field);
    }
    let value = answer.parse::<i64>().map_err(|_| PromptError::Invalid {
        what: "integer",
        input: answer,
    })?;
    Ok(field.constraint(key, value))
}

fn optional_f64(
    input: &mut impl BufRead,
    output: &mut impl Write,
    field: FieldSchema,
    key: &str,
    question: &str,
) -> Result<FieldSchema, PromptError> {
    let answer = ask(input, output, question)?;
    if answer.is_empty() {
        return Ok(field);
    }
    let value = answer.parse::<f64>().map_err(|_| PromptError::Invalid {
        what: "number",
        input: answer,
    })?;
    Ok(field.constraint(key, value))
}

fn optional_str(
    input: &mut impl BufRead,
    output: &mut impl Write,
    field: FieldSchema,
    key: &str,
    question: &str,
) -> Result<FieldSchema, PromptError> {
    let answer = ask(input, output, question)?;
    if answer.is_empty() {
        return Ok(field);
    }
    Ok(field.constraint(key, answer))
}

fn ask(
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
) -> Result<String, PromptError> {
    write!(output, "{question}")?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}
