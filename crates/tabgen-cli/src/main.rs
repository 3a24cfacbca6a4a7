mod prompt;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tabgen_core::{FieldSchema, GenerateRequest};
use tabgen_generate::output::{csv, json, sql};
use tabgen_generate::{GenerationEngine, GenerationError};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid request file: {0}")]
    Request(#[from] serde_json::Error),
    #[error("prompt error: {0}")]
    Prompt(#[from] prompt::PromptError),
}

#[derive(Parser, Debug)]
#[command(name = "tabgen", version, about = "Synthetic tabular data generator")]
struct Cli {
    /// Number of rows to generate (1-1000).
    #[arg(short, long)]
    rows: u64,
    /// Output file path.
    #[arg(short, long)]
    output: PathBuf,
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
    /// Table name for SQL output.
    #[arg(short, long, default_value = sql::DEFAULT_TABLE)]
    table: String,
    /// Read fields from a JSON request file instead of prompting.
    #[arg(long, value_name = "PATH")]
    fields: Option<PathBuf>,
    /// Seed for deterministic output.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
    Sql,
}

fn main() -> Result<(), CliError> {
    init_logging();
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let fields = match &cli.fields {
        Some(path) => load_fields(path)?,
        None => prompt::interactive_fields()?,
    };

    let mut engine = match cli.seed {
        Some(seed) => GenerationEngine::with_seed(fields, seed)?,
        None => GenerationEngine::new(fields)?,
    };
    let rows = engine.generate(cli.rows)?;

    let bytes = match cli.format {
        OutputFormat::Csv => csv::write_rows(&cli.output, &rows)?,
        OutputFormat::Json => json::write_rows(&cli.output, &rows)?,
        OutputFormat::Sql => sql::write_rows(&cli.output, &rows, &cli.table)?,
    };
    info!(
        rows = rows.len(),
        bytes,
        path = %cli.output.display(),
        "output written"
    );
    Ok(())
}

/// Load fields from a request file: either a full `GenerateRequest` object or
/// a bare array of field specs. The `--rows` flag always wins over the file's
/// row count.
fn load_fields(path: &Path) -> Result<Vec<FieldSchema>, CliError> {
    let contents = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&contents)?;
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        let request: GenerateRequest = serde_json::from_value(value)?;
        Ok(request.fields)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
