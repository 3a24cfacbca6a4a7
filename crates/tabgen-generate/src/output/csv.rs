use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::GenerationError;
use crate::generators::{GeneratedValue, Row};

/// Render rows as CSV with a header of field names in schema order.
///
/// An empty row set renders as an empty string.
pub fn format_rows(rows: &[Row]) -> Result<String, GenerationError> {
    if rows.is_empty() {
        return Ok(String::new());
    }
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_into(&mut writer, rows)?;
    let bytes = writer
        .into_inner()
        .map_err(|err| GenerationError::Io(err.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write rows to a CSV file, returning the number of bytes written.
pub fn write_rows(path: &Path, rows: &[Row]) -> Result<u64, GenerationError> {
    let file = BufWriter::new(File::create(path)?);
    let counting = CountingWriter::new(file);
    let mut writer = csv::Writer::from_writer(counting);
    if !rows.is_empty() {
        write_into(&mut writer, rows)?;
    }
    let counting = writer
        .into_inner()
        .map_err(|err| GenerationError::Io(err.into_error()))?;
    Ok(counting.bytes_written())
}

fn write_into<W: Write>(
    writer: &mut csv::Writer<W>,
    rows: &[Row],
) -> Result<(), GenerationError> {
    let header: Vec<&str> = rows[0].names().collect();
    writer.write_record(&header)?;

    for row in rows {
        let record: Vec<String> = header
            .iter()
            .map(|name| row.get(name).map(GeneratedValue::render).unwrap_or_default())
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
