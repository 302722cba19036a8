// mod.rs - BOM-signed CSV sink

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent).map_err(|e| {
            format!(
                "Failed to create parent directory '{}': {}",
                parent.display(),
                e
            )
        })?;
    }
    Ok(())
}

/// CSV output stream. The file is stamped with a UTF-8 byte-order mark so
/// spreadsheet applications pick the right encoding, then wrapped in a CSV
/// writer using standard quoting rules.
pub struct CsvSink {
    writer: csv::Writer<BufWriter<File>>,
    path: String,
}

impl CsvSink {
    pub fn create(path: &str) -> Result<Self, String> {
        ensure_parent_dir(path)?;
        let file = File::create(path)
            .map_err(|e| format!("Failed to create output file '{}': {}", path, e))?;

        let mut buffered = BufWriter::new(file);
        buffered
            .write_all("\u{FEFF}".as_bytes())
            .map_err(|e| format!("Failed to write byte-order mark to '{}': {}", path, e))?;

        let writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(buffered);

        Ok(Self {
            writer,
            path: path.to_string(),
        })
    }

    pub fn write_row(&mut self, row: &[String]) -> Result<(), String> {
        self.writer
            .write_record(row)
            .map_err(|e| format!("Failed to write CSV record to '{}': {}", self.path, e))
    }

    /// Flush everything down to the file. Called once at the end of the pass;
    /// an early drop without finish still closes the file.
    pub fn finish(self) -> Result<(), String> {
        let mut buffered = self
            .writer
            .into_inner()
            .map_err(|e| format!("Failed to flush output: {}", e))?;
        buffered
            .flush()
            .map_err(|e| format!("Failed to flush output: {}", e))
    }
}
