// reader.rs - Decoding CSV source

use crate::core::encoding::decode_utf8;
use std::fs::File;

/// CSV input stream. Records are read as raw bytes and every field is decoded
/// through the Windows-1252 fallback decoder, so malformed UTF-8 in the
/// export degrades per offending span instead of failing the read.
pub struct CsvSource {
    reader: csv::Reader<File>,
}

impl CsvSource {
    pub fn open(path: &str) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open input file '{}': {}", path, e))?;

        // has_headers(false): the header row is plain data here, the
        // transcode pass decides what to do with row 0.
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        Ok(Self { reader })
    }

    /// Consume the source into an owning row iterator.
    pub fn rows(self) -> RowIter {
        RowIter {
            reader: self.reader,
        }
    }
}

/// Owning iterator over decoded rows.
pub struct RowIter {
    reader: csv::Reader<File>,
}

impl Iterator for RowIter {
    type Item = Result<Vec<String>, String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = csv::ByteRecord::new();

        match self.reader.read_byte_record(&mut record) {
            Ok(true) => Some(Ok(record.iter().map(decode_utf8).collect())),
            Ok(false) => None,
            Err(e) => Some(Err(format!("Failed to read CSV record: {}", e))),
        }
    }
}
