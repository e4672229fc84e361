//! Batched CSV reading logic.

use crate::error::CsvSourceError;
use csv::{Reader, ReaderBuilder, StringRecord};
use record_core::{Record, COLUMNS};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Reads the CSV file back as batches of records.
///
/// The header is parsed once at open time and each expected column name is
/// resolved to its position, so the reader tolerates column reordering but
/// treats a missing column as a hard error. Iteration yields
/// `Result<Vec<Record>, CsvSourceError>` batches of at most the configured
/// size; the final batch may be smaller. After the first error the iterator
/// is exhausted.
pub struct BatchReader {
    reader: Reader<File>,
    /// Position of each [`COLUMNS`] entry within the file's header.
    positions: [usize; 8],
    header_len: usize,
    batch_size: usize,
    /// 1-based data row counter, for error reporting.
    row: u64,
    done: bool,
}

impl BatchReader {
    /// Open the file and parse its header.
    pub fn open<P: AsRef<Path>>(path: P, batch_size: usize) -> Result<Self, CsvSourceError> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

        let headers = reader.headers()?.clone();
        let mut positions = [0usize; 8];
        for (i, column) in COLUMNS.into_iter().enumerate() {
            positions[i] = headers
                .iter()
                .position(|h| h == column)
                .ok_or(CsvSourceError::MissingColumn(column))?;
        }
        debug!("CSV header resolved: {headers:?}");

        Ok(Self {
            reader,
            positions,
            header_len: headers.len(),
            batch_size,
            row: 0,
            done: false,
        })
    }

    fn next_record(&mut self) -> Result<Option<Record>, CsvSourceError> {
        let mut raw = StringRecord::new();
        if !self.reader.read_record(&mut raw)? {
            return Ok(None);
        }
        self.row += 1;

        if raw.len() != self.header_len {
            return Err(CsvSourceError::ColumnCount {
                row: self.row,
                expected: self.header_len,
                found: raw.len(),
            });
        }

        let fields: Vec<&str> = self.positions.iter().map(|&i| &raw[i]).collect();
        let record = Record::from_csv_fields(&fields).map_err(|source| CsvSourceError::Record {
            row: self.row,
            source,
        })?;
        Ok(Some(record))
    }
}

impl Iterator for BatchReader {
    type Item = Result<Vec<Record>, CsvSourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut batch: Vec<Record> = Vec::new();
        loop {
            match self.next_record() {
                Ok(Some(record)) => {
                    batch.push(record);
                    if batch.len() >= self.batch_size {
                        return Some(Ok(batch));
                    }
                }
                Ok(None) => {
                    self.done = true;
                    return if batch.is_empty() {
                        None
                    } else {
                        Some(Ok(batch))
                    };
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
