//! Error types for the CSV source.

use thiserror::Error;

/// Errors that can occur while reading the CSV file.
///
/// Malformed rows are fatal for the whole run: the file is self-produced, so
/// any malformation indicates a pipeline bug, not bad external input.
#[derive(Error, Debug)]
pub enum CsvSourceError {
    /// CSV parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying file I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The header row is missing an expected column.
    #[error("Missing column '{0}' in CSV header")]
    MissingColumn(&'static str),

    /// A data row carried a different number of columns than the header.
    #[error("Column count mismatch in CSV row {row}: expected {expected} columns, found {found}")]
    ColumnCount {
        row: u64,
        expected: usize,
        found: usize,
    },

    /// A data row failed to reconstitute into a record.
    #[error("Malformed record in CSV row {row}: {source}")]
    Record {
        row: u64,
        #[source]
        source: record_core::RecordError,
    },
}
