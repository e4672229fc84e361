//! Error types for the CSV sink.

use thiserror::Error;

/// Errors that can occur while writing the CSV file.
#[derive(Error, Debug)]
pub enum CsvSinkError {
    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying file I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
