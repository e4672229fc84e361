//! Chunked CSV reader for the ingestion pass.
//!
//! Re-opens the file produced by the CSV sink and yields the same logical
//! record sequence in batches of at most the configured size, reconstituting
//! absent optional fields from their empty textual form. The read batch size
//! is independent of the batch size used to write the file.

pub mod error;
pub mod reader;

pub use error::CsvSourceError;
pub use reader::BatchReader;
