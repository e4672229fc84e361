//! Chunked CSV writer for the generation pass.
//!
//! Consumes a lazy record sequence and appends it to a CSV file in fixed-size
//! batches. Batching affects only I/O granularity; the file content is
//! identical for any batch size.

pub mod error;
pub mod writer;

pub use error::CsvSinkError;
pub use writer::{write_records, WriteMetrics};
