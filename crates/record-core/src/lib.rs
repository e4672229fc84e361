//! Core data model shared by every stage of the pii-populate pipeline.
//!
//! A [`Record`] is one synthetic person: eight fixed fields, two of them
//! optional. The same field order is used for the CSV file and the MySQL
//! table, so [`COLUMNS`] is the single source of truth for both.

pub mod record;

pub use record::{normalize_address, Record, RecordError, COLUMNS, DATE_FORMAT};
