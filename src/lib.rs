//! pii-populate: synthetic personal records, exported to CSV and batch-loaded
//! into MySQL.
//!
//! The pipeline runs in two sequential passes with the CSV file as the
//! durable handoff point:
//!
//! ```text
//! RecordGenerator ──► csv-sink ──► fake_records.csv     (pass 1)
//!                                        │
//!           ensure_database/ensure_table │
//!                                        ▼
//!                    csv-source ──► mysql-sink          (pass 2)
//! ```
//!
//! Pass 2 runs only when a database URL is configured; without one the run
//! still succeeds after pass 1.

pub mod config;
pub mod pipeline;

pub use config::Config;
pub use pipeline::run;
