//! MySQL side of the pipeline: idempotent schema bootstrapping and batched
//! parameterized inserts.
//!
//! Bootstrapping (`ensure_database`, `ensure_table`) is safe to run on every
//! invocation; it only ever issues `IF NOT EXISTS` DDL and never drops or
//! alters existing structures. Ingestion is a pure append: one multi-row
//! INSERT per batch, with transaction scope decided by the caller.

pub mod bootstrap;
pub mod error;
pub mod insert;

pub use bootstrap::{ensure_database, ensure_table, TABLE_NAME};
pub use error::MySqlSinkError;
pub use insert::insert_batch;
