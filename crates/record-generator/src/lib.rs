//! Lazy generation of synthetic personal records.
//!
//! [`RecordGenerator`] is a seeded, finite, non-restartable iterator: it
//! produces exactly the requested number of [`record_core::Record`]s, one at
//! a time, so peak memory stays bounded by whatever batch size the consumer
//! uses. Field values come from the [`synthesizer`] module; the two optional
//! fields (`phone`, `payment_date`) are independently rendered absent with a
//! configurable probability.
//!
//! # Example
//!
//! ```rust
//! use record_generator::RecordGenerator;
//!
//! let records: Vec<_> = RecordGenerator::new(3, 0.0, 42).collect();
//! assert_eq!(records.len(), 3);
//! assert!(records.iter().all(|r| r.phone.is_some()));
//! ```

pub mod generator;
pub mod synthesizer;

pub use generator::RecordGenerator;
