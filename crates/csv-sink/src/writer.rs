//! Batched CSV writing logic.

use crate::error::CsvSinkError;
use csv::Writer;
use record_core::{Record, COLUMNS};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of data rows written (header excluded).
    pub rows_written: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl WriteMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Write all records to `output_path` as CSV, grouped into flushes of at most
/// `batch_size` rows.
///
/// Creates or truncates the target file and writes the header row once, then
/// every record in the order produced. An I/O error is fatal; a partial file
/// may remain and is not cleaned up.
pub fn write_records<I, P>(
    records: I,
    output_path: P,
    batch_size: usize,
) -> Result<WriteMetrics, CsvSinkError>
where
    I: IntoIterator<Item = Record>,
    P: AsRef<Path>,
{
    let start_time = Instant::now();
    let output_path = output_path.as_ref();
    let mut metrics = WriteMetrics::default();

    let file = File::create(output_path)?;
    let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    let mut writer = Writer::from_writer(buf_writer);

    writer.write_record(COLUMNS)?;

    let mut batch: Vec<Record> = Vec::new();
    for record in records {
        batch.push(record);
        if batch.len() >= batch_size {
            write_batch(&mut writer, &batch)?;
            metrics.rows_written += batch.len() as u64;
            batch.clear();

            if metrics.rows_written % 10_000 == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }
    }

    if !batch.is_empty() {
        write_batch(&mut writer, &batch)?;
        metrics.rows_written += batch.len() as u64;
    }

    writer.flush()?;
    let inner = writer
        .into_inner()
        .map_err(|e| CsvSinkError::Io(std::io::Error::other(e.to_string())))?;
    drop(inner);

    metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
    metrics.total_duration = start_time.elapsed();

    info!(
        "CSV generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
        metrics.rows_written,
        metrics.file_size_bytes,
        metrics.total_duration,
        metrics.rows_per_second()
    );

    Ok(metrics)
}

fn write_batch<W: std::io::Write>(
    writer: &mut Writer<W>,
    batch: &[Record],
) -> Result<(), CsvSinkError> {
    for record in batch {
        writer.write_record(&record.to_csv_fields())?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn record(i: u32) -> Record {
        Record {
            name: format!("Person {i}"),
            email: format!("person{i}@example.com"),
            address: format!("{i} Main Street, Springfield, IL 62704"),
            phone: Some(format!("+1-555-{i:04}")),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            national_id: format!("{i:03}-45-6789"),
            registration_date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            payment_date: None,
        }
    }

    #[test]
    fn test_header_plus_data_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        let metrics = write_records((0..7).map(record), &path, 5).unwrap();
        assert_eq!(metrics.rows_written, 7);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(
            lines[0],
            "name,email,address,phone,birth_date,national_id,registration_date,payment_date"
        );
    }

    #[test]
    fn test_empty_sequence_writes_header_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.csv");

        let metrics = write_records(std::iter::empty(), &path, 5).unwrap();
        assert_eq!(metrics.rows_written, 0);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_batch_size_does_not_change_content() {
        let temp_dir = TempDir::new().unwrap();
        let path_a = temp_dir.path().join("a.csv");
        let path_b = temp_dir.path().join("b.csv");

        write_records((0..10).map(record), &path_a, 3).unwrap();
        write_records((0..10).map(record), &path_b, 100).unwrap();

        let a = std::fs::read_to_string(&path_a).unwrap();
        let b = std::fs::read_to_string(&path_b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_embedded_commas_are_quoted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("quoted.csv");

        write_records(std::iter::once(record(1)), &path, 10).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        // The address contains commas, so the cell must be quoted.
        assert!(content.contains("\"1 Main Street, Springfield, IL 62704\""));
    }

    #[test]
    fn test_truncates_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        write_records((0..10).map(record), &path, 4).unwrap();
        write_records((0..2).map(record), &path, 4).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
    }
}
