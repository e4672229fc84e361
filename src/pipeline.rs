//! Two-pass pipeline orchestration: generate into a CSV file, then load the
//! file into MySQL.

use crate::config::Config;
use anyhow::Context;
use csv_source::BatchReader;
use mysql_async::{Pool, TxOpts};
use record_generator::RecordGenerator;
use tracing::{debug, info};

/// Run the whole pipeline.
///
/// Generation always completes and the file is closed before ingestion
/// begins. Ingestion runs only when a database URL is configured; all its
/// batches share one top-level transaction, so a failure anywhere rolls back
/// the entire load while the CSV file remains on disk.
pub async fn run(config: Config) -> anyhow::Result<()> {
    anyhow::ensure!(config.batch_size > 0, "--batch-size must be at least 1");
    anyhow::ensure!(
        (0.0..=1.0).contains(&config.null_probability),
        "--null-probability must be within [0, 1]"
    );

    info!(
        "Generating {} records into {} (batch size {}, null probability {}, seed {})",
        config.row_count,
        config.output.display(),
        config.batch_size,
        config.null_probability,
        config.seed
    );

    let generator = RecordGenerator::new(config.row_count, config.null_probability, config.seed);
    let metrics = csv_sink::write_records(generator, &config.output, config.batch_size)
        .with_context(|| format!("Failed to write CSV file {}", config.output.display()))?;

    info!(
        "Generated {}: {} rows, {} bytes ({:.2} rows/sec)",
        config.output.display(),
        metrics.rows_written,
        metrics.file_size_bytes,
        metrics.rows_per_second()
    );

    let Some(database_url) = config.database_url.as_deref() else {
        info!("DATABASE_URL is not set; skipping database ingestion");
        return Ok(());
    };

    ingest(database_url, &config).await
}

/// Pass 2: bootstrap the database and table, then stream the CSV file into
/// the table batch by batch.
async fn ingest(database_url: &str, config: &Config) -> anyhow::Result<()> {
    mysql_sink::ensure_database(database_url)
        .await
        .context("Failed to create target database")?;

    let pool = Pool::from_url(database_url).context("Invalid MySQL connection URL")?;
    mysql_sink::ensure_table(&pool)
        .await
        .context("Failed to create target table")?;

    let mut conn = pool.get_conn().await.context("Failed to connect to MySQL")?;
    let mut tx = conn
        .start_transaction(TxOpts::default())
        .await
        .context("Failed to begin transaction")?;

    let reader = BatchReader::open(&config.output, config.batch_size)
        .with_context(|| format!("Failed to open CSV file {}", config.output.display()))?;

    let mut total_inserted = 0u64;
    for batch in reader {
        let batch = batch.context("Failed to read CSV batch")?;
        let inserted = mysql_sink::insert_batch(&mut tx, &batch)
            .await
            .context("Failed to insert batch")?;
        debug!("Batch of {inserted} rows staged");
        total_inserted += inserted;
    }

    tx.commit().await.context("Failed to commit transaction")?;
    drop(conn);
    pool.disconnect()
        .await
        .context("Failed to close MySQL pool")?;

    info!(
        "Inserted {} rows into `{}`",
        total_inserted,
        mysql_sink::TABLE_NAME
    );
    Ok(())
}
