//! Idempotent database and table bootstrapping.

use crate::error::MySqlSinkError;
use mysql_async::prelude::*;
use mysql_async::{Opts, OptsBuilder, Pool};
use tracing::{info, warn};

/// Name of the target table.
pub const TABLE_NAME: &str = "fake_records";

/// Table DDL. Column set, order, and nullability mirror the record fields;
/// the surrogate `id` is assigned by MySQL on insert.
const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS `fake_records` (
    `id` INT AUTO_INCREMENT PRIMARY KEY,
    `name` VARCHAR(255) NOT NULL,
    `email` VARCHAR(255) NOT NULL,
    `address` TEXT NOT NULL,
    `phone` VARCHAR(50) DEFAULT NULL,
    `birth_date` DATE NOT NULL,
    `national_id` VARCHAR(50) NOT NULL,
    `registration_date` DATE NOT NULL,
    `payment_date` DATE DEFAULT NULL
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4";

/// Create the target database if absent.
///
/// Connects with the database name stripped from the URL, so the statement
/// succeeds even on a fresh server. When the URL names no database this is a
/// no-op (ambiguous configuration, not an error); later DDL will fail
/// server-side if no schema is ever selected.
pub async fn ensure_database(database_url: &str) -> Result<(), MySqlSinkError> {
    let opts = Opts::from_url(database_url)?;
    let Some(db_name) = opts.db_name().map(str::to_string) else {
        warn!("Connection URL names no database; skipping database bootstrap");
        return Ok(());
    };

    let server_opts = OptsBuilder::from_opts(opts).db_name(None::<String>);
    let pool = Pool::new(server_opts);
    let mut conn = pool.get_conn().await?;

    info!("Creating database `{db_name}` if absent");
    conn.query_drop(format!(
        "CREATE DATABASE IF NOT EXISTS `{db_name}` \
         CHARACTER SET utf8mb4 COLLATE utf8mb4_unicode_ci"
    ))
    .await?;

    drop(conn);
    pool.disconnect().await?;
    Ok(())
}

/// Create the target table if absent.
pub async fn ensure_table(pool: &Pool) -> Result<(), MySqlSinkError> {
    let mut conn = pool.get_conn().await?;
    info!("Creating table `{TABLE_NAME}` if absent");
    conn.query_drop(CREATE_TABLE_SQL).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use record_core::COLUMNS;

    #[test]
    fn test_create_table_covers_every_column() {
        for column in COLUMNS {
            assert!(
                CREATE_TABLE_SQL.contains(&format!("`{column}`")),
                "missing column {column}"
            );
        }
    }

    #[test]
    fn test_create_table_is_idempotent_ddl() {
        assert!(CREATE_TABLE_SQL.starts_with("CREATE TABLE IF NOT EXISTS"));
        assert!(!CREATE_TABLE_SQL.contains("DROP"));
        assert!(!CREATE_TABLE_SQL.contains("ALTER"));
    }

    #[test]
    fn test_nullability_matches_record_shape() {
        assert!(CREATE_TABLE_SQL.contains("`phone` VARCHAR(50) DEFAULT NULL"));
        assert!(CREATE_TABLE_SQL.contains("`payment_date` DATE DEFAULT NULL"));
        assert!(CREATE_TABLE_SQL.contains("`name` VARCHAR(255) NOT NULL"));
        assert!(CREATE_TABLE_SQL.contains("`birth_date` DATE NOT NULL"));
    }
}
