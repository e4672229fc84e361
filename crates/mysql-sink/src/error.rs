//! Error types for the MySQL sink.

use thiserror::Error;

/// Errors that can occur during bootstrapping or ingestion.
#[derive(Error, Debug)]
pub enum MySqlSinkError {
    /// MySQL connection or query error.
    #[error("MySQL error: {0}")]
    MySql(#[from] mysql_async::Error),

    /// The connection URL did not parse.
    #[error("Invalid MySQL connection URL: {0}")]
    Url(#[from] mysql_async::UrlError),
}
