//! Error types for the star-schema store.

use thiserror::Error;

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open or create the database (S001).
    #[error("[S001] Store connection failed: {0}")]
    ConnectionError(String),

    /// Schema migration failed (S002).
    #[error("[S002] Store migration failed: {0}")]
    MigrationError(String),

    /// SQL query failed (S003).
    #[error("[S003] Store query failed: {0}")]
    QueryError(String),

    /// Transaction management error (S004).
    #[error("[S004] Store transaction failed: {0}")]
    TransactionError(String),

    /// Row insertion failed (S005).
    #[error("[S005] Store insert failed: {0}")]
    InsertError(String),

    /// Input file could not be parsed or transformed.
    #[error(transparent)]
    Core(#[from] sf_core::CoreError),

    /// DuckDB driver error with preserved source chain (S006).
    #[error("[S006] DuckDB error")]
    DuckDb(#[source] duckdb::Error),
}

/// Result type alias for [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;

impl From<duckdb::Error> for StoreError {
    fn from(err: duckdb::Error) -> Self {
        StoreError::DuckDb(err)
    }
}
