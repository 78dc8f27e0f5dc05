use thiserror::Error;

/// Re-exported so callers can build or match driver errors without depending on sqlx.
pub use sqlx::Error as SqlxError;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to load environment variables for database connection: {0}")]
    ConnectionConfigError(String),

    #[error("The database is unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),

    #[error("The requested data was not found in the database.")]
    NotFound,

    #[error("{view} has {count} rows for key {key}; expected one.")]
    MultipleRows {
        view: &'static str,
        key: i32,
        count: usize,
    },
}
