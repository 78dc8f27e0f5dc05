use crate::error::DbError;
use configuration::DatabaseSettings;
use dotenvy::dotenv;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::env;
use std::time::Duration;

/// Reads `DATABASE_URL`, loading a `.env` file first when one is present.
pub fn database_url() -> Result<String, DbError> {
    dotenv().ok();
    env::var("DATABASE_URL")
        .map_err(|_e| DbError::ConnectionConfigError("DATABASE_URL must be set.".to_string()))
}

/// Establishes a connection pool to the PostgreSQL database.
///
/// The pool is created once at startup and handed to whoever needs it; it is
/// never stored globally. The views are managed outside this service, so no
/// migrations are run.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, DbError> {
    let url = database_url()?;
    connect_to(&url, settings).await
}

/// Same as [`connect`] but with an explicit URL.
pub async fn connect_to(url: &str, settings: &DatabaseSettings) -> Result<PgPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect(url)
        .await?;

    tracing::info!(
        max_connections = settings.max_connections,
        "Database connection pool established."
    );
    Ok(pool)
}
