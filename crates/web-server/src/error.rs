use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::DbError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),
    #[error("Not found")]
    NotFound,
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Bodies use the `{"detail": ...}` shape the API has always returned.
/// Internal details are logged, never sent to the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Database(DbError::NotFound) | AppError::NotFound => {
                (StatusCode::NOT_FOUND, "Not found.")
            }
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A server error occurred.",
                )
            }
        };

        let body = Json(json!({ "detail": detail }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            AppError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(DbError::NotFound).into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn unavailable_database_maps_to_500() {
        let err = AppError::from(DbError::Unavailable(sqlx_pool_timeout()));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let err = AppError::from(DbError::MultipleRows {
            view: "view_pokemon_full_info",
            key: 7,
            count: 2,
        });
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let err = AppError::from(DbError::ConnectionConfigError("missing".into()));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    fn sqlx_pool_timeout() -> database::error::SqlxError {
        database::error::SqlxError::PoolTimedOut
    }
}
