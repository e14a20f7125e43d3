use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use camp_core::error::CoreError;
use serde_json::json;

/// Generic message returned for every validation failure. Field-level
/// detail is logged, not sent to the client.
pub const VALIDATION_MESSAGE: &str = "validation errors";

/// Message returned for any failure the client cannot act on.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `camp_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A `{id}` path segment that is not a valid `i64`. No such record can
    /// exist, so it is answered like any other miss.
    #[error("{entity} id is not an integer: {raw}")]
    UnparseableId { entity: &'static str, raw: String },

    /// The store refused a delete; the message is passed through.
    #[error("Delete failed: {0}")]
    DeleteFailed(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Body shape of an error response.
enum ErrorBody {
    /// `{"error": "..."}`
    Single(String),
    /// `{"errors": ["validation errors"]}`
    Validation,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Entity not found");
                (
                    StatusCode::NOT_FOUND,
                    ErrorBody::Single(format!("{entity} not found")),
                )
            }
            AppError::Core(CoreError::Validation(detail)) => {
                tracing::warn!(detail = %detail, "Validation failed");
                (StatusCode::BAD_REQUEST, ErrorBody::Validation)
            }
            AppError::UnparseableId { entity, raw } => {
                tracing::debug!(entity, raw = %raw, "Path id is not an integer");
                (
                    StatusCode::NOT_FOUND,
                    ErrorBody::Single(format!("{entity} not found")),
                )
            }
            AppError::Database(err) => classify_sqlx_error(&err),
            AppError::DeleteFailed(msg) => {
                tracing::warn!(error = %msg, "Delete failed");
                (StatusCode::BAD_REQUEST, ErrorBody::Single(msg))
            }
        };

        let body = match body {
            ErrorBody::Single(message) => json!({ "error": message }),
            ErrorBody::Validation => json!({ "errors": [VALIDATION_MESSAGE] }),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and body.
///
/// - `RowNotFound` maps to 404.
/// - Not-null, foreign key and CHECK violations map to 400 validation errors.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, ErrorBody) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            ErrorBody::Single("Resource not found".to_string()),
        ),
        sqlx::Error::Database(db_err) if is_constraint_violation(db_err.code().as_deref()) => {
            tracing::warn!(
                error = %db_err,
                constraint = db_err.constraint().unwrap_or("unknown"),
                "Write rejected by database constraint"
            );
            (StatusCode::BAD_REQUEST, ErrorBody::Validation)
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::Single(INTERNAL_MESSAGE.to_string()),
            )
        }
    }
}

/// PostgreSQL SQLSTATE codes meaning the write broke a declared constraint:
/// not-null (`23502`), foreign key (`23503`) or CHECK (`23514`).
fn is_constraint_violation(code: Option<&str>) -> bool {
    matches!(code, Some("23502" | "23503" | "23514"))
}
