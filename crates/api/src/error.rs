use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_core::error::CoreError;
use serde_json::json;

/// Error type returned by every HTTP handler.
///
/// Wraps [`CoreError`] for domain failures and adds the HTTP-side cases.
/// Its [`IntoResponse`] impl renders the uniform
/// `{"success": false, "message": ...}` error body; the underlying detail
/// goes to the log, never to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `marquee_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A malformed request: missing body, wrong content type, broken JSON.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A well-formed payload that cannot be processed: wrong field types,
    /// or an operation targeting something that is not there.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::MissingRecord { entity, id } => {
                    tracing::warn!(entity, id, "Request targeted a missing record");
                    (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable")
                }
                CoreError::Validation(msg) => {
                    tracing::warn!(detail = %msg, "Payload failed validation");
                    (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable")
                }
                CoreError::Unauthorized(msg) => {
                    tracing::warn!(detail = %msg, "Request not authenticated");
                    (StatusCode::UNAUTHORIZED, "unauthorized")
                }
                CoreError::Forbidden(msg) => {
                    tracing::warn!(detail = %msg, "Request lacks a required permission");
                    (StatusCode::FORBIDDEN, "forbidden")
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                tracing::warn!(detail = %msg, "Malformed request payload");
                (StatusCode::BAD_REQUEST, "bad request")
            }
            AppError::Unprocessable(msg) => {
                tracing::warn!(detail = %msg, "Unprocessable request payload");
                (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable")
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };

        let body = json!({
            "success": false,
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Well-formed JSON that does not match the expected shape
            // (wrong types, unparsable date, missing required field).
            JsonRejection::JsonDataError(err) => AppError::Unprocessable(err.body_text()),
            // Missing body, missing/wrong content type, or broken JSON.
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

/// Classify a sqlx error into an HTTP status and canonical message.
///
/// - Unique constraint violations (constraint name starting with `uq_`,
///   e.g. a duplicate movie title) map to 422.
/// - Everything else maps to a sanitized 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str) {
    match err {
        sqlx::Error::Database(db_err) => {
            // 23505 is PostgreSQL's unique_violation code.
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    tracing::warn!(constraint, "Unique constraint violation");
                    return (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable");
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
        }
    }
}
