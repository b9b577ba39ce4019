use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use mosaic_core::error::CoreError;
use mosaic_core::routing::FIXED_ENDPOINTS;
use mosaic_core::term::TermIndex;
use mosaic_thumbnailer::ThumbnailError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `mosaic_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The thumbnail collaborator failed. Only the explicit thumbnail
    /// endpoints surface this; mutation-triggered refreshes log and
    /// swallow instead.
    #[error("Thumbnailer error: {0}")]
    Thumbnailer(#[from] ThumbnailError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Cohort and reserved-segment failures carry recovery data beyond
        // the standard {error, code} pair, so the body is built per-variant.
        let (status, body) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    json!({
                        "error": format!("{entity} with id {id} not found"),
                        "code": "NOT_FOUND",
                    }),
                ),
                CoreError::UnknownTerm { term, valid_terms } => (
                    StatusCode::NOT_FOUND,
                    json!({
                        "error": format!("term {term} has no gallery items"),
                        "code": "UNKNOWN_TERM",
                        "validTerms": TermIndex::from_values(valid_terms.iter().copied())
                            .as_strings(),
                    }),
                ),
                CoreError::ReservedSegment { segment } => (
                    StatusCode::NOT_FOUND,
                    json!({
                        "error": format!(
                            "'{segment}' is a reserved gallery endpoint, not an identifier"
                        ),
                        "code": "RESERVED_SEGMENT",
                        "endpoints": FIXED_ENDPOINTS,
                    }),
                ),
                CoreError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    json!({ "error": msg, "code": "VALIDATION_ERROR" }),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        json!({
                            "error": "An internal error occurred",
                            "code": "INTERNAL_ERROR",
                        }),
                    )
                }
            },

            AppError::Database(err) => {
                let (status, code, message) = classify_sqlx_error(err);
                (status, json!({ "error": message, "code": code }))
            }

            AppError::Thumbnailer(err) => {
                tracing::error!(error = %err, "Thumbnail collaborator error");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({
                        "error": "Thumbnail service unavailable",
                        "code": "THUMBNAILER_ERROR",
                    }),
                )
            }

            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": msg, "code": "BAD_REQUEST" }),
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "An internal error occurred",
                        "code": "INTERNAL_ERROR",
                    }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message; the detail goes
///   to the log, never the wire.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
