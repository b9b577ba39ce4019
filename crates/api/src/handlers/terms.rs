//! Handlers for the derived term (cohort) set.

use axum::extract::State;
use axum::Json;
use serde_json::json;
use sqlx::PgPool;

use mosaic_core::error::CoreError;
use mosaic_core::term::{Term, TermIndex};
use mosaic_db::repositories::GalleryItemRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/gallery/valid-terms
///
/// Terms are returned as strings, sorted by numeric value, so "10" follows
/// "9" rather than "1".
pub async fn valid_terms(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let terms = GalleryItemRepo::distinct_terms(&state.pool).await?;
    let index = TermIndex::from_values(terms);
    Ok(Json(json!({
        "terms": index.as_strings(),
        "count": index.len(),
    })))
}

/// Build the unknown-term error for `term`, attaching the current valid
/// set so the caller can self-correct. A failure while fetching that set
/// degrades to a database error.
pub(crate) async fn unknown_term(pool: &PgPool, term: Term) -> AppError {
    match GalleryItemRepo::distinct_terms(pool).await {
        Ok(valid_terms) => AppError::Core(CoreError::UnknownTerm { term, valid_terms }),
        Err(err) => AppError::Database(err),
    }
}
