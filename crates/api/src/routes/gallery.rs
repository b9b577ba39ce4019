//! Route definitions for the gallery collection.
//!
//! Mounted at `/gallery`. Fixed-name endpoints share the prefix with the
//! parameterized item routes; axum matches exact segments before captures,
//! and the handlers re-check reserved names via `resolve` so the ordering
//! here is not load-bearing.
//!
//! ```text
//! GET    /                                 gallery::list
//! POST   /                                 gallery::create
//! PUT    /{id}                             gallery::update
//! DELETE /{id}                             gallery::delete_item
//! GET    /thumbnails                       thumbnails::list
//! POST   /thumbnails/generate              thumbnails::generate_all
//! POST   /thumbnails/generate/{term}       thumbnails::generate_for_term
//! GET    /valid-terms                      terms::valid_terms
//! GET    /health                           health::gallery_health
//! ```
//!
//! Anything else under the prefix falls through to a 404 listing the
//! fixed endpoints.

use axum::extract::OriginalUri;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::json;

use mosaic_core::error::CoreError;
use mosaic_core::routing::{is_reserved, FIXED_ENDPOINTS};

use crate::error::AppError;
use crate::handlers::{gallery, health, terms, thumbnails};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::list).post(gallery::create))
        .route("/{id}", put(gallery::update).delete(gallery::delete_item))
        .route("/thumbnails", get(thumbnails::list))
        .route("/thumbnails/generate", post(thumbnails::generate_all))
        .route(
            "/thumbnails/generate/{term}",
            post(thumbnails::generate_for_term),
        )
        .route("/valid-terms", get(terms::valid_terms))
        .route("/health", get(health::gallery_health))
        .fallback(unknown_endpoint)
        .method_not_allowed_fallback(unsupported_method)
}

/// Wrong method on a fixed-name path. When the path's final segment is a
/// reserved name the caller was trying to use it as an item id (e.g.
/// `PUT /gallery/thumbnails`), which is the reserved-segment 404, not a
/// plain 405.
async fn unsupported_method(OriginalUri(uri): OriginalUri) -> Response {
    let segment = uri.path().rsplit('/').next().unwrap_or_default();
    if is_reserved(segment) {
        return AppError::Core(CoreError::ReservedSegment {
            segment: segment.to_string(),
        })
        .into_response();
    }
    StatusCode::METHOD_NOT_ALLOWED.into_response()
}

/// 404 for unmatched paths under the gallery prefix, listing the fixed
/// endpoints so callers can self-correct.
async fn unknown_endpoint() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Unknown gallery endpoint",
            "code": "NOT_FOUND",
            "endpoints": FIXED_ENDPOINTS,
        })),
    )
}
