//! Handler for the gallery health report.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use mosaic_db::repositories::GalleryItemRepo;

use crate::state::AppState;

/// GET /api/v1/gallery/health
///
/// Reports store reachability plus per-term item counts. Unlike the other
/// gallery routes this never returns the standard error envelope: an
/// unreachable store is itself the report (`connected: false`).
pub async fn gallery_health(
    State(state): State<AppState>,
) -> (StatusCode, Json<serde_json::Value>) {
    match GalleryItemRepo::term_counts(&state.pool).await {
        Ok(counts) => {
            let total_items: i64 = counts.iter().map(|c| c.count).sum();
            (
                StatusCode::OK,
                Json(json!({
                    "status": "healthy",
                    "connected": true,
                    "total_items": total_items,
                    "terms": counts,
                })),
            )
        }
        Err(err) => {
            tracing::error!(error = %err, "Gallery health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "unhealthy",
                    "connected": false,
                })),
            )
        }
    }
}
