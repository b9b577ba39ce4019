//! Handlers for the thumbnail endpoints.
//!
//! These are the only routes where a collaborator failure surfaces to the
//! caller (as a 502). Refreshes triggered by catalog mutations are handled
//! in `handlers::gallery` and never propagate.

use axum::extract::{Path, State};
use axum::Json;

use mosaic_db::repositories::GalleryItemRepo;
use mosaic_thumbnailer::TermThumbnail;

use crate::error::AppResult;
use crate::handlers::terms::unknown_term;
use crate::resolve;
use crate::state::AppState;

/// GET /api/v1/gallery/thumbnails
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TermThumbnail>>> {
    let thumbnails = state.thumbnailer.get_all().await?;
    Ok(Json(thumbnails))
}

/// POST /api/v1/gallery/thumbnails/generate
pub async fn generate_all(State(state): State<AppState>) -> AppResult<Json<Vec<TermThumbnail>>> {
    let thumbnails = state.thumbnailer.generate_all().await?;
    Ok(Json(thumbnails))
}

/// POST /api/v1/gallery/thumbnails/generate/{term}
pub async fn generate_for_term(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> AppResult<Json<TermThumbnail>> {
    let term = resolve::term_segment(&segment)?;
    if !GalleryItemRepo::term_exists(&state.pool, term).await? {
        return Err(unknown_term(&state.pool, term).await);
    }
    let thumbnail = state.thumbnailer.generate_for_term(term).await?;
    Ok(Json(thumbnail))
}
