//! Handlers for the gallery item collection.
//!
//! Mounted at `/api/v1/gallery`. Every mutation triggers a best-effort
//! thumbnail call for the affected term; the catalog write has already
//! committed, so a collaborator failure is logged and swallowed rather
//! than surfaced to the caller.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use uuid::Uuid;

use mosaic_core::error::CoreError;
use mosaic_core::gallery::{validate_media_url, validate_term, validate_title};
use mosaic_core::term::{parse_term, Term};
use mosaic_db::models::gallery_item::{CreateGalleryItem, GalleryItem, UpdateGalleryItem};
use mosaic_db::repositories::GalleryItemRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::terms::unknown_term;
use crate::query::GalleryListParams;
use crate::resolve;
use crate::state::AppState;

/// GET /api/v1/gallery?cohort=&meta_only=
///
/// `cohort` narrows the listing server-side; an unknown cohort is a 404
/// carrying the current valid set, a non-numeric one is a 400.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<GalleryListParams>,
) -> AppResult<Response> {
    let term = match params.cohort.as_deref() {
        Some(raw) => {
            let term = parse_term(raw)
                .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
            if !GalleryItemRepo::term_exists(&state.pool, term).await? {
                return Err(unknown_term(&state.pool, term).await);
            }
            Some(term)
        }
        None => None,
    };

    if params.meta_only {
        let items = GalleryItemRepo::list_meta(&state.pool, term).await?;
        Ok(Json(items).into_response())
    } else {
        let items = GalleryItemRepo::list(&state.pool, term).await?;
        Ok(Json(items).into_response())
    }
}

/// POST /api/v1/gallery
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGalleryItem>,
) -> AppResult<(StatusCode, Json<GalleryItem>)> {
    validate_fields(&input.title, &input.media_url, input.term)?;

    let item = GalleryItemRepo::create(&state.pool, &input).await?;
    spawn_thumbnail_refresh(&state, item.term);
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/v1/gallery/{id}
///
/// Whole-row replacement. Moving an item between terms refreshes both the
/// old and the new term's thumbnails.
pub async fn update(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    Json(input): Json<UpdateGalleryItem>,
) -> AppResult<Json<GalleryItem>> {
    let id = resolve::item_id(&segment)?;
    validate_fields(&input.title, &input.media_url, input.term)?;

    let existing = GalleryItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let updated = GalleryItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    spawn_thumbnail_refresh(&state, updated.term);
    if existing.term != updated.term {
        spawn_thumbnail_refresh(&state, existing.term);
    }
    Ok(Json(updated))
}

/// DELETE /api/v1/gallery/{id}
///
/// The removed item may have supplied its term's representative image, so
/// deletion always regenerates that term's thumbnail.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let id = resolve::item_id(&segment)?;

    let existing = GalleryItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if !GalleryItemRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    spawn_thumbnail_refresh(&state, existing.term);
    Ok(Json(json!({ "deleted": true, "id": id })))
}

fn not_found(id: Uuid) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "GalleryItem",
        id: id.to_string(),
    })
}

fn validate_fields(title: &str, media_url: &str, term: Term) -> Result<(), AppError> {
    validate_title(title)?;
    validate_media_url(media_url)?;
    validate_term(term)?;
    Ok(())
}

/// Fire-and-forget thumbnail regeneration for one term.
fn spawn_thumbnail_refresh(state: &AppState, term: Term) {
    let thumbnailer = Arc::clone(&state.thumbnailer);
    tokio::spawn(async move {
        if let Err(err) = thumbnailer.generate_for_term(term).await {
            tracing::warn!(
                term,
                error = %err,
                "Thumbnail refresh failed; catalog mutation unaffected"
            );
        }
    });
}
