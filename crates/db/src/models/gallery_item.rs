//! Gallery item entity model and DTOs.
//!
//! One table, `gallery_items`. The cohort a row belongs to is the `term`
//! column; the set of valid terms is always derived from the rows present
//! (see `GalleryItemRepo::distinct_terms`), never stored separately.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use mosaic_core::term::Term;
use mosaic_core::types::Timestamp;

/// A row from the `gallery_items` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub media_url: String,
    pub taken_at: Timestamp,
    pub term: Term,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new gallery item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGalleryItem {
    pub title: String,
    pub description: Option<String>,
    pub media_url: String,
    pub taken_at: Timestamp,
    pub term: Term,
}

/// DTO for replacing an existing gallery item.
///
/// Replacement is whole-row: every mutable column is required, so a
/// missing field is a deserialization error rather than a silent no-op.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGalleryItem {
    pub title: String,
    pub description: Option<String>,
    pub media_url: String,
    pub taken_at: Timestamp,
    pub term: Term,
}

/// Per-term item count, for the gallery health report.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TermCount {
    pub term: Term,
    pub count: i64,
}

/// Listing projection without `media_url`, for metadata-only fetches where
/// the client defers media resolution until an item is actually shown.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct GalleryItemMeta {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub taken_at: Timestamp,
    pub term: Term,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
