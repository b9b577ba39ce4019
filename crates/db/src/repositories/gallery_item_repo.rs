//! Repository for the `gallery_items` table.

use sqlx::PgPool;
use uuid::Uuid;

use mosaic_core::term::Term;

use crate::models::gallery_item::{
    CreateGalleryItem, GalleryItem, GalleryItemMeta, TermCount, UpdateGalleryItem,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, media_url, taken_at, term, created_at, updated_at";

/// Column list for the metadata projection (no `media_url`).
const META_COLUMNS: &str = "id, title, description, taken_at, term, created_at, updated_at";

/// Provides CRUD operations for gallery items.
pub struct GalleryItemRepo;

impl GalleryItemRepo {
    /// Insert a new gallery item, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGalleryItem,
    ) -> Result<GalleryItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery_items (title, description, media_url, taken_at, term)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.media_url)
            .bind(input.taken_at)
            .bind(input.term)
            .fetch_one(pool)
            .await
    }

    /// Find a gallery item by its ID.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<GalleryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_items WHERE id = $1");
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List gallery items, newest shot first. When `term` is given only
    /// that cohort's rows are returned; the filter is applied here rather
    /// than post-fetch so a large catalog never crosses the wire whole.
    pub async fn list(pool: &PgPool, term: Option<Term>) -> Result<Vec<GalleryItem>, sqlx::Error> {
        match term {
            Some(term) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM gallery_items
                     WHERE term = $1
                     ORDER BY taken_at DESC, id"
                );
                sqlx::query_as::<_, GalleryItem>(&query)
                    .bind(term)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query =
                    format!("SELECT {COLUMNS} FROM gallery_items ORDER BY taken_at DESC, id");
                sqlx::query_as::<_, GalleryItem>(&query).fetch_all(pool).await
            }
        }
    }

    /// List the metadata projection, same ordering and filtering as
    /// [`GalleryItemRepo::list`].
    pub async fn list_meta(
        pool: &PgPool,
        term: Option<Term>,
    ) -> Result<Vec<GalleryItemMeta>, sqlx::Error> {
        match term {
            Some(term) => {
                let query = format!(
                    "SELECT {META_COLUMNS} FROM gallery_items
                     WHERE term = $1
                     ORDER BY taken_at DESC, id"
                );
                sqlx::query_as::<_, GalleryItemMeta>(&query)
                    .bind(term)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query =
                    format!("SELECT {META_COLUMNS} FROM gallery_items ORDER BY taken_at DESC, id");
                sqlx::query_as::<_, GalleryItemMeta>(&query)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Replace a gallery item wholesale.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        input: &UpdateGalleryItem,
    ) -> Result<Option<GalleryItem>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_items SET
                title = $2,
                description = $3,
                media_url = $4,
                taken_at = $5,
                term = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.media_url)
            .bind(input.taken_at)
            .bind(input.term)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a gallery item by ID. Returns `true` if a row was
    /// removed. Items carry no child rows, so a tombstone would only
    /// complicate the derived term set.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The distinct terms that currently have at least one item, ascending.
    pub async fn distinct_terms(pool: &PgPool) -> Result<Vec<Term>, sqlx::Error> {
        let rows: Vec<(Term,)> =
            sqlx::query_as("SELECT DISTINCT term FROM gallery_items ORDER BY term")
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(t,)| t).collect())
    }

    /// Item counts per term, ascending by term. Sums to the catalog size.
    pub async fn term_counts(pool: &PgPool) -> Result<Vec<TermCount>, sqlx::Error> {
        sqlx::query_as::<_, TermCount>(
            "SELECT term, COUNT(*) AS count FROM gallery_items GROUP BY term ORDER BY term",
        )
        .fetch_all(pool)
        .await
    }

    /// Whether any item exists for `term`.
    pub async fn term_exists(pool: &PgPool, term: Term) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM gallery_items WHERE term = $1)")
                .bind(term)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}
