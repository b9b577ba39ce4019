pub mod gallery;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /gallery                                 list, create
/// /gallery/{id}                            update, delete
/// /gallery/thumbnails                      list cohort thumbnails
/// /gallery/thumbnails/generate             regenerate all (POST)
/// /gallery/thumbnails/generate/{term}      regenerate one (POST)
/// /gallery/valid-terms                     derived term set
/// /gallery/health                          store health report
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/gallery", gallery::router())
}
