use std::sync::Arc;

use mosaic_thumbnailer::ThumbnailService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The thumbnail collaborator is carried here as a trait object so tests and
/// offline runs can inject a recording implementation.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: mosaic_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Thumbnail collaborator client.
    pub thumbnailer: Arc<dyn ThumbnailService>,
}
