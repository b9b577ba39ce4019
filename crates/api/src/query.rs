//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for the gallery listing endpoint
/// (`?cohort=&meta_only=`).
///
/// `cohort` is kept as a raw string so a non-numeric value produces our
/// 400 validation payload instead of a framework rejection.
#[derive(Debug, Deserialize)]
pub struct GalleryListParams {
    pub cohort: Option<String>,
    #[serde(default)]
    pub meta_only: bool,
}
