//! The thumbnail service seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use mosaic_core::term::Term;

/// One representative image for a term, as reported by the collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermThumbnail {
    pub term: Term,
    pub media_url: String,
}

/// Errors from the thumbnail collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ThumbnailError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("Thumbnailer request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The collaborator returned a non-2xx status code.
    #[error("Thumbnailer error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Operations the gallery server needs from the thumbnail collaborator.
///
/// The server holds this as `Arc<dyn ThumbnailService>` so tests and
/// offline runs can substitute [`crate::RecordingThumbnailer`].
#[async_trait]
pub trait ThumbnailService: Send + Sync {
    /// Fetch every term's current representative thumbnail.
    async fn get_all(&self) -> Result<Vec<TermThumbnail>, ThumbnailError>;

    /// Regenerate thumbnails for every term, returning the refreshed set.
    async fn generate_all(&self) -> Result<Vec<TermThumbnail>, ThumbnailError>;

    /// Regenerate a single term's thumbnail.
    async fn generate_for_term(&self, term: Term) -> Result<TermThumbnail, ThumbnailError>;
}
