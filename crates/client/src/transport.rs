//! Transport seam between the client and the gallery API.
//!
//! [`GalleryTransport`] is the async boundary every other client module
//! talks through; [`HttpGallery`] is the [`reqwest`] implementation
//! against the server's `/api/v1/gallery` surface. Tests substitute an
//! in-memory fake.
//!
//! The wire structs here are owned by the client on purpose: the server
//! crates carry database machinery this binary has no use for.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use mosaic_core::term::{parse_term, Term};
use mosaic_core::types::Timestamp;

/// One gallery item as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub media_url: String,
    pub taken_at: Timestamp,
    pub term: Term,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Metadata-only projection; the server's `meta_only=true` listing
/// carries no media reference at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItemMeta {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub taken_at: Timestamp,
    pub term: Term,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One term's representative thumbnail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermThumbnail {
    pub term: Term,
    pub media_url: String,
}

/// Body of `GET /api/v1/gallery/valid-terms`. Terms travel as strings
/// at the presentation edge; [`HttpGallery`] parses them back.
#[derive(Debug, Deserialize)]
struct ValidTermsBody {
    terms: Vec<String>,
}

/// Errors crossing the transport seam.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("gallery API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed payload: {0}")]
    Payload(String),
}

/// Async boundary to the gallery API.
#[async_trait]
pub trait GalleryTransport: Send + Sync {
    /// Metadata-only listing of the whole catalog.
    async fn fetch_metadata(&self) -> Result<Vec<GalleryItemMeta>, TransportError>;

    /// Full items, optionally narrowed to one term server-side.
    async fn fetch_items(&self, term: Option<Term>) -> Result<Vec<GalleryItem>, TransportError>;

    /// The current valid-term index, sorted ascending.
    async fn fetch_valid_terms(&self) -> Result<Vec<Term>, TransportError>;

    /// Per-term representative thumbnails.
    async fn fetch_thumbnails(&self) -> Result<Vec<TermThumbnail>, TransportError>;
}

/// [`reqwest`] implementation of [`GalleryTransport`].
pub struct HttpGallery {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGallery {
    /// Create a client for a gallery API instance.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://localhost:9200`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Base HTTP URL of the gallery API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, TransportError> {
        let response = self
            .client
            .get(format!("{}/api/v1/gallery{}", self.base_url, path))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl GalleryTransport for HttpGallery {
    async fn fetch_metadata(&self) -> Result<Vec<GalleryItemMeta>, TransportError> {
        self.get_json("?meta_only=true").await
    }

    async fn fetch_items(&self, term: Option<Term>) -> Result<Vec<GalleryItem>, TransportError> {
        match term {
            Some(term) => self.get_json(&format!("?cohort={term}")).await,
            None => self.get_json("").await,
        }
    }

    async fn fetch_valid_terms(&self) -> Result<Vec<Term>, TransportError> {
        let body: ValidTermsBody = self.get_json("/valid-terms").await?;
        body.terms
            .iter()
            .map(|raw| {
                parse_term(raw).map_err(|e| TransportError::Payload(format!("term {raw:?}: {e}")))
            })
            .collect()
    }

    async fn fetch_thumbnails(&self) -> Result<Vec<TermThumbnail>, TransportError> {
        self.get_json("/thumbnails").await
    }
}
