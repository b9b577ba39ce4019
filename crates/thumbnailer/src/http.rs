//! HTTP implementation of the thumbnail service.
//!
//! Wraps the collaborator's REST endpoints (`GET /thumbnails`,
//! `POST /thumbnails/generate`, `POST /thumbnails/generate/{term}`)
//! using [`reqwest`].

use async_trait::async_trait;

use mosaic_core::term::Term;

use crate::service::{TermThumbnail, ThumbnailError, ThumbnailService};

/// HTTP client for the thumbnail collaborator.
pub struct HttpThumbnailer {
    client: reqwest::Client,
    base_url: String,
}

impl HttpThumbnailer {
    /// Create a new client for a collaborator instance.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://thumbnailer:9300`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across services).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Base HTTP URL of the collaborator.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ensure the response has a success status code, then deserialize
    /// its JSON body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ThumbnailError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ThumbnailError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl ThumbnailService for HttpThumbnailer {
    async fn get_all(&self) -> Result<Vec<TermThumbnail>, ThumbnailError> {
        let response = self
            .client
            .get(format!("{}/thumbnails", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn generate_all(&self) -> Result<Vec<TermThumbnail>, ThumbnailError> {
        let response = self
            .client
            .post(format!("{}/thumbnails/generate", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn generate_for_term(&self, term: Term) -> Result<TermThumbnail, ThumbnailError> {
        let response = self
            .client
            .post(format!("{}/thumbnails/generate/{}", self.base_url, term))
            .send()
            .await?;
        Self::parse_response(response).await
    }
}
