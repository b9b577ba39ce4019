//! In-memory thumbnail service used by tests and offline runs.

use std::sync::Mutex;

use async_trait::async_trait;

use mosaic_core::term::Term;

use crate::service::{TermThumbnail, ThumbnailError, ThumbnailService};

/// A call made against the recording service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    GetAll,
    GenerateAll,
    GenerateForTerm(Term),
}

/// A [`ThumbnailService`] that answers from a fixed set and records every
/// call. Flip `fail` to make all operations return a collaborator error,
/// for exercising the swallow-on-refresh and 502 paths.
#[derive(Default)]
pub struct RecordingThumbnailer {
    thumbnails: Mutex<Vec<TermThumbnail>>,
    calls: Mutex<Vec<RecordedCall>>,
    fail: Mutex<bool>,
}

impl RecordingThumbnailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the set returned by `get_all`/`generate_all`.
    pub fn with_thumbnails(thumbnails: Vec<TermThumbnail>) -> Self {
        Self {
            thumbnails: Mutex::new(thumbnails),
            ..Self::default()
        }
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        *self.fail.lock().unwrap() = failing;
    }

    /// The calls made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) -> Result<(), ThumbnailError> {
        self.calls.lock().unwrap().push(call);
        if *self.fail.lock().unwrap() {
            return Err(ThumbnailError::Api {
                status: 500,
                body: "thumbnailer down".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ThumbnailService for RecordingThumbnailer {
    async fn get_all(&self) -> Result<Vec<TermThumbnail>, ThumbnailError> {
        self.record(RecordedCall::GetAll)?;
        Ok(self.thumbnails.lock().unwrap().clone())
    }

    async fn generate_all(&self) -> Result<Vec<TermThumbnail>, ThumbnailError> {
        self.record(RecordedCall::GenerateAll)?;
        Ok(self.thumbnails.lock().unwrap().clone())
    }

    async fn generate_for_term(&self, term: Term) -> Result<TermThumbnail, ThumbnailError> {
        self.record(RecordedCall::GenerateForTerm(term))?;
        let found = self
            .thumbnails
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.term == term)
            .cloned();
        Ok(found.unwrap_or_else(|| TermThumbnail {
            term,
            media_url: format!("/thumbnails/{term}.jpg"),
        }))
    }
}
