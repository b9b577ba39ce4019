//! In-memory [`GalleryTransport`] for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use mosaic_core::term::Term;

use crate::transport::{
    GalleryItem, GalleryItemMeta, GalleryTransport, TermThumbnail, TransportError,
};

/// Build a full item with the fields the tests care about.
pub(crate) fn item(title: &str, term: Term, taken_at: &str) -> GalleryItem {
    GalleryItem {
        id: format!("id-{}", title.to_lowercase().replace(' ', "-")),
        title: title.to_string(),
        description: None,
        media_url: format!("/media/{}.jpg", title.to_lowercase().replace(' ', "-")),
        taken_at: taken_at.parse().unwrap(),
        term,
        created_at: taken_at.parse().unwrap(),
        updated_at: taken_at.parse().unwrap(),
    }
}

/// Build a metadata row for the loader tests.
pub(crate) fn meta(title: &str, term: Term) -> GalleryItemMeta {
    GalleryItemMeta {
        id: format!("id-{}", title.to_lowercase().replace(' ', "-")),
        title: title.to_string(),
        description: None,
        taken_at: "2025-06-01T10:00:00Z".parse().unwrap(),
        term,
        created_at: "2025-06-01T10:00:00Z".parse().unwrap(),
        updated_at: "2025-06-01T10:00:00Z".parse().unwrap(),
    }
}

/// Transport fake backed by a term-keyed map. Counts fetches so tests
/// can assert dedup and cache hits; `set_failing` makes every call
/// return a 503-shaped error.
pub(crate) struct FakeGallery {
    items: Mutex<HashMap<Term, Vec<GalleryItem>>>,
    metadata: Mutex<Vec<GalleryItemMeta>>,
    failing: AtomicBool,
    item_fetches: AtomicUsize,
    metadata_fetches: AtomicUsize,
}

impl FakeGallery {
    pub(crate) fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub(crate) fn with_items(items: Vec<GalleryItem>) -> Self {
        let mut by_term: HashMap<Term, Vec<GalleryItem>> = HashMap::new();
        for item in items {
            by_term.entry(item.term).or_default().push(item);
        }
        Self {
            items: Mutex::new(by_term),
            metadata: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
            item_fetches: AtomicUsize::new(0),
            metadata_fetches: AtomicUsize::new(0),
        }
    }

    pub(crate) fn set_metadata(&self, metadata: Vec<GalleryItemMeta>) {
        *self.metadata.lock().unwrap() = metadata;
    }

    pub(crate) fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub(crate) fn item_fetches(&self) -> usize {
        self.item_fetches.load(Ordering::SeqCst)
    }

    pub(crate) fn metadata_fetches(&self) -> usize {
        self.metadata_fetches.load(Ordering::SeqCst)
    }

    fn check_failing(&self) -> Result<(), TransportError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(TransportError::Api {
                status: 503,
                body: "gallery API unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl GalleryTransport for FakeGallery {
    async fn fetch_metadata(&self) -> Result<Vec<GalleryItemMeta>, TransportError> {
        self.metadata_fetches.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.check_failing()?;
        Ok(self.metadata.lock().unwrap().clone())
    }

    async fn fetch_items(&self, term: Option<Term>) -> Result<Vec<GalleryItem>, TransportError> {
        self.item_fetches.fetch_add(1, Ordering::SeqCst);
        // Yield so concurrent callers observe the in-flight entry.
        tokio::task::yield_now().await;
        self.check_failing()?;

        let items = self.items.lock().unwrap();
        let mut result: Vec<GalleryItem> = match term {
            Some(term) => items.get(&term).cloned().unwrap_or_default(),
            None => items.values().flatten().cloned().collect(),
        };
        result.sort_by(|a, b| b.taken_at.cmp(&a.taken_at).then_with(|| a.id.cmp(&b.id)));
        Ok(result)
    }

    async fn fetch_valid_terms(&self) -> Result<Vec<Term>, TransportError> {
        tokio::task::yield_now().await;
        self.check_failing()?;
        let mut terms: Vec<Term> = self.items.lock().unwrap().keys().copied().collect();
        terms.sort_unstable();
        Ok(terms)
    }

    async fn fetch_thumbnails(&self) -> Result<Vec<TermThumbnail>, TransportError> {
        tokio::task::yield_now().await;
        self.check_failing()?;
        let items = self.items.lock().unwrap();
        let mut thumbnails: Vec<TermThumbnail> = items
            .iter()
            .filter_map(|(&term, items)| {
                items.first().map(|item| TermThumbnail {
                    term,
                    media_url: item.media_url.clone(),
                })
            })
            .collect();
        thumbnails.sort_by_key(|t| t.term);
        Ok(thumbnails)
    }
}
