//! Per-term media cache with shared in-flight fetches.
//!
//! Every term is in exactly one of three states: absent, in flight, or
//! complete. The [`Entry`] enum carries that invariant; the map never
//! holds a partial list. Concurrent requests for the same term clone
//! the same shared future, so a term is fetched at most once until it
//! fails or the cache is dropped.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use futures::future::{BoxFuture, Shared};
use futures::FutureExt;

use mosaic_core::term::Term;

use crate::transport::{GalleryItem, GalleryTransport, TransportError};

/// Completed fetches hand out the same allocation to every caller.
pub type CachedItems = Arc<Vec<GalleryItem>>;

/// Fetch results are cloned into every awaiter, so the error side is
/// reference-counted too.
pub type FetchResult = Result<CachedItems, Arc<TransportError>>;

type SharedFetch = Shared<BoxFuture<'static, FetchResult>>;

enum Entry {
    InFlight(SharedFetch),
    Ready(CachedItems),
}

/// Cache of full gallery items, keyed by term.
pub struct MediaCache {
    transport: Arc<dyn GalleryTransport>,
    entries: Mutex<HashMap<Term, Entry>>,
}

impl MediaCache {
    pub fn new(transport: Arc<dyn GalleryTransport>) -> Self {
        Self {
            transport,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve one term's items, fetching over the transport at most
    /// once. A failed fetch evicts its entry so a later call retries.
    pub async fn items_for_term(&self, term: Term) -> FetchResult {
        let fetch = {
            let mut entries = self.entries.lock().expect("cache lock poisoned");
            match entries.get(&term) {
                Some(Entry::Ready(items)) => return Ok(Arc::clone(items)),
                Some(Entry::InFlight(shared)) => shared.clone(),
                None => {
                    let transport = Arc::clone(&self.transport);
                    let shared = async move {
                        transport
                            .fetch_items(Some(term))
                            .await
                            .map(Arc::new)
                            .map_err(Arc::new)
                    }
                    .boxed()
                    .shared();
                    entries.insert(term, Entry::InFlight(shared.clone()));
                    shared
                }
            }
        };

        let result = fetch.clone().await;

        let mut entries = self.entries.lock().expect("cache lock poisoned");
        match &result {
            Ok(items) => {
                entries.insert(term, Entry::Ready(Arc::clone(items)));
            }
            Err(_) => {
                // Evict only our own flight; a retry may already have
                // replaced the entry with a new one.
                if let Some(Entry::InFlight(current)) = entries.get(&term) {
                    if current.ptr_eq(&fetch) {
                        entries.remove(&term);
                    }
                }
            }
        }
        result
    }

    /// Resolve the `All` selection: every valid term through the
    /// per-term cache, concatenated newest-first.
    pub async fn items_for_all(&self) -> Result<Vec<GalleryItem>, Arc<TransportError>> {
        let terms = self.transport.fetch_valid_terms().await.map_err(Arc::new)?;

        let per_term =
            futures::future::try_join_all(terms.into_iter().map(|t| self.items_for_term(t)))
                .await?;

        let mut all: Vec<GalleryItem> = per_term
            .iter()
            .flat_map(|items| items.iter().cloned())
            .collect();
        all.sort_by(|a, b| b.taken_at.cmp(&a.taken_at).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }
}
