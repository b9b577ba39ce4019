//! Startup metadata load with a three-rung fallback ladder.
//!
//! Network first; a persisted snapshot younger than its TTL second; the
//! built-in empty state last. The result always says which rung it came
//! from, and there is no panic path -- a dead API and a cold disk still
//! produce a usable (empty) load.

use mosaic_core::term::Term;

use crate::snapshot::SnapshotStore;
use crate::transport::{GalleryItemMeta, GalleryTransport};

/// Which rung of the fallback ladder produced the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Network,
    Snapshot,
    Default,
}

/// Result of the startup metadata load.
#[derive(Debug)]
pub struct MetadataLoad {
    pub items: Vec<GalleryItemMeta>,
    /// Latest term in the loaded set; the initial selection.
    pub default_term: Option<Term>,
    pub source: LoadSource,
}

/// Load the metadata listing, falling back through the snapshot to the
/// default state. A successful network load refreshes the snapshot.
pub async fn load_metadata(
    transport: &dyn GalleryTransport,
    snapshot: Option<&SnapshotStore>,
) -> MetadataLoad {
    match transport.fetch_metadata().await {
        Ok(items) if !items.is_empty() => {
            if let Some(store) = snapshot {
                if let Err(e) = store.save(&items) {
                    tracing::warn!(error = %e, "Failed to persist metadata snapshot");
                }
            }
            return MetadataLoad {
                default_term: default_term(&items),
                items,
                source: LoadSource::Network,
            };
        }
        Ok(_) => {
            tracing::warn!("Metadata listing was empty, falling back");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Metadata fetch failed, falling back");
        }
    }

    if let Some(items) = snapshot.and_then(SnapshotStore::load) {
        return MetadataLoad {
            default_term: default_term(&items),
            items,
            source: LoadSource::Snapshot,
        };
    }

    MetadataLoad {
        items: Vec::new(),
        default_term: None,
        source: LoadSource::Default,
    }
}

fn default_term(items: &[GalleryItemMeta]) -> Option<Term> {
    items.iter().map(|i| i.term).max()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testing::{meta, FakeGallery};

    #[tokio::test]
    async fn network_load_picks_latest_term_as_default() {
        let fake = FakeGallery::new();
        fake.set_metadata(vec![meta("A", 1), meta("B", 3), meta("C", 2)]);

        let load = load_metadata(&fake, None).await;
        assert_eq!(load.source, LoadSource::Network);
        assert_eq!(load.default_term, Some(3));
        assert_eq!(load.items.len(), 3);
    }

    #[tokio::test]
    async fn network_load_refreshes_the_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("snapshot.json"), 60);

        let fake = FakeGallery::new();
        fake.set_metadata(vec![meta("A", 2)]);

        let load = load_metadata(&fake, Some(&store)).await;
        assert_eq!(load.source, LoadSource::Network);

        let persisted = store.load().unwrap();
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].term, 2);
    }

    #[tokio::test]
    async fn fetch_failure_falls_back_to_fresh_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("snapshot.json"), 60);
        store.save(&[meta("Saved", 4), meta("Older", 1)]).unwrap();

        let fake = FakeGallery::new();
        fake.set_failing(true);

        let load = load_metadata(&fake, Some(&store)).await;
        assert_eq!(load.source, LoadSource::Snapshot);
        assert_eq!(load.default_term, Some(4));
        assert_eq!(load.items.len(), 2);
    }

    #[tokio::test]
    async fn empty_listing_without_snapshot_is_the_default_state() {
        let fake = FakeGallery::new();

        let load = load_metadata(&fake, None).await;
        assert_eq!(load.source, LoadSource::Default);
        assert_eq!(load.default_term, None);
        assert!(load.items.is_empty());
        assert_eq!(fake.metadata_fetches(), 1);
    }

    #[tokio::test]
    async fn fetch_failure_without_snapshot_is_the_default_state() {
        let fake = FakeGallery::new();
        fake.set_metadata(vec![meta("A", 1)]);
        fake.set_failing(true);

        let load = load_metadata(&fake, None).await;
        assert_eq!(load.source, LoadSource::Default);
        assert!(load.items.is_empty());
    }
}
