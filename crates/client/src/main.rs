//! `mosaic-client` -- terminal front-end for the gallery API.
//!
//! Loads the metadata listing (with snapshot fallback), selects the
//! latest term, resolves it through the per-term media cache, and
//! prints a per-term summary of the catalog.
//!
//! # Environment variables
//!
//! | Variable                    | Required | Default | Description                                |
//! |-----------------------------|----------|---------|--------------------------------------------|
//! | `GALLERY_API_URL`           | yes      | --      | Gallery API base URL, e.g. `http://localhost:9200` |
//! | `GALLERY_SNAPSHOT_PATH`     | no       | --      | Metadata snapshot file; no persistence when unset |
//! | `GALLERY_SNAPSHOT_TTL_MINS` | no       | `10`    | Snapshot freshness window in minutes       |

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mosaic_core::term::Term;

use mosaic_client::cache::MediaCache;
use mosaic_client::metadata::load_metadata;
use mosaic_client::snapshot::SnapshotStore;
use mosaic_client::transport::{GalleryTransport, HttpGallery};

/// Snapshot freshness window when `GALLERY_SNAPSHOT_TTL_MINS` is unset.
const DEFAULT_SNAPSHOT_TTL_MINS: i64 = 10;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mosaic_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_url = std::env::var("GALLERY_API_URL").unwrap_or_else(|_| {
        tracing::error!("GALLERY_API_URL environment variable is required");
        std::process::exit(1);
    });

    let snapshot = std::env::var("GALLERY_SNAPSHOT_PATH").ok().map(|path| {
        let ttl_mins: i64 = std::env::var("GALLERY_SNAPSHOT_TTL_MINS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SNAPSHOT_TTL_MINS);
        SnapshotStore::new(PathBuf::from(path), ttl_mins)
    });

    tracing::info!(
        api_url = %api_url,
        snapshot = snapshot.is_some(),
        "Starting mosaic-client",
    );

    let transport: Arc<dyn GalleryTransport> = Arc::new(HttpGallery::new(api_url));

    let load = load_metadata(transport.as_ref(), snapshot.as_ref()).await;
    tracing::info!(
        source = ?load.source,
        items = load.items.len(),
        default_term = ?load.default_term,
        "Metadata loaded",
    );

    let mut per_term: BTreeMap<Term, usize> = BTreeMap::new();
    for item in &load.items {
        *per_term.entry(item.term).or_default() += 1;
    }
    for (term, count) in &per_term {
        tracing::info!(term, count, "Catalog term");
    }

    let Some(term) = load.default_term else {
        tracing::info!("Catalog is empty, nothing to resolve");
        return;
    };

    let cache = MediaCache::new(transport);
    match cache.items_for_term(term).await {
        Ok(items) => {
            tracing::info!(term, items = items.len(), "Resolved default term");
            for item in items.iter() {
                tracing::info!(term, title = %item.title, media_url = %item.media_url, "Item");
            }
        }
        Err(e) => {
            tracing::error!(term, error = %e, "Failed to resolve default term");
        }
    }
}
