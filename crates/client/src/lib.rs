//! Mosaic gallery client library.
//!
//! Everything the `mosaic-client` binary is built from: the transport
//! seam to the gallery API, the startup metadata loader with its
//! snapshot fallback, the per-term media cache, and the presentation
//! state machines (selection guard, lazy media, loading indicator).

pub mod cache;
pub mod lazy;
pub mod metadata;
pub mod progress;
pub mod snapshot;
pub mod transport;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use cache::MediaCache;
pub use metadata::{load_metadata, LoadSource, MetadataLoad};
pub use snapshot::SnapshotStore;
pub use transport::{GalleryItem, GalleryItemMeta, GalleryTransport, HttpGallery, TransportError};
pub use view::{GalleryView, Selection};
