//! Timestamped on-disk snapshot of the metadata listing.
//!
//! The snapshot is the middle rung of the startup fallback ladder:
//! fresher than the built-in default, staler than the network. Corrupt
//! or expired files are treated exactly like a missing file.

use std::fs;
use std::path::PathBuf;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use mosaic_core::types::Timestamp;

use crate::transport::GalleryItemMeta;

/// On-disk shape: the save time plus the items verbatim.
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    saved_at: Timestamp,
    items: Vec<GalleryItemMeta>,
}

/// Reads and writes one snapshot file with a freshness TTL.
pub struct SnapshotStore {
    path: PathBuf,
    ttl_minutes: i64,
}

impl SnapshotStore {
    pub fn new(path: PathBuf, ttl_minutes: i64) -> Self {
        Self { path, ttl_minutes }
    }

    /// Load the snapshot if it exists, parses, and is younger than the
    /// TTL. Every failure mode degrades to `None`; the reason is only
    /// interesting at `debug`.
    pub fn load(&self) -> Option<Vec<GalleryItemMeta>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "No snapshot to load");
                return None;
            }
        };

        let file: SnapshotFile = match serde_json::from_str(&raw) {
            Ok(file) => file,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "Snapshot is corrupt");
                return None;
            }
        };

        let age = Utc::now() - file.saved_at;
        if age > Duration::minutes(self.ttl_minutes) {
            tracing::debug!(
                path = %self.path.display(),
                age_minutes = age.num_minutes(),
                ttl_minutes = self.ttl_minutes,
                "Snapshot is stale"
            );
            return None;
        }

        Some(file.items)
    }

    /// Persist a fresh snapshot, replacing any previous one.
    pub fn save(&self, items: &[GalleryItemMeta]) -> std::io::Result<()> {
        let file = SnapshotFile {
            saved_at: Utc::now(),
            items: items.to_vec(),
        };
        let json = serde_json::to_string(&file).expect("snapshot is always serialisable");
        fs::write(&self.path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(title: &str, term: i32) -> GalleryItemMeta {
        GalleryItemMeta {
            id: format!("id-{title}"),
            title: title.to_string(),
            description: None,
            taken_at: "2025-06-01T10:00:00Z".parse().unwrap(),
            term,
            created_at: "2025-06-01T10:00:00Z".parse().unwrap(),
            updated_at: "2025-06-01T10:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("snapshot.json"), 60);

        store.save(&[meta("Concert", 2), meta("Sports", 3)]).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].title, "Concert");
        assert_eq!(loaded[1].term, 3);
    }

    #[test]
    fn missing_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("nope.json"), 60);
        assert!(store.load().is_none());
    }

    #[test]
    fn corrupt_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        fs::write(&path, "{ not json").unwrap();
        let store = SnapshotStore::new(path, 60);
        assert!(store.load().is_none());
    }

    #[test]
    fn stale_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");

        let old = SnapshotFile {
            saved_at: Utc::now() - Duration::minutes(90),
            items: vec![meta("Old", 1)],
        };
        fs::write(&path, serde_json::to_string(&old).unwrap()).unwrap();

        let store = SnapshotStore::new(path, 60);
        assert!(store.load().is_none());
    }
}
