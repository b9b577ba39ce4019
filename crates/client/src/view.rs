//! Selection guard between the cache and the visible list.
//!
//! Fetches are never cancelled; a response that lands after the user
//! has moved on is cached under its own key but must not replace the
//! visible list. [`GalleryView::commit`] enforces that.

use mosaic_core::term::Term;

use crate::cache::CachedItems;
use crate::transport::GalleryItem;

/// What the user is currently looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    All,
    Term(Term),
}

/// Holds the current selection and the list derived from it.
pub struct GalleryView {
    selection: Selection,
    visible: Option<CachedItems>,
}

impl GalleryView {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            visible: None,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Change the selection. The previous list stops being visible
    /// immediately; the new one appears when its fetch commits.
    pub fn select(&mut self, selection: Selection) {
        if selection != self.selection {
            self.selection = selection;
            self.visible = None;
        }
    }

    /// Apply a completed fetch. No-op unless `selection` still matches
    /// the current one; returns whether the list was applied.
    pub fn commit(&mut self, selection: Selection, items: CachedItems) -> bool {
        if selection != self.selection {
            tracing::debug!(?selection, current = ?self.selection, "Dropping stale commit");
            return false;
        }
        self.visible = Some(items);
        true
    }

    pub fn visible(&self) -> &[GalleryItem] {
        self.visible.as_deref().map(Vec::as_slice).unwrap_or(&[])
    }
}
