//! Per-card lazy media state machine.
//!
//! `Pending -> Loading -> Loaded | Failed`, driven by viewport
//! intersection events fed from outside. The first intersection starts
//! the load and unsubscribes the card; `Failed` is terminal for a given
//! source and shows the fixed placeholder. A new source re-arms the
//! machine from `Pending`.

/// Shown instead of the media when a load has failed.
pub const FAILED_PLACEHOLDER: &str = "/assets/media-placeholder.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaPhase {
    Pending,
    Loading,
    Loaded,
    Failed,
}

/// One card's media slot.
pub struct LazyMedia {
    source: Option<String>,
    phase: MediaPhase,
    subscribed: bool,
}

impl LazyMedia {
    pub fn new() -> Self {
        Self {
            source: None,
            phase: MediaPhase::Pending,
            subscribed: true,
        }
    }

    pub fn with_source(source: String) -> Self {
        let mut slot = Self::new();
        slot.set_source(source);
        slot
    }

    pub fn phase(&self) -> MediaPhase {
        self.phase
    }

    /// Whether the card still wants intersection events.
    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Set or replace the media source. Always re-enters `Pending` and
    /// resubscribes, including after `Failed` -- a card must not stay
    /// stuck on the placeholder when fresh data arrives.
    pub fn set_source(&mut self, source: String) {
        self.source = Some(source);
        self.phase = MediaPhase::Pending;
        self.subscribed = true;
    }

    /// The card entered the viewport. Returns the URL to start loading,
    /// if this event started a load. The first useful intersection
    /// unsubscribes permanently for the current source.
    pub fn intersected(&mut self) -> Option<&str> {
        if !self.subscribed || self.phase != MediaPhase::Pending {
            return None;
        }
        // No source yet: stay subscribed and wait for one.
        let source = self.source.as_deref()?;
        self.phase = MediaPhase::Loading;
        self.subscribed = false;
        Some(source)
    }

    pub fn load_finished(&mut self) {
        if self.phase == MediaPhase::Loading {
            self.phase = MediaPhase::Loaded;
        }
    }

    pub fn load_failed(&mut self) {
        if self.phase == MediaPhase::Loading {
            self.phase = MediaPhase::Failed;
        }
    }

    /// What the card should display right now, if anything.
    pub fn visible_source(&self) -> Option<&str> {
        match self.phase {
            MediaPhase::Loaded => self.source.as_deref(),
            MediaPhase::Failed => Some(FAILED_PLACEHOLDER),
            MediaPhase::Pending | MediaPhase::Loading => None,
        }
    }
}

impl Default for LazyMedia {
    fn default() -> Self {
        Self::new()
    }
}
