//! Modal loading indicator as a deterministic tick-driven machine.
//!
//! Tracks the set of terms currently mid-fetch (size 0 or 1 in
//! practice). While anything is in flight the bar creeps toward a cap;
//! when the last fetch finishes it jumps to 100, holds for one tick so
//! completion is visible, then resets. It never disappears abruptly
//! from a partial percentage.

use std::collections::HashSet;

use mosaic_core::term::Term;

/// Bar ceiling while a fetch is still in flight.
const RUNNING_CAP: u8 = 90;
/// Percent added per tick while running.
const STEP: u8 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Running { percent: u8 },
    Holding,
}

/// Tick-driven state of the modal loading indicator.
pub struct LoadingIndicator {
    in_flight: HashSet<Term>,
    phase: Phase,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self {
            in_flight: HashSet::new(),
            phase: Phase::Idle,
        }
    }

    /// A fetch for `term` started.
    pub fn begin(&mut self, term: Term) {
        self.in_flight.insert(term);
        if self.phase == Phase::Idle {
            self.phase = Phase::Running { percent: 0 };
        }
    }

    /// A fetch for `term` completed (either way). The bar reacts on the
    /// next tick, not immediately.
    pub fn finish(&mut self, term: Term) {
        self.in_flight.remove(&term);
    }

    /// Advance one animation frame.
    pub fn tick(&mut self) {
        self.phase = match self.phase {
            Phase::Idle => Phase::Idle,
            Phase::Running { percent } => {
                if self.in_flight.is_empty() {
                    Phase::Holding
                } else {
                    Phase::Running {
                        percent: (percent + STEP).min(RUNNING_CAP),
                    }
                }
            }
            Phase::Holding => Phase::Idle,
        };
    }

    /// Whether the modal should be shown at all.
    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Current bar percentage, if the modal is visible. `Holding` is
    /// the completed frame, pinned at 100.
    pub fn percent(&self) -> Option<u8> {
        match self.phase {
            Phase::Idle => None,
            Phase::Running { percent } => Some(percent),
            Phase::Holding => Some(100),
        }
    }
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_creeps_toward_the_cap_while_in_flight() {
        let mut bar = LoadingIndicator::new();
        bar.begin(2);
        assert_eq!(bar.percent(), Some(0));

        for _ in 0..20 {
            bar.tick();
        }
        assert_eq!(bar.percent(), Some(RUNNING_CAP));
        assert!(bar.is_visible());
    }

    #[test]
    fn completion_hits_100_holds_one_tick_then_resets() {
        let mut bar = LoadingIndicator::new();
        bar.begin(2);
        bar.tick();
        assert_eq!(bar.percent(), Some(STEP));

        bar.finish(2);
        bar.tick();
        assert_eq!(bar.percent(), Some(100));
        assert!(bar.is_visible());

        bar.tick();
        assert_eq!(bar.percent(), None);
        assert!(!bar.is_visible());
    }

    #[test]
    fn overlapping_fetches_keep_the_bar_running() {
        let mut bar = LoadingIndicator::new();
        bar.begin(1);
        bar.begin(2);
        bar.tick();

        bar.finish(1);
        bar.tick();
        // Term 2 still in flight: no completion frame yet.
        assert!(bar.percent().unwrap() < 100);

        bar.finish(2);
        bar.tick();
        assert_eq!(bar.percent(), Some(100));
    }

    #[test]
    fn idle_bar_ignores_ticks() {
        let mut bar = LoadingIndicator::new();
        bar.tick();
        bar.tick();
        assert!(!bar.is_visible());
        assert_eq!(bar.percent(), None);
    }
}
