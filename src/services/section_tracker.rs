//! Active-section tracking for navigation highlighting.
//!
//! The tracker is a five-state machine (one state per section) driven only by
//! batches of intersection entries:
//!
//! - entries that are not intersecting are ignored
//! - the intersecting entry with the highest ratio becomes active
//! - a batch with no intersecting entry keeps the current section
//! - equal ratios resolve to the earliest entry in the batch

use tracing::debug;

use crate::models::SectionId;

use super::viewport::IntersectionEntry;

/// Picks the section a batch of entries points at, if any.
#[must_use]
pub fn most_visible(entries: &[IntersectionEntry]) -> Option<SectionId> {
    let mut best: Option<&IntersectionEntry> = None;
    for entry in entries.iter().filter(|e| e.is_intersecting) {
        match best {
            Some(current) if entry.ratio <= current.ratio => {}
            _ => best = Some(entry),
        }
    }
    best.map(|entry| entry.target)
}

/// Holds the currently active section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionTracker {
    active: SectionId,
}

impl SectionTracker {
    /// Creates a tracker in its initial state (`About`).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: SectionId::About,
        }
    }

    /// Creates a tracker resuming from a known section.
    #[must_use]
    pub const fn starting_at(active: SectionId) -> Self {
        Self { active }
    }

    /// The section to highlight.
    #[must_use]
    pub const fn active(&self) -> SectionId {
        self.active
    }

    /// Applies one batch of entries. Returns true if the active section changed.
    pub fn apply(&mut self, entries: &[IntersectionEntry]) -> bool {
        let Some(next) = most_visible(entries) else {
            return false;
        };
        if next == self.active {
            return false;
        }
        debug!(from = %self.active, to = %next, "Active section changed");
        self.active = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(target: SectionId, is_intersecting: bool, ratio: f32) -> IntersectionEntry {
        IntersectionEntry {
            target,
            is_intersecting,
            ratio,
        }
    }

    #[test]
    fn test_initial_state_is_about() {
        assert_eq!(SectionTracker::new().active(), SectionId::About);
        assert_eq!(SectionTracker::default().active(), SectionId::About);
    }

    #[test]
    fn test_highest_ratio_wins() {
        let mut tracker = SectionTracker::new();
        let changed = tracker.apply(&[
            entry(SectionId::Tech, true, 0.3),
            entry(SectionId::Projects, true, 0.8),
            entry(SectionId::Contact, true, 0.5),
        ]);
        assert!(changed);
        assert_eq!(tracker.active(), SectionId::Projects);
    }

    #[test]
    fn test_non_intersecting_entries_are_ignored() {
        let mut tracker = SectionTracker::new();
        tracker.apply(&[
            entry(SectionId::Blog, false, 0.9),
            entry(SectionId::Tech, true, 0.25),
        ]);
        assert_eq!(tracker.active(), SectionId::Tech);
    }

    #[test]
    fn test_no_intersecting_entries_keeps_previous() {
        let mut tracker = SectionTracker::starting_at(SectionId::Contact);
        assert!(!tracker.apply(&[entry(SectionId::Blog, false, 0.0)]));
        assert!(!tracker.apply(&[]));
        assert_eq!(tracker.active(), SectionId::Contact);
    }

    #[test]
    fn test_equal_ratios_pick_first_in_batch() {
        assert_eq!(
            most_visible(&[
                entry(SectionId::Contact, true, 0.5),
                entry(SectionId::Blog, true, 0.5),
            ]),
            Some(SectionId::Contact)
        );
    }

    #[test]
    fn test_reselecting_active_is_not_a_change() {
        let mut tracker = SectionTracker::new();
        assert!(!tracker.apply(&[entry(SectionId::About, true, 1.0)]));
        assert_eq!(tracker.active(), SectionId::About);
    }
}
