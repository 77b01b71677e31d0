//! Viewport intersection observation.
//!
//! A host reports where each section sits on the page and where the viewport
//! is scrolled to. The observer narrows the viewport into an observation band,
//! measures how much of each section falls inside it, and emits an entry only
//! for sections whose visibility changed since the last report. This is the
//! same contract a browser `IntersectionObserver` gives: an initial entry for
//! every observed target, then entries on threshold crossings.
//!
//! Positions are abstract units (terminal rows or CSS pixels).

// Allow intentional casts between row counts and fractions
#![allow(clippy::cast_precision_loss)]

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::SectionId;

/// Default inset from the top of the viewport, as a fraction of its height.
pub const DEFAULT_TOP_MARGIN: f32 = 0.20;
/// Default inset from the bottom of the viewport, as a fraction of its height.
pub const DEFAULT_BOTTOM_MARGIN: f32 = 0.45;
/// Default ratio thresholds at which visibility changes are reported.
pub const DEFAULT_THRESHOLDS: [f32; 3] = [0.25, 0.5, 0.75];

/// How the viewport is narrowed and at which ratios changes are reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverOptions {
    /// Fraction of the viewport height removed from the top of the band
    pub top_margin: f32,
    /// Fraction of the viewport height removed from the bottom of the band
    pub bottom_margin: f32,
    /// Ascending ratios in 0.0..=1.0
    pub thresholds: Vec<f32>,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            top_margin: DEFAULT_TOP_MARGIN,
            bottom_margin: DEFAULT_BOTTOM_MARGIN,
            thresholds: DEFAULT_THRESHOLDS.to_vec(),
        }
    }
}

impl ObserverOptions {
    /// The band as a CSS `rootMargin`, e.g. `-20% 0px -45% 0px`.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!(
            "-{}% 0px -{}% 0px",
            percent(self.top_margin),
            percent(self.bottom_margin)
        )
    }

    /// Thresholds as a comma-separated list, e.g. `0.25,0.5,0.75`.
    #[must_use]
    pub fn threshold_list(&self) -> String {
        self.thresholds
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Number of thresholds at or below `ratio`.
    fn bucket(&self, ratio: f32) -> usize {
        self.thresholds.iter().filter(|&&t| ratio >= t).count()
    }
}

/// A fraction as a percentage rounded to one decimal.
fn percent(fraction: f32) -> f32 {
    (fraction * 1000.0).round() / 10.0
}

/// Vertical extent of one section on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionBounds {
    /// Section identifier
    pub id: SectionId,
    /// Offset of the section's first row from the top of the page
    pub top: u32,
    /// Height of the section
    pub height: u32,
}

impl SectionBounds {
    /// Offset one past the section's last row.
    #[must_use]
    pub const fn bottom(&self) -> u32 {
        self.top + self.height
    }
}

/// The visible part of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    /// Page offset of the first visible row
    pub scroll_offset: u32,
    /// Number of visible rows
    pub height: u32,
}

impl Viewport {
    /// The observation band `(start, end)` in page coordinates.
    #[must_use]
    pub fn band(&self, options: &ObserverOptions) -> (f32, f32) {
        let height = self.height as f32;
        let start = self.scroll_offset as f32 + height * options.top_margin;
        let end = self.scroll_offset as f32 + height * (1.0 - options.bottom_margin);
        (start, end.max(start))
    }
}

/// One visibility report for one section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    /// Section the report is about
    pub target: SectionId,
    /// Whether any part of the section is inside the band
    pub is_intersecting: bool,
    /// Fraction of the section inside the band, 0.0..=1.0
    pub ratio: f32,
}

/// Measures how much of `bounds` lies inside `band`.
#[must_use]
pub fn measure(bounds: &SectionBounds, band: (f32, f32)) -> IntersectionEntry {
    let (start, end) = band;
    let top = bounds.top as f32;
    let bottom = bounds.bottom() as f32;
    let overlap = (bottom.min(end) - top.max(start)).max(0.0);

    let ratio = if bounds.height == 0 {
        0.0
    } else {
        (overlap / bounds.height as f32).clamp(0.0, 1.0)
    };

    IntersectionEntry {
        target: bounds.id,
        is_intersecting: overlap > 0.0,
        ratio,
    }
}

/// Last reported visibility for one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Reported {
    is_intersecting: bool,
    bucket: usize,
}

/// Watches a set of sections and reports visibility changes.
///
/// Targets are kept in the order they were observed; entries come out in that
/// order. After [`disconnect`](Self::disconnect) (or drop) nothing is reported.
#[derive(Debug)]
pub struct IntersectionObserver {
    options: ObserverOptions,
    targets: Vec<SectionBounds>,
    reported: HashMap<SectionId, Reported>,
    connected: bool,
}

impl IntersectionObserver {
    /// Creates a connected observer with no targets.
    #[must_use]
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            targets: Vec::new(),
            reported: HashMap::new(),
            connected: true,
        }
    }

    /// The options this observer was created with.
    #[must_use]
    pub const fn options(&self) -> &ObserverOptions {
        &self.options
    }

    /// Starts watching a section. Re-observing a section replaces its bounds.
    pub fn observe(&mut self, bounds: SectionBounds) {
        if !self.connected {
            return;
        }
        match self.targets.iter_mut().find(|t| t.id == bounds.id) {
            Some(existing) => *existing = bounds,
            None => self.targets.push(bounds),
        }
    }

    /// Replaces the bounds of all watched sections after a relayout.
    ///
    /// Sections missing from `layout` keep their previous bounds.
    pub fn relayout(&mut self, layout: &[SectionBounds]) {
        for bounds in layout {
            self.observe(*bounds);
        }
    }

    /// Measures every target against `viewport` and returns the entries whose
    /// visibility changed since the last call.
    ///
    /// The first call after a target is observed always reports it.
    pub fn take_records(&mut self, viewport: Viewport) -> Vec<IntersectionEntry> {
        if !self.connected {
            return Vec::new();
        }

        let band = viewport.band(&self.options);
        let mut entries = Vec::new();

        for bounds in &self.targets {
            let entry = measure(bounds, band);
            let now = Reported {
                is_intersecting: entry.is_intersecting,
                bucket: self.options.bucket(entry.ratio),
            };
            if self.reported.insert(bounds.id, now) != Some(now) {
                entries.push(entry);
            }
        }

        entries
    }

    /// Returns true until the observer is disconnected.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Stops observation and forgets all targets.
    pub fn disconnect(&mut self) {
        if self.connected {
            debug!(targets = self.targets.len(), "Intersection observer disconnected");
        }
        self.connected = false;
        self.targets.clear();
        self.reported.clear();
    }
}

impl Drop for IntersectionObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(id: SectionId, top: u32, height: u32) -> SectionBounds {
        SectionBounds { id, top, height }
    }

    #[test]
    fn test_css_forms_of_options() {
        let options = ObserverOptions::default();
        assert_eq!(options.root_margin(), "-20% 0px -45% 0px");
        assert_eq!(options.threshold_list(), "0.25,0.5,0.75");

        let options = ObserverOptions {
            top_margin: 0.125,
            bottom_margin: 0.0,
            thresholds: vec![1.0],
        };
        assert_eq!(options.root_margin(), "-12.5% 0px -0% 0px");
        assert_eq!(options.threshold_list(), "1");
    }

    #[test]
    fn test_band_default_margins() {
        let viewport = Viewport {
            scroll_offset: 100,
            height: 100,
        };
        let (start, end) = viewport.band(&ObserverOptions::default());
        assert!((start - 120.0).abs() < 1e-4);
        assert!((end - 155.0).abs() < 1e-4);
    }

    #[test]
    fn test_band_never_inverts() {
        let options = ObserverOptions {
            top_margin: 0.7,
            bottom_margin: 0.7,
            thresholds: vec![0.5],
        };
        let (start, end) = Viewport {
            scroll_offset: 0,
            height: 10,
        }
        .band(&options);
        assert!(end >= start);
    }

    #[test]
    fn test_measure_partial_overlap() {
        let entry = measure(&bounds(SectionId::Tech, 10, 20), (20.0, 40.0));
        assert!(entry.is_intersecting);
        assert!((entry.ratio - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_measure_outside_band() {
        let entry = measure(&bounds(SectionId::Blog, 50, 10), (0.0, 40.0));
        assert!(!entry.is_intersecting);
        assert!(entry.ratio.abs() < f32::EPSILON);
    }

    #[test]
    fn test_measure_zero_height_section() {
        let entry = measure(&bounds(SectionId::Blog, 5, 0), (0.0, 40.0));
        assert!(!entry.is_intersecting);
        assert!(entry.ratio.abs() < f32::EPSILON);
    }

    #[test]
    fn test_first_take_reports_every_target() {
        let mut observer = IntersectionObserver::new(ObserverOptions::default());
        observer.observe(bounds(SectionId::About, 0, 20));
        observer.observe(bounds(SectionId::Tech, 20, 30));
        let entries = observer.take_records(Viewport {
            scroll_offset: 0,
            height: 40,
        });
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].target, SectionId::About);
        assert_eq!(entries[1].target, SectionId::Tech);
    }

    #[test]
    fn test_unchanged_bucket_reports_nothing() {
        let mut observer = IntersectionObserver::new(ObserverOptions::default());
        observer.observe(bounds(SectionId::About, 0, 100));
        let viewport = Viewport {
            scroll_offset: 0,
            height: 40,
        };
        assert_eq!(observer.take_records(viewport).len(), 1);
        assert!(observer.take_records(viewport).is_empty());

        // Band 9..23 still covers 14 rows: same bucket.
        let nudged = Viewport {
            scroll_offset: 1,
            height: 40,
        };
        assert!(observer.take_records(nudged).is_empty());
    }

    #[test]
    fn test_threshold_crossing_reports_entry() {
        let mut observer = IntersectionObserver::new(ObserverOptions::default());
        observer.observe(bounds(SectionId::Projects, 100, 10));
        let far = Viewport {
            scroll_offset: 0,
            height: 40,
        };
        let entries = observer.take_records(far);
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].is_intersecting);

        // Band 100..114 covers the whole section.
        let near = Viewport {
            scroll_offset: 92,
            height: 40,
        };
        let entries = observer.take_records(near);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_intersecting);
        assert!((entries[0].ratio - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_disconnect_stops_reporting() {
        let mut observer = IntersectionObserver::new(ObserverOptions::default());
        observer.observe(bounds(SectionId::About, 0, 20));
        observer.disconnect();
        assert!(!observer.is_connected());
        assert!(observer
            .take_records(Viewport {
                scroll_offset: 0,
                height: 40
            })
            .is_empty());

        observer.observe(bounds(SectionId::Tech, 0, 20));
        assert!(observer
            .take_records(Viewport {
                scroll_offset: 0,
                height: 40
            })
            .is_empty());
    }

    #[test]
    fn test_relayout_replaces_bounds() {
        let mut observer = IntersectionObserver::new(ObserverOptions::default());
        observer.observe(bounds(SectionId::About, 0, 10));
        observer.relayout(&[bounds(SectionId::About, 50, 10)]);
        let entries = observer.take_records(Viewport {
            scroll_offset: 0,
            height: 40,
        });
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].is_intersecting);
    }
}
