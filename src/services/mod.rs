//! Service layer for the page logic.
//!
//! This module contains the pure project filter/sort engine and the
//! viewport observation plus active-section tracking used for navigation.

pub mod project_view;
pub mod section_tracker;
pub mod viewport;

// Re-export commonly used types and functions
pub use project_view::{visible_indices, visible_projects, FilterOptions};
pub use section_tracker::SectionTracker;
pub use viewport::{IntersectionEntry, IntersectionObserver, ObserverOptions, SectionBounds, Viewport};
