//! Data models for the portfolio page.
//!
//! This module contains the catalog records (projects, technologies, blog posts,
//! navigation entries) and the filter state that selects from them.
//! Models are independent of UI and business logic.

pub mod blog;
pub mod filter;
pub mod project;
pub mod rgb;
pub mod section;
pub mod technology;

// Re-export all model types
pub use blog::BlogPost;
pub use filter::{Choice, FilterState, SortMode, ALL_LABEL};
pub use project::{Project, ProjectCategory};
pub use rgb::{RgbColor, Tint};
pub use section::{NavItem, SectionId};
pub use technology::{TechGroup, TechGroupKind, Technology};
