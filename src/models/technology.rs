//! Technology showcase entries.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::rgb::{RgbColor, Tint};

/// Showcase group heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechGroupKind {
    /// Server-side runtime, frameworks and storage
    Backend,
    /// Browser-side frameworks and styling
    Frontend,
    /// Delivery and hosting
    DevOps,
}

impl TechGroupKind {
    /// Group heading text.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Backend => "Backend",
            Self::Frontend => "Frontend",
            Self::DevOps => "DevOps",
        }
    }
}

impl fmt::Display for TechGroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A technology chip with its display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    /// Display name (e.g., "Node.js (LTS)")
    pub name: String,
    /// Simple Icons slug for the logo (e.g., "nodedotjs")
    pub icon: String,
    /// Foreground brand color
    pub brand: RgbColor,
    /// Translucent chip background
    pub tone: Tint,
}

/// A heading plus the technologies listed under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechGroup {
    /// Group heading
    pub name: TechGroupKind,
    /// Chips in display order
    pub items: Vec<Technology>,
}
