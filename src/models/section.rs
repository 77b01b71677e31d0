//! Page sections and the navigation entries that point at them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a page section, in top-to-bottom page order.
///
/// The default is `About`: the page loads scrolled to the top.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Hero / introduction
    #[default]
    About,
    /// Technology showcase
    Tech,
    /// Filterable project grid
    Projects,
    /// Contact details
    Contact,
    /// Latest blog articles
    Blog,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [Self; 5] = [
        Self::About,
        Self::Tech,
        Self::Projects,
        Self::Contact,
        Self::Blog,
    ];

    /// Anchor id used in markup (`#about`, `#tech`, ...).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Tech => "tech",
            Self::Projects => "projects",
            Self::Contact => "contact",
            Self::Blog => "blog",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown section '{s}'"))
    }
}

/// One entry of the main navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Section this entry points at
    pub id: SectionId,
    /// Link text
    pub label: String,
    /// Explicit link target; defaults to `#<id>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl NavItem {
    /// The link target for this entry.
    #[must_use]
    pub fn target(&self) -> String {
        self.href
            .clone()
            .unwrap_or_else(|| format!("#{}", self.id.as_str()))
    }
}
