//! Project records shown in the portfolio's project grid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of project, used for filtering and as the primary category sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    /// Browser-facing application
    #[serde(rename = "Web App")]
    WebApp,
    /// Service or API without its own UI
    #[serde(rename = "Backend")]
    Backend,
    /// AI-assisted tooling
    #[serde(rename = "AI Tool")]
    AiTool,
}

impl ProjectCategory {
    /// All categories in declaration order.
    pub const ALL: [Self; 3] = [Self::WebApp, Self::Backend, Self::AiTool];

    /// Human-readable label, also used as the sort key.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::WebApp => "Web App",
            Self::Backend => "Backend",
            Self::AiTool => "AI Tool",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| format!("unknown project category '{s}'"))
    }
}

/// A portfolio project.
///
/// `name` is the unique key within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Display name, unique within the catalog
    pub name: String,
    /// One-line description
    pub summary: String,
    /// Project kind
    pub category: ProjectCategory,
    /// Technologies in display order; the first one is the technology sort key
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl Project {
    /// Returns true if the project lists `technology` among its technologies.
    #[must_use]
    pub fn uses(&self, technology: &str) -> bool {
        self.technologies.iter().any(|t| t == technology)
    }

    /// The technology used as the primary key under technology sort.
    ///
    /// A project without technologies sorts as the empty string.
    #[must_use]
    pub fn lead_technology(&self) -> &str {
        self.technologies.first().map_or("", String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip_through_from_str() {
        for category in ProjectCategory::ALL {
            assert_eq!(category.label().parse::<ProjectCategory>(), Ok(category));
        }
        assert!("web app".parse::<ProjectCategory>().is_err());
    }

    #[test]
    fn test_category_serde_uses_label() {
        let json = serde_json::to_string(&ProjectCategory::AiTool).unwrap();
        assert_eq!(json, "\"AI Tool\"");
        let parsed: ProjectCategory = serde_json::from_str("\"Web App\"").unwrap();
        assert_eq!(parsed, ProjectCategory::WebApp);
    }

    #[test]
    fn test_lead_technology_empty_list() {
        let project = Project {
            name: "Bare".to_string(),
            summary: String::new(),
            category: ProjectCategory::Backend,
            technologies: vec![],
        };
        assert_eq!(project.lead_technology(), "");
        assert!(!project.uses("Redis"));
    }
}
