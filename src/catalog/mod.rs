//! Portfolio content catalog.
//!
//! The catalog holds everything the page displays: profile copy, the
//! technology showcase, projects, blog posts and navigation entries. It is
//! embedded in the binary at compile time and parsed once at startup; a
//! replacement file can be supplied through `paths.catalog` in the config.
//! Nothing writes to a catalog after it has been validated.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::config::Config;
use crate::models::{BlogPost, NavItem, Project, SectionId, TechGroup};

/// Copy for the hero and contact sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Brand shown in the header (e.g., "ciorhan.dev")
    pub brand: String,
    /// Small line above the headline
    pub greeting: String,
    /// Hero headline
    pub headline: String,
    /// Hero paragraph
    pub intro: String,
    /// Floating caption in the hero illustration
    pub hero_chip: String,
    /// Availability note in the contact section
    pub contact_copy: String,
    /// Contact address, rendered as a mailto link
    pub contact_email: String,
}

/// Reasons a catalog is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A project has a blank name
    #[error("project #{index} has an empty name")]
    EmptyProjectName {
        /// Position of the project in the catalog
        index: usize,
    },

    /// Two projects share a name
    #[error("duplicate project name '{name}'")]
    DuplicateProject {
        /// The repeated name
        name: String,
    },

    /// A section has no navigation entry
    #[error("navigation has no entry for section '{section}'")]
    MissingNavItem {
        /// Section without an entry
        section: SectionId,
    },

    /// A section has more than one navigation entry
    #[error("navigation lists section '{section}' more than once")]
    DuplicateNavItem {
        /// Section listed twice
        section: SectionId,
    },

    /// A showcase group has no technologies
    #[error("technology group '{group}' is empty")]
    EmptyTechGroup {
        /// Heading of the empty group
        group: String,
    },
}

/// The immutable content of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Hero and contact copy
    pub profile: Profile,
    /// Technology showcase groups in display order
    pub technology_groups: Vec<TechGroup>,
    /// Projects in catalog order
    pub projects: Vec<Project>,
    /// Blog teasers, newest first
    pub blog_posts: Vec<BlogPost>,
    /// Main navigation in display order
    pub nav_items: Vec<NavItem>,
}

impl Catalog {
    /// Loads the catalog embedded in the binary.
    pub fn embedded() -> Result<Self> {
        let json_data = include_str!("portfolio.json");
        Self::from_json(json_data).context("Failed to load embedded portfolio.json")
    }

    /// Loads and validates a catalog file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to load catalog file: {}", path.display()))
    }

    /// Loads the catalog named in the config, or the embedded one.
    pub fn load(config: &Config) -> Result<Self> {
        match &config.paths.catalog {
            Some(path) => {
                debug!("Loading catalog from {}", path.display());
                Self::from_path(path)
            }
            None => Self::embedded(),
        }
    }

    /// Parses and validates catalog JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json).context("Failed to parse catalog JSON")?;
        catalog.validate()?;
        debug!(
            projects = catalog.projects.len(),
            groups = catalog.technology_groups.len(),
            posts = catalog.blog_posts.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Checks the structural rules the page relies on.
    ///
    /// - Project names are non-empty and unique
    /// - Every section has exactly one navigation entry
    /// - Technology groups are non-empty
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut names = HashSet::new();
        for (index, project) in self.projects.iter().enumerate() {
            if project.name.trim().is_empty() {
                return Err(CatalogError::EmptyProjectName { index });
            }
            if !names.insert(project.name.as_str()) {
                return Err(CatalogError::DuplicateProject {
                    name: project.name.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        for item in &self.nav_items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateNavItem { section: item.id });
            }
        }
        if let Some(section) = SectionId::ALL.into_iter().find(|id| !seen.contains(id)) {
            return Err(CatalogError::MissingNavItem { section });
        }

        if let Some(group) = self.technology_groups.iter().find(|g| g.items.is_empty()) {
            return Err(CatalogError::EmptyTechGroup {
                group: group.name.to_string(),
            });
        }

        Ok(())
    }

    /// Looks up a project by its unique name.
    #[must_use]
    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    /// The navigation entry for a section.
    #[must_use]
    pub fn nav_item(&self, id: SectionId) -> Option<&NavItem> {
        self.nav_items.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectCategory;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.projects.len(), 4);
        assert_eq!(catalog.technology_groups.len(), 3);
        assert_eq!(catalog.blog_posts.len(), 3);
        assert_eq!(catalog.nav_items.len(), 5);
        assert_eq!(catalog.profile.brand, "ciorhan.dev");
    }

    #[test]
    fn test_embedded_catalog_reference_projects() {
        let catalog = Catalog::embedded().unwrap();
        let queue = catalog.project("QueueForge API").unwrap();
        assert_eq!(queue.category, ProjectCategory::Backend);
        assert_eq!(queue.technologies, vec!["Node.js", "Fastify", "Redis"]);
        assert!(catalog.project("Unknown").is_none());
    }

    #[test]
    fn test_embedded_nav_about_links_to_top() {
        let catalog = Catalog::embedded().unwrap();
        let about = catalog.nav_item(SectionId::About).unwrap();
        assert_eq!(about.target(), "#top");
        assert_eq!(catalog.nav_item(SectionId::Tech).unwrap().target(), "#tech");
    }

    #[test]
    fn test_validate_rejects_duplicate_project() {
        let mut catalog = Catalog::embedded().unwrap();
        let copy = catalog.projects[0].clone();
        catalog.projects.push(copy);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateProject {
                name: "PulseBoard".to_string()
            })
        );
    }

    #[test]
    fn test_validate_rejects_blank_project_name() {
        let mut catalog = Catalog::embedded().unwrap();
        catalog.projects[2].name = "  ".to_string();
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::EmptyProjectName { index: 2 })
        );
    }

    #[test]
    fn test_validate_rejects_missing_nav_item() {
        let mut catalog = Catalog::embedded().unwrap();
        catalog.nav_items.retain(|item| item.id != SectionId::Blog);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::MissingNavItem {
                section: SectionId::Blog
            })
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_nav_item() {
        let mut catalog = Catalog::embedded().unwrap();
        let tech = catalog.nav_items[1].clone();
        catalog.nav_items.push(tech);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateNavItem {
                section: SectionId::Tech
            })
        );
    }

    #[test]
    fn test_validate_rejects_empty_group() {
        let mut catalog = Catalog::embedded().unwrap();
        catalog.technology_groups[1].items.clear();
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::EmptyTechGroup {
                group: "Frontend".to_string()
            })
        );
    }

    #[test]
    fn test_from_json_rejects_bad_color() {
        let json = include_str!("portfolio.json").replace("#5fa04e", "green");
        assert!(Catalog::from_json(&json).is_err());
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, include_str!("portfolio.json")).unwrap();
        let catalog = Catalog::from_path(&path).unwrap();
        assert_eq!(catalog, Catalog::embedded().unwrap());

        assert!(Catalog::from_path(&dir.path().join("missing.json")).is_err());
    }
}
