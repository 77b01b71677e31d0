//! Shared test fixtures for the integration tests.
#![allow(dead_code)] // Each test binary uses a different subset

use devfolio::app::PageState;
use devfolio::catalog::Catalog;
use devfolio::models::SectionId;
use devfolio::services::IntersectionEntry;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The catalog shipped with the binary.
pub fn embedded_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::embedded().expect("embedded catalog should load"))
}

/// A fresh page over the embedded catalog.
pub fn page() -> PageState {
    PageState::new(embedded_catalog())
}

/// Names of the visible projects, in display order.
pub fn visible_names(state: &PageState) -> Vec<String> {
    state.visible_projects().map(|p| p.name.clone()).collect()
}

/// The embedded catalog JSON with its project list replaced.
pub fn catalog_json_with_projects(projects: Value) -> String {
    let mut catalog: Value = serde_json::from_str(include_str!("../../src/catalog/portfolio.json"))
        .expect("embedded catalog is valid JSON");
    catalog["projects"] = projects;
    serde_json::to_string_pretty(&catalog).expect("catalog serializes")
}

/// A catalog with a project that lists no technologies.
pub fn catalog_with_bare_project() -> Catalog {
    let json = catalog_json_with_projects(json!([
        {
            "name": "Zeta",
            "summary": "Has a stack.",
            "category": "Backend",
            "technologies": ["Go"]
        },
        {
            "name": "Alpha",
            "summary": "No stack listed.",
            "category": "Backend",
            "technologies": []
        },
        {
            "name": "Beta",
            "summary": "Has a stack.",
            "category": "Web App",
            "technologies": ["Astro", "Go"]
        }
    ]));
    Catalog::from_json(&json).expect("fixture catalog should validate")
}

/// Writes a catalog file into `dir` and returns its path.
pub fn write_catalog_file(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("catalog.json");
    fs::write(&path, json).expect("Failed to write catalog file");
    path
}

/// Shorthand for an intersection entry.
pub fn entry(target: SectionId, is_intersecting: bool, ratio: f32) -> IntersectionEntry {
    IntersectionEntry {
        target,
        is_intersecting,
        ratio,
    }
}
