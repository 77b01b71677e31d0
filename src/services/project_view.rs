//! Project filter and sort engine.
//!
//! Pure functions over the immutable project list: the filter predicate, the
//! two orderings, and the dropdown option lists derived from the catalog.
//! Nothing here fails or mutates its input.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;

use crate::models::{Choice, FilterState, Project, ProjectCategory, SortMode};

/// Dropdown options derived from the full project list.
///
/// Each list starts with `All`, followed by the distinct values in order of
/// first appearance in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Category dropdown entries
    pub categories: Vec<Choice<ProjectCategory>>,
    /// Technology dropdown entries
    pub technologies: Vec<Choice<String>>,
}

impl FilterOptions {
    /// Derives both option lists from `projects`.
    #[must_use]
    pub fn derive(projects: &[Project]) -> Self {
        let mut seen_categories = HashSet::new();
        let categories = std::iter::once(Choice::All)
            .chain(
                projects
                    .iter()
                    .map(|p| p.category)
                    .filter(|category| seen_categories.insert(*category))
                    .map(Choice::Only),
            )
            .collect();

        let mut seen_technologies = HashSet::new();
        let technologies = std::iter::once(Choice::All)
            .chain(
                projects
                    .iter()
                    .flat_map(|p| p.technologies.iter())
                    .filter(|tech| seen_technologies.insert(tech.as_str()))
                    .map(|tech| Choice::Only(tech.clone())),
            )
            .collect();

        Self {
            categories,
            technologies,
        }
    }

    /// Returns true if `choice` is one of the category options.
    #[must_use]
    pub fn offers_category(&self, choice: &Choice<ProjectCategory>) -> bool {
        self.categories.contains(choice)
    }

    /// Returns true if `choice` is one of the technology options.
    #[must_use]
    pub fn offers_technology(&self, choice: &Choice<String>) -> bool {
        self.technologies.contains(choice)
    }
}

/// Returns true if `project` passes both filters of `filter`.
#[must_use]
pub fn matches(project: &Project, filter: &FilterState) -> bool {
    filter.category.admits(|category| project.category == *category)
        && filter.technology.admits(|tech| project.uses(tech))
}

/// Compares two strings the way a locale-aware compare orders Latin text:
/// ignoring case and accents first, then unaccented before accented, then
/// lowercase before uppercase.
///
/// Accents are folded for the Latin-1 letters only (`é` sorts with `e`).
/// Other scripts compare by code point after lowercasing.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    lowered(a)
        .map(fold_accent)
        .cmp(lowered(b).map(fold_accent))
        .then_with(|| lowered(a).cmp(lowered(b)))
        // Strings equal up to case differ only in case here; reversed byte
        // order puts lowercase first.
        .then_with(|| b.cmp(a))
}

fn lowered(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().flat_map(char::to_lowercase)
}

/// Base letter of an accented lowercase Latin-1 letter.
fn fold_accent(c: char) -> char {
    match c {
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ð' => 'd',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => c,
    }
}

/// Orders two projects under `sort_by`, breaking ties by name.
#[must_use]
pub fn compare(a: &Project, b: &Project, sort_by: SortMode) -> Ordering {
    let primary = match sort_by {
        SortMode::Category => collate(a.category.label(), b.category.label()),
        SortMode::Technology => collate(a.lead_technology(), b.lead_technology()),
    };
    primary.then_with(|| collate(&a.name, &b.name))
}

/// Produces the filtered, sorted view of `projects`.
///
/// Returns indices into `projects` so callers can hold the result alongside
/// a shared catalog without borrowing it.
#[must_use]
pub fn visible_indices(projects: &[Project], filter: &FilterState) -> Vec<usize> {
    let mut indices: Vec<usize> = projects
        .iter()
        .enumerate()
        .filter(|(_, project)| matches(project, filter))
        .map(|(index, _)| index)
        .collect();
    indices.sort_by(|&a, &b| compare(&projects[a], &projects[b], filter.sort_by));
    indices
}

/// Produces the filtered, sorted view of `projects` as references.
#[must_use]
pub fn visible_projects<'a>(projects: &'a [Project], filter: &FilterState) -> Vec<&'a Project> {
    visible_indices(projects, filter)
        .into_iter()
        .map(|index| &projects[index])
        .collect()
}
