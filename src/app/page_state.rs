//! The page's UI-state container.
//!
//! `PageState` owns the only mutable state of a page instance: the three
//! filter fields and the active section. Every setter recomputes the derived
//! project view before returning, so readers never observe a stale list.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{
    Choice, FilterState, Project, ProjectCategory, SectionId, SortMode, ALL_LABEL,
};
use crate::services::project_view::{visible_indices, FilterOptions};
use crate::services::{IntersectionEntry, SectionTracker};

/// A filter value that is not among the derived dropdown options.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The category is not used by any project
    #[error("category '{value}' is not offered (no project uses it)")]
    UnknownCategory {
        /// Rejected value
        value: String,
    },

    /// The technology is not listed by any project
    #[error("technology '{value}' is not offered (no project lists it)")]
    UnknownTechnology {
        /// Rejected value
        value: String,
    },

    /// The sort mode string is not recognized
    #[error("{message}")]
    UnknownSortMode {
        /// Parser message
        message: String,
    },
}

/// Filter state, derived project view, and active section for one page.
#[derive(Debug, Clone)]
pub struct PageState {
    catalog: Arc<Catalog>,
    options: FilterOptions,
    filter: FilterState,
    visible: Vec<usize>,
    tracker: SectionTracker,
}

impl PageState {
    /// Creates the state for a freshly loaded page: no filters, category sort,
    /// `About` active.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_sort(catalog, SortMode::default())
    }

    /// Like [`new`](Self::new) with a different initial sort mode.
    #[must_use]
    pub fn with_sort(catalog: Arc<Catalog>, sort_by: SortMode) -> Self {
        let options = FilterOptions::derive(&catalog.projects);
        let filter = FilterState::sorted_by(sort_by);
        let visible = visible_indices(&catalog.projects, &filter);
        Self {
            catalog,
            options,
            filter,
            visible,
            tracker: SectionTracker::new(),
        }
    }

    /// The catalog this page displays.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Dropdown options derived from the catalog.
    #[must_use]
    pub const fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Current filter selections.
    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Filtered, sorted projects.
    pub fn visible_projects(&self) -> impl Iterator<Item = &Project> + '_ {
        self.visible.iter().map(|&index| &self.catalog.projects[index])
    }

    /// Number of projects passing the current filters.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Section to highlight in the navigation.
    #[must_use]
    pub const fn active_section(&self) -> SectionId {
        self.tracker.active()
    }

    /// Selects a category. Rejects values that are not offered.
    pub fn set_category_filter(
        &mut self,
        choice: Choice<ProjectCategory>,
    ) -> Result<(), SelectionError> {
        if !self.options.offers_category(&choice) {
            return Err(SelectionError::UnknownCategory {
                value: choice.to_string(),
            });
        }
        self.filter.category = choice;
        self.recompute();
        Ok(())
    }

    /// Selects a technology. Rejects values that are not offered.
    pub fn set_tech_filter(&mut self, choice: Choice<String>) -> Result<(), SelectionError> {
        if !self.options.offers_technology(&choice) {
            return Err(SelectionError::UnknownTechnology {
                value: choice.to_string(),
            });
        }
        self.filter.technology = choice;
        self.recompute();
        Ok(())
    }

    /// Selects the ordering.
    pub fn set_sort_by(&mut self, sort_by: SortMode) {
        self.filter.sort_by = sort_by;
        self.recompute();
    }

    /// Applies a whole filter state, all-or-nothing.
    pub fn set_filter(&mut self, filter: FilterState) -> Result<(), SelectionError> {
        if !self.options.offers_category(&filter.category) {
            return Err(SelectionError::UnknownCategory {
                value: filter.category.to_string(),
            });
        }
        if !self.options.offers_technology(&filter.technology) {
            return Err(SelectionError::UnknownTechnology {
                value: filter.technology.to_string(),
            });
        }
        self.filter = filter;
        self.recompute();
        Ok(())
    }

    /// Applies raw dropdown/query values. Absent values leave the field as is.
    pub fn apply_selection(
        &mut self,
        category: Option<&str>,
        technology: Option<&str>,
        sort_by: Option<&str>,
    ) -> Result<(), SelectionError> {
        let mut next = self.filter.clone();
        if let Some(value) = category {
            next.category = value
                .parse()
                .map_err(|_| SelectionError::UnknownCategory {
                    value: value.to_string(),
                })?;
        }
        if let Some(value) = technology {
            // Membership is checked by set_filter.
            next.technology = if value == ALL_LABEL {
                Choice::All
            } else {
                Choice::Only(value.to_string())
            };
        }
        if let Some(value) = sort_by {
            next.sort_by = value
                .parse()
                .map_err(|message| SelectionError::UnknownSortMode { message })?;
        }
        self.set_filter(next)
    }

    /// Moves the category selection to the next (or previous) option, wrapping.
    pub fn cycle_category(&mut self, forward: bool) {
        let next = cycle(&self.options.categories, &self.filter.category, forward);
        if let Some(choice) = next {
            self.filter.category = choice;
            self.recompute();
        }
    }

    /// Moves the technology selection to the next (or previous) option, wrapping.
    pub fn cycle_technology(&mut self, forward: bool) {
        let next = cycle(&self.options.technologies, &self.filter.technology, forward);
        if let Some(choice) = next {
            self.filter.technology = choice;
            self.recompute();
        }
    }

    /// Clears both filters, keeping the sort mode.
    pub fn reset_filters(&mut self) {
        self.filter.category = Choice::All;
        self.filter.technology = Choice::All;
        self.recompute();
    }

    /// Feeds one batch of intersection entries to the tracker.
    /// Returns true if the active section changed.
    pub fn apply_intersections(&mut self, entries: &[IntersectionEntry]) -> bool {
        self.tracker.apply(entries)
    }

    fn recompute(&mut self) {
        self.visible = visible_indices(&self.catalog.projects, &self.filter);
        debug!(
            category = %self.filter.category,
            technology = %self.filter.technology,
            sort = %self.filter.sort_by,
            visible = self.visible.len(),
            "Project view recomputed"
        );
    }
}

/// The option after (or before) `current`, wrapping around.
fn cycle<T: Clone + PartialEq>(options: &[T], current: &T, forward: bool) -> Option<T> {
    if options.is_empty() {
        return None;
    }
    let position = options.iter().position(|o| o == current).unwrap_or(0);
    let next = if forward {
        (position + 1) % options.len()
    } else {
        (position + options.len() - 1) % options.len()
    };
    Some(options[next].clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> PageState {
        PageState::new(Arc::new(Catalog::embedded().unwrap()))
    }

    fn visible_names(state: &PageState) -> Vec<String> {
        state.visible_projects().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_initial_view_sorted_by_category() {
        let state = state();
        assert_eq!(
            visible_names(&state),
            vec!["DraftPilot", "QueueForge API", "PulseBoard", "Storefront Core"]
        );
        assert_eq!(state.active_section(), SectionId::About);
    }

    #[test]
    fn test_setter_recomputes_view() {
        let mut state = state();
        state
            .set_category_filter(Choice::Only(ProjectCategory::WebApp))
            .unwrap();
        assert_eq!(visible_names(&state), vec!["PulseBoard", "Storefront Core"]);
        assert_eq!(state.visible_count(), 2);
    }

    #[test]
    fn test_unknown_technology_rejected_and_state_kept() {
        let mut state = state();
        state.set_tech_filter(Choice::Only("Redis".to_string())).unwrap();
        let err = state
            .set_tech_filter(Choice::Only("COBOL".to_string()))
            .unwrap_err();
        assert_eq!(
            err,
            SelectionError::UnknownTechnology {
                value: "COBOL".to_string()
            }
        );
        assert_eq!(state.filter().technology, Choice::Only("Redis".to_string()));
        assert_eq!(visible_names(&state), vec!["QueueForge API", "Storefront Core"]);
    }

    #[test]
    fn test_apply_selection_parses_raw_values() {
        let mut state = state();
        state
            .apply_selection(Some("Web App"), Some("Redis"), Some("technology"))
            .unwrap();
        assert_eq!(visible_names(&state), vec!["Storefront Core"]);
        assert_eq!(state.filter().sort_by, SortMode::Technology);
    }

    #[test]
    fn test_apply_selection_is_all_or_nothing() {
        let mut state = state();
        let result = state.apply_selection(Some("Backend"), Some("Nope"), None);
        assert!(matches!(
            result,
            Err(SelectionError::UnknownTechnology { .. })
        ));
        assert!(state.filter().category.is_all());

        assert!(matches!(
            state.apply_selection(None, None, Some("name")),
            Err(SelectionError::UnknownSortMode { .. })
        ));
        assert!(matches!(
            state.apply_selection(Some("Mobile"), None, None),
            Err(SelectionError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_cycle_category_wraps() {
        let mut state = state();
        let count = state.options().categories.len();
        for _ in 0..count {
            state.cycle_category(true);
        }
        assert!(state.filter().category.is_all());

        state.cycle_category(false);
        assert_eq!(
            state.filter().category,
            *state.options().categories.last().unwrap()
        );
    }

    #[test]
    fn test_reset_filters_keeps_sort() {
        let mut state = state();
        state.set_sort_by(SortMode::Technology);
        state.cycle_technology(true);
        state.cycle_category(true);
        state.reset_filters();
        assert!(state.filter().category.is_all());
        assert!(state.filter().technology.is_all());
        assert_eq!(state.filter().sort_by, SortMode::Technology);
        assert_eq!(state.visible_count(), 4);
    }

    #[test]
    fn test_intersections_update_active_section() {
        let mut state = state();
        let changed = state.apply_intersections(&[IntersectionEntry {
            target: SectionId::Projects,
            is_intersecting: true,
            ratio: 0.5,
        }]);
        assert!(changed);
        assert_eq!(state.active_section(), SectionId::Projects);

        assert!(!state.apply_intersections(&[]));
        assert_eq!(state.active_section(), SectionId::Projects);
    }
}
