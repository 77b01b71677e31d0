//! Action dispatcher - routes actions to the `AppState` operations.

use anyhow::Result;

use crate::shortcuts::Action;
use crate::tui::help_overlay::HelpOverlayState;
use crate::tui::nav_bar::NavBar;
use crate::tui::AppState;

/// Dispatch an action. Returns true when the page should close.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    let page_rows = i64::from(state.viewport_height.max(1));

    match action {
        // === SCROLLING ===
        Action::ScrollUp => state.scroll_by(-1),
        Action::ScrollDown => state.scroll_by(1),
        Action::PageUp => state.scroll_by(-page_rows),
        Action::PageDown => state.scroll_by(page_rows),
        Action::JumpToTop => state.scroll_to(0),
        Action::JumpToBottom => state.scroll_to(state.max_scroll()),

        // === SECTIONS ===
        Action::JumpToNavItem(index) => {
            if let Some(section) = NavBar::section_at(&state.page, usize::from(index)) {
                state.jump_to(section);
            }
        }
        Action::NextSection => state.step_section(true),
        Action::PreviousSection => state.step_section(false),

        // === PROJECTS ===
        Action::ToggleSort => {
            let next = state.page.filter().sort_by.toggled();
            state.page.set_sort_by(next);
            state.filters_changed(format!("Sorted by {}", next.label()));
        }
        Action::NextCategory | Action::PreviousCategory => {
            state
                .page
                .cycle_category(matches!(action, Action::NextCategory));
            let message = format!("Category: {}", state.page.filter().category);
            state.filters_changed(message);
        }
        Action::NextTechnology | Action::PreviousTechnology => {
            state
                .page
                .cycle_technology(matches!(action, Action::NextTechnology));
            let message = format!("Technology: {}", state.page.filter().technology);
            state.filters_changed(message);
        }
        Action::ResetFilters => {
            state.page.reset_filters();
            state.filters_changed("Filters cleared".to_string());
        }

        // === GENERAL ===
        Action::ToggleHelp => {
            state.help = Some(HelpOverlayState::new());
        }
        Action::Quit => {
            state.should_quit = true;
            return Ok(true);
        }
    }

    Ok(false)
}
