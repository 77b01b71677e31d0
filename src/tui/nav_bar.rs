//! Header bar: brand plus the main navigation with the active item highlighted.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::PageState;
use crate::models::SectionId;

use super::Theme;

/// Navigation bar widget
pub struct NavBar;

impl NavBar {
    /// Builds the single content line of the bar.
    #[must_use]
    pub fn line(state: &PageState, theme: &Theme) -> Line<'static> {
        let catalog = state.catalog();
        let active = state.active_section();

        let mut spans = vec![
            Span::styled(
                catalog.profile.brand.clone(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
        ];

        for (index, item) in catalog.nav_items.iter().enumerate() {
            let style = if item.id == active {
                Style::default()
                    .fg(theme.active)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.inactive)
            };
            spans.push(Span::styled(
                format!(" {} {} ", index + 1, item.label),
                style,
            ));
            spans.push(Span::raw(" "));
        }

        Line::from(spans)
    }

    /// Render the navigation bar.
    pub fn render(f: &mut Frame, area: Rect, state: &PageState, theme: &Theme) {
        let paragraph = Paragraph::new(Self::line(state, theme)).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.surface)),
        );
        f.render_widget(paragraph, area);
    }

    /// Section reached with the number key `digit` (`1` is the first item).
    #[must_use]
    pub fn section_for_digit(state: &PageState, digit: char) -> Option<SectionId> {
        let index = digit.to_digit(10)?.checked_sub(1)?;
        Self::section_at(state, usize::try_from(index).ok()?)
    }

    /// Section of the nav item at `index` (0-based).
    #[must_use]
    pub fn section_at(state: &PageState, index: usize) -> Option<SectionId> {
        state.catalog().nav_items.get(index).map(|item| item.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::services::IntersectionEntry;
    use std::sync::Arc;

    fn state() -> PageState {
        PageState::new(Arc::new(Catalog::embedded().unwrap()))
    }

    #[test]
    fn test_active_item_is_highlighted() {
        let mut state = state();
        state.apply_intersections(&[IntersectionEntry {
            target: SectionId::Contact,
            is_intersecting: true,
            ratio: 1.0,
        }]);
        let theme = Theme::dark();
        let line = NavBar::line(&state, &theme);

        let highlighted: Vec<&str> = line
            .spans
            .iter()
            .filter(|s| s.style.bg == Some(theme.highlight_bg))
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(highlighted, vec![" 4 Contact "]);
    }

    #[test]
    fn test_section_for_digit() {
        let state = state();
        assert_eq!(NavBar::section_for_digit(&state, '1'), Some(SectionId::About));
        assert_eq!(NavBar::section_for_digit(&state, '5'), Some(SectionId::Blog));
        assert_eq!(NavBar::section_for_digit(&state, '0'), None);
        assert_eq!(NavBar::section_for_digit(&state, '6'), None);
    }
}
