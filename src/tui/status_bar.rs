//! Status bar: current section, filter summary, and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let content = vec![Self::status_line(state, theme), Self::hints_line(theme)];
        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.surface)),
        );
        f.render_widget(paragraph, area);
    }

    /// Status message if one is set, otherwise position and filter summary.
    pub fn status_line(state: &AppState, theme: &Theme) -> Line<'static> {
        if let Some(message) = &state.status_message {
            return Line::from(Span::styled(message.clone(), Style::default().fg(theme.accent)));
        }

        let page = &state.page;
        let filter = page.filter();
        Line::from(vec![
            Span::styled(
                format!(" {} ", page.active_section()),
                Style::default()
                    .fg(theme.active)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  {}/{} projects  sort: {}  category: {}  tech: {}  row {}/{}",
                    page.visible_count(),
                    page.catalog().projects.len(),
                    filter.sort_by,
                    filter.category,
                    filter.technology,
                    state.scroll_offset,
                    state.max_scroll(),
                ),
                Style::default().fg(theme.text_secondary),
            ),
        ])
    }

    fn hints_line(theme: &Theme) -> Line<'static> {
        let key = Style::default().fg(theme.accent);
        let text = Style::default().fg(theme.text_muted);
        let mut spans = Vec::new();
        for (keys, action) in [
            ("j/k", "scroll"),
            ("1-5", "section"),
            ("s", "sort"),
            ("c/t", "filter"),
            ("r", "reset"),
            ("?", "help"),
            ("q", "quit"),
        ] {
            spans.push(Span::styled(keys, key));
            spans.push(Span::styled(format!(" {action}  "), text));
        }
        Line::from(spans)
    }
}
