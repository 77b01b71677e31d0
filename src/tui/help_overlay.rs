//! Help overlay listing the key bindings, opened with `?`.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use super::component::Component;
use super::Theme;
use crate::branding::APP_DISPLAY_NAME;

/// Key bindings grouped by topic.
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "SCROLLING",
        &[
            ("j / Down", "Scroll down one row"),
            ("k / Up", "Scroll up one row"),
            ("PgDn / Space", "Scroll down one screen"),
            ("PgUp", "Scroll up one screen"),
            ("g / Home", "Jump to the top"),
            ("G / End", "Jump to the bottom"),
            ("Mouse wheel", "Scroll three rows"),
        ],
    ),
    (
        "SECTIONS",
        &[
            ("1-5", "Jump to About, Tech, Projects, Contact, Blog"),
            ("Tab / Shift+Tab", "Jump to the next / previous section"),
        ],
    ),
    (
        "PROJECTS",
        &[
            ("s", "Toggle sort (category / technology)"),
            ("c / C", "Next / previous category filter"),
            ("t / T", "Next / previous technology filter"),
            ("r", "Reset both filters"),
        ],
    ),
    (
        "SYSTEM",
        &[("?", "Toggle this help"), ("q / Esc", "Quit")],
    ),
];

/// What the overlay asks of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpEvent {
    /// The overlay was dismissed
    Closed,
}

/// State for the help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlayState {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    total_lines: usize,
    closed: bool,
}

impl HelpOverlayState {
    /// Creates a new help overlay state.
    #[must_use]
    pub fn new() -> Self {
        let total_lines = Self::help_content(&Theme::dark()).len();
        Self {
            scroll_offset: 0,
            total_lines,
            closed: false,
        }
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }

    fn help_content(theme: &Theme) -> Vec<Line<'static>> {
        let rule = "═".repeat(56);
        let mut lines = vec![
            Line::from(Span::styled(rule.clone(), Style::default().fg(theme.primary))),
            Line::from(Span::styled(
                format!("{APP_DISPLAY_NAME} - Help"),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(rule.clone(), Style::default().fg(theme.primary))),
            Line::from(""),
        ];

        for (title, bindings) in HELP_SECTIONS {
            lines.push(Line::from(Span::styled(
                format!("═══ {title} ═══"),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            for (keys, description) in *bindings {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("{keys:<18}"), Style::default().fg(theme.success)),
                    Span::styled(*description, Style::default().fg(theme.text)),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Press '?' to close help • Press ↑↓ to scroll",
            Style::default().fg(theme.text_muted),
        )));
        lines
    }
}

impl Default for HelpOverlayState {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HelpOverlayState {
    type Event = HelpEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<HelpEvent> {
        match key.code {
            KeyCode::Char('?' | 'q') | KeyCode::Esc => {
                self.closed = true;
                Some(HelpEvent::Closed)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_down();
                None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.scroll_offset = 0;
                None
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.scroll_offset = self.total_lines.saturating_sub(1);
                None
            }
            _ => None,
        }
    }

    /// Render the help overlay as a centered modal.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let width = (area.width * 60 / 100).max(40).min(area.width);
        let height = (area.height * 80 / 100).min(area.height);
        let modal_area = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let content = Self::help_content(theme);
        let visible_height = usize::from(chunks[0].height.saturating_sub(2));
        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .title(" Help - Keyboard Shortcuts ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .style(Style::default().fg(theme.text).bg(theme.surface))
            .scroll((u16::try_from(self.scroll_offset).unwrap_or(u16::MAX), 0));

        f.render_widget(Clear, modal_area);
        f.render_widget(paragraph, chunks[0]);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .style(Style::default().fg(theme.primary));
        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines.saturating_sub(visible_height))
                .position(self.scroll_offset);
        f.render_stateful_widget(scrollbar, chunks[1], &mut scrollbar_state);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}
