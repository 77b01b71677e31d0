//! Terminal rendition of the portfolio page.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and the page widgets using Ratatui. The page is laid out as rows; the
//! scroll position drives the same intersection observer and section tracker
//! the browser page uses, so the nav bar highlights whatever is on screen.

// Allow clone assignment patterns - common in UI state management
#![allow(clippy::assigning_clones)]
// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]

pub mod component;
pub mod handlers;
pub mod help_overlay;
pub mod nav_bar;
pub mod page;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::app::PageState;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::models::SectionId;
use crate::services::{IntersectionObserver, Viewport};

use component::Component;
use help_overlay::{HelpEvent, HelpOverlayState};
use nav_bar::NavBar;
use page::{build_page, PageLayout};
use status_bar::StatusBar;

pub use theme::Theme;

/// Rows taken by the nav bar.
const NAV_ROWS: u16 = 2;
/// Rows taken by the status bar.
const STATUS_ROWS: u16 = 3;
/// Width used until the first resize.
const INITIAL_WIDTH: u16 = 80;
/// Page rows used until the first resize.
const INITIAL_HEIGHT: u32 = 20;

/// Application state for the terminal page.
pub struct AppState {
    /// Filters, project view, and active section
    pub page: PageState,
    /// Loaded configuration
    pub config: Config,
    /// Colors
    pub theme: Theme,
    /// Current page rows and section spans
    pub layout: PageLayout,
    /// First visible page row
    pub scroll_offset: u32,
    /// Number of page rows on screen
    pub viewport_height: u32,
    width: u16,
    observer: IntersectionObserver,
    layout_dirty: bool,

    /// Open help overlay
    pub help: Option<HelpOverlayState>,
    /// Transient message shown instead of the summary
    pub status_message: Option<String>,
    /// Set by the quit action
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state for a freshly opened page and runs the first
    /// observation, so the tracker starts from what is on screen.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, config: Config) -> Self {
        let page = PageState::with_sort(catalog, config.ui.default_sort);
        let theme = Theme::from_mode(config.ui.theme_mode);
        let observer = IntersectionObserver::new(config.tracker.observer_options());
        let help = config.ui.show_help_on_startup.then(HelpOverlayState::new);

        let mut state = Self {
            page,
            config,
            theme,
            layout: PageLayout::default(),
            scroll_offset: 0,
            viewport_height: INITIAL_HEIGHT,
            width: INITIAL_WIDTH,
            observer,
            layout_dirty: true,
            help,
            status_message: None,
            should_quit: false,
        };
        state.refresh();
        state
    }

    /// Records a new terminal size. `height` counts page rows only.
    pub fn resize(&mut self, width: u16, height: u16) {
        let height = u32::from(height.max(1));
        if width != self.width || height != self.viewport_height {
            debug!(width, height, "Page resized");
            self.width = width;
            self.viewport_height = height;
            self.layout_dirty = true;
        }
    }

    /// Rebuilds the layout if needed, then reports visibility changes to the
    /// tracker. Call once per frame.
    pub fn refresh(&mut self) {
        if self.layout_dirty {
            self.relayout();
        }
        self.observe();
    }

    fn relayout(&mut self) {
        self.layout = build_page(&self.page, &self.theme, self.width);
        self.observer.relayout(&self.layout.sections);
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        self.layout_dirty = false;
    }

    fn observe(&mut self) {
        let entries = self.observer.take_records(self.viewport());
        if !entries.is_empty() && self.page.apply_intersections(&entries) {
            debug!(active = %self.page.active_section(), "Nav highlight moved");
        }
    }

    /// The visible part of the page.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        Viewport {
            scroll_offset: self.scroll_offset,
            height: self.viewport_height,
        }
    }

    /// Largest scroll offset. The page can scroll until the last section's
    /// first row reaches the top of the observation band, leaving blank rows
    /// below it, so every section can become the active one.
    #[must_use]
    pub fn max_scroll(&self) -> u32 {
        let filled = self.layout.height().saturating_sub(self.viewport_height);
        let last_top = self.layout.sections.last().map_or(0, |s| s.top);
        filled.max(last_top.saturating_sub(self.band_inset()))
    }

    /// Rows between the top of the screen and the top of the observation band.
    fn band_inset(&self) -> u32 {
        (self.viewport_height as f32 * self.config.tracker.top_margin).floor() as u32
    }

    /// Scrolls by `delta` rows, clamped to the page.
    pub fn scroll_by(&mut self, delta: i64) {
        let target = i64::from(self.scroll_offset) + delta;
        let clamped = target.clamp(0, i64::from(self.max_scroll()));
        self.scroll_to(u32::try_from(clamped).unwrap_or(0));
    }

    /// Scrolls to an absolute row, clamped to the page.
    pub fn scroll_to(&mut self, offset: u32) {
        self.scroll_offset = offset.min(self.max_scroll());
    }

    /// Scrolls so the section's first row sits at the top of the observation
    /// band, like following a `#section` link.
    pub fn jump_to(&mut self, section: SectionId) {
        if self.layout_dirty {
            self.relayout();
        }
        let Some(bounds) = self.layout.section(section) else {
            return;
        };
        self.scroll_to(bounds.top.saturating_sub(self.band_inset()));
        debug!(%section, offset = self.scroll_offset, "Jumped to section");
    }

    /// Jumps to the section after (or before) the active one, wrapping.
    pub fn step_section(&mut self, forward: bool) {
        let sections = SectionId::ALL;
        let active = self.page.active_section();
        let position = sections.iter().position(|&s| s == active).unwrap_or(0);
        let next = if forward {
            (position + 1) % sections.len()
        } else {
            (position + sections.len() - 1) % sections.len()
        };
        self.jump_to(sections[next]);
    }

    /// Marks the page for relayout after a filter or sort change.
    pub fn filters_changed(&mut self, message: String) {
        self.status_message = Some(message);
        self.layout_dirty = true;
    }

    /// Stops observation. Nothing is tracked after this.
    pub fn close(&mut self) {
        self.observer.disconnect();
    }
}

/// Setup terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(err).context("Failed to enter alternate screen");
    }
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    state.resize(size.width, page_rows(size.height));
    info!(
        width = size.width,
        height = size.height,
        projects = state.page.catalog().projects.len(),
        "Page opened"
    );

    loop {
        state.refresh();

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Mouse(mouse) => {
                    handlers::handle_mouse_input(state, mouse)?;
                }
                Event::Resize(width, height) => {
                    state.resize(width, page_rows(height));
                }
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    state.close();
    info!("Page closed");
    Ok(())
}

fn page_rows(terminal_height: u16) -> u16 {
    terminal_height.saturating_sub(NAV_ROWS + STATUS_ROWS)
}

/// Routes a key to the help overlay if open, otherwise to the page.
/// Returns true when the page should close.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if let Some(help) = state.help.as_mut() {
        if help.handle_input(key) == Some(HelpEvent::Closed) || help.should_close() {
            state.help = None;
        }
        return Ok(false);
    }

    state.status_message = None;
    handlers::handle_main_input(state, key)
}

/// Render the UI
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_ROWS),    // Nav bar
            Constraint::Min(1),              // Page
            Constraint::Length(STATUS_ROWS), // Status bar
        ])
        .split(f.area());

    NavBar::render(f, chunks[0], &state.page, &state.theme);
    render_page(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, &state.theme);

    if let Some(help) = &state.help {
        let area = f.area();
        help.render(f, area, &state.theme);
    }
}

/// Render the visible slice of the page rows.
fn render_page(f: &mut Frame, area: Rect, state: &AppState) {
    let start = usize::try_from(state.scroll_offset).unwrap_or(usize::MAX);
    let lines: Vec<_> = state
        .layout
        .lines
        .iter()
        .skip(start)
        .take(usize::from(area.height))
        .cloned()
        .collect();
    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(state.theme.text).bg(state.theme.background));
    f.render_widget(paragraph, area);
}
