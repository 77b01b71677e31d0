//! Main page input handler.

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent, MouseEventKind};

use crate::shortcuts::ShortcutRegistry;
use crate::tui::AppState;

/// Rows scrolled per mouse wheel notch.
const WHEEL_STEP: i64 = 3;

/// Handle a key on the page. Returns true when the page should close.
pub fn handle_main_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let registry = ShortcutRegistry::new();

    if let Some(action) = registry.lookup(key) {
        super::dispatch_action(state, action)
    } else {
        // No action mapped - ignore key
        Ok(false)
    }
}

/// Handle mouse input. Only the wheel does anything.
pub fn handle_mouse_input(state: &mut AppState, mouse: MouseEvent) -> Result<bool> {
    match mouse.kind {
        MouseEventKind::ScrollDown => state.scroll_by(WHEEL_STEP),
        MouseEventKind::ScrollUp => state.scroll_by(-WHEEL_STEP),
        _ => {}
    }
    Ok(false)
}
