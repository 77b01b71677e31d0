//! Key bindings for the terminal page.
//!
//! Maps key events to [`Action`]s so the event loop, the help overlay, and
//! the tests all agree on what each key does.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Everything a visitor can do on the terminal page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === SCROLLING ===
    /// One row up
    ScrollUp,
    /// One row down
    ScrollDown,
    /// One screen up
    PageUp,
    /// One screen down
    PageDown,
    /// First row
    JumpToTop,
    /// Last screen
    JumpToBottom,

    // === SECTIONS ===
    /// Nav item by position (0-based)
    JumpToNavItem(u8),
    /// Section after the active one
    NextSection,
    /// Section before the active one
    PreviousSection,

    // === PROJECTS ===
    /// Switch between category and technology ordering
    ToggleSort,
    /// Next category option
    NextCategory,
    /// Previous category option
    PreviousCategory,
    /// Next technology option
    NextTechnology,
    /// Previous technology option
    PreviousTechnology,
    /// Both filters back to `All`
    ResetFilters,

    // === GENERAL ===
    /// Open or close the help overlay
    ToggleHelp,
    /// Leave the page
    Quit,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier state
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Maps key bindings to actions.
pub struct ShortcutRegistry {
    bindings: HashMap<KeyBinding, Action>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        use KeyCode as K;
        use KeyModifiers as M;

        let mut registry = Self {
            bindings: HashMap::new(),
        };

        // === SCROLLING ===
        registry.register(K::Up, M::NONE, Action::ScrollUp);
        registry.register(K::Char('k'), M::NONE, Action::ScrollUp);
        registry.register(K::Down, M::NONE, Action::ScrollDown);
        registry.register(K::Char('j'), M::NONE, Action::ScrollDown);
        registry.register(K::PageUp, M::NONE, Action::PageUp);
        registry.register(K::PageDown, M::NONE, Action::PageDown);
        registry.register(K::Char(' '), M::NONE, Action::PageDown);
        registry.register(K::Home, M::NONE, Action::JumpToTop);
        registry.register(K::Char('g'), M::NONE, Action::JumpToTop);
        registry.register(K::End, M::NONE, Action::JumpToBottom);
        registry.register_upper('G', Action::JumpToBottom);

        // === SECTIONS ===
        for (index, digit) in ('1'..='9').enumerate() {
            if let Ok(index) = u8::try_from(index) {
                registry.register(K::Char(digit), M::NONE, Action::JumpToNavItem(index));
            }
        }
        registry.register(K::Tab, M::NONE, Action::NextSection);
        registry.register(K::BackTab, M::SHIFT, Action::PreviousSection);
        registry.register(K::BackTab, M::NONE, Action::PreviousSection);

        // === PROJECTS ===
        registry.register(K::Char('s'), M::NONE, Action::ToggleSort);
        registry.register(K::Char('c'), M::NONE, Action::NextCategory);
        registry.register_upper('C', Action::PreviousCategory);
        registry.register(K::Char('t'), M::NONE, Action::NextTechnology);
        registry.register_upper('T', Action::PreviousTechnology);
        registry.register(K::Char('r'), M::NONE, Action::ResetFilters);

        // === GENERAL ===
        registry.register(K::Char('?'), M::NONE, Action::ToggleHelp);
        registry.register(K::Char('?'), M::SHIFT, Action::ToggleHelp);
        registry.register(K::Char('q'), M::NONE, Action::Quit);
        registry.register(K::Esc, M::NONE, Action::Quit);
        registry.register(K::Char('c'), M::CONTROL, Action::Quit);

        registry
    }

    fn register(&mut self, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        self.bindings
            .insert(KeyBinding::new(code, modifiers), action);
    }

    /// Uppercase letters arrive with or without SHIFT depending on the terminal.
    fn register_upper(&mut self, letter: char, action: Action) {
        self.register(KeyCode::Char(letter), KeyModifiers::SHIFT, action);
        self.register(KeyCode::Char(letter), KeyModifiers::NONE, action);
    }

    /// Look up the action for a key event.
    #[must_use]
    pub fn lookup(&self, event: KeyEvent) -> Option<Action> {
        self.bindings.get(&KeyBinding::from_event(event)).copied()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_basic_lookup() {
        let registry = ShortcutRegistry::new();
        assert_eq!(
            registry.lookup(key(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(Action::ScrollDown)
        );
        assert_eq!(
            registry.lookup(key(KeyCode::Char('s'), KeyModifiers::NONE)),
            Some(Action::ToggleSort)
        );
        assert_eq!(
            registry.lookup(key(KeyCode::Char('x'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_digits_map_to_nav_positions() {
        let registry = ShortcutRegistry::new();
        assert_eq!(
            registry.lookup(key(KeyCode::Char('1'), KeyModifiers::NONE)),
            Some(Action::JumpToNavItem(0))
        );
        assert_eq!(
            registry.lookup(key(KeyCode::Char('5'), KeyModifiers::NONE)),
            Some(Action::JumpToNavItem(4))
        );
    }

    #[test]
    fn test_uppercase_with_and_without_shift() {
        let registry = ShortcutRegistry::new();
        for modifiers in [KeyModifiers::SHIFT, KeyModifiers::NONE] {
            assert_eq!(
                registry.lookup(key(KeyCode::Char('C'), modifiers)),
                Some(Action::PreviousCategory)
            );
        }
    }
}
