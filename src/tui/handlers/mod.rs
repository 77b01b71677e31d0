//! Input handlers for the terminal page.

pub mod actions;
pub mod main;

// Re-export handler functions
pub use actions::dispatch_action;
pub use main::{handle_main_input, handle_mouse_input};
