//! Application orchestration layer
//!
//! This module holds the page's UI-state container and the high-level
//! function that opens the terminal page, coordinating config, catalog,
//! logging, and the TUI without containing detailed implementation logic.

/// Terminal page startup and teardown
pub mod launch;

/// Filter state, project view, and active section of one page
pub mod page_state;

// Re-export commonly used items for convenience
pub use launch::launch_page;
pub use page_state::{PageState, SelectionError};
