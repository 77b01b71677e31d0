//! CLI command handlers for Devfolio.
//!
//! This module provides headless, scriptable access to the page's data and
//! filter engine: listing projects and options, exporting the page as HTML,
//! serving it over HTTP, and managing the configuration.

pub mod common;
pub mod config;
pub mod export;
pub mod options;
pub mod projects;
#[cfg(feature = "web")]
pub mod serve;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode, FilterArgs};
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use options::OptionsArgs;
pub use projects::ProjectsArgs;
#[cfg(feature = "web")]
pub use serve::ServeArgs;
