//! Shared pieces of the CLI commands: error type, exit codes, and the
//! project filter flags used by more than one command.

use std::sync::Arc;

use clap::Args;

use crate::app::PageState;
use crate::catalog::Catalog;
use crate::config::Config;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: unknown filter value, invalid config value, bad catalog
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// A failed command: what to print and how to exit.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct CliError {
    /// Exit code for the process
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Input was rejected.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Reading, writing, or serializing failed.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

/// Result type of every command.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the config file, treating a broken file as bad input.
pub fn load_config() -> CliResult<Config> {
    Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Loads the catalog the config points at.
pub fn load_catalog(config: &Config) -> CliResult<Arc<Catalog>> {
    Catalog::load(config)
        .map(Arc::new)
        .map_err(|e| CliError::validation(format!("Failed to load catalog: {e:#}")))
}

/// Project filter flags, same values as the page's dropdowns.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Category to show (`All` for every category)
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Technology to show (`All` for every technology)
    #[arg(long, value_name = "TECH")]
    pub tech: Option<String>,

    /// Ordering: `category` or `technology`
    #[arg(long, value_name = "MODE")]
    pub sort: Option<String>,
}

impl FilterArgs {
    /// Builds a page state with these selections applied over the config
    /// defaults.
    pub fn page_state(&self, catalog: Arc<Catalog>, config: &Config) -> CliResult<PageState> {
        let mut state = PageState::with_sort(catalog, config.ui.default_sort);
        state
            .apply_selection(
                self.category.as_deref(),
                self.tech.as_deref(),
                self.sort.as_deref(),
            )
            .map_err(|e| CliError::validation(e.to_string()))?;
        Ok(state)
    }
}
