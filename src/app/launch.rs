use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{error, info};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::{logging, tui};

/// Opens the terminal page and blocks until the user quits.
///
/// Logs go to the log file next to the config, since the terminal itself is
/// taken over by the page.
pub fn launch_page(config: Config, verbose: bool) -> Result<()> {
    logging::init_file(&Config::log_file_path()?, verbose)?;

    let catalog = Arc::new(Catalog::load(&config).context("Failed to load portfolio catalog")?);
    info!(
        projects = catalog.projects.len(),
        posts = catalog.blog_posts.len(),
        "Catalog loaded"
    );

    let mut state = tui::AppState::new(catalog, config);
    let mut terminal = tui::setup_terminal()?;

    // Always restore the terminal, even if the loop failed
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;

    if let Err(err) = &result {
        error!("Page loop failed: {err:#}");
    }
    result
}
