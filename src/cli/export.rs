//! Export command for writing the page as a standalone HTML file.

use crate::branding;
use crate::cli::common::{load_catalog, load_config, CliError, CliResult, FilterArgs};
use crate::export::{self, Delivery};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Export the portfolio page to a self-contained HTML file
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Output path for the HTML file (defaults to portfolio_export_[date].html)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Filters applied to the project grid
    #[command(flatten)]
    pub filter: FilterArgs,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let catalog = load_catalog(&config)?;
        let state = self.filter.page_state(catalog, &config)?;

        let html = export::export_to_html(&state, Delivery::Standalone);

        let output_path = self.get_output_path();
        if let Some(dir) = output_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .map_err(|e| CliError::io(format!("Failed to create {}: {e}", dir.display())))?;
        }
        fs::write(&output_path, html)
            .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;

        println!(
            "✓ Exported {} of {} projects to: {}",
            state.visible_count(),
            state.catalog().projects.len(),
            output_path.display()
        );

        Ok(())
    }

    /// Get the output file path (either user-specified or auto-generated)
    fn get_output_path(&self) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        PathBuf::from(branding::export_file_name(&date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_output_path_default() {
        let args = ExportArgs {
            output: None,
            filter: FilterArgs::default(),
        };

        let path = args.get_output_path();
        let path_str = path.to_string_lossy();
        assert!(path_str.starts_with("portfolio_export_"));
        assert!(path_str.ends_with(".html"));
    }

    #[test]
    fn test_get_output_path_custom() {
        let custom_path = PathBuf::from("/tmp/my_portfolio.html");
        let args = ExportArgs {
            output: Some(custom_path.clone()),
            filter: FilterArgs::default(),
        };

        assert_eq!(args.get_output_path(), custom_path);
    }
}
