//! Options command: the values each dropdown offers.

use crate::cli::common::{load_catalog, load_config, CliError, CliResult};
use crate::models::SortMode;
use crate::services::FilterOptions;
use clap::Args;
use serde::Serialize;

/// List the category, technology, and sort options
#[derive(Debug, Clone, Args)]
pub struct OptionsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct OptionsOutput<'a> {
    #[serde(flatten)]
    options: &'a FilterOptions,
    sort_modes: [SortMode; 2],
}

impl OptionsArgs {
    /// Execute the options command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let catalog = load_catalog(&config)?;
        let options = FilterOptions::derive(&catalog.projects);

        if self.json {
            let output = OptionsOutput {
                options: &options,
                sort_modes: SortMode::ALL,
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize options: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        let categories: Vec<String> = options.categories.iter().map(ToString::to_string).collect();
        let technologies: Vec<String> = options
            .technologies
            .iter()
            .map(ToString::to_string)
            .collect();
        let sort_modes: Vec<&str> = SortMode::ALL.iter().map(SortMode::as_str).collect();

        println!("Categories:   {}", categories.join(", "));
        println!("Technologies: {}", technologies.join(", "));
        println!("Sort modes:   {}", sort_modes.join(", "));
        Ok(())
    }
}
