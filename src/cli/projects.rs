//! Projects command: the filtered, sorted project list.

use crate::cli::common::{load_catalog, load_config, CliError, CliResult, FilterArgs};
use crate::models::{FilterState, Project};
use clap::Args;
use serde::Serialize;

/// List projects the way the page's grid shows them
#[derive(Debug, Clone, Args)]
pub struct ProjectsArgs {
    /// Filters and ordering
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ProjectsOutput<'a> {
    filter: &'a FilterState,
    count: usize,
    total: usize,
    projects: Vec<&'a Project>,
}

impl ProjectsArgs {
    /// Execute the projects command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let catalog = load_catalog(&config)?;
        let state = self.filter.page_state(catalog, &config)?;

        let output = ProjectsOutput {
            filter: state.filter(),
            count: state.visible_count(),
            total: state.catalog().projects.len(),
            projects: state.visible_projects().collect(),
        };

        if self.json {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize projects: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        println!(
            "{} of {} projects (category: {}, technology: {}, sorted by {})",
            output.count,
            output.total,
            output.filter.category,
            output.filter.technology,
            output.filter.sort_by.as_str()
        );
        println!();
        if output.projects.is_empty() {
            println!("No projects match the selected filters.");
        }
        for project in &output.projects {
            println!("{}  [{}]", project.name, project.category.label());
            println!("  {}", project.summary);
            if !project.technologies.is_empty() {
                println!("  {}", project.technologies.join(", "));
            }
            println!();
        }

        Ok(())
    }
}
