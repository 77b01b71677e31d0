//! Devfolio - developer portfolio in the terminal
//!
//! Without a subcommand this opens the portfolio page in the terminal.
//! Subcommands give scriptable access to the same data and filters.

use anyhow::Result;
use clap::{Parser, Subcommand};

use devfolio::branding::APP_DESCRIPTION;
#[cfg(feature = "web")]
use devfolio::cli::ServeArgs;
use devfolio::cli::{CliError, ConfigArgs, ExportArgs, OptionsArgs, ProjectsArgs};
use devfolio::config::Config;
use devfolio::{app, logging};

/// Devfolio - developer portfolio in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about = APP_DESCRIPTION, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List projects with the page's filters and ordering
    Projects(ProjectsArgs),
    /// List the values each project filter offers
    Options(OptionsArgs),
    /// Export the page to a standalone HTML file
    Export(ExportArgs),
    /// Serve the page over HTTP
    #[cfg(feature = "web")]
    Serve(ServeArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> Result<(), CliError> {
        match self {
            Self::Projects(args) => args.execute(),
            Self::Options(args) => args.execute(),
            Self::Export(args) => args.execute(),
            #[cfg(feature = "web")]
            Self::Serve(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        let config = Config::load()?;
        return app::launch_page(config, cli.verbose);
    };

    logging::init_stderr(cli.verbose);
    if let Err(err) = command.execute() {
        eprintln!("Error: {}", err.message);
        std::process::exit(err.exit_code.code());
    }
    Ok(())
}
