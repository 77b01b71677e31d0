//! Configuration management CLI commands.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::models::SortMode;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the config file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Default)]
pub struct ConfigSetArgs {
    /// Portfolio catalog JSON used instead of the built-in one
    #[arg(long, value_name = "FILE", conflicts_with = "builtin_catalog")]
    catalog: Option<PathBuf>,

    /// Go back to the built-in catalog
    #[arg(long)]
    builtin_catalog: bool,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Project ordering when the page opens (category or technology)
    #[arg(long, value_name = "MODE")]
    sort: Option<String>,

    /// Open the help overlay when the terminal page starts
    #[arg(long, value_name = "BOOL")]
    show_help: Option<bool>,

    /// Fraction of the viewport ignored at the top when tracking sections
    #[arg(long, value_name = "FRACTION")]
    top_margin: Option<f32>,

    /// Fraction of the viewport ignored at the bottom when tracking sections
    #[arg(long, value_name = "FRACTION")]
    bottom_margin: Option<f32>,

    /// Visibility ratios that trigger a report, comma separated
    #[arg(long, value_name = "LIST", value_delimiter = ',')]
    thresholds: Option<Vec<f32>>,

    /// Web server host
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Web server port
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    config_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    catalog: Option<String>,
    theme: String,
    default_sort: SortMode,
    show_help_on_startup: bool,
    tracker: &'a crate::config::TrackerConfig,
    web: &'a crate::config::WebConfig,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to locate config file: {e}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    const fn is_empty(&self) -> bool {
        self.catalog.is_none()
            && !self.builtin_catalog
            && self.theme.is_none()
            && self.sort.is_none()
            && self.show_help.is_none()
            && self.top_margin.is_none()
            && self.bottom_margin.is_none()
            && self.thresholds.is_none()
            && self.host.is_none()
            && self.port.is_none()
    }

    /// Applies the given flags to `config`, leaving the rest untouched.
    fn apply(&self, config: &mut Config) -> CliResult<()> {
        if let Some(path) = &self.catalog {
            if !path.exists() {
                return Err(CliError::validation(format!(
                    "Catalog file does not exist: {}",
                    path.display()
                )));
            }
            config.paths.catalog = Some(path.clone());
        }
        if self.builtin_catalog {
            config.paths.catalog = None;
        }

        if let Some(theme_str) = &self.theme {
            config.ui.theme_mode = parse_theme(theme_str)?;
        }
        if let Some(sort) = &self.sort {
            config.ui.default_sort = sort.parse::<SortMode>().map_err(CliError::validation)?;
        }
        if let Some(show_help) = self.show_help {
            config.ui.show_help_on_startup = show_help;
        }

        if let Some(top) = self.top_margin {
            config.tracker.top_margin = top;
        }
        if let Some(bottom) = self.bottom_margin {
            config.tracker.bottom_margin = bottom;
        }
        if let Some(thresholds) = &self.thresholds {
            config.tracker.thresholds.clone_from(thresholds);
        }

        if let Some(host) = &self.host {
            config.web.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.web.port = port;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified (see `config set --help`)",
            ));
        }

        // Load current configuration
        let mut config = Config::load().unwrap_or_default();
        self.apply(&mut config)?;

        // Save configuration
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn parse_theme(value: &str) -> CliResult<ThemeMode> {
    match value.to_lowercase().as_str() {
        "auto" => Ok(ThemeMode::Auto),
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        _ => Err(CliError::validation(
            "Invalid theme mode. Must be 'auto', 'light', or 'dark'",
        )),
    }
}

fn theme_name(mode: ThemeMode) -> String {
    format!("{mode:?}").to_lowercase()
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        config_file: Config::config_file_path()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default(),
        catalog: config
            .paths
            .catalog
            .as_ref()
            .map(|p| p.to_string_lossy().to_string()),
        theme: theme_name(config.ui.theme_mode),
        default_sort: config.ui.default_sort,
        show_help_on_startup: config.ui.show_help_on_startup,
        tracker: &config.tracker,
        web: &config.web,
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Devfolio Configuration");
    println!("======================");
    println!();

    println!("Catalog:");
    if let Some(catalog) = &config.paths.catalog {
        println!("  File: {}", catalog.display());
    } else {
        println!("  File: (built-in)");
    }
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", theme_name(config.ui.theme_mode));
    println!("  Default Sort: {}", config.ui.default_sort.as_str());
    println!("  Help On Startup: {}", config.ui.show_help_on_startup);
    println!();

    println!("Section Tracking:");
    println!("  Top Margin: {}", config.tracker.top_margin);
    println!("  Bottom Margin: {}", config.tracker.bottom_margin);
    let thresholds: Vec<String> = config
        .tracker
        .thresholds
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("  Thresholds: {}", thresholds.join(", "));
    println!();

    println!("Web:");
    println!("  Address: {}:{}", config.web.host, config.web.port);
    println!();
}
