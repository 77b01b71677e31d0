//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::branding::{APP_DATA_DIR, CONFIG_DIR_ENV, LOG_FILE_NAME};
use crate::models::SortMode;
use crate::services::viewport::{
    ObserverOptions, DEFAULT_BOTTOM_MARGIN, DEFAULT_THRESHOLDS, DEFAULT_TOP_MARGIN,
};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Catalog JSON replacing the embedded content (optional)
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display the key help overlay on startup
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Project ordering when the page opens
    #[serde(default)]
    pub default_sort: SortMode,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: false,
            theme_mode: ThemeMode::default(),
            default_sort: SortMode::default(),
        }
    }
}

/// Observation band used to pick the active section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Fraction of the viewport ignored at the top (0.0-1.0)
    #[serde(default = "default_top_margin")]
    pub top_margin: f32,
    /// Fraction of the viewport ignored at the bottom (0.0-1.0)
    #[serde(default = "default_bottom_margin")]
    pub bottom_margin: f32,
    /// Visibility ratios that trigger a report, ascending
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<f32>,
}

fn default_top_margin() -> f32 {
    DEFAULT_TOP_MARGIN
}

fn default_bottom_margin() -> f32 {
    DEFAULT_BOTTOM_MARGIN
}

fn default_thresholds() -> Vec<f32> {
    DEFAULT_THRESHOLDS.to_vec()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            top_margin: default_top_margin(),
            bottom_margin: default_bottom_margin(),
            thresholds: default_thresholds(),
        }
    }
}

impl TrackerConfig {
    /// Observer options for this band.
    #[must_use]
    pub fn observer_options(&self) -> ObserverOptions {
        ObserverOptions {
            top_margin: self.top_margin,
            bottom_margin: self.bottom_margin,
            thresholds: self.thresholds.clone(),
        }
    }
}

/// Web server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/devfolio/config.toml`
/// - macOS: `~/Library/Application Support/devfolio/config.toml`
/// - Windows: `%APPDATA%\devfolio\config.toml`
///
/// `DEVFOLIO_CONFIG_DIR` overrides the directory.
///
/// # Validation
///
/// - `paths.catalog` must exist if set
/// - tracker margins are in 0.0..1.0 and leave a non-empty band
/// - tracker thresholds are in 0.0..=1.0 and strictly ascending
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Active-section tracking
    #[serde(default)]
    pub tracker: TrackerConfig,
    /// Web server settings
    #[serde(default)]
    pub web: WebConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Uses `DEVFOLIO_CONFIG_DIR` when set, otherwise the platform config
    /// directory joined with `devfolio`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);
        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Gets the path of the log file written by the terminal host.
    pub fn log_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(LOG_FILE_NAME))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(catalog) = &self.paths.catalog {
            if !catalog.exists() {
                anyhow::bail!("Catalog file does not exist: {}", catalog.display());
            }
        }

        let tracker = &self.tracker;
        for (name, value) in [
            ("top_margin", tracker.top_margin),
            ("bottom_margin", tracker.bottom_margin),
        ] {
            if !(0.0..1.0).contains(&value) {
                anyhow::bail!("tracker.{name} must be in [0.0, 1.0), got {value}");
            }
        }
        if tracker.top_margin + tracker.bottom_margin >= 1.0 {
            anyhow::bail!(
                "tracker margins leave no observation band (top {} + bottom {} >= 1.0)",
                tracker.top_margin,
                tracker.bottom_margin
            );
        }

        if tracker.thresholds.is_empty() {
            anyhow::bail!("tracker.thresholds must not be empty");
        }
        if let Some(bad) = tracker
            .thresholds
            .iter()
            .find(|t| !(0.0..=1.0).contains(*t))
        {
            anyhow::bail!("tracker threshold {bad} is outside [0.0, 1.0]");
        }
        if tracker.thresholds.windows(2).any(|pair| pair[0] >= pair[1]) {
            anyhow::bail!("tracker.thresholds must be strictly ascending");
        }

        if self.web.host.trim().is_empty() {
            anyhow::bail!("web.host must not be empty");
        }

        Ok(())
    }

    /// Sets the catalog override path with validation.
    pub fn set_catalog_path(&mut self, path: Option<PathBuf>) -> Result<()> {
        self.paths.catalog = path;
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.paths.catalog, None);
        assert!(!config.ui.show_help_on_startup);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.ui.default_sort, SortMode::Category);
        assert_eq!(config.web.port, 3001);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tracker_defaults_match_observer_defaults() {
        let options = TrackerConfig::default().observer_options();
        assert_eq!(options, ObserverOptions::default());
    }

    #[test]
    fn test_validate_catalog_path() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = temp_dir.path().join("catalog.json");

        let mut config = Config::new();
        assert!(config.set_catalog_path(Some(catalog.clone())).is_err());

        fs::write(&catalog, "{}").unwrap();
        assert!(config.set_catalog_path(Some(catalog)).is_ok());
    }

    #[test]
    fn test_validate_margins() {
        let mut config = Config::new();
        config.tracker.top_margin = 0.6;
        config.tracker.bottom_margin = 0.5;
        assert!(config.validate().is_err());

        config.tracker.bottom_margin = 0.2;
        assert!(config.validate().is_ok());

        config.tracker.top_margin = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_thresholds() {
        let mut config = Config::new();
        config.tracker.thresholds = vec![];
        assert!(config.validate().is_err());

        config.tracker.thresholds = vec![0.5, 0.25];
        assert!(config.validate().is_err());

        config.tracker.thresholds = vec![0.0, 1.5];
        assert!(config.validate().is_err());

        config.tracker.thresholds = vec![0.0, 1.0];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_and_load_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Light;
        config.ui.default_sort = SortMode::Technology;
        config.web.port = 8080;

        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_file, content).unwrap();

        let content = fs::read_to_string(&config_file).unwrap();
        let loaded: Config = toml::from_str(&content).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let loaded: Config = toml::from_str("[web]\nhost = \"0.0.0.0\"\nport = 9000\n").unwrap();
        assert_eq!(loaded.web.port, 9000);
        assert_eq!(loaded.tracker, TrackerConfig::default());
        assert_eq!(loaded.ui, UiConfig::default());
    }
}
