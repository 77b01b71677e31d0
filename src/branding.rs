//! Branding and application identity configuration.
//!
//! Names and paths used across the terminal host, the web host, and the CLI
//! live here so the rest of the crate never spells them out.

/// The human-readable display name of the application.
///
/// Used in the terminal title bar, the help overlay, and the HTML `<title>`.
pub const APP_DISPLAY_NAME: &str = "Devfolio";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "devfolio";

/// The directory name for application data (config, logs).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "devfolio";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "DEVFOLIO_CONFIG_DIR";

/// File name of the terminal host's log, inside the config directory.
pub const LOG_FILE_NAME: &str = "devfolio.log";

/// Short description for package metadata and help text.
pub const APP_DESCRIPTION: &str = "Developer portfolio page with filterable projects";

/// Default file name for an HTML export made on `date` (`YYYY-MM-DD`).
#[must_use]
pub fn export_file_name(date: &str) -> String {
    format!("portfolio_export_{date}.html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_consistency() {
        assert_eq!(APP_BINARY_NAME, APP_BINARY_NAME.to_lowercase());
        assert!(!APP_BINARY_NAME.contains(' '));
        assert!(!APP_DATA_DIR.contains(' '));
        assert!(LOG_FILE_NAME.starts_with(APP_BINARY_NAME));
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name("2026-02-01"),
            "portfolio_export_2026-02-01.html"
        );
    }
}
