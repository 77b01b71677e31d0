//! Theme system for consistent UI colors across dark and light modes.
//!
//! The OS theme is detected with `dark-light` unless the config pins one.

use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::models::{RgbColor, Tint};

/// Semantic color theme for the terminal page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders, headings, and the brand
    pub primary: Color,
    /// Kicker lines, project meta, and highlighted values
    pub accent: Color,
    /// Key names in the help overlay
    pub success: Color,

    /// Body text
    pub text: Color,
    /// Labels and secondary copy
    pub text_secondary: Color,
    /// Hints and dates
    pub text_muted: Color,

    /// Page background
    pub background: Color,
    /// Background of the active navigation item
    pub highlight_bg: Color,
    /// Cards and panels
    pub surface: Color,

    /// Active navigation item text
    pub active: Color,
    /// Inactive navigation item text
    pub inactive: Color,

    base: RgbColor,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the configured mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark theme, navy background with pink accents.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Rgb(91, 124, 255),
            accent: Color::Rgb(255, 79, 163),
            success: Color::Green,

            text: Color::Rgb(232, 236, 255),
            text_secondary: Color::Rgb(151, 160, 195),
            text_muted: Color::DarkGray,

            background: Color::Rgb(7, 11, 26),
            highlight_bg: Color::Rgb(28, 38, 84),
            surface: Color::Rgb(14, 21, 48),

            active: Color::White,
            inactive: Color::Rgb(151, 160, 195),

            base: RgbColor::new(7, 11, 26),
        }
    }

    /// Light theme for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(190, 24, 93),
            success: Color::Rgb(0, 128, 0),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(220, 228, 255),
            surface: Color::Rgb(245, 245, 245),

            active: Color::Black,
            inactive: Color::Rgb(90, 90, 90),

            base: RgbColor::new(255, 255, 255),
        }
    }

    /// Returns true for the dark variant.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.base.luminance() < 0.5
    }

    /// Opaque chip background for a translucent tone on this theme.
    #[must_use]
    pub fn chip_background(&self, tone: &Tint) -> Color {
        tone.over(self.base).to_ratatui_color()
    }

    /// Chip foreground for a brand color, swapped for text when the brand
    /// color would vanish into the background.
    #[must_use]
    pub fn chip_foreground(&self, brand: RgbColor) -> Color {
        let contrast = (brand.luminance() - self.base.luminance()).abs();
        if contrast < 0.2 {
            self.text
        } else {
            brand.to_ratatui_color()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
