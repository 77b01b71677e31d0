//! Brand colors for technology chips.
//!
//! Two color forms appear in the catalog: an opaque brand color written as
//! `#RRGGBB` and a translucent tone written in CSS Color 4 space-separated
//! syntax (`rgb(95 160 78 / 0.14)`).

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value with hex string representation.
///
/// Serialized as a `#RRGGBB` string so catalog files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use devfolio::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#5fa04e").unwrap();
    /// assert_eq!(color, RgbColor::new(95, 160, 78));
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a lowercase hex string ("#rrggbb"), the form
    /// stylesheets expect.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Relative luminance in 0.0..=1.0 (sRGB weights, no gamma correction).
    #[must_use]
    pub fn luminance(&self) -> f32 {
        (0.2126 * f32::from(self.r) + 0.7152 * f32::from(self.g) + 0.0722 * f32::from(self.b))
            / 255.0
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl TryFrom<String> for RgbColor {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_hex()
    }
}

/// A translucent color: an RGB base plus an alpha channel.
///
/// Parsed from and printed as `rgb(R G B / A)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tint {
    /// Base color
    pub color: RgbColor,
    /// Opacity in 0.0..=1.0
    pub alpha: f32,
}

impl Tint {
    /// Creates a tint, clamping alpha into 0.0..=1.0.
    #[must_use]
    pub fn new(color: RgbColor, alpha: f32) -> Self {
        Self {
            color,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Parses `rgb(R G B / A)`. The alpha part is optional and defaults to 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use devfolio::models::{RgbColor, Tint};
    ///
    /// let tint = Tint::parse("rgb(95 160 78 / 0.14)").unwrap();
    /// assert_eq!(tint.color, RgbColor::new(95, 160, 78));
    /// assert!((tint.alpha - 0.14).abs() < f32::EPSILON);
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let body = trimmed
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .with_context(|| format!("Invalid tint '{trimmed}'. Expected rgb(R G B / A)"))?;

        let (channels, alpha) = match body.split_once('/') {
            Some((channels, alpha)) => {
                let alpha: f32 = alpha
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid alpha in tint '{trimmed}'"))?;
                (channels, alpha)
            }
            None => (body, 1.0),
        };

        let values = channels
            .split_whitespace()
            .map(|part| {
                part.parse::<u8>()
                    .with_context(|| format!("Invalid channel '{part}' in tint '{trimmed}'"))
            })
            .collect::<Result<Vec<u8>>>()?;

        let [r, g, b] = values[..] else {
            anyhow::bail!("Invalid tint '{trimmed}'. Expected three channels");
        };

        if !(0.0..=1.0).contains(&alpha) {
            anyhow::bail!("Alpha out of range in tint '{trimmed}'");
        }

        Ok(Self::new(RgbColor::new(r, g, b), alpha))
    }

    /// Composites the tint over an opaque background.
    ///
    /// Terminals have no alpha channel, so chips use the blended color.
    #[must_use]
    pub fn over(&self, background: RgbColor) -> RgbColor {
        let mix = |fg: u8, bg: u8| -> u8 {
            let value = f32::from(fg) * self.alpha + f32::from(bg) * (1.0 - self.alpha);
            value.round().clamp(0.0, 255.0) as u8
        };
        RgbColor::new(
            mix(self.color.r, background.r),
            mix(self.color.g, background.g),
            mix(self.color.b, background.b),
        )
    }
}

impl fmt::Display for Tint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgb({} {} {} / {})",
            self.color.r, self.color.g, self.color.b, self.alpha
        )
    }
}

impl TryFrom<String> for Tint {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Tint> for String {
    fn from(tint: Tint) -> Self {
        tint.to_string()
    }
}
