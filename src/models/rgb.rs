//! RGB color handling with hex parsing, formatting, and random generation.

use std::fmt;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// RGB color value with hex and `rgb(...)` string representations.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Immutable value type: every adjustment produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
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
    /// use huepick::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00ff00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not exactly 6 hex digits after an
    /// optional `#` prefix. Callers that need a boolean gate should use
    /// [`RgbColor::is_valid_hex`] first.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 {
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

    /// Returns true iff `input` is exactly 6 case-insensitive hex digits.
    ///
    /// The `#` prefix is a presentation concern and is not accepted here.
    ///
    /// # Examples
    ///
    /// ```
    /// use huepick::models::RgbColor;
    ///
    /// assert!(RgbColor::is_valid_hex("DDDEEE"));
    /// assert!(RgbColor::is_valid_hex("dddeee"));
    /// assert!(!RgbColor::is_valid_hex("#DDDEEE"));
    /// assert!(!RgbColor::is_valid_hex("DDDEE"));
    /// ```
    #[must_use]
    pub fn is_valid_hex(input: &str) -> bool {
        input.len() == 6 && input.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Converts the color to a bare hex string in the format "RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use huepick::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(0, 0, 0).to_hex(), "000000");
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// This is the canonical form stored in the custom-color list.
    #[must_use]
    pub fn to_hex_prefixed(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Formats the color as a decimal `rgb(R, G, B)` string.
    ///
    /// # Examples
    ///
    /// ```
    /// use huepick::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(221, 222, 238).to_rgb_string(), "rgb(221, 222, 238)");
    /// ```
    #[must_use]
    pub fn to_rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Generates a random color.
    ///
    /// Each channel is drawn independently and uniformly from `0..255`,
    /// so 255 itself is never produced. The bound is deliberate and pinned
    /// by a test; widening it would change observable behavior.
    #[must_use]
    pub fn random() -> Self {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        Self {
            r: rng.gen_range(0..255),
            g: rng.gen_range(0..255),
            b: rng.gen_range(0..255),
        }
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Returns a dimmed version of the color at the given percentage.
    ///
    /// # Arguments
    ///
    /// * `percent` - Brightness percentage (0-100). 0 = black, 100 = original color.
    #[must_use]
    pub const fn dim(&self, percent: u8) -> Self {
        let percent = if percent > 100 { 100 } else { percent };
        Self {
            r: (self.r as u16 * percent as u16 / 100) as u8,
            g: (self.g as u16 * percent as u16 / 100) as u8,
            b: (self.b as u16 * percent as u16 / 100) as u8,
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_prefixed())
    }
}

impl Default for RgbColor {
    /// Default color is the startup pale lavender (#DDDEEE).
    fn default() -> Self {
        Self::new(221, 222, 238)
    }
}
