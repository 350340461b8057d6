//! Preset color palette shipped with the application.
//!
//! The palette is a fixed, non-editable set of 24 colors embedded as JSON
//! data. Custom (user-saved) colors live in
//! [`crate::services::custom_colors`] instead.

use serde::Deserialize;

use super::RgbColor;

/// Raw on-disk form of the palette data file.
#[derive(Debug, Deserialize)]
struct PaletteData {
    /// Hex color strings, "#RRGGBB".
    colors: Vec<String>,
}

/// The fixed preset palette.
#[derive(Debug, Clone)]
pub struct PresetPalette {
    colors: Vec<RgbColor>,
}

impl PresetPalette {
    /// Load the preset palette from embedded JSON data.
    ///
    /// # Errors
    /// Returns an error if the JSON data cannot be parsed or contains an
    /// entry that is not a valid hex color.
    pub fn load() -> anyhow::Result<Self> {
        let json_data = include_str!("../data/preset_colors.json");
        let data: PaletteData = serde_json::from_str(json_data)?;

        let colors = data
            .colors
            .iter()
            .map(|hex| RgbColor::from_hex(hex))
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self { colors })
    }

    /// Get all preset colors in display order.
    #[must_use]
    pub fn colors(&self) -> &[RgbColor] {
        &self.colors
    }

    /// Get a color by index.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Option<RgbColor> {
        self.colors.get(index).copied()
    }

    /// Get the number of preset colors.
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    /// Get the number of columns for display (8 swatches per row).
    #[must_use]
    pub const fn columns(&self) -> usize {
        8
    }

    /// Get the number of rows for display.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.colors.len().div_ceil(self.columns())
    }
}

impl Default for PresetPalette {
    fn default() -> Self {
        Self::load().unwrap_or_else(|_| Self { colors: Vec::new() })
    }
}
