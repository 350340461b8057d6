//! The color picker controller.
//!
//! [`ColorPicker`] is the single owner of picker state: the current color
//! and its undo/redo history, the saved custom colors, and the preset
//! palette. The TUI layer calls into it and renders from it; nothing in
//! here touches the terminal, so the whole controller is testable headless.

use crate::models::{PresetPalette, RgbColor};
use crate::services::custom_colors::{CustomColorError, CustomColorStore};
use crate::services::history::ColorHistory;
use crate::storage::KeyValueStore;

/// Display forms of a color, returned by every color-changing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCodes {
    /// Bare uppercase hex digits, "RRGGBB".
    pub hex: String,
    /// Decimal form, "rgb(R, G, B)".
    pub rgb: String,
}

impl ColorCodes {
    fn of(color: RgbColor) -> Self {
        Self {
            hex: color.to_hex(),
            rgb: color.to_rgb_string(),
        }
    }
}

/// Owns all picker state and exposes the operations the UI drives.
#[derive(Debug)]
pub struct ColorPicker {
    history: ColorHistory,
    custom_colors: CustomColorStore,
    presets: PresetPalette,
}

impl ColorPicker {
    /// Create a picker backed by `store` for custom-color persistence.
    ///
    /// The startup default color is recorded as the first history entry so
    /// the user can always undo back to it.
    #[must_use]
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        let mut history = ColorHistory::new();
        history.record(RgbColor::default());

        Self {
            history,
            custom_colors: CustomColorStore::load(store),
            presets: PresetPalette::default(),
        }
    }

    /// The color currently shown.
    #[must_use]
    pub fn current(&self) -> RgbColor {
        self.history.current()
    }

    /// Display forms of the current color.
    #[must_use]
    pub fn current_codes(&self) -> ColorCodes {
        ColorCodes::of(self.current())
    }

    /// Make `color` current and record it in history.
    pub fn update_color(&mut self, color: RgbColor) -> ColorCodes {
        self.history.record(color);
        ColorCodes::of(color)
    }

    /// Apply a hex string typed by the user.
    ///
    /// # Errors
    ///
    /// [`CustomColorError::InvalidHex`] if the input is not exactly 6 hex
    /// digits; nothing is recorded in that case.
    pub fn set_hex_input(&mut self, input: &str) -> Result<ColorCodes, CustomColorError> {
        if !RgbColor::is_valid_hex(input) {
            return Err(CustomColorError::InvalidHex(input.to_string()));
        }
        let color = RgbColor::from_hex(input)
            .map_err(|_| CustomColorError::InvalidHex(input.to_string()))?;
        Ok(self.update_color(color))
    }

    /// Generate and apply a random color.
    pub fn random_color(&mut self) -> ColorCodes {
        self.update_color(RgbColor::random())
    }

    /// Apply a preset or custom swatch (any accepted hex spelling).
    ///
    /// # Errors
    ///
    /// [`CustomColorError::InvalidHex`] if the swatch string does not parse.
    pub fn select_swatch(&mut self, hex: &str) -> Result<ColorCodes, CustomColorError> {
        let color =
            RgbColor::from_hex(hex).map_err(|_| CustomColorError::InvalidHex(hex.to_string()))?;
        Ok(self.update_color(color))
    }

    /// Step back in history. `None` at the boundary.
    pub fn undo(&mut self) -> Option<RgbColor> {
        self.history.undo()
    }

    /// Step forward in history. `None` at the boundary.
    pub fn redo(&mut self) -> Option<RgbColor> {
        self.history.redo()
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Save the current color to the custom list; returns the stored form.
    pub fn save_current_as_custom(&mut self) -> Result<String, CustomColorError> {
        let hex = self.current().to_hex_prefixed();
        self.custom_colors.add(&hex)
    }

    /// Save an arbitrary hex color to the custom list.
    pub fn add_custom_color(&mut self, hex: &str) -> Result<String, CustomColorError> {
        self.custom_colors.add(hex)
    }

    /// Remove a color from the custom list; `Ok(false)` when absent.
    pub fn remove_custom_color(&mut self, hex: &str) -> std::io::Result<bool> {
        self.custom_colors.remove(hex)
    }

    /// The saved custom colors, newest first, as `#RRGGBB` strings.
    #[must_use]
    pub fn custom_colors(&self) -> &[String] {
        self.custom_colors.colors()
    }

    /// The fixed preset palette.
    #[must_use]
    pub fn presets(&self) -> &PresetPalette {
        &self.presets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn picker() -> ColorPicker {
        ColorPicker::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_starts_at_default_color() {
        let picker = picker();
        assert_eq!(picker.current(), RgbColor::default());
        let codes = picker.current_codes();
        assert_eq!(codes.hex, "DDDEEE");
        assert_eq!(codes.rgb, "rgb(221, 222, 238)");
        // The startup color is recorded but there is nothing before it
        assert!(!picker.can_undo());
    }

    #[test]
    fn test_update_color_returns_codes() {
        let mut picker = picker();
        let codes = picker.update_color(RgbColor::new(255, 0, 128));
        assert_eq!(codes.hex, "FF0080");
        assert_eq!(codes.rgb, "rgb(255, 0, 128)");
        assert!(picker.can_undo());
    }

    #[test]
    fn test_set_hex_input() {
        let mut picker = picker();
        let codes = picker.set_hex_input("00ff00").unwrap();
        assert_eq!(codes.hex, "00FF00");
        assert_eq!(picker.current(), RgbColor::new(0, 255, 0));
    }

    #[test]
    fn test_set_hex_input_rejects_invalid() {
        let mut picker = picker();
        let before = picker.current();

        assert!(matches!(
            picker.set_hex_input("12345").unwrap_err(),
            CustomColorError::InvalidHex(_)
        ));
        // The prefixed form is rejected here; entry fields hold bare digits
        assert!(picker.set_hex_input("#123456").is_err());
        assert!(picker.set_hex_input("zzzzzz").is_err());

        assert_eq!(picker.current(), before);
        assert!(!picker.can_undo());
    }

    #[test]
    fn test_random_color_records() {
        let mut picker = picker();
        let codes = picker.random_color();
        assert_eq!(codes.hex, picker.current().to_hex());
        assert!(picker.can_undo());

        assert_eq!(picker.undo(), Some(RgbColor::default()));
    }

    #[test]
    fn test_select_swatch_accepts_prefixed_hex() {
        let mut picker = picker();
        let codes = picker.select_swatch("#FFCDD2").unwrap();
        assert_eq!(codes.hex, "FFCDD2");
        assert_eq!(picker.current(), RgbColor::new(255, 205, 210));
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut picker = picker();
        picker.update_color(RgbColor::new(1, 2, 3));
        picker.update_color(RgbColor::new(4, 5, 6));

        assert_eq!(picker.undo(), Some(RgbColor::new(1, 2, 3)));
        assert_eq!(picker.undo(), Some(RgbColor::default()));
        assert_eq!(picker.undo(), None);

        assert_eq!(picker.redo(), Some(RgbColor::new(1, 2, 3)));
        assert_eq!(picker.redo(), Some(RgbColor::new(4, 5, 6)));
        assert_eq!(picker.redo(), None);
    }

    #[test]
    fn test_save_current_as_custom() {
        let mut picker = picker();
        picker.update_color(RgbColor::new(255, 0, 0));

        let stored = picker.save_current_as_custom().unwrap();
        assert_eq!(stored, "#FF0000");
        assert_eq!(picker.custom_colors(), &["#FF0000"]);

        // Saving the same color again is rejected and changes nothing
        assert!(matches!(
            picker.save_current_as_custom().unwrap_err(),
            CustomColorError::AlreadyExists(_)
        ));
        assert_eq!(picker.custom_colors().len(), 1);
    }

    #[test]
    fn test_remove_custom_color() {
        let mut picker = picker();
        picker.add_custom_color("#FF0000").unwrap();

        assert!(picker.remove_custom_color("#FF0000").unwrap());
        assert!(!picker.remove_custom_color("#FF0000").unwrap());
        assert!(picker.custom_colors().is_empty());
    }

    #[test]
    fn test_presets_available() {
        let picker = picker();
        assert_eq!(picker.presets().color_count(), 24);
    }
}
