//! Business logic: history, saved colors, and the picker controller.
//!
//! Everything in this module is UI-free. The TUI layer owns a
//! [`ColorPicker`] and drives it from event handlers.

pub mod custom_colors;
pub mod history;
pub mod picker;

// Re-export the service types
pub use custom_colors::{CustomColorError, CustomColorStore};
pub use history::ColorHistory;
pub use picker::{ColorCodes, ColorPicker};
