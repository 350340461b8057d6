//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the custom-color list bounds.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Huepick";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "huepick";

/// Maximum number of saved custom colors. Adding beyond this drops the oldest entry.
pub const MAX_CUSTOM_COLORS: usize = 24;

/// Storage key under which the custom-color list is persisted.
pub const CUSTOM_COLORS_KEY: &str = "custom-colors";
