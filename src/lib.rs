//! Huepick Library
//!
//! This library provides core functionality for the Huepick terminal color
//! picker: color codec and random generation, undo/redo history, the
//! persisted custom-color list, and the TUI built on top of them.

// Module declarations
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;
