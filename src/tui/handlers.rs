//! Key event handlers.
//!
//! Handlers return `Ok(true)` when the application should exit. All state
//! changes go through [`AppState`]; rendering picks them up on the next
//! frame.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::{CopyFormat, ThemeMode};
use crate::services::CustomColorError;

use super::{AppState, FocusPane};

/// Top-level key dispatch.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if state.hex_entry.is_some() {
        return handle_hex_entry_input(state, key);
    }

    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),

        KeyCode::Tab => {
            state.focus = state.focus.next();
        }
        KeyCode::BackTab => {
            state.focus = state.focus.previous();
        }

        KeyCode::Char('i') => {
            state.hex_entry = Some(String::new());
            state.set_status("Enter a 6-digit hex color");
        }
        KeyCode::Char('r') => {
            let codes = state.picker.random_color();
            state.set_status(format!("Random color #{}", codes.hex));
        }
        KeyCode::Char('u') => {
            // Silent no-op at the boundary; the hint row is already dimmed
            if let Some(color) = state.picker.undo() {
                state.set_status(format!("Undo -> {}", color.to_hex_prefixed()));
            }
        }
        KeyCode::Char('y') => {
            if let Some(color) = state.picker.redo() {
                state.set_status(format!("Redo -> {}", color.to_hex_prefixed()));
            }
        }
        KeyCode::Char('s') => {
            handle_save_custom(state);
        }
        KeyCode::Char('c') => {
            handle_copy(state);
        }
        KeyCode::Char('m') => {
            state.config.ui.copy_format = state.config.ui.copy_format.toggled();
            state.config_dirty = true;
            let label = match state.config.ui.copy_format {
                CopyFormat::Hex => "hex",
                CopyFormat::Rgb => "rgb",
            };
            state.set_status(format!("Copy format: {label}"));
        }
        KeyCode::Char('t') => {
            state.config.ui.theme_mode = match state.config.ui.theme_mode {
                ThemeMode::Auto => ThemeMode::Dark,
                ThemeMode::Dark => ThemeMode::Light,
                ThemeMode::Light => ThemeMode::Auto,
            };
            state.config_dirty = true;
            state.set_status(format!("Theme: {:?}", state.config.ui.theme_mode));
        }

        _ => match state.focus {
            FocusPane::Sliders => handle_slider_keys(state, key),
            FocusPane::Presets | FocusPane::Customs => handle_swatch_keys(state, key),
        },
    }

    Ok(false)
}

/// Keys handled while the sliders pane is focused.
fn handle_slider_keys(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.active_channel = state.active_channel.previous();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.active_channel = state.active_channel.next();
        }
        KeyCode::Left | KeyCode::Char('h') => state.adjust_channel(-1),
        KeyCode::Right | KeyCode::Char('l') => state.adjust_channel(1),
        KeyCode::PageUp => state.adjust_channel(10),
        KeyCode::PageDown => state.adjust_channel(-10),
        _ => {}
    }
}

/// Keys handled while a swatch grid is focused.
fn handle_swatch_keys(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.move_swatch_selection(0, -1),
        KeyCode::Down | KeyCode::Char('j') => state.move_swatch_selection(0, 1),
        KeyCode::Left | KeyCode::Char('h') => state.move_swatch_selection(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => state.move_swatch_selection(1, 0),
        KeyCode::Enter => {
            if let Some(hex) = state.focused_swatch() {
                match state.picker.select_swatch(&hex) {
                    Ok(codes) => state.set_status(format!("Color set to #{}", codes.hex)),
                    Err(e) => state.set_error(e.to_string()),
                }
            }
        }
        KeyCode::Char('d') | KeyCode::Delete if state.focus == FocusPane::Customs => {
            handle_delete_custom(state);
        }
        _ => {}
    }
}

/// Save the current color to the custom list.
fn handle_save_custom(state: &mut AppState) {
    match state.picker.save_current_as_custom() {
        Ok(hex) => state.set_status(format!("Saved {hex} to custom colors")),
        Err(e @ CustomColorError::AlreadyExists(_)) => state.set_error(e.to_string()),
        Err(e) => state.set_error(format!("Failed to save color: {e}")),
    }
}

/// Delete the custom color under the cursor.
fn handle_delete_custom(state: &mut AppState) {
    let Some(hex) = state.focused_swatch() else {
        state.set_status("No custom color selected");
        return;
    };

    match state.picker.remove_custom_color(&hex) {
        Ok(true) => {
            state.clamp_custom_selection();
            state.set_status(format!("Deleted {hex}"));
        }
        Ok(false) => state.set_status("No custom color selected"),
        Err(e) => state.set_error(format!("Failed to delete color: {e}")),
    }
}

/// Copy the relevant code to the system clipboard.
///
/// With a swatch focused, copies that swatch's hex form; otherwise copies
/// the current color in the configured format.
fn handle_copy(state: &mut AppState) {
    let text = match state.focused_swatch() {
        Some(hex) => hex,
        None => match state.config.ui.copy_format {
            CopyFormat::Hex => state.picker.current().to_hex_prefixed(),
            CopyFormat::Rgb => state.picker.current().to_rgb_string(),
        },
    };

    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone())) {
        Ok(()) => state.set_status(format!("{text} copied")),
        Err(e) => state.set_error(format!("Failed to copy to clipboard: {e}")),
    }
}

/// Keys handled while the hex entry popup is open.
fn handle_hex_entry_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            state.hex_entry = None;
            state.set_status("Cancelled");
        }
        KeyCode::Enter => {
            let buffer = state.hex_entry.clone().unwrap_or_default();
            match state.picker.set_hex_input(&buffer) {
                Ok(codes) => {
                    state.hex_entry = None;
                    state.set_status(format!("Color set to #{}", codes.hex));
                }
                // Popup stays open so the input can be corrected
                Err(e) => state.set_error(e.to_string()),
            }
        }
        KeyCode::Backspace => {
            if let Some(buffer) = state.hex_entry.as_mut() {
                buffer.pop();
            }
        }
        KeyCode::Char(ch) if ch.is_ascii_hexdigit() => {
            if let Some(buffer) = state.hex_entry.as_mut() {
                if buffer.len() < 6 {
                    buffer.push(ch.to_ascii_uppercase());
                }
            }
        }
        _ => {}
    }

    Ok(false)
}
