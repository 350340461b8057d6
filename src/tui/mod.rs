//! Terminal user interface: state management, event loop, and rendering.
//!
//! This module contains the main TUI loop, [`AppState`], event handling,
//! and all UI widgets using Ratatui. All widgets read from `AppState`
//! immutably; only event handlers modify it.

pub mod handlers;
pub mod sliders;
pub mod status_bar;
pub mod swatches;
pub mod theme;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::RgbColor;
use crate::services::ColorPicker;
use crate::storage::KeyValueStore;

pub use theme::Theme;

/// RGB channel being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RgbChannel {
    /// Red color channel
    #[default]
    Red,
    /// Green color channel
    Green,
    /// Blue color channel
    Blue,
}

impl RgbChannel {
    /// Next channel in slider order (Red -> Green -> Blue -> Red).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Blue,
            Self::Blue => Self::Red,
        }
    }

    /// Previous channel in slider order.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Green => Self::Red,
            Self::Blue => Self::Green,
        }
    }
}

/// Which pane currently receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// The channel sliders
    #[default]
    Sliders,
    /// The preset swatch grid
    Presets,
    /// The custom swatch grid
    Customs,
}

impl FocusPane {
    /// Next pane in Tab order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Sliders => Self::Presets,
            Self::Presets => Self::Customs,
            Self::Customs => Self::Sliders,
        }
    }

    /// Previous pane in Tab order.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Sliders => Self::Customs,
            Self::Presets => Self::Sliders,
            Self::Customs => Self::Presets,
        }
    }
}

/// Application state - single source of truth.
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    /// Picker controller: current color, history, saved colors, presets
    pub picker: ColorPicker,
    /// Application configuration
    pub config: Config,
    /// Current UI theme
    pub theme: Theme,

    /// Pane receiving navigation keys
    pub focus: FocusPane,
    /// Channel targeted by slider adjustments
    pub active_channel: RgbChannel,
    /// Hex entry buffer; `Some` while the entry popup is open
    pub hex_entry: Option<String>,
    /// Selected index in the preset grid
    pub preset_selected: usize,
    /// Selected index in the custom grid
    pub custom_selected: usize,

    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,

    /// Whether preference changes need saving on exit
    pub config_dirty: bool,
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState` from config and a persistence store.
    #[must_use]
    pub fn new(config: Config, store: Box<dyn KeyValueStore>) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);

        Self {
            picker: ColorPicker::new(store),
            config,
            theme,
            focus: FocusPane::Sliders,
            active_channel: RgbChannel::Red,
            hex_entry: None,
            preset_selected: 0,
            custom_selected: 0,
            status_message: "Tab switches panes - i hex entry - r random - s save".to_string(),
            error_message: None,
            config_dirty: false,
            should_quit: false,
        }
    }

    /// Set the status message (clears any error).
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set the error message.
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Adjust the active channel by `delta`, clamped to 0-255.
    ///
    /// A change records the new color; hitting a bound with no movement
    /// records nothing so repeated keypresses do not flood the history.
    pub fn adjust_channel(&mut self, delta: i16) {
        let mut color = self.picker.current();
        let channel = match self.active_channel {
            RgbChannel::Red => &mut color.r,
            RgbChannel::Green => &mut color.g,
            RgbChannel::Blue => &mut color.b,
        };
        *channel = (i16::from(*channel) + delta).clamp(0, 255) as u8;

        if color != self.picker.current() {
            self.picker.update_color(color);
            self.error_message = None;
        }
    }

    /// The swatch hex string under the cursor, if a swatch pane is focused.
    #[must_use]
    pub fn focused_swatch(&self) -> Option<String> {
        match self.focus {
            FocusPane::Sliders => None,
            FocusPane::Presets => self
                .picker
                .presets()
                .color_at(self.preset_selected)
                .map(|c| c.to_hex_prefixed()),
            FocusPane::Customs => self
                .picker
                .custom_colors()
                .get(self.custom_selected)
                .cloned(),
        }
    }

    /// Move the swatch cursor within the focused grid.
    pub fn move_swatch_selection(&mut self, dx: i32, dy: i32) {
        let columns = self.picker.presets().columns() as i32;
        let (selected, count) = match self.focus {
            FocusPane::Presets => (&mut self.preset_selected, self.picker.presets().color_count()),
            FocusPane::Customs => (&mut self.custom_selected, self.picker.custom_colors().len()),
            FocusPane::Sliders => return,
        };
        if count == 0 {
            return;
        }

        let current = *selected as i32;
        let row = (current / columns + dy).max(0);
        let col = (current % columns + dx).clamp(0, columns - 1);
        let next = (row * columns + col).clamp(0, count as i32 - 1);
        *selected = next as usize;
    }

    /// Keep the custom cursor in range after a deletion.
    pub fn clamp_custom_selection(&mut self) {
        let len = self.picker.custom_colors().len();
        if self.custom_selected >= len {
            self.custom_selected = len.saturating_sub(1);
        }
    }
}

/// Set up the terminal for TUI rendering.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state.
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop.
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto detects OS, Dark/Light are explicit)
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handlers::handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal resized, will re-render on next loop
                }
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state.
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first so rendering is
    // consistent regardless of terminal settings
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_main_content(f, chunks[1], state);
    status_bar::render(f, chunks[2], state);

    if state.hex_entry.is_some() {
        render_hex_entry_popup(f, state);
    }
}

/// Render the title bar with app name and active preferences.
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let copy_format = match state.config.ui.copy_format {
        crate::config::CopyFormat::Hex => "hex",
        crate::config::CopyFormat::Rgb => "rgb",
    };

    let title = Line::from(vec![
        Span::styled(
            format!(" {} v{} ", APP_NAME, env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("copy: {copy_format}"),
            Style::default().fg(theme.text_muted),
        ),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

/// Render the two-column main area: color panel left, swatches right.
fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    sliders::render(f, columns[0], state);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);

    let preset_colors: Vec<RgbColor> = state.picker.presets().colors().to_vec();
    swatches::render_grid(
        f,
        rows[0],
        " Preset Colors ",
        &preset_colors,
        state.preset_selected,
        state.focus == FocusPane::Presets,
        &state.theme,
    );

    let custom_colors: Vec<RgbColor> = state
        .picker
        .custom_colors()
        .iter()
        .filter_map(|hex| RgbColor::from_hex(hex).ok())
        .collect();
    swatches::render_grid(
        f,
        rows[1],
        " Custom Colors ",
        &custom_colors,
        state.custom_selected,
        state.focus == FocusPane::Customs,
        &state.theme,
    );
}

/// Render the centered hex entry popup.
fn render_hex_entry_popup(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;
    let Some(buffer) = &state.hex_entry else {
        return;
    };

    let area = centered_rect(36, 5, f.area());
    f.render_widget(Clear, area);
    f.render_widget(
        Block::default().style(Style::default().bg(theme.surface)),
        area,
    );

    let block = Block::default()
        .title(" Enter Hex Color ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled("#", Style::default().fg(theme.text_muted)),
            Span::styled(
                buffer.clone(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "_".repeat(6usize.saturating_sub(buffer.len())),
                Style::default().fg(theme.text_muted),
            ),
        ]),
        Line::from(Span::styled(
            "Enter apply - Esc cancel",
            Style::default().fg(theme.text_muted),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

/// Helper to create a centered rectangle of fixed size.
fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + r.width.saturating_sub(width) / 2;
    let y = r.y + r.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(r.width),
        height: height.min(r.height),
    }
}
