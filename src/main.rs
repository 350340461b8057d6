//! Huepick - terminal color picker.
//!
//! Pick a color with channel sliders, hex entry, random generation, or
//! preset/saved swatches; copy its codes to the clipboard; walk back and
//! forth through your choices with undo/redo.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use huepick::config::{Config, ThemeMode};
use huepick::constants::{APP_BINARY_NAME, APP_NAME};
use huepick::storage::JsonFileStore;
use huepick::tui;

/// Theme override accepted on the command line.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliTheme {
    /// Detect the OS theme
    Auto,
    /// Force the dark theme
    Dark,
    /// Force the light theme
    Light,
}

impl From<CliTheme> for ThemeMode {
    fn from(theme: CliTheme) -> Self {
        match theme {
            CliTheme::Auto => Self::Auto,
            CliTheme::Dark => Self::Dark,
            CliTheme::Light => Self::Light,
        }
    }
}

/// Huepick - terminal color picker
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Override the configured theme for this run (not saved)
    #[arg(long, value_enum)]
    theme: Option<CliTheme>,

    /// Use an alternate storage file for saved colors
    #[arg(long, value_name = "PATH")]
    storage: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging to stderr so log lines never corrupt the TUI screen
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Load or create default config
    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {e}");
        eprintln!("Starting {} with default settings.", APP_NAME);
        Config::default()
    });

    if let Some(theme) = cli.theme {
        config.ui.theme_mode = theme.into();
    }

    let storage_path = match cli.storage {
        Some(path) => path,
        None => JsonFileStore::default_path()?,
    };
    let store = JsonFileStore::open(&storage_path)?;
    tracing::info!(path = %storage_path.display(), "storage ready");

    let mut state = tui::AppState::new(config, Box::new(store));

    // Run the TUI, always restoring the terminal before reporting errors
    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;
    result?;

    // Persist preference toggles made during the session
    if state.config_dirty {
        if let Err(e) = state.config.save() {
            eprintln!("Warning: Failed to save config: {e}");
        }
    }

    Ok(())
}
