//! Termfolio - a single-page personal portfolio for the terminal.
//!
//! Renders a scrollable portfolio page (hero, about, projects,
//! contact, footer) with smooth scrolling and staggered entrance
//! animations, themed dark or light from a persisted preference.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use termfolio::config::{Config, DisplayMode};
use termfolio::constants::{APP_BINARY_NAME, APP_NAME};
use termfolio::content::Content;
use termfolio::tui;

/// Termfolio - single-page personal portfolio for the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML or JSON content file (defaults to the built-in
    /// portfolio)
    #[arg(value_name = "CONTENT")]
    content_path: Option<PathBuf>,

    /// Override the display mode for this run
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Skip entrance animations and render everything settled
    #[arg(long)]
    reduce_motion: bool,
}

/// CLI display-mode override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    /// Dark palette
    Dark,
    /// Light palette
    Light,
    /// Ask the OS which it prefers
    Auto,
}

impl ThemeArg {
    /// Resolves the override to a concrete display mode.
    fn resolve(self) -> DisplayMode {
        match self {
            Self::Dark => DisplayMode::Dark,
            Self::Light => DisplayMode::Light,
            Self::Auto => match dark_light::detect() {
                Ok(dark_light::Mode::Light) => DisplayMode::Light,
                // Fall back to dark for dark mode, unspecified, or errors
                Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => {
                    DisplayMode::Dark
                }
            },
        }
    }
}

/// Routes diagnostics to a log file; the TUI owns the terminal.
fn init_logging() {
    let Ok(path) = Config::log_file_path() else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = std::fs::create_dir_all(dir);
    }
    let Ok(file) = std::fs::File::options().create(true).append(true).open(&path) else {
        return;
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TERMFOLIO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting {APP_NAME}");

    // Preference read failures fall back to defaults; a broken config
    // file must never keep the page from rendering.
    let mut config = Config::load_or_default();
    if let Some(theme) = cli.theme {
        config.ui.display_mode = theme.resolve();
    }
    if cli.reduce_motion {
        config.ui.reduce_motion = true;
    }

    let content = if let Some(path) = cli.content_path {
        if !path.exists() {
            eprintln!("Error: Content file not found: {}", path.display());
            eprintln!();
            eprintln!("Please provide a valid path to a TOML or JSON content file.");
            eprintln!();
            eprintln!("Examples:");
            eprintln!("  {} my_portfolio.toml", APP_BINARY_NAME);
            eprintln!("  {} path/to/content.json", APP_BINARY_NAME);
            eprintln!();
            eprintln!("Run without arguments to see the built-in portfolio:");
            eprintln!("  {}", APP_BINARY_NAME);
            std::process::exit(1);
        }
        Content::load(&path)?
    } else {
        Content::embedded().context("Built-in content failed to load")?
    };

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(config, content);

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    Ok(())
}
