//! Configuration management for the application.
//!
//! This module handles loading and saving the persisted user preferences
//! in TOML format with platform-specific directory resolution. The only
//! durable preference is the display mode; everything else in the app is
//! in-memory view state that dies with the process.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Display mode preference.
///
/// Exactly one value is active at any time. The persisted file and the
/// in-memory value converge within one mutation step: every toggle goes
/// through [`Config::set_display_mode`], which saves before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DisplayMode {
    /// Dark palette (the default when no preference is stored)
    #[default]
    Dark,
    /// Light palette
    Light,
}

impl DisplayMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Display mode preference (Dark, Light)
    #[serde(default)]
    pub display_mode: DisplayMode,
    /// Skip entrance animations and render everything settled
    #[serde(default)]
    pub reduce_motion: bool,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Termfolio/config.toml`
/// - macOS: `~/Library/Application Support/Termfolio/config.toml`
/// - Windows: `%APPDATA%\Termfolio\config.toml`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("Termfolio");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Gets the full path to the log file.
    ///
    /// The TUI owns the terminal, so diagnostics go to a file next to
    /// the config instead of stdout/stderr.
    pub fn log_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("termfolio.log"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Loads configuration, failing open to defaults.
    ///
    /// A missing, unreadable, or malformed preference file must never
    /// prevent the page from rendering; the stored preference simply
    /// falls back to [`DisplayMode::Dark`].
    #[must_use]
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("config unreadable, using defaults: {e:#}");
                Self::new()
            }
        }
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Sets the display mode and persists it immediately.
    ///
    /// Persistence failures are logged, not propagated: the in-memory
    /// value is authoritative for the rest of the session either way.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.ui.display_mode = mode;
        if let Err(e) = self.save() {
            tracing::warn!("failed to persist display mode: {e:#}");
        }
    }
}
