//! Theme system for consistent UI colors across dark and light modes.
//!
//! The palette is derived from the persisted display-mode preference
//! and passed down explicitly through every render call; nothing reads
//! an ambient global. Toggling the mode swaps the palette for the
//! whole widget tree on the next frame.

use crate::config::DisplayMode;
use ratatui::style::Color;

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across all UI components with support
/// for both dark and light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color for confirmations and success messages
    pub success: Color,
    /// Error state color for errors and destructive actions
    pub error: Color,
    /// Warning state color for warnings and cautions
    pub warning: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels and less important content
    pub text_secondary: Color,
    /// Muted text color for help text and dim content
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
    /// Surface color for panels and elevated elements
    pub surface: Color,
}

impl Theme {
    /// Returns the theme matching a display mode.
    #[must_use]
    pub const fn from_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Dark => Self::dark(),
            DisplayMode::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Rgb(96, 165, 250),
            accent: Color::Rgb(167, 139, 250),
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Rgb(17, 24, 39),
            highlight_bg: Color::Rgb(55, 65, 81),
            surface: Color::Rgb(31, 41, 55),
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    ///
    /// Uses darker colors for text and UI elements so everything stays
    /// readable on a white background.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(37, 99, 235),
            accent: Color::Rgb(124, 58, 237),
            success: Color::Rgb(22, 163, 74),
            error: Color::Rgb(220, 38, 38),
            warning: Color::Rgb(202, 138, 4),

            text: Color::Black,
            text_secondary: Color::Rgb(55, 65, 81),
            text_muted: Color::Rgb(156, 163, 175),

            background: Color::White,
            highlight_bg: Color::Rgb(219, 234, 254),
            surface: Color::Rgb(243, 244, 246),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mode_picks_matching_palette() {
        assert_eq!(Theme::from_mode(DisplayMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(DisplayMode::Light), Theme::light());
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::dark().background, Theme::light().background);
        assert_ne!(Theme::dark().text, Theme::light().text);
    }
}
