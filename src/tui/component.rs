//! Component trait pattern for TUI overlays.
//!
//! Overlays (the navigation menu, the project detail modal) are
//! self-contained components that manage their own cursor state,
//! handle keyboard input, and emit events for the parent to apply.
//! The parent owns opening and closing through its selection groups;
//! components never reach back into app state.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::content::Content;
use crate::tui::Theme;

/// A component that can be rendered and handle input.
///
/// Returns `Some(Event)` from input handling when the component wants
/// to signal something to the parent; `None` when the input was
/// handled internally.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    fn handle_input(&mut self, key: KeyEvent, content: &Content) -> Option<Self::Event>;

    /// Render the component.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, content: &Content);
}

/// Computes the centered rectangle an overlay occupies, as a
/// percentage of the frame.
///
/// Pure: the same frame area always yields the same rect, so click
/// containment can recompute it instead of caching render output.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Whether a point falls inside a rect.
#[must_use]
pub const fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(50, 50, area);
        assert_eq!(rect.width, 50);
        assert_eq!(rect.height, 25);
        assert_eq!(rect.x, 25);
        assert_eq!(rect.y, 12);
    }

    #[test]
    fn test_centered_rect_is_deterministic() {
        let area = Rect::new(0, 0, 120, 40);
        assert_eq!(centered_rect(80, 80, area), centered_rect(80, 80, area));
    }

    #[test]
    fn test_rect_contains_boundaries() {
        let rect = Rect::new(10, 10, 5, 5);
        assert!(rect_contains(rect, 10, 10));
        assert!(rect_contains(rect, 14, 14));
        assert!(!rect_contains(rect, 15, 10));
        assert!(!rect_contains(rect, 9, 10));
    }
}
