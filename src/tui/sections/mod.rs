//! Page section renderers.
//!
//! Each section exposes `height(content, width)` and a `lines(...)`
//! builder producing exactly that many rows. Entrance animation never
//! changes a section's row count: a hidden child renders as blank rows
//! of the same height, a child mid-transition renders dimmed and
//! slid — so the scroll layout is stable from the first frame.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod projects;

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

/// Maximum horizontal slide-in distance, in columns.
const SLIDE_COLS: f32 = 6.0;

/// Applies entrance progress to one row.
///
/// Hidden (`p == 0`) rows become blank; rows mid-transition are dimmed
/// and slid in from the left; settled rows pass through untouched.
#[must_use]
pub fn reveal_row(line: Line<'static>, progress: f32) -> Line<'static> {
    if progress <= 0.0 {
        return Line::default();
    }
    if progress >= 1.0 {
        return line;
    }

    let offset = ((1.0 - progress) * SLIDE_COLS).round() as usize;
    let mut spans: Vec<Span<'static>> = Vec::with_capacity(line.spans.len() + 1);
    if offset > 0 {
        spans.push(Span::raw(" ".repeat(offset)));
    }
    for span in line.spans {
        spans.push(Span::styled(
            span.content,
            span.style.add_modifier(Modifier::DIM),
        ));
    }

    let mut out = Line::from(spans);
    out.alignment = line.alignment;
    out
}

/// Truncates a string to `width` columns, appending an ellipsis when
/// something was cut.
#[must_use]
pub fn truncate(text: &str, width: u16) -> String {
    let width = width as usize;
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Line;

    #[test]
    fn test_reveal_row_hidden_is_blank() {
        let row = reveal_row(Line::from("hello"), 0.0);
        assert!(row.spans.is_empty());
    }

    #[test]
    fn test_reveal_row_settled_is_untouched() {
        let row = reveal_row(Line::from("hello"), 1.0);
        assert_eq!(row, Line::from("hello"));
    }

    #[test]
    fn test_reveal_row_midway_is_dimmed_and_slid() {
        let row = reveal_row(Line::from("hello"), 0.5);
        // Leading pad span plus the dimmed content span
        assert_eq!(row.spans.len(), 2);
        assert!(row.spans[0].content.chars().all(|c| c == ' '));
        assert!(row.spans[1]
            .style
            .add_modifier
            .contains(Modifier::DIM));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long description", 10), "a very ...");
    }
}
