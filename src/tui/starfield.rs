//! Decorative starfield band for the hero section.
//!
//! A fixed set of pseudo-random star cells that twinkle as a pure
//! function of the frame counter. Configuration in, glyphs out: the
//! rest of the app never reads anything back from the decoration.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::Theme;

/// Roughly one cell in `DENSITY` holds a star.
const DENSITY: u64 = 14;

/// Star glyphs, picked per cell.
const GLYPHS: [char; 4] = ['.', '*', '+', '\u{00b7}'];

/// Frames per twinkle phase step.
const TWINKLE_PERIOD: u64 = 12;

/// Cheap deterministic cell hash (FNV-style mixing).
fn cell_hash(row: u16, col: u16) -> u64 {
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    for v in [u64::from(row), u64::from(col)] {
        h ^= v.wrapping_add(0x9e37_79b9_7f4a_7c15);
        h = h.wrapping_mul(0x100_0000_01b3);
    }
    h
}

/// Whether a cell holds a star, and which glyph.
fn star_at(row: u16, col: u16) -> Option<char> {
    let h = cell_hash(row, col);
    if h % DENSITY == 0 {
        Some(GLYPHS[(h >> 8) as usize % GLYPHS.len()])
    } else {
        None
    }
}

/// Renders one starfield row at the given animation frame.
///
/// Stars cycle dark -> dim -> bright -> dim, each on its own phase so
/// the band shimmers instead of blinking in unison. With a frozen
/// frame counter (reduced motion) the output is static.
#[must_use]
pub fn line(row: u16, width: u16, frame: u64, theme: &Theme) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();

    for col in 0..width {
        match star_at(row, col) {
            Some(glyph) => {
                if !run.is_empty() {
                    spans.push(Span::raw(std::mem::take(&mut run)));
                }
                let h = cell_hash(row, col);
                let phase = (h / 7 + frame / TWINKLE_PERIOD) % 4;
                let style = match phase {
                    0 => Style::default().fg(theme.background),
                    1 | 3 => Style::default()
                        .fg(theme.text_muted)
                        .add_modifier(Modifier::DIM),
                    _ => Style::default().fg(theme.accent),
                };
                spans.push(Span::styled(glyph.to_string(), style));
            }
            None => run.push(' '),
        }
    }
    if !run.is_empty() {
        spans.push(Span::raw(run));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_placement_is_deterministic() {
        for row in 0..8u16 {
            for col in 0..120u16 {
                assert_eq!(star_at(row, col), star_at(row, col));
            }
        }
    }

    #[test]
    fn test_density_is_sparse_but_nonzero() {
        let mut stars = 0;
        let cells = 8 * 200;
        for row in 0..8u16 {
            for col in 0..200u16 {
                if star_at(row, col).is_some() {
                    stars += 1;
                }
            }
        }
        assert!(stars > 0, "no stars at all");
        assert!(stars < cells / 4, "field too dense: {stars}/{cells}");
    }

    #[test]
    fn test_same_frame_same_line() {
        let theme = Theme::dark();
        let a = line(3, 80, 42, &theme);
        let b = line(3, 80, 42, &theme);
        assert_eq!(a, b);
    }

    #[test]
    fn test_line_width_matches_request() {
        let theme = Theme::dark();
        let l = line(0, 80, 0, &theme);
        let total: usize = l.spans.iter().map(|s| s.content.chars().count()).sum();
        assert_eq!(total, 80);
    }
}
