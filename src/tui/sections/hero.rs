//! Hero section: starfield, badge, title, tagline, calls to action.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::reveal_row;
use crate::content::Content;
use crate::tui::page::{wrap_text, RevealView};
use crate::tui::{starfield, Theme};

/// Rows of decorative starfield at the top of the page.
const STARFIELD_ROWS: u16 = 7;

/// Reveal children, in appearance order.
const CHILD_BADGE: usize = 0;
const CHILD_TITLE: usize = 1;
const CHILD_TAGLINE: usize = 2;
const CHILD_CTA: usize = 3;
const CHILD_SOCIALS: usize = 4;
const CHILD_STATS: usize = 5;

/// Number of staggered children in this section.
pub const CHILD_COUNT: usize = 6;

/// Section height in rows for `content` at `width`.
#[must_use]
pub fn height(content: &Content, width: u16) -> u16 {
    lines(content, &Theme::dark(), &RevealView::settled(CHILD_COUNT), 0, width).len() as u16
}

/// Builds the hero rows.
#[must_use]
pub fn lines(
    content: &Content,
    theme: &Theme,
    reveal: &RevealView,
    frame: u64,
    width: u16,
) -> Vec<Line<'static>> {
    let profile = &content.profile;
    let mut rows: Vec<Line<'static>> = Vec::new();

    // Decoration is not part of the stagger; it is visible (and
    // twinkling) from the first frame.
    for r in 0..STARFIELD_ROWS {
        rows.push(starfield::line(r, width, frame, theme));
    }
    rows.push(Line::default());

    rows.push(reveal_row(
        Line::from(Span::styled(
            format!("* {} *", profile.badge),
            Style::default().fg(theme.accent),
        ))
        .centered(),
        reveal.progress(CHILD_BADGE),
    ));
    rows.push(Line::default());

    let title_progress = reveal.progress(CHILD_TITLE);
    rows.push(reveal_row(
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        title_progress,
    ));
    rows.push(reveal_row(
        Line::from(Span::styled(
            profile.title.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        title_progress,
    ));
    rows.push(Line::default());

    let tagline_progress = reveal.progress(CHILD_TAGLINE);
    for wrapped in wrap_text(&profile.tagline, width.saturating_sub(8)) {
        rows.push(reveal_row(
            Line::from(Span::styled(
                wrapped,
                Style::default().fg(theme.text_secondary),
            ))
            .centered(),
            tagline_progress,
        ));
    }
    rows.push(Line::default());

    rows.push(reveal_row(
        Line::from(vec![
            Span::styled("[p] ", Style::default().fg(theme.accent)),
            Span::styled("View My Work", Style::default().fg(theme.text)),
            Span::raw("    "),
            Span::styled("[c] ", Style::default().fg(theme.accent)),
            Span::styled("Get In Touch", Style::default().fg(theme.text)),
        ])
        .centered(),
        reveal.progress(CHILD_CTA),
    ));
    rows.push(Line::default());

    if !content.socials.is_empty() {
        let labels: Vec<String> = content.socials.iter().map(|s| s.label.clone()).collect();
        rows.push(reveal_row(
            Line::from(Span::styled(
                labels.join("  \u{00b7}  "),
                Style::default().fg(theme.text_secondary),
            ))
            .centered(),
            reveal.progress(CHILD_SOCIALS),
        ));
        rows.push(Line::default());
    }

    if !profile.stats.is_empty() {
        rows.push(reveal_row(
            Line::from(Span::styled(
                profile.stats.join("   |   "),
                Style::default().fg(theme.text_muted),
            ))
            .centered(),
            reveal.progress(CHILD_STATS),
        ));
        rows.push(Line::default());
    }

    // Bouncing scroll hint: pulses with the frame counter instead of
    // moving, so the row count stays fixed.
    let bright = (frame / 15) % 2 == 0;
    let hint_style = if bright {
        Style::default().fg(theme.primary)
    } else {
        Style::default().fg(theme.text_muted).add_modifier(Modifier::DIM)
    };
    rows.push(Line::from(Span::styled("v  scroll  v", hint_style)).centered());
    rows.push(Line::default());

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::RevealSequence;

    #[test]
    fn test_height_matches_lines() {
        let content = Content::embedded().unwrap();
        let theme = Theme::dark();
        let produced = lines(
            &content,
            &theme,
            &RevealView::settled(CHILD_COUNT),
            0,
            100,
        );
        assert_eq!(produced.len() as u16, height(&content, 100));
    }

    #[test]
    fn test_row_count_is_animation_invariant() {
        let content = Content::embedded().unwrap();
        let theme = Theme::dark();

        let hidden = lines(
            &content,
            &theme,
            &RevealView::new(RevealSequence::new(CHILD_COUNT), None, false),
            0,
            100,
        );
        let settled = lines(&content, &theme, &RevealView::settled(CHILD_COUNT), 7, 100);
        assert_eq!(hidden.len(), settled.len());
    }
}
