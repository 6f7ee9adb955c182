//! Projects section: the showcase list and its card geometry.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{reveal_row, truncate};
use crate::content::Content;
use crate::tui::page::RevealView;
use crate::tui::Theme;

/// Rows before the first card: blank, heading, subtitle, blank.
const HEADER_ROWS: u16 = 4;

/// Rows per project card, including its trailing separator.
pub const CARD_ROWS: u16 = 5;

/// How many tech tags a card shows before collapsing to "+N".
const CARD_TECH_TAGS: usize = 3;

/// Number of staggered children: the heading plus one per card.
#[must_use]
pub fn child_count(content: &Content) -> usize {
    1 + content.featured_projects().len()
}

/// Section height in rows for `content` at any width.
#[must_use]
pub fn height(content: &Content, _width: u16) -> u16 {
    HEADER_ROWS + CARD_ROWS * content.featured_projects().len() as u16
}

/// The card index covering a section-relative row, if any.
///
/// Used by the mouse handler to map a click onto a card.
#[must_use]
pub fn card_at(content: &Content, section_row: u16) -> Option<usize> {
    if section_row < HEADER_ROWS {
        return None;
    }
    let index = ((section_row - HEADER_ROWS) / CARD_ROWS) as usize;
    if index < content.featured_projects().len() {
        Some(index)
    } else {
        None
    }
}

/// Builds the projects rows. `highlighted` is the keyboard cursor.
#[must_use]
pub fn lines(
    content: &Content,
    theme: &Theme,
    reveal: &RevealView,
    highlighted: usize,
    width: u16,
) -> Vec<Line<'static>> {
    let mut rows: Vec<Line<'static>> = Vec::new();

    rows.push(Line::default());
    let heading_progress = reveal.progress(0);
    rows.push(reveal_row(
        Line::from(Span::styled(
            "Featured Projects",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        heading_progress,
    ));
    rows.push(reveal_row(
        Line::from(Span::styled(
            "Real-world solutions with measurable impact",
            Style::default().fg(theme.text_secondary),
        ))
        .centered(),
        heading_progress,
    ));
    rows.push(Line::default());

    let text_width = width.saturating_sub(8);
    for (i, project) in content.featured_projects().iter().enumerate() {
        let progress = reveal.progress(1 + i);
        let accent = project.accent.to_color();
        let is_highlighted = i == highlighted;

        let title_style = if is_highlighted {
            Style::default()
                .fg(accent)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        };
        let rail = if is_highlighted {
            Style::default().fg(accent)
        } else {
            Style::default().fg(theme.text_muted)
        };

        rows.push(reveal_row(
            Line::from(vec![
                Span::styled("  \u{250c} ", rail),
                Span::styled(format!("{}. ", i + 1), Style::default().fg(theme.text_muted)),
                Span::styled(truncate(&project.title, text_width), title_style),
            ]),
            progress,
        ));
        rows.push(reveal_row(
            Line::from(vec![
                Span::styled("  \u{2502} ", rail),
                Span::styled(
                    truncate(&project.description, text_width),
                    Style::default().fg(theme.text),
                ),
            ]),
            progress,
        ));

        let mut tags: Vec<String> = project
            .tech
            .iter()
            .take(CARD_TECH_TAGS)
            .cloned()
            .collect();
        if project.tech.len() > CARD_TECH_TAGS {
            tags.push(format!("+{}", project.tech.len() - CARD_TECH_TAGS));
        }
        rows.push(reveal_row(
            Line::from(vec![
                Span::styled("  \u{2502} ", rail),
                Span::styled(
                    tags.join(" \u{00b7} "),
                    Style::default().fg(theme.text_secondary),
                ),
            ]),
            progress,
        ));

        let hint = if is_highlighted {
            "[Enter] View details"
        } else {
            ""
        };
        rows.push(reveal_row(
            Line::from(vec![
                Span::styled("  \u{2514} ", rail),
                Span::styled(hint.to_string(), Style::default().fg(theme.text_muted)),
            ]),
            progress,
        ));
        rows.push(Line::default());
    }

    rows
}
