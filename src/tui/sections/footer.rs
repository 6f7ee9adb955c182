//! Footer section.
//!
//! The footer has no entrance animation; it renders settled from the
//! first frame.

use chrono::Datelike;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::Content;
use crate::tui::Theme;

/// Section height in rows (width-independent).
#[must_use]
pub fn height(content: &Content, _width: u16) -> u16 {
    let _ = content;
    6
}

/// Builds the footer rows.
#[must_use]
pub fn lines(content: &Content, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let profile = &content.profile;
    let year = chrono::Utc::now().year();

    let rule_width = width.saturating_sub(4) as usize;
    let labels: Vec<String> = content.socials.iter().map(|s| s.label.clone()).collect();

    vec![
        Line::default(),
        Line::from(Span::styled(
            "\u{2500}".repeat(rule_width),
            Style::default().fg(theme.text_muted),
        ))
        .centered(),
        Line::from(vec![
            Span::styled(
                profile.name.clone(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  \u{00b7}  {}", profile.title),
                Style::default().fg(theme.text_secondary),
            ),
        ])
        .centered(),
        Line::from(Span::styled(
            labels.join("  \u{00b7}  "),
            Style::default().fg(theme.text_secondary),
        ))
        .centered(),
        Line::from(Span::styled(
            format!("\u{00a9} {year} {} \u{00b7} Built with Rust & Ratatui", profile.name),
            Style::default().fg(theme.text_muted),
        ))
        .centered(),
        Line::default(),
    ]
}
