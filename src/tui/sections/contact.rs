//! Contact section: the form and its submission status line.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{reveal_row, truncate};
use crate::content::Content;
use crate::state::{ContactForm, FormField, SubmissionStatus};
use crate::tui::page::RevealView;
use crate::tui::Theme;

/// Width of the input boxes in columns.
const INPUT_WIDTH: u16 = 40;

/// Number of staggered children: heading, three fields, submit row.
pub const CHILD_COUNT: usize = 5;

/// Section height in rows (width-independent).
#[must_use]
pub fn height(content: &Content, _width: u16) -> u16 {
    let _ = content;
    // blank, heading, subtitle, blank, 3 fields x 2 rows,
    // status row, hint row, blank
    4 + 6 + 1 + 1 + 1
}

/// One input row: label, box, and a cursor when the field is active.
fn field_row(
    form: &ContactForm,
    field: FormField,
    focused: bool,
    theme: &Theme,
) -> Line<'static> {
    let value = form.field(field);
    let active = focused && form.active_field == field && form.is_editable();

    let shown = truncate(value, INPUT_WIDTH.saturating_sub(2));
    let cursor = if active { "\u{258c}" } else { "" };
    let pad_len = (INPUT_WIDTH as usize)
        .saturating_sub(shown.chars().count())
        .saturating_sub(cursor.len().min(1));

    let box_style = if active {
        Style::default().fg(theme.text).bg(theme.highlight_bg)
    } else {
        Style::default().fg(theme.text_secondary).bg(theme.surface)
    };
    let label_style = if active {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_secondary)
    };

    Line::from(vec![
        Span::styled(format!("  {:<9}", field.label()), label_style),
        Span::styled(shown, box_style),
        Span::styled(cursor.to_string(), box_style.add_modifier(Modifier::SLOW_BLINK)),
        Span::styled(" ".repeat(pad_len), box_style),
    ])
}

/// The status row under the form, one row for every lifecycle state.
fn status_row(form: &ContactForm, theme: &Theme) -> Line<'static> {
    match form.status() {
        SubmissionStatus::Idle => {
            if form.is_complete() {
                Line::from(vec![
                    Span::styled("  [Ctrl+S] ", Style::default().fg(theme.accent)),
                    Span::styled("Send Message", Style::default().fg(theme.text)),
                ])
            } else {
                Line::from(Span::styled(
                    "  [Ctrl+S] Send Message (all fields required)",
                    Style::default().fg(theme.text_muted),
                ))
            }
        }
        SubmissionStatus::Pending => Line::from(Span::styled(
            "  Sending...",
            Style::default().fg(theme.warning),
        )),
        SubmissionStatus::Success => Line::from(Span::styled(
            "  \u{2713} Message sent successfully! I'll get back to you soon.",
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        )),
        SubmissionStatus::Error => Line::from(Span::styled(
            "  \u{2717} Could not send the message. Press Ctrl+S to retry.",
            Style::default().fg(theme.error),
        )),
    }
}

/// Builds the contact rows.
#[must_use]
pub fn lines(
    content: &Content,
    theme: &Theme,
    reveal: &RevealView,
    form: &ContactForm,
    focused: bool,
    _width: u16,
) -> Vec<Line<'static>> {
    let mut rows: Vec<Line<'static>> = Vec::new();

    rows.push(Line::default());
    let heading_progress = reveal.progress(0);
    rows.push(reveal_row(
        Line::from(Span::styled(
            "Let's Build Something Great",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        heading_progress,
    ));
    rows.push(reveal_row(
        Line::from(Span::styled(
            "I'm always open to discussing new projects and opportunities",
            Style::default().fg(theme.text_secondary),
        ))
        .centered(),
        heading_progress,
    ));
    rows.push(Line::default());

    for (i, field) in [FormField::Name, FormField::Email, FormField::Message]
        .into_iter()
        .enumerate()
    {
        rows.push(reveal_row(
            field_row(form, field, focused, theme),
            reveal.progress(1 + i),
        ));
        rows.push(Line::default());
    }

    rows.push(reveal_row(status_row(form, theme), reveal.progress(4)));

    let hint = if focused {
        "  editing: [Tab] next field  [Esc] done".to_string()
    } else {
        format!(
            "  [e] edit form   [y] copy {} to clipboard",
            content.profile.email
        )
    };
    rows.push(Line::from(Span::styled(
        hint,
        Style::default().fg(theme.text_muted),
    )));
    rows.push(Line::default());

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_matches_lines() {
        let content = Content::embedded().unwrap();
        let theme = Theme::dark();
        let form = ContactForm::new();
        let produced = lines(
            &content,
            &theme,
            &RevealView::settled(CHILD_COUNT),
            &form,
            false,
            100,
        );
        assert_eq!(produced.len() as u16, height(&content, 100));
    }

    #[test]
    fn test_row_count_is_state_invariant() {
        let content = Content::embedded().unwrap();
        let theme = Theme::dark();
        let settled = RevealView::settled(CHILD_COUNT);

        let mut form = ContactForm::new();
        let idle = lines(&content, &theme, &settled, &form, false, 100);

        form.name = "Jane".to_string();
        form.email = "jane@x.com".to_string();
        form.message = "Hello".to_string();
        let mut timers = crate::motion::TimerQueue::new();
        form.submit(&mut timers, std::time::Instant::now());
        let pending = lines(&content, &theme, &settled, &form, true, 100);

        assert_eq!(idle.len(), pending.len());
    }
}
