//! About section: journey paragraphs, skill bars, experience timeline.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use std::time::Duration;

use super::reveal_row;
use crate::content::{Content, ExperienceKind};
use crate::motion::{reveal::STAGGER_STEP, RevealSequence};
use crate::tui::page::{wrap_text, RevealView};
use crate::tui::Theme;

/// Width of a skill bar in columns.
const BAR_WIDTH: usize = 28;

/// Duration of one skill bar's fill animation.
const BAR_DURATION: Duration = Duration::from_secs(1);

/// Child index of the section heading.
const CHILD_HEADING: usize = 0;
/// Child index of the journey paragraphs.
const CHILD_JOURNEY: usize = 1;

/// Child index of skill category `i`.
const fn child_category(i: usize) -> usize {
    2 + i
}

/// Child index of the timeline heading.
const fn child_timeline_heading(categories: usize) -> usize {
    2 + categories
}

/// Child index of timeline entry `j`.
const fn child_entry(categories: usize, j: usize) -> usize {
    3 + categories + j
}

/// Number of staggered children for `content`.
#[must_use]
pub fn child_count(content: &Content) -> usize {
    3 + content.skills.len() + content.experience.len()
}

/// Section height in rows for `content` at `width`.
#[must_use]
pub fn height(content: &Content, width: u16) -> u16 {
    let settled = RevealView::settled(child_count(content));
    lines(content, &Theme::dark(), &settled, width).len() as u16
}

/// Fill progress of bar `bar_index` inside category child
/// `cat_child`. Bars start once their category has appeared and fill
/// with their own stagger.
fn bar_fill(reveal: &RevealView, cat_child: usize, bar_index: usize, bars: usize) -> f32 {
    if reveal.reduce_motion() {
        return 1.0;
    }
    let Some(since) = reveal.elapsed_since(cat_child) else {
        return 0.0;
    };
    RevealSequence::new(bars)
        .with_timing(Duration::ZERO, STAGGER_STEP, BAR_DURATION)
        .progress(bar_index, since)
}

/// Builds the about rows.
#[must_use]
pub fn lines(
    content: &Content,
    theme: &Theme,
    reveal: &RevealView,
    width: u16,
) -> Vec<Line<'static>> {
    let mut rows: Vec<Line<'static>> = Vec::new();
    let categories = content.skills.len();

    rows.push(Line::default());
    let heading_progress = reveal.progress(CHILD_HEADING);
    rows.push(reveal_row(
        Line::from(Span::styled(
            "About Me",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        heading_progress,
    ));
    rows.push(reveal_row(
        Line::from(Span::styled(
            "Turning complex problems into elegant solutions",
            Style::default().fg(theme.text_secondary),
        ))
        .centered(),
        heading_progress,
    ));
    rows.push(Line::default());

    // Journey paragraphs
    let journey_progress = reveal.progress(CHILD_JOURNEY);
    for paragraph in &content.profile.about {
        for wrapped in wrap_text(paragraph, width.saturating_sub(6)) {
            rows.push(reveal_row(
                Line::from(Span::styled(
                    format!("  {wrapped}"),
                    Style::default().fg(theme.text),
                )),
                journey_progress,
            ));
        }
        rows.push(Line::default());
    }

    // Skills
    rows.push(reveal_row(
        Line::from(Span::styled(
            "  Skills & Expertise",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        journey_progress,
    ));
    rows.push(Line::default());

    for (i, category) in content.skills.iter().enumerate() {
        let cat_child = child_category(i);
        let cat_progress = reveal.progress(cat_child);

        rows.push(reveal_row(
            Line::from(vec![
                Span::styled("  \u{25cf} ", Style::default().fg(theme.primary)),
                Span::styled(
                    category.name.clone(),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
            ]),
            cat_progress,
        ));

        let bars = category.skills.len();
        for (j, skill) in category.skills.iter().enumerate() {
            let fill = bar_fill(reveal, cat_child, j, bars);
            let target = skill.level as usize * BAR_WIDTH / 100;
            let filled = ((target as f32) * fill).round() as usize;
            let bar: String = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(BAR_WIDTH - filled);

            rows.push(reveal_row(
                Line::from(vec![
                    Span::styled(
                        format!("    {:<18}", super::truncate(&skill.name, 18)),
                        Style::default().fg(theme.text_secondary),
                    ),
                    Span::styled(bar, Style::default().fg(theme.primary)),
                    Span::styled(
                        format!(" {:>3}%", skill.level),
                        Style::default().fg(theme.text_muted),
                    ),
                ]),
                cat_progress,
            ));
        }
        rows.push(Line::default());
    }

    // Experience timeline
    rows.push(reveal_row(
        Line::from(Span::styled(
            "Experience Timeline",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        reveal.progress(child_timeline_heading(categories)),
    ));
    rows.push(Line::default());

    for (j, entry) in content.experience.iter().enumerate() {
        let progress = reveal.progress(child_entry(categories, j));
        let marker = match entry.kind {
            ExperienceKind::Work => "\u{25c6}",
            ExperienceKind::Education => "\u{25c7}",
        };
        // Alternate the card side along the rail, like a zig-zag
        // timeline.
        let indent = if j % 2 == 0 { "  " } else { "      " };

        rows.push(reveal_row(
            Line::from(vec![
                Span::styled(
                    format!("{indent}{marker} "),
                    Style::default().fg(theme.accent),
                ),
                Span::styled(
                    entry.role.clone(),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
            ]),
            progress,
        ));
        rows.push(reveal_row(
            Line::from(vec![
                Span::styled(
                    format!("{indent}\u{2502} "),
                    Style::default().fg(theme.text_muted),
                ),
                Span::styled(entry.org.clone(), Style::default().fg(theme.primary)),
                Span::styled(
                    format!("  {}", entry.period),
                    Style::default().fg(theme.text_muted),
                ),
            ]),
            progress,
        ));
        for wrapped in wrap_text(&entry.summary, width.saturating_sub(10)) {
            rows.push(reveal_row(
                Line::from(vec![
                    Span::styled(
                        format!("{indent}\u{2502} "),
                        Style::default().fg(theme.text_muted),
                    ),
                    Span::styled(wrapped, Style::default().fg(theme.text_secondary)),
                ]),
                progress,
            ));
        }
        rows.push(Line::default());
    }

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
            &RevealView::settled(child_count(&content)),
            100,
        );
        assert_eq!(produced.len() as u16, height(&content, 100));
    }

    #[test]
    fn test_row_count_is_animation_invariant() {
        let content = Content::embedded().unwrap();
        let theme = Theme::dark();
        let n = child_count(&content);

        let hidden = lines(
            &content,
            &theme,
            &RevealView::new(RevealSequence::new(n), None, false),
            100,
        );
        let settled = lines(&content, &theme, &RevealView::settled(n), 100);
        assert_eq!(hidden.len(), settled.len());
    }

    #[test]
    fn test_child_indices_are_disjoint() {
        let content = Content::embedded().unwrap();
        let cats = content.skills.len();
        let entries = content.experience.len();

        let mut seen = std::collections::HashSet::new();
        seen.insert(CHILD_HEADING);
        seen.insert(CHILD_JOURNEY);
        for i in 0..cats {
            assert!(seen.insert(child_category(i)));
        }
        assert!(seen.insert(child_timeline_heading(cats)));
        for j in 0..entries {
            assert!(seen.insert(child_entry(cats, j)));
        }
        assert_eq!(seen.len(), child_count(&content));
    }

    #[test]
    fn test_bar_fill_is_zero_before_trigger() {
        let content = Content::embedded().unwrap();
        let n = child_count(&content);
        let reveal = RevealView::new(RevealSequence::new(n), None, false);
        assert_eq!(bar_fill(&reveal, child_category(0), 0, 4), 0.0);
    }

    #[test]
    fn test_bar_fill_settles_at_one() {
        let content = Content::embedded().unwrap();
        let n = child_count(&content);
        let reveal = RevealView::new(
            RevealSequence::new(n),
            Some(Duration::from_secs(60)),
            false,
        );
        assert_eq!(bar_fill(&reveal, child_category(0), 3, 4), 1.0);
    }
}
