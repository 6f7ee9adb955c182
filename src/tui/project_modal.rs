//! Project detail modal.
//!
//! Opened from the showcase list, floats over the page, and scrolls
//! internally. The parent owns the open/closed selection group; a
//! click inside the modal is contained here and never reaches the
//! outside-click handler.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::content::{Content, Project};
use crate::tui::component::{centered_rect, Component};
use crate::tui::page::wrap_text;
use crate::tui::Theme;

/// Events emitted by the project modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    /// Close the modal
    Close,
    /// Copy the project's repository URL to the clipboard
    CopyRepoUrl,
}

/// Project modal component state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectModal {
    /// Index into the featured project list
    pub project_index: usize,
    scroll: u16,
}

impl ProjectModal {
    /// Creates a modal showing the featured project at `project_index`.
    #[must_use]
    pub const fn new(project_index: usize) -> Self {
        Self {
            project_index,
            scroll: 0,
        }
    }

    /// The rect the modal occupies for a given frame area.
    ///
    /// Pure, so the mouse handler can recompute it for outside-click
    /// detection.
    #[must_use]
    pub fn area(frame_area: Rect) -> Rect {
        centered_rect(78, 80, frame_area)
    }

    /// The project this modal shows.
    #[must_use]
    pub fn project<'a>(&self, content: &'a Content) -> Option<&'a Project> {
        content.featured_projects().get(self.project_index).copied()
    }

    fn body(project: &Project, theme: &Theme, width: u16) -> Vec<Line<'static>> {
        let text_width = width.saturating_sub(6);
        let mut rows: Vec<Line<'static>> = Vec::new();

        rows.push(Line::from(Span::styled(
            project.description.clone(),
            Style::default().fg(theme.text_secondary),
        )));
        rows.push(Line::default());

        for (title, body) in [("Problem", &project.problem), ("Solution", &project.solution)] {
            rows.push(Line::from(vec![
                Span::styled("\u{25cf} ", Style::default().fg(project.accent.to_color())),
                Span::styled(
                    title.to_string(),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
            ]));
            for wrapped in wrap_text(body, text_width) {
                rows.push(Line::from(Span::styled(
                    format!("  {wrapped}"),
                    Style::default().fg(theme.text_secondary),
                )));
            }
            rows.push(Line::default());
        }

        rows.push(Line::from(Span::styled(
            "Tech Stack",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )));
        for wrapped in wrap_text(&project.tech.join("  \u{00b7}  "), text_width) {
            rows.push(Line::from(Span::styled(
                format!("  {wrapped}"),
                Style::default().fg(theme.accent),
            )));
        }
        rows.push(Line::default());

        rows.push(Line::from(Span::styled(
            "Impact & Metrics",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )));
        for metric in &project.metrics {
            rows.push(Line::from(vec![
                Span::styled("  \u{2713} ", Style::default().fg(theme.success)),
                Span::styled(metric.clone(), Style::default().fg(theme.text)),
            ]));
        }
        rows.push(Line::default());

        if let Some(url) = &project.demo_url {
            rows.push(Line::from(vec![
                Span::styled("  Demo    ", Style::default().fg(theme.text_muted)),
                Span::styled(url.clone(), Style::default().fg(theme.primary)),
            ]));
        }
        if let Some(url) = &project.repo_url {
            rows.push(Line::from(vec![
                Span::styled("  Source  ", Style::default().fg(theme.text_muted)),
                Span::styled(url.clone(), Style::default().fg(theme.primary)),
            ]));
        }

        rows
    }
}

impl Component for ProjectModal {
    type Event = ModalEvent;

    fn handle_input(&mut self, key: KeyEvent, _content: &Content) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('x' | 'q') => Some(ModalEvent::Close),
            KeyCode::Char('y') => Some(ModalEvent::CopyRepoUrl),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, content: &Content) {
        let Some(project) = self.project(content) else {
            return;
        };

        let modal_area = Self::area(area);
        f.render_widget(Clear, modal_area);

        let body = Self::body(project, theme, modal_area.width);
        // Keep the last body row reachable when scrolled to the end
        let max_scroll = (body.len() as u16).saturating_sub(modal_area.height.saturating_sub(2));
        let scroll = self.scroll.min(max_scroll);

        let modal = Paragraph::new(body)
            .scroll((scroll, 0))
            .style(Style::default().bg(theme.surface))
            .block(
                Block::default()
                    .title(format!(" {} ", project.title))
                    .title_bottom(" j/k scroll \u{00b7} y copy source url \u{00b7} Esc close ")
                    .borders(Borders::ALL)
                    .style(
                        Style::default()
                            .fg(project.accent.to_color())
                            .bg(theme.surface),
                    ),
            );
        f.render_widget(modal, modal_area);
    }
}
