//! Navigation menu overlay.
//!
//! A compact anchor list dropped over the top-right of the page. It
//! owns only its cursor; opening and closing live in the parent's
//! menu selection group.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::content::Content;
use crate::tui::component::Component;
use crate::tui::page::SectionId;
use crate::tui::Theme;

/// Width of the menu box in columns.
const MENU_WIDTH: u16 = 26;

/// Events emitted by the menu overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Jump the page to a section anchor (and close the menu)
    Jump(SectionId),
    /// Toggle the display mode
    ToggleTheme,
    /// Close without jumping
    Close,
}

/// Menu overlay component state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuOverlay {
    highlighted: usize,
}

impl MenuOverlay {
    /// Creates a menu with the cursor on the first anchor.
    #[must_use]
    pub const fn new() -> Self {
        Self { highlighted: 0 }
    }

    /// The anchors the menu lists, in page order.
    #[must_use]
    pub fn anchors() -> Vec<SectionId> {
        SectionId::ALL
            .into_iter()
            .filter(|id| id.anchor_label().is_some())
            .collect()
    }

    /// The rect the menu occupies for a given frame area.
    ///
    /// Pure, so the mouse handler can recompute it for click
    /// containment.
    #[must_use]
    pub fn area(frame_area: Rect) -> Rect {
        let height = (Self::anchors().len() as u16 + 3).min(frame_area.height);
        let width = MENU_WIDTH.min(frame_area.width);
        Rect {
            x: frame_area.width.saturating_sub(width + 1),
            y: frame_area.y + 1,
            width,
            height,
        }
    }

    /// The anchor under an absolute screen row, given the frame area.
    #[must_use]
    pub fn anchor_at(frame_area: Rect, y: u16) -> Option<SectionId> {
        let area = Self::area(frame_area);
        // First anchor sits one row below the top border
        let first = area.y + 1;
        let anchors = Self::anchors();
        if y < first {
            return None;
        }
        anchors.get((y - first) as usize).copied()
    }
}

impl Component for MenuOverlay {
    type Event = MenuEvent;

    fn handle_input(&mut self, key: KeyEvent, _content: &Content) -> Option<Self::Event> {
        let anchors = Self::anchors();
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => Some(MenuEvent::Close),
            KeyCode::Char('t') => Some(MenuEvent::ToggleTheme),
            KeyCode::Up | KeyCode::Char('k') => {
                self.highlighted = self
                    .highlighted
                    .checked_sub(1)
                    .unwrap_or(anchors.len().saturating_sub(1));
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.highlighted = (self.highlighted + 1) % anchors.len().max(1);
                None
            }
            KeyCode::Enter => anchors.get(self.highlighted).copied().map(MenuEvent::Jump),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, _content: &Content) {
        let menu_area = Self::area(area);
        f.render_widget(Clear, menu_area);

        let mut rows: Vec<Line<'static>> = Vec::new();
        for (i, id) in Self::anchors().into_iter().enumerate() {
            let label = id.anchor_label().unwrap_or_default();
            let style = if i == self.highlighted {
                Style::default()
                    .fg(theme.accent)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            rows.push(Line::from(vec![
                Span::styled(if i == self.highlighted { " > " } else { "   " }, style),
                Span::styled(label.to_string(), style),
            ]));
        }
        rows.push(Line::from(Span::styled(
            "   t theme  Esc close",
            Style::default().fg(theme.text_muted),
        )));

        let menu = Paragraph::new(rows)
            .style(Style::default().bg(theme.surface))
            .block(
                Block::default()
                    .title(" Menu ")
                    .borders(Borders::ALL)
                    .style(Style::default().fg(theme.primary).bg(theme.surface)),
            );
        f.render_widget(menu, menu_area);
    }
}
