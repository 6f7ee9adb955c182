//! Status bar widget showing contextual keys and status messages.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::state::SubmissionStatus;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Height of the status bar in rows.
    pub const HEIGHT: u16 = 3;

    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let keys = if state.form_focused {
            "Tab next field \u{00b7} Shift+Tab previous \u{00b7} Ctrl+S send \u{00b7} Esc done"
        } else if state.menu.is_open() {
            "j/k move \u{00b7} Enter jump \u{00b7} t theme \u{00b7} Esc close"
        } else if state.project_modal.is_open() {
            "j/k scroll \u{00b7} y copy source url \u{00b7} Esc close"
        } else {
            "j/k scroll \u{00b7} m menu \u{00b7} 1-9 project \u{00b7} e contact \u{00b7} t theme \u{00b7} q quit"
        };

        let status_style = match state.form.status() {
            SubmissionStatus::Success => Style::default().fg(theme.success),
            SubmissionStatus::Error => Style::default().fg(theme.error),
            SubmissionStatus::Pending => Style::default().fg(theme.warning),
            SubmissionStatus::Idle => Style::default().fg(theme.text_secondary),
        };

        let rows = vec![
            Line::from(Span::styled(
                state.status_message.clone(),
                status_style,
            )),
            Line::from(Span::styled(keys, Style::default().fg(theme.text_muted))),
        ];

        let bar = Paragraph::new(rows)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .style(Style::default().fg(theme.text_muted).bg(theme.background)),
            );
        f.render_widget(bar, area);
    }
}
