//! Contact form input handler.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::AppState;

/// Handle input while the contact form has focus.
pub fn handle_form_input(state: &mut AppState, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            state.form_focused = false;
            state.set_status("Left the contact form");
        }

        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if state.form.submit(&mut state.timers, state.now) {
                state.set_status("Sending message...");
            } else if !state.form.is_complete() {
                state.set_status("All fields are required");
            }
        }

        KeyCode::Tab | KeyCode::Enter | KeyCode::Down => state.form.next_field(),
        KeyCode::BackTab | KeyCode::Up => state.form.previous_field(),

        KeyCode::Backspace => {
            if state.form.is_editable() {
                state.form.active_field_mut().pop();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if state.form.is_editable() {
                state.form.active_field_mut().push(c);
            }
        }

        _ => {}
    }
    Ok(())
}
