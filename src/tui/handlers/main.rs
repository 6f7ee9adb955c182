//! Page-level input handler.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::{AppState, SectionId};

/// Rows scrolled per j/k press.
const LINE_SCROLL: i32 = 2;

/// Handle input for the page (no overlay focused).
pub fn handle_main_input(state: &mut AppState, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.should_quit = true;
        }

        KeyCode::Char('t') => state.toggle_display_mode(),
        KeyCode::Char('m') => state.toggle_menu(),

        // Scrolling
        KeyCode::Char('j') | KeyCode::Down => state.scroll.scroll_by(LINE_SCROLL),
        KeyCode::Char('k') | KeyCode::Up => state.scroll.scroll_by(-LINE_SCROLL),
        KeyCode::PageDown | KeyCode::Char(' ') => {
            state.scroll.scroll_by(i32::from(state.scroll.viewport_height()));
        }
        KeyCode::PageUp => {
            state.scroll.scroll_by(-i32::from(state.scroll.viewport_height()));
        }
        KeyCode::Char('g') | KeyCode::Home => state.scroll.scroll_to(0),
        KeyCode::Char('G') | KeyCode::End => state.scroll.scroll_to(u16::MAX),

        // Section anchors
        KeyCode::Char('a') => state.jump_to_section(SectionId::About),
        KeyCode::Char('p') => state.jump_to_section(SectionId::Projects),
        KeyCode::Char('c') => state.jump_to_section(SectionId::Contact),

        // Contact form
        KeyCode::Char('e') => {
            state.jump_to_section(SectionId::Contact);
            state.form_focused = true;
            state.set_status("Editing the contact form");
        }
        KeyCode::Char('y') => {
            let email = state.content.profile.email.clone();
            state.copy_to_clipboard("Email address", &email);
        }

        // Project list
        KeyCode::Tab => {
            let count = state.content.featured_projects().len();
            if count > 0 {
                state.highlighted_project = (state.highlighted_project + 1) % count;
                state.jump_to_section(SectionId::Projects);
            }
        }
        KeyCode::Enter => {
            state.open_project(state.highlighted_project);
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if index < state.content.featured_projects().len() {
                state.open_project(index);
            }
        }

        // No action mapped - ignore key
        _ => {}
    }
    Ok(())
}
