//! Input handler modules for the different TUI contexts.
//!
//! Dispatch order mirrors the visual stacking: a focused form captures
//! keystrokes first, then the menu overlay, then the project modal,
//! then the page itself. The menu and modal are independent groups;
//! both can be open at once, and keys go to whichever is on top.

pub mod contact;
pub mod main;
pub mod menu;
pub mod modal;
pub mod mouse;

use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::tui::AppState;

pub use mouse::handle_mouse_event;

/// Routes one key event to the active input context.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<()> {
    // Ignore key release/repeat events (reported on some platforms)
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if state.form_focused {
        contact::handle_form_input(state, key)
    } else if state.menu.is_open() {
        menu::handle_menu_input(state, key)
    } else if state.project_modal.is_open() {
        modal::handle_modal_input(state, key)
    } else {
        main::handle_main_input(state, key)
    }
}
