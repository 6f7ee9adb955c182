//! Project modal input handler.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::{AppState, Component, ModalEvent};

/// Handle input while the project modal is open.
pub fn handle_modal_input(state: &mut AppState, key: KeyEvent) -> Result<()> {
    // The menu is reachable above the modal; groups stay independent.
    if key.code == KeyCode::Char('m') {
        state.toggle_menu();
        return Ok(());
    }

    let Some(modal) = state.project_modal.current_mut() else {
        return Ok(());
    };

    let Some(event) = modal.handle_input(key, &state.content) else {
        return Ok(());
    };

    match event {
        ModalEvent::Close => state.close_project(),
        ModalEvent::CopyRepoUrl => {
            let url = state
                .project_modal
                .current()
                .and_then(|m| m.project(&state.content))
                .and_then(|p| p.repo_url.clone());
            match url {
                Some(url) => state.copy_to_clipboard("Source URL", &url),
                None => state.set_status("This project has no source URL"),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::content::Content;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_state() -> AppState {
        let mut state = AppState::new(Config::new(), Content::embedded().unwrap());
        state.tick(std::time::Instant::now(), 0.016, 100, 30);
        state.open_project(0);
        state
    }

    #[test]
    fn test_escape_closes_modal() {
        let mut state = test_state();
        handle_modal_input(&mut state, key(KeyCode::Esc)).unwrap();
        assert!(!state.project_modal.is_open());
    }

    #[test]
    fn test_m_opens_menu_while_modal_stays_open() {
        let mut state = test_state();
        handle_modal_input(&mut state, key(KeyCode::Char('m'))).unwrap();
        assert!(state.menu.is_open());
        assert!(state.project_modal.is_open());
    }

    #[test]
    fn test_scroll_keys_stay_inside_the_modal() {
        let mut state = test_state();
        handle_modal_input(&mut state, key(KeyCode::Char('j'))).unwrap();
        // The page scroll target is untouched; the keypress was
        // contained by the modal.
        assert_eq!(state.scroll.target(), 0.0);
        assert!(state.project_modal.is_open());
    }
}
