//! Navigation menu input handler.

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::tui::{AppState, Component, MenuEvent};

/// Handle input while the menu overlay is open.
pub fn handle_menu_input(state: &mut AppState, key: KeyEvent) -> Result<()> {
    let Some(menu) = state.menu.current_mut() else {
        return Ok(());
    };

    let Some(event) = menu.handle_input(key, &state.content) else {
        return Ok(());
    };

    match event {
        MenuEvent::Jump(section) => {
            state.jump_to_section(section);
            state.menu.close();
        }
        MenuEvent::ToggleTheme => state.toggle_display_mode(),
        MenuEvent::Close => state.menu.close(),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::content::Content;
    use crate::tui::SectionId;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_state() -> AppState {
        let mut state = AppState::new(Config::new(), Content::embedded().unwrap());
        state.tick(std::time::Instant::now(), 0.016, 100, 30);
        state.toggle_menu();
        state
    }

    #[test]
    fn test_enter_jumps_and_closes() {
        let mut state = test_state();
        handle_menu_input(&mut state, key(KeyCode::Enter)).unwrap();

        assert!(!state.menu.is_open());
        let about_top = state.layout.extent(SectionId::About).top;
        assert_eq!(
            state.scroll.target(),
            f32::from(about_top.min(state.scroll.max_offset()))
        );
    }

    #[test]
    fn test_escape_closes_without_jumping() {
        let mut state = test_state();
        handle_menu_input(&mut state, key(KeyCode::Esc)).unwrap();
        assert!(!state.menu.is_open());
        assert_eq!(state.scroll.target(), 0.0);
    }

    #[test]
    fn test_menu_does_not_touch_modal_group() {
        let mut state = test_state();
        state.open_project(0);
        handle_menu_input(&mut state, key(KeyCode::Esc)).unwrap();
        assert!(state.project_modal.is_open());
    }
}
