//! Mouse input handling (wheel scrolling and click containment).

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::tui::component::rect_contains;
use crate::tui::page::SectionId;
use crate::tui::sections::projects;
use crate::tui::{AppState, MenuOverlay, ProjectModal};

/// Rows scrolled per wheel notch.
const WHEEL_SCROLL: i32 = 3;

/// Handle a mouse event.
///
/// Handles wheel scrolling, left-click selection in the menu and the
/// project list, and "click outside to close" for both overlays. A
/// click inside an open overlay is contained there and never falls
/// through to the page.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent, frame_area: Rect) {
    match mouse.kind {
        MouseEventKind::ScrollDown => state.scroll.scroll_by(WHEEL_SCROLL),
        MouseEventKind::ScrollUp => state.scroll.scroll_by(-WHEEL_SCROLL),
        MouseEventKind::Down(MouseButton::Left) => {
            handle_left_click(state, mouse.column, mouse.row, frame_area);
        }
        _ => {}
    }
}

fn handle_left_click(state: &mut AppState, x: u16, y: u16, frame_area: Rect) {
    // The menu draws on top; it sees the click first.
    if state.menu.is_open() {
        let menu_area = MenuOverlay::area(frame_area);
        if rect_contains(menu_area, x, y) {
            if let Some(section) = MenuOverlay::anchor_at(frame_area, y) {
                state.jump_to_section(section);
                state.menu.close();
            }
            return;
        }
        // Closing the menu consumes the click; the modal group is
        // untouched.
        state.menu.close();
        return;
    }

    if state.project_modal.is_open() {
        let modal_area = ProjectModal::area(frame_area);
        if rect_contains(modal_area, x, y) {
            // Contained: clicks inside the modal never close it.
            return;
        }
        state.close_project();
        return;
    }

    // Click on a project card opens its modal
    let (_, page_area, _) = super::super::chunk_areas(frame_area);
    if !rect_contains(page_area, x, y) {
        return;
    }
    let page_row = (y - page_area.y) + state.scroll.offset_rows();
    if state.layout.section_at_row(page_row) == Some(SectionId::Projects) {
        let section_row = page_row - state.layout.extent(SectionId::Projects).top;
        if let Some(card) = projects::card_at(&state.content, section_row) {
            state.open_project(card);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::content::Content;
    use crossterm::event::KeyModifiers;

    const FRAME: Rect = Rect {
        x: 0,
        y: 0,
        width: 120,
        height: 40,
    };

    fn click(x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn wheel_down() -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn test_state() -> AppState {
        let mut state = AppState::new(Config::new(), Content::embedded().unwrap());
        state.tick(std::time::Instant::now(), 0.016, FRAME.width, 35);
        state
    }

    #[test]
    fn test_wheel_scrolls_the_page() {
        let mut state = test_state();
        handle_mouse_event(&mut state, wheel_down(), FRAME);
        assert_eq!(state.scroll.target(), f32::from(WHEEL_SCROLL as u16));
    }

    #[test]
    fn test_click_outside_modal_closes_it() {
        let mut state = test_state();
        state.open_project(0);

        let modal_area = ProjectModal::area(FRAME);
        // One column left of the modal's left edge
        handle_mouse_event(&mut state, click(modal_area.x.saturating_sub(1), modal_area.y), FRAME);
        assert!(!state.project_modal.is_open());
    }

    #[test]
    fn test_click_inside_modal_is_contained() {
        let mut state = test_state();
        state.open_project(0);

        let modal_area = ProjectModal::area(FRAME);
        handle_mouse_event(
            &mut state,
            click(modal_area.x + 2, modal_area.y + 2),
            FRAME,
        );
        assert!(state.project_modal.is_open(), "inside click must not close");
    }

    #[test]
    fn test_click_outside_menu_closes_it() {
        let mut state = test_state();
        state.toggle_menu();
        handle_mouse_event(&mut state, click(0, FRAME.height - 1), FRAME);
        assert!(!state.menu.is_open());
    }

    #[test]
    fn test_closing_menu_by_click_leaves_modal_open() {
        let mut state = test_state();
        state.open_project(0);
        state.toggle_menu();

        // Menu is on top; a click outside it closes only the menu.
        handle_mouse_event(&mut state, click(0, FRAME.height - 1), FRAME);
        assert!(!state.menu.is_open());
        assert!(state.project_modal.is_open());
    }
}
