//! End-to-end tests of the view-state model: theme toggling, the
//! one-shot section latches, selection group semantics, scroll
//! progress, and click containment — all driven through the public
//! app-state API the way the event loop drives it.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use termfolio::config::{Config, DisplayMode};
use termfolio::content::Content;
use termfolio::tui::handlers::{handle_key_event, handle_mouse_event};
use termfolio::tui::{AppState, ProjectModal, SectionId};

const WIDTH: u16 = 100;
const VIEWPORT: u16 = 30;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(x: u16, y: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    }
}

fn frame_area() -> Rect {
    Rect::new(0, 0, WIDTH, VIEWPORT + 5)
}

fn new_state() -> AppState {
    let mut state = AppState::new(Config::new(), Content::embedded().unwrap());
    state.tick(Instant::now(), 0.016, WIDTH, VIEWPORT);
    state
}

#[test]
fn toggle_sequences_always_read_back_the_set_mode() {
    let mut state = new_state();
    assert_eq!(state.config.ui.display_mode, DisplayMode::Dark);

    let mut expected = DisplayMode::Dark;
    for _ in 0..5 {
        state.toggle_display_mode();
        expected = expected.toggled();
        // get() immediately after set(m) returns m
        assert_eq!(state.config.ui.display_mode, expected);
    }
}

#[test]
fn visibility_latch_survives_scrolling_back_out() {
    let mut state = new_state();
    let t0 = Instant::now();

    // Scroll until the about section is well inside the viewport
    let about_top = state.layout.extent(SectionId::About).top;
    state.scroll.scroll_to(about_top);
    state.scroll.settle();
    state.tick(t0 + Duration::from_millis(100), 0.016, WIDTH, VIEWPORT);

    let triggered = |state: &AppState| {
        state
            .reveals
            .iter()
            .find(|r| r.id == SectionId::About)
            .unwrap()
            .visibility
            .is_triggered()
    };
    assert!(triggered(&state));

    // Scroll back to the top and keep ticking: the latch never reverts
    state.scroll.scroll_to(0);
    state.scroll.settle();
    for i in 0..20 {
        state.tick(
            t0 + Duration::from_millis(200 + i * 33),
            0.033,
            WIDTH,
            VIEWPORT,
        );
    }
    assert!(triggered(&state));
}

#[test]
fn menu_and_project_groups_are_independent() {
    let mut state = new_state();

    // open(menu) then open(projectA)
    handle_key_event(&mut state, key(KeyCode::Char('m'))).unwrap();
    assert!(state.menu.is_open());

    state.open_project(0);
    assert!(state.menu.is_open(), "opening a project must not close the menu");
    assert_eq!(
        state.project_modal.current().map(|m| m.project_index),
        Some(0)
    );
}

#[test]
fn opening_a_second_project_replaces_the_first() {
    let mut state = new_state();
    state.open_project(0);
    state.open_project(1);
    assert_eq!(
        state.project_modal.current().map(|m| m.project_index),
        Some(1)
    );

    // One close empties the group
    state.close_project();
    assert!(!state.project_modal.is_open());
}

#[test]
fn number_keys_open_projects_through_the_event_path() {
    let mut state = new_state();
    handle_key_event(&mut state, key(KeyCode::Char('1'))).unwrap();
    assert_eq!(
        state.project_modal.current().map(|m| m.project_index),
        Some(0)
    );

    // Esc through the modal handler closes it
    handle_key_event(&mut state, key(KeyCode::Esc)).unwrap();
    assert!(!state.project_modal.is_open());
}

#[test]
fn reveal_children_begin_in_declaration_order() {
    let mut state = new_state();
    let t0 = Instant::now();
    state.tick(t0, 0.016, WIDTH, VIEWPORT);

    // Sample the hero reveal at many instants; child i must never be
    // ahead of child i-1's start.
    for ms in (0..2500).step_by(33) {
        state.tick(t0 + Duration::from_millis(ms as u64), 0.033, WIDTH, VIEWPORT);
        let view = state.reveal_view(SectionId::Hero);
        for i in 1..termfolio::tui::sections::hero::CHILD_COUNT {
            if view.progress(i) > 0.0 {
                assert!(
                    view.progress(i - 1) > 0.0,
                    "child {i} started before child {} at {ms}ms",
                    i - 1
                );
            }
        }
    }
}

#[test]
fn scroll_progress_is_monotonic_and_clamped() {
    let mut state = new_state();

    let mut prev = state.scroll.raw_progress();
    assert_eq!(prev, 0.0);

    for _ in 0..500 {
        state.scroll.scroll_by(3);
        let p = state.scroll.raw_progress();
        assert!((0.0..=1.0).contains(&p));
        assert!(p >= prev);
        prev = p;
    }
    assert_eq!(prev, 1.0);

    // Overshoot far past the end and before the start
    state.scroll.scroll_by(i32::MAX / 2);
    assert_eq!(state.scroll.raw_progress(), 1.0);
    state.scroll.scroll_by(i32::MIN / 2);
    assert_eq!(state.scroll.raw_progress(), 0.0);
}

#[test]
fn modal_closes_on_outside_click_and_explicit_close_only() {
    let area = frame_area();

    // Outside click closes
    let mut state = new_state();
    state.open_project(0);
    let modal_area = ProjectModal::area(area);
    handle_mouse_event(&mut state, click(modal_area.x - 1, modal_area.y), area);
    assert!(!state.project_modal.is_open());

    // Inside click is contained
    let mut state = new_state();
    state.open_project(0);
    handle_mouse_event(
        &mut state,
        click(modal_area.x + 3, modal_area.y + 3),
        area,
    );
    assert!(state.project_modal.is_open());

    // Explicit close key closes
    handle_key_event(&mut state, key(KeyCode::Char('x'))).unwrap();
    assert!(!state.project_modal.is_open());
}

#[test]
fn menu_jump_moves_the_scroll_target_to_the_section_top() {
    let mut state = new_state();
    handle_key_event(&mut state, key(KeyCode::Char('m'))).unwrap();

    // Highlight "Projects" (second anchor) and jump
    handle_key_event(&mut state, key(KeyCode::Char('j'))).unwrap();
    handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();

    assert!(!state.menu.is_open());
    let expected = state
        .layout
        .extent(SectionId::Projects)
        .top
        .min(state.scroll.max_offset());
    assert_eq!(state.scroll.target(), f32::from(expected));

    // The displayed offset glides there rather than jumping
    assert_eq!(state.scroll.offset_rows(), 0);
    let t0 = Instant::now();
    for i in 1..400 {
        state.tick(t0 + Duration::from_millis(i * 16), 0.016, WIDTH, VIEWPORT);
    }
    assert_eq!(state.scroll.offset_rows(), expected);
}

#[test]
fn reduced_motion_renders_everything_settled_immediately() {
    let mut config = Config::new();
    config.ui.reduce_motion = true;
    let mut state = AppState::new(config, Content::embedded().unwrap());
    state.tick(Instant::now(), 0.016, WIDTH, VIEWPORT);

    for id in SectionId::ALL {
        let view = state.reveal_view(id);
        assert_eq!(view.progress(0), 1.0);
    }
}
