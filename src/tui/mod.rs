//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui. The page is rendered as one list
//! of rows scrolled by offset; overlays (menu, project modal) float on
//! top and are owned by independent selection groups.

pub mod component;
pub mod handlers;
pub mod menu_overlay;
pub mod page;
pub mod project_modal;
pub mod sections;
pub mod starfield;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::constants::TICK_MS;
use crate::content::Content;
use crate::motion::{intersection_ratio, RevealSequence, SectionVisibility, TimerQueue};
use crate::state::{ContactForm, FormTimer, ScrollState, Selection, SubmitOutcome};

pub use component::Component;
pub use menu_overlay::{MenuEvent, MenuOverlay};
pub use page::{PageLayout, RevealView, SectionId};
pub use project_modal::{ModalEvent, ProjectModal};
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Rows of fixed chrome above the scrolled page.
const TITLE_ROWS: u16 = 2;

/// Entrance animation state for one page section.
#[derive(Debug, Clone, Copy)]
pub struct SectionReveal {
    /// Which section
    pub id: SectionId,
    /// One-shot visibility latch gating the entrance
    pub visibility: SectionVisibility,
    /// Stagger schedule for the section's children
    pub sequence: RevealSequence,
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Portfolio content being presented
    pub content: Content,
    /// Application configuration
    pub config: Config,

    // UI state
    /// Current UI theme (derived from the display-mode preference)
    pub theme: Theme,
    /// Scroll position and page progress
    pub scroll: ScrollState,
    /// Row layout of the page at the current width
    pub layout: PageLayout,
    /// Per-section entrance state, in page order
    pub reveals: Vec<SectionReveal>,
    /// Navigation menu selection group
    pub menu: Selection<MenuOverlay>,
    /// Project modal selection group (independent of the menu)
    pub project_modal: Selection<ProjectModal>,
    /// Keyboard cursor in the project list
    pub highlighted_project: usize,
    /// Contact form state
    pub form: ContactForm,
    /// Whether keystrokes go into the contact form
    pub form_focused: bool,
    /// Status bar message
    pub status_message: String,

    // Scheduling
    /// Deferred form events (simulated round trip, acknowledgement)
    pub timers: TimerQueue<FormTimer>,
    /// Animation frame counter, drives the decorative starfield
    pub frame: u64,
    /// Timestamp of the current tick
    pub now: Instant,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState` from config and content.
    #[must_use]
    pub fn new(config: Config, content: Content) -> Self {
        let now = Instant::now();
        let theme = Theme::from_mode(config.ui.display_mode);
        let layout = page::compute_layout(&content, 80);
        let scroll = ScrollState::new(layout.total_height(), 24);

        let mut reveals = vec![
            SectionReveal {
                id: SectionId::Hero,
                visibility: SectionVisibility::new(SectionId::Hero.reveal_threshold()),
                sequence: RevealSequence::new(sections::hero::CHILD_COUNT),
            },
            SectionReveal {
                id: SectionId::About,
                visibility: SectionVisibility::new(SectionId::About.reveal_threshold()),
                sequence: RevealSequence::new(sections::about::child_count(&content)),
            },
            SectionReveal {
                id: SectionId::Projects,
                visibility: SectionVisibility::new(SectionId::Projects.reveal_threshold()),
                sequence: RevealSequence::new(sections::projects::child_count(&content)),
            },
            SectionReveal {
                id: SectionId::Contact,
                visibility: SectionVisibility::new(SectionId::Contact.reveal_threshold()),
                sequence: RevealSequence::new(sections::contact::CHILD_COUNT),
            },
            SectionReveal {
                id: SectionId::Footer,
                visibility: SectionVisibility::new(SectionId::Footer.reveal_threshold()),
                sequence: RevealSequence::new(0),
            },
        ];

        // Every section starts observing at page load
        for reveal in &mut reveals {
            reveal.visibility.observe();
            if config.ui.reduce_motion {
                reveal.visibility.force_trigger(now);
            }
        }

        Self {
            content,
            config,
            theme,
            scroll,
            layout,
            reveals,
            menu: Selection::new(),
            project_modal: Selection::new(),
            highlighted_project: 0,
            form: ContactForm::new(),
            form_focused: false,
            status_message: "Welcome! Scroll with j/k, open the menu with m".to_string(),
            timers: TimerQueue::new(),
            frame: 0,
            now,
            should_quit: false,
        }
    }

    /// Advances one tick: reflows the layout for the current terminal
    /// size, glides the scroll spring, feeds the visibility latches,
    /// and delivers due timers.
    pub fn tick(&mut self, now: Instant, dt: f32, width: u16, viewport_height: u16) {
        self.now = now;
        self.frame += 1;

        self.layout = page::compute_layout(&self.content, width);
        self.scroll
            .set_extents(self.layout.total_height(), viewport_height);
        if self.config.ui.reduce_motion {
            self.scroll.settle();
        } else {
            self.scroll.tick(dt);
        }

        let view_top = self.scroll.offset_rows();
        for reveal in &mut self.reveals {
            let extent = self.layout.extent(reveal.id);
            let ratio =
                intersection_ratio(extent.top, extent.height, view_top, viewport_height);
            if reveal.visibility.update(ratio, now) {
                tracing::debug!(section = ?reveal.id, "section entrance triggered");
            }
        }

        // The shipped transport always delivers; the failure leg of
        // the form lifecycle is reachable only through tests.
        for event in self.timers.drain_due(now) {
            self.form
                .handle_timer(event, SubmitOutcome::Delivered, &mut self.timers, now);
        }
    }

    /// The animation readout for one section at the current tick.
    #[must_use]
    pub fn reveal_view(&self, id: SectionId) -> RevealView {
        let reveal = self
            .reveals
            .iter()
            .find(|r| r.id == id)
            .copied()
            .unwrap_or(SectionReveal {
                id,
                visibility: SectionVisibility::new(id.reveal_threshold()),
                sequence: RevealSequence::new(0),
            });
        let elapsed = reveal
            .visibility
            .triggered_at()
            .map(|t| self.now.duration_since(t));
        RevealView::new(reveal.sequence, elapsed, self.config.ui.reduce_motion)
    }

    /// Toggles the display mode, persists it, and swaps the palette.
    pub fn toggle_display_mode(&mut self) {
        let mode = self.config.ui.display_mode.toggled();
        self.config.set_display_mode(mode);
        self.theme = Theme::from_mode(mode);
        self.set_status(format!("Switched to {mode:?} mode"));
    }

    /// Jumps the scroll target to a section top. The spring glides
    /// the view there over the following ticks.
    pub fn jump_to_section(&mut self, id: SectionId) {
        let top = self.layout.extent(id).top;
        self.scroll.scroll_to(top);
    }

    /// Opens the project modal for a featured project index,
    /// replacing whatever it showed before.
    pub fn open_project(&mut self, index: usize) {
        if index < self.content.featured_projects().len() {
            self.highlighted_project = index;
            self.project_modal.open(ProjectModal::new(index));
        }
    }

    /// Closes the project modal.
    pub fn close_project(&mut self) {
        self.project_modal.close();
    }

    /// Opens or closes the navigation menu.
    pub fn toggle_menu(&mut self) {
        if self.menu.is_open() {
            self.menu.close();
        } else {
            self.menu.open(MenuOverlay::new());
        }
    }

    /// Copies text to the system clipboard, reporting via the status
    /// bar either way.
    pub fn copy_to_clipboard(&mut self, label: &str, text: &str) {
        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text.to_string())) {
            Ok(()) => self.set_status(format!("{label} copied to clipboard")),
            Err(e) => {
                tracing::warn!("clipboard unavailable: {e}");
                self.set_status("Clipboard unavailable");
            }
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Cancels everything in flight before the terminal is restored.
    ///
    /// A timer scheduled by this session must never fire into a
    /// discarded state.
    pub fn teardown(&mut self) {
        self.form.reset(&mut self.timers);
        self.timers.clear();
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Splits the frame into title bar, page viewport, and status bar.
pub(crate) fn chunk_areas(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_ROWS),
            Constraint::Min(5),
            Constraint::Length(StatusBar::HEIGHT),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let now = Instant::now();
        let dt = now.duration_since(last_tick).as_secs_f32();
        last_tick = now;

        let size = terminal.size().context("Failed to read terminal size")?;
        let viewport_height = size
            .height
            .saturating_sub(TITLE_ROWS + StatusBar::HEIGHT);
        state.tick(now, dt, size.width, viewport_height);

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with the tick timeout
        if event::poll(Duration::from_millis(TICK_MS))? {
            match event::read()? {
                Event::Key(key) => handlers::handle_key_event(state, key)?,
                Event::Mouse(mouse) => {
                    let area = Rect::new(0, 0, size.width, size.height);
                    handlers::handle_mouse_event(state, mouse, area);
                }
                // Terminal resized: next tick reflows the layout
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        // Check if should quit
        if state.should_quit {
            state.teardown();
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    // This ensures consistent background regardless of terminal settings
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let (title_area, page_area, status_area) = chunk_areas(f.area());

    render_title_bar(f, title_area, state);
    render_page(f, page_area, state);
    StatusBar::render(f, status_area, state, &state.theme);

    // Overlays float over the page. The menu draws above the modal;
    // input dispatch gives it the same priority.
    if let Some(modal) = state.project_modal.current() {
        modal.render(f, f.area(), &state.theme, &state.content);
    }
    if let Some(menu) = state.menu.current() {
        menu.render(f, f.area(), &state.theme, &state.content);
    }
}

/// Render title bar with the page progress indicator
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let progress = state.scroll.smoothed_progress();
    let percent = (progress * 100.0).round() as u16;

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", crate::constants::APP_NAME),
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("\u{00b7} {}", state.content.profile.name),
            Style::default().fg(state.theme.text_secondary),
        ),
    ]);
    let right = Span::styled(
        format!("{percent:>3}% \u{00b7} m menu "),
        Style::default().fg(state.theme.text_muted),
    );

    // Thin scroll-progress bar under the title, filled to the
    // spring-smoothed progress.
    let filled = (f32::from(area.width) * progress).round() as usize;
    let empty = (area.width as usize).saturating_sub(filled);
    let bar = Line::from(vec![
        Span::styled(
            "\u{2501}".repeat(filled),
            Style::default().fg(state.theme.accent),
        ),
        Span::styled(
            "\u{2501}".repeat(empty),
            Style::default().fg(state.theme.highlight_bg),
        ),
    ]);

    let widget = Paragraph::new(vec![title, bar])
        .style(Style::default().bg(state.theme.background));
    f.render_widget(widget, area);

    let right_width = 16u16.min(area.width);
    let right_area = Rect {
        x: area.x + area.width - right_width,
        y: area.y,
        width: right_width,
        height: 1,
    };
    f.render_widget(
        Paragraph::new(Line::from(right).right_aligned())
            .style(Style::default().bg(state.theme.background)),
        right_area,
    );
}

/// Render the scrolled page body
fn render_page(f: &mut Frame, area: Rect, state: &AppState) {
    let width = area.width;
    let mut rows: Vec<Line<'static>> = Vec::new();

    rows.extend(sections::hero::lines(
        &state.content,
        &state.theme,
        &state.reveal_view(SectionId::Hero),
        state.frame,
        width,
    ));
    rows.extend(sections::about::lines(
        &state.content,
        &state.theme,
        &state.reveal_view(SectionId::About),
        width,
    ));
    rows.extend(sections::projects::lines(
        &state.content,
        &state.theme,
        &state.reveal_view(SectionId::Projects),
        state.highlighted_project,
        width,
    ));
    rows.extend(sections::contact::lines(
        &state.content,
        &state.theme,
        &state.reveal_view(SectionId::Contact),
        &state.form,
        state.form_focused,
        width,
    ));
    rows.extend(sections::footer::lines(&state.content, &state.theme, width));

    let page = Paragraph::new(Text::from(rows))
        .scroll((state.scroll.offset_rows(), 0))
        .style(Style::default().bg(state.theme.background));
    f.render_widget(page, area);
}
