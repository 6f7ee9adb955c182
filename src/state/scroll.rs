//! Scroll position and normalized page progress.
//!
//! The page is a fixed-height stack of rows viewed through the
//! terminal window. Input moves a target offset; a spring chases it so
//! the displayed position glides instead of stepping. Progress is the
//! target offset normalized against the maximum scrollable distance,
//! clamped to [0,1] whatever the inputs do.

use crate::motion::Spring;

/// Scroll model for the virtual page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    target: f32,
    spring: Spring,
    content_height: u16,
    viewport_height: u16,
}

impl ScrollState {
    /// Creates a scroll state at the top of a page of `content_height`
    /// rows seen through `viewport_height` rows.
    #[must_use]
    pub const fn new(content_height: u16, viewport_height: u16) -> Self {
        Self {
            target: 0.0,
            spring: Spring::new(0.0),
            content_height,
            viewport_height,
        }
    }

    /// Maximum scrollable offset in rows.
    #[must_use]
    pub const fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Updates the page and viewport dimensions (resize, content
    /// reflow) and clamps the target into the new range.
    pub fn set_extents(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.target = self.target.clamp(0.0, f32::from(self.max_offset()));
    }

    /// Viewport height in rows.
    #[must_use]
    pub const fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Moves the target by `delta` rows (negative scrolls up).
    pub fn scroll_by(&mut self, delta: i32) {
        let next = self.target + delta as f32;
        self.target = next.clamp(0.0, f32::from(self.max_offset()));
    }

    /// Jumps the target to an absolute row (section anchor). The
    /// animated offset glides there over the following ticks.
    pub fn scroll_to(&mut self, row: u16) {
        self.target = f32::from(row.min(self.max_offset()));
    }

    /// Target offset in rows.
    #[must_use]
    pub const fn target(&self) -> f32 {
        self.target
    }

    /// Animated offset as displayed this frame, rounded to a row.
    #[must_use]
    pub fn offset_rows(&self) -> u16 {
        let max = f32::from(self.max_offset());
        self.spring.value().clamp(0.0, max).round() as u16
    }

    /// Raw normalized progress: target ÷ maximum offset, clamped to
    /// [0,1]. A page that fits entirely in the viewport reads as fully
    /// scrolled.
    #[must_use]
    pub fn raw_progress(&self) -> f32 {
        let max = f32::from(self.max_offset());
        if max <= 0.0 {
            return 1.0;
        }
        (self.target / max).clamp(0.0, 1.0)
    }

    /// Spring-smoothed progress, for display.
    #[must_use]
    pub fn smoothed_progress(&self) -> f32 {
        let max = f32::from(self.max_offset());
        if max <= 0.0 {
            return 1.0;
        }
        (self.spring.value() / max).clamp(0.0, 1.0)
    }

    /// Advances the animated offset toward the target by `dt` seconds.
    /// Returns true while still gliding.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.spring.step(self.target, dt);
        !self.spring.at_rest(self.target)
    }

    /// Snaps the animated offset onto the target (reduced motion).
    pub const fn settle(&mut self) {
        self.spring.snap_to(self.target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_top_with_zero_progress() {
        let scroll = ScrollState::new(200, 40);
        assert_eq!(scroll.offset_rows(), 0);
        assert_eq!(scroll.raw_progress(), 0.0);
    }

    #[test]
    fn test_progress_is_clamped_under_overshoot() {
        let mut scroll = ScrollState::new(100, 40);
        scroll.scroll_by(100_000);
        assert_eq!(scroll.raw_progress(), 1.0);

        scroll.scroll_by(-100_000);
        assert_eq!(scroll.raw_progress(), 0.0);
    }

    #[test]
    fn test_progress_monotonic_for_increasing_offsets() {
        let mut scroll = ScrollState::new(300, 40);
        let mut prev = scroll.raw_progress();
        for _ in 0..100 {
            scroll.scroll_by(5);
            let p = scroll.raw_progress();
            assert!(p >= prev, "progress decreased while scrolling down");
            assert!((0.0..=1.0).contains(&p));
            prev = p;
        }
        assert_eq!(prev, 1.0);
    }

    #[test]
    fn test_short_page_reads_fully_scrolled() {
        let scroll = ScrollState::new(20, 40);
        assert_eq!(scroll.max_offset(), 0);
        assert_eq!(scroll.raw_progress(), 1.0);
        assert_eq!(scroll.smoothed_progress(), 1.0);
    }

    #[test]
    fn test_scroll_to_clamps_to_max() {
        let mut scroll = ScrollState::new(100, 40);
        scroll.scroll_to(500);
        assert_eq!(scroll.target(), 60.0);
    }

    #[test]
    fn test_animated_offset_glides_to_target() {
        let mut scroll = ScrollState::new(200, 40);
        scroll.scroll_to(100);
        assert_eq!(scroll.offset_rows(), 0, "offset must not jump");

        let mut ticks = 0;
        while scroll.tick(0.016) && ticks < 2000 {
            ticks += 1;
        }
        assert_eq!(scroll.offset_rows(), 100);
        assert!(ticks > 0, "glide should take at least one tick");
    }

    #[test]
    fn test_resize_clamps_target() {
        let mut scroll = ScrollState::new(200, 40);
        scroll.scroll_to(160);
        // Viewport grows; max offset shrinks below the old target
        scroll.set_extents(200, 100);
        assert!(scroll.target() <= f32::from(scroll.max_offset()));
    }

    #[test]
    fn test_settle_snaps_display_onto_target() {
        let mut scroll = ScrollState::new(200, 40);
        scroll.scroll_to(80);
        scroll.settle();
        assert_eq!(scroll.offset_rows(), 80);
        assert!(!scroll.tick(0.016));
    }
}
