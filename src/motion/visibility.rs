//! One-shot section visibility latches.
//!
//! Each page section gates its entrance animation on "has this section
//! ever been sufficiently visible". The latch fires at most once: a
//! user scrolling a section in and out of view repeatedly does not
//! re-trigger its entrance.

use std::time::Instant;

/// Latch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Not yet observed
    Idle,
    /// Observed, waiting for the region to become visible enough
    Pending,
    /// Fired. Terminal state; never reverts.
    Triggered,
}

/// A one-shot visibility latch for a single tracked region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionVisibility {
    state: Visibility,
    threshold: f32,
    triggered_at: Option<Instant>,
}

impl SectionVisibility {
    /// Creates an idle latch that will fire once the visible fraction
    /// of its region reaches `threshold`.
    #[must_use]
    pub const fn new(threshold: f32) -> Self {
        Self {
            state: Visibility::Idle,
            threshold,
            triggered_at: None,
        }
    }

    /// Begins observing. Idle -> Pending; no effect in other states.
    pub fn observe(&mut self) {
        if self.state == Visibility::Idle {
            self.state = Visibility::Pending;
        }
    }

    /// Applies one visibility measurement.
    ///
    /// Pending -> Triggered the first time `ratio` reaches the
    /// threshold, recording `now` as the trigger instant. Triggered
    /// absorbs every later measurement, whatever the ratio. Returns
    /// true only on the firing transition.
    pub fn update(&mut self, ratio: f32, now: Instant) -> bool {
        if self.state == Visibility::Pending && ratio >= self.threshold {
            self.state = Visibility::Triggered;
            self.triggered_at = Some(now);
            return true;
        }
        false
    }

    /// Forces the latch into the triggered state (reduced motion).
    pub fn force_trigger(&mut self, now: Instant) {
        if self.state != Visibility::Triggered {
            self.state = Visibility::Triggered;
            self.triggered_at = Some(now);
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> Visibility {
        self.state
    }

    /// Whether the latch has fired.
    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.state == Visibility::Triggered
    }

    /// When the latch fired, if it has.
    #[must_use]
    pub const fn triggered_at(&self) -> Option<Instant> {
        self.triggered_at
    }
}

/// Fraction of a region visible inside a viewport, both expressed as
/// row ranges. Returns 0 for an empty region.
#[must_use]
pub fn intersection_ratio(
    region_top: u16,
    region_height: u16,
    view_top: u16,
    view_height: u16,
) -> f32 {
    if region_height == 0 {
        return 0.0;
    }

    let region_bottom = region_top.saturating_add(region_height);
    let view_bottom = view_top.saturating_add(view_height);

    let overlap_top = region_top.max(view_top);
    let overlap_bottom = region_bottom.min(view_bottom);
    let overlap = overlap_bottom.saturating_sub(overlap_top);

    f32::from(overlap) / f32::from(region_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_starts_idle() {
        let latch = SectionVisibility::new(0.3);
        assert_eq!(latch.state(), Visibility::Idle);
        assert!(!latch.is_triggered());
        assert!(latch.triggered_at().is_none());
    }

    #[test]
    fn test_idle_latch_ignores_updates() {
        // Measurements before observe() must not fire the latch.
        let mut latch = SectionVisibility::new(0.3);
        assert!(!latch.update(1.0, Instant::now()));
        assert_eq!(latch.state(), Visibility::Idle);
    }

    #[test]
    fn test_latch_fires_at_threshold() {
        let mut latch = SectionVisibility::new(0.3);
        latch.observe();

        assert!(!latch.update(0.29, Instant::now()));
        assert_eq!(latch.state(), Visibility::Pending);

        assert!(latch.update(0.3, Instant::now()));
        assert!(latch.is_triggered());
        assert!(latch.triggered_at().is_some());
    }

    #[test]
    fn test_latch_fires_exactly_once() {
        let mut latch = SectionVisibility::new(0.1);
        latch.observe();

        let now = Instant::now();
        assert!(latch.update(0.5, now));
        let fired_at = latch.triggered_at().unwrap();

        // Later measurements return false and do not move the instant
        assert!(!latch.update(1.0, now));
        assert!(!latch.update(0.0, now));
        assert_eq!(latch.triggered_at(), Some(fired_at));
    }

    #[test]
    fn test_latch_never_reverts_on_scroll_out() {
        let mut latch = SectionVisibility::new(0.2);
        latch.observe();
        latch.update(0.9, Instant::now());

        // Region scrolled fully out of view
        latch.update(0.0, Instant::now());
        assert!(latch.is_triggered());
    }

    #[test]
    fn test_force_trigger_from_idle() {
        let mut latch = SectionVisibility::new(0.3);
        latch.force_trigger(Instant::now());
        assert!(latch.is_triggered());
    }

    #[test]
    fn test_intersection_ratio_full_overlap() {
        assert_eq!(intersection_ratio(10, 10, 0, 40), 1.0);
    }

    #[test]
    fn test_intersection_ratio_partial_overlap() {
        // Region rows 10..20, viewport rows 15..55: 5 of 10 visible
        assert_eq!(intersection_ratio(10, 10, 15, 40), 0.5);
    }

    #[test]
    fn test_intersection_ratio_no_overlap() {
        assert_eq!(intersection_ratio(100, 10, 0, 40), 0.0);
    }

    #[test]
    fn test_intersection_ratio_empty_region() {
        assert_eq!(intersection_ratio(10, 0, 0, 40), 0.0);
    }
}
