//! Staggered entrance sequencing.
//!
//! A reveal sequence gives each child of a section a start delay of
//! `base + index * step` and an ease-out transition of fixed duration.
//! It is purely time-based: child order is declaration order, never
//! content or size. The sequencer knows nothing about rendering; it
//! maps (child index, elapsed time) to a progress value and the
//! renderer decides what a given progress looks like.

use super::easing::ease_out;
use std::time::Duration;

/// Delay before the first child starts, once the section triggers.
pub const BASE_DELAY: Duration = Duration::from_millis(300);

/// Additional delay per child index.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Duration of each child's own transition.
pub const ITEM_DURATION: Duration = Duration::from_millis(800);

/// Stagger scheduler for one section's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealSequence {
    len: usize,
    base: Duration,
    step: Duration,
    duration: Duration,
}

impl RevealSequence {
    /// Creates a sequence over `len` children with the default timing.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            base: BASE_DELAY,
            step: STAGGER_STEP,
            duration: ITEM_DURATION,
        }
    }

    /// Overrides the timing constants (used by the skill bars, which
    /// fill more slowly than text reveals).
    #[must_use]
    pub const fn with_timing(mut self, base: Duration, step: Duration, duration: Duration) -> Self {
        self.base = base;
        self.step = step;
        self.duration = duration;
        self
    }

    /// Number of children in the sequence.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the sequence has no children.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Start delay for child `index`: `base + index * step`.
    #[must_use]
    pub fn delay(&self, index: usize) -> Duration {
        self.base + self.step * index as u32
    }

    /// Transition progress of child `index` at `elapsed` time since
    /// the owning section triggered.
    ///
    /// 0.0 before the child's delay; ease-out over the item duration
    /// after it; clamped to 1.0 once complete.
    #[must_use]
    pub fn progress(&self, index: usize, elapsed: Duration) -> f32 {
        let delay = self.delay(index);
        if elapsed <= delay {
            return 0.0;
        }
        let active = elapsed - delay;
        let t = active.as_secs_f32() / self.duration.as_secs_f32();
        ease_out(t)
    }

    /// Whether every child has finished its transition at `elapsed`.
    #[must_use]
    pub fn settled(&self, elapsed: Duration) -> bool {
        if self.len == 0 {
            return true;
        }
        elapsed >= self.delay(self.len - 1) + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_is_affine_in_index() {
        let seq = RevealSequence::new(8);
        assert_eq!(seq.delay(0), BASE_DELAY);
        for i in 1..8 {
            assert_eq!(seq.delay(i), seq.delay(i - 1) + STAGGER_STEP);
        }
    }

    #[test]
    fn test_children_start_in_declaration_order() {
        // If child i has begun, every earlier child has begun too.
        let seq = RevealSequence::new(6);
        for ms in (0..2000).step_by(16) {
            let elapsed = Duration::from_millis(ms);
            for i in 1..6 {
                if seq.progress(i, elapsed) > 0.0 {
                    assert!(
                        seq.progress(i - 1, elapsed) > 0.0,
                        "child {i} began before child {} at {ms}ms",
                        i - 1
                    );
                }
            }
        }
    }

    #[test]
    fn test_progress_zero_before_delay() {
        let seq = RevealSequence::new(3);
        assert_eq!(seq.progress(0, Duration::ZERO), 0.0);
        assert_eq!(seq.progress(2, seq.delay(2)), 0.0);
    }

    #[test]
    fn test_progress_completes_and_clamps() {
        let seq = RevealSequence::new(3);
        let done = seq.delay(1) + ITEM_DURATION;
        assert_eq!(seq.progress(1, done), 1.0);
        // Long after completion it stays pinned at 1
        assert_eq!(seq.progress(1, done + Duration::from_secs(60)), 1.0);
    }

    #[test]
    fn test_progress_is_monotonic_per_child() {
        let seq = RevealSequence::new(4);
        for i in 0..4 {
            let mut prev = 0.0;
            for ms in (0..3000).step_by(16) {
                let p = seq.progress(i, Duration::from_millis(ms));
                assert!(p >= prev, "child {i} progress decreased at {ms}ms");
                prev = p;
            }
        }
    }

    #[test]
    fn test_settled() {
        let seq = RevealSequence::new(3);
        let last = seq.delay(2) + ITEM_DURATION;
        assert!(!seq.settled(last - Duration::from_millis(1)));
        assert!(seq.settled(last));
    }

    #[test]
    fn test_empty_sequence_is_always_settled() {
        let seq = RevealSequence::new(0);
        assert!(seq.settled(Duration::ZERO));
    }

    #[test]
    fn test_custom_timing() {
        let seq = RevealSequence::new(4).with_timing(
            Duration::ZERO,
            Duration::from_millis(100),
            Duration::from_secs(1),
        );
        assert_eq!(seq.delay(0), Duration::ZERO);
        assert_eq!(seq.delay(3), Duration::from_millis(300));
        assert!(seq.progress(0, Duration::from_millis(1)) > 0.0);
    }
}
