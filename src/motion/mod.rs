//! Presentation-sequencing primitives.
//!
//! Everything time-based on the page flows through this module: the
//! spring that smooths scrolling, the one-shot visibility latches that
//! gate section entrances, the stagger sequencer that orders them, and
//! the cancellable timer queue behind the simulated form submission.
//! All of it is pure state + arithmetic, driven by the event loop and
//! independent of any rendering API.

pub mod easing;
pub mod reveal;
pub mod spring;
pub mod timers;
pub mod visibility;

pub use easing::ease_out;
pub use reveal::RevealSequence;
pub use spring::Spring;
pub use timers::{TimerHandle, TimerQueue};
pub use visibility::{intersection_ratio, SectionVisibility, Visibility};
