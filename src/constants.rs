//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the animation timing shared by
//! the motion and rendering layers.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Termfolio";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "termfolio";

/// Event-loop poll timeout. One tick of animation time.
pub const TICK_MS: u64 = 33;
