//! Platform layer
//!
//! Handles the parts of the loop that touch the OS:
//! - Keyboard state → per-tick input snapshot
//! - Frame pacing

pub mod input;
pub mod time;

pub use input::KeyboardState;
pub use time::FrameLimiter;
