//! Countdown arithmetic module
//!
//! This module contains the two clock value types and the pure decrement
//! operations that drive both counters one unit at a time.

pub mod error;
pub mod minutes;
pub mod number;
pub mod outcome;

// Re-export main types
pub use error::ClockError;
pub use minutes::ClockMinutes;
pub use number::ClockNumber;
pub use outcome::{Decrement, DecrementOutcome};

/// Starting value of the game clock (12:00)
pub const GAME_CLOCK_START: ClockMinutes =
    ClockMinutes::from_parts(ClockNumber::from_const(12), ClockNumber::ZERO);

/// Starting value of the shot clock (24 seconds)
pub const SHOT_CLOCK_START: ClockNumber = ClockNumber::from_const(24);
