//! State management module
//!
//! This module contains the clock lifecycle controller, the snapshot type it
//! publishes and the server-level application state wrapping it.

pub mod app_state;
pub mod clock_state;
pub mod controller;

// Re-export main types
pub use app_state::AppState;
pub use clock_state::{ClockPhase, ClockSnapshot};
pub use controller::{ClockController, Counter};
pub(crate) use controller::SharedClock;
