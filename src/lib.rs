//! Shot Clock - A game clock and shot clock pair driven over HTTP
//!
//! This library provides the countdown arithmetic for both clocks, the
//! controller that runs them as two periodic tokio tasks, and a small HTTP
//! surface to start, stop and reset them.

pub mod api;
pub mod clock;
pub mod config;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use clock::{ClockError, ClockMinutes, ClockNumber, Decrement, DecrementOutcome};
pub use config::Config;
pub use state::{AppState, ClockController, ClockSnapshot};
pub use utils::signals::{register_shutdown_signals, shutdown_signal};
