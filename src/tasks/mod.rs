//! Background tasks module
//!
//! This module contains the per-counter countdown loop spawned by the clock
//! controller and the monitor that follows its published snapshots.

pub mod clock_monitor;
pub mod countdown;

// Re-export main functions
pub use clock_monitor::clock_monitor_task;
pub use countdown::TICK_PERIOD;
pub(crate) use countdown::countdown_task;
