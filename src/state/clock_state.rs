//! Clock snapshot published to readers of the controller

use serde::{Deserialize, Serialize};

use crate::clock::{ClockMinutes, ClockNumber, GAME_CLOCK_START, SHOT_CLOCK_START};

/// The two states of the controller's lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockPhase {
    Idle,
    Running,
}

/// Point-in-time view of both clocks and the running flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSnapshot {
    pub game_clock: ClockMinutes,
    pub shot_clock: ClockNumber,
    pub running: bool,
}

impl ClockSnapshot {
    /// Snapshot of a freshly constructed controller
    pub fn initial() -> Self {
        Self {
            game_clock: GAME_CLOCK_START,
            shot_clock: SHOT_CLOCK_START,
            running: false,
        }
    }

    pub fn phase(&self) -> ClockPhase {
        if self.running {
            ClockPhase::Running
        } else {
            ClockPhase::Idle
        }
    }

    /// Check if either clock has run out
    pub fn buzzer(&self) -> bool {
        self.game_clock.is_zero() || self.shot_clock.is_zero()
    }
}

impl Default for ClockSnapshot {
    fn default() -> Self {
        Self::initial()
    }
}
