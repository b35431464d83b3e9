//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{ClockPhase, ClockSnapshot};

/// Clock status as reported to HTTP clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockStatus {
    Running,
    Paused,
}

impl From<ClockPhase> for ClockStatus {
    fn from(phase: ClockPhase) -> Self {
        match phase {
            ClockPhase::Running => Self::Running,
            ClockPhase::Idle => Self::Paused,
        }
    }
}

/// API response structure for clock action endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: ClockStatus,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub clock: ClockSnapshot,
}

impl ApiResponse {
    /// Create a new API response; the status follows the clock's phase
    pub fn new(message: String, clock: ClockSnapshot) -> Self {
        Self {
            status: clock.phase().into(),
            message,
            timestamp: Utc::now(),
            clock,
        }
    }
}

/// Status response with the clock values and server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub clock: ClockSnapshot,
    pub game_clock_display: String,
    pub shot_clock_display: String,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_clock_reports_paused() {
        let idle = ApiResponse::new("Clocks stopped".to_string(), ClockSnapshot::initial());
        assert_eq!(idle.status, ClockStatus::Paused);
        assert_eq!(serde_json::to_value(&idle).unwrap()["status"], "paused");

        let running = ClockSnapshot { running: true, ..ClockSnapshot::initial() };
        let response = ApiResponse::new("Clocks started".to_string(), running);
        assert_eq!(serde_json::to_value(&response).unwrap()["status"], "running");
    }
}
