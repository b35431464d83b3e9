//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tracing::info;

use super::{ClockController, ClockSnapshot};

/// Application state shared by all HTTP handlers
#[derive(Debug)]
pub struct AppState {
    /// The game clock / shot clock pair
    pub clock: ClockController,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    /// Create a new AppState with the clocks at their starting values.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(port: u16, host: String) -> Self {
        Self {
            clock: ClockController::new(),
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    /// Remember the latest user action for the status endpoint
    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Start both clocks
    pub fn start_clock(&self) -> ClockSnapshot {
        info!("Start requested");
        self.clock.start();
        self.record_action("start");
        self.clock.snapshot()
    }

    /// Stop both clocks
    pub fn stop_clock(&self) -> ClockSnapshot {
        info!("Stop requested");
        self.clock.stop();
        self.record_action("stop");
        self.clock.snapshot()
    }

    /// Reset the shot clock
    pub fn reset_shot_clock(&self) -> ClockSnapshot {
        info!("Shot clock reset requested");
        self.clock.reset_shot_clock();
        self.record_action("reset-shot-clock");
        self.clock.snapshot()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        format_uptime(self.start_time.elapsed().as_secs())
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

fn format_uptime(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_formatting() {
        assert_eq!(format_uptime(42), "42s");
        assert_eq!(format_uptime(125), "2m 5s");
        assert_eq!(format_uptime(3 * 3600 + 61), "3h 1m 1s");
    }

    #[tokio::test(start_paused = true)]
    async fn actions_are_recorded() {
        let state = AppState::new(20024, "127.0.0.1".to_string());
        assert_eq!(state.get_last_action(), (None, None));

        let snapshot = state.start_clock();
        assert!(snapshot.running);
        assert_eq!(state.get_last_action().0.as_deref(), Some("start"));

        let snapshot = state.reset_shot_clock();
        assert!(snapshot.running);
        assert_eq!(state.get_last_action().0.as_deref(), Some("reset-shot-clock"));

        let snapshot = state.stop_clock();
        assert!(!snapshot.running);
        let (action, time) = state.get_last_action();
        assert_eq!(action.as_deref(), Some("stop"));
        assert!(time.is_some());
    }
}
