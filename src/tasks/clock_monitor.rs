//! Clock monitor background task

use tokio::sync::watch;
use tracing::{debug, info};

use crate::state::{ClockSnapshot, Counter};

/// Notable change between two consecutive snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockTransition {
    Started,
    Paused,
    Buzzer(Counter),
}

/// Classify the change from `previous` to `current`, if it is worth reporting
pub fn transition(previous: &ClockSnapshot, current: &ClockSnapshot) -> Option<ClockTransition> {
    match (previous.running, current.running) {
        (false, true) => Some(ClockTransition::Started),
        (true, false) if ran_out(previous.shot_clock.is_zero(), current.shot_clock.is_zero()) => {
            Some(ClockTransition::Buzzer(Counter::ShotClock))
        }
        (true, false) if ran_out(previous.game_clock.is_zero(), current.game_clock.is_zero()) => {
            Some(ClockTransition::Buzzer(Counter::GameClock))
        }
        (true, false) => Some(ClockTransition::Paused),
        _ => None,
    }
}

fn ran_out(was_zero: bool, is_zero: bool) -> bool {
    !was_zero && is_zero
}

/// Background task that follows the controller's snapshots and logs transitions
pub async fn clock_monitor_task(mut updates: watch::Receiver<ClockSnapshot>) {
    info!("Starting clock monitor task");

    let mut previous = *updates.borrow_and_update();

    while updates.changed().await.is_ok() {
        let current = *updates.borrow_and_update();

        match transition(&previous, &current) {
            Some(ClockTransition::Started) => {
                info!("Clocks running: {} / {}", current.game_clock, current.shot_clock);
            }
            Some(ClockTransition::Paused) => {
                info!("Clocks paused: {} / {}", current.game_clock, current.shot_clock);
            }
            Some(ClockTransition::Buzzer(counter)) => {
                info!("Buzzer! The {} ran out at {} / {}", counter, current.game_clock, current.shot_clock);
            }
            None => debug!("Clock update: {} / {}", current.game_clock, current.shot_clock),
        }

        previous = current;
    }

    debug!("Clock controller dropped, monitor exiting");
}
