//! Compound minutes:seconds value

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ClockError, ClockNumber, Decrement, DecrementOutcome};

/// Remaining time as two clock numbers, minutes and seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClockMinutes {
    minutes: ClockNumber,
    seconds: ClockNumber,
}

impl ClockMinutes {
    pub const ZERO: Self = Self::from_parts(ClockNumber::ZERO, ClockNumber::ZERO);

    /// Create a time value; each part must fit two digits
    pub fn new(minutes: u8, seconds: u8) -> Result<Self, ClockError> {
        Ok(Self::from_parts(ClockNumber::new(minutes)?, ClockNumber::new(seconds)?))
    }

    pub const fn from_parts(minutes: ClockNumber, seconds: ClockNumber) -> Self {
        Self { minutes, seconds }
    }

    pub fn minutes(self) -> ClockNumber {
        self.minutes
    }

    pub fn seconds(self) -> ClockNumber {
        self.seconds
    }

    pub fn is_zero(self) -> bool {
        self.minutes.is_zero() && self.seconds.is_zero()
    }

    /// Number of one-second ticks left before the value reaches zero
    pub fn total_seconds(self) -> u32 {
        u32::from(self.minutes.value()) * 60 + u32::from(self.seconds.value())
    }
}

impl Decrement for ClockMinutes {
    fn decrement(&self) -> DecrementOutcome<Self> {
        let (minutes, seconds) = (self.minutes.value(), self.seconds.value());

        if minutes == 0 && seconds == 0 {
            return DecrementOutcome::AlreadyZero(Self::ZERO);
        }

        if seconds > 0 {
            return if seconds - 1 > 0 || minutes > 0 {
                DecrementOutcome::Decremented(Self {
                    minutes: self.minutes,
                    seconds: self.seconds.decrement().into_value(),
                })
            } else {
                DecrementOutcome::ReachedZero(Self::ZERO)
            };
        }

        // Borrow a minute
        match self.minutes.decrement() {
            DecrementOutcome::AlreadyZero(_) => DecrementOutcome::AlreadyZero(Self::ZERO),
            outcome => DecrementOutcome::Decremented(Self {
                minutes: outcome.into_value(),
                seconds: ClockNumber::from_const(59),
            }),
        }
    }
}

impl fmt::Display for ClockMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::GAME_CLOCK_START;

    fn time(minutes: u8, seconds: u8) -> ClockMinutes {
        ClockMinutes::new(minutes, seconds).unwrap()
    }

    #[test]
    fn construction_checks_both_parts() {
        assert_eq!(ClockMinutes::new(100, 0), Err(ClockError::InvalidRange { value: 100 }));
        assert_eq!(ClockMinutes::new(0, 120), Err(ClockError::InvalidRange { value: 120 }));
        assert_eq!(time(12, 0), GAME_CLOCK_START);
    }

    #[test]
    fn reduce_to_previous_minute() {
        assert_eq!(time(12, 0).decrement(), DecrementOutcome::Decremented(time(11, 59)));
        assert_eq!(time(11, 0).decrement(), DecrementOutcome::Decremented(time(10, 59)));
    }

    #[test]
    fn reduce_to_previous_second() {
        assert_eq!(time(11, 59).decrement(), DecrementOutcome::Decremented(time(11, 58)));
    }

    #[test]
    fn reduce_to_zero_seconds_with_minutes_left() {
        assert_eq!(time(11, 1).decrement(), DecrementOutcome::Decremented(time(11, 0)));
    }

    #[test]
    fn reduce_to_previous_minute_no_minutes_left() {
        assert_eq!(time(1, 0).decrement(), DecrementOutcome::Decremented(time(0, 59)));
    }

    #[test]
    fn reduce_time_to_zero() {
        assert_eq!(time(0, 1).decrement(), DecrementOutcome::ReachedZero(ClockMinutes::ZERO));
    }

    #[test]
    fn reduce_but_is_already_zero() {
        assert_eq!(
            ClockMinutes::ZERO.decrement(),
            DecrementOutcome::AlreadyZero(ClockMinutes::ZERO)
        );
    }

    #[test]
    fn every_boundary_carries_correctly() {
        for minutes in 0..=99u8 {
            for seconds in 0..=99u8 {
                let outcome = time(minutes, seconds).decrement();
                let expected = match (minutes, seconds) {
                    (0, 0) => DecrementOutcome::AlreadyZero(ClockMinutes::ZERO),
                    (0, 1) => DecrementOutcome::ReachedZero(ClockMinutes::ZERO),
                    (m, 0) => DecrementOutcome::Decremented(time(m - 1, 59)),
                    (m, s) => DecrementOutcome::Decremented(time(m, s - 1)),
                };
                assert_eq!(outcome, expected, "decrementing {}:{}", minutes, seconds);
            }
        }
    }

    #[test]
    fn seconds_above_59_step_down_without_carry() {
        assert_eq!(time(5, 60).decrement(), DecrementOutcome::Decremented(time(5, 59)));
        assert_eq!(time(1, 80).decrement(), DecrementOutcome::Decremented(time(1, 79)));
        assert_eq!(time(0, 99).decrement(), DecrementOutcome::Decremented(time(0, 98)));
    }

    #[test]
    fn counts_down_in_exactly_total_seconds() {
        for minutes in 0..=99u8 {
            for seconds in 0..=99u8 {
                let start = time(minutes, seconds);
                let mut current = start;
                let mut steps = 0u32;
                loop {
                    let outcome = current.decrement();
                    let next = *outcome.value();
                    match outcome {
                        DecrementOutcome::Decremented(_) => {
                            assert_eq!(next.total_seconds() + 1, current.total_seconds());
                            assert!(!next.is_zero());
                            steps += 1;
                        }
                        DecrementOutcome::ReachedZero(_) => {
                            assert_eq!(current.total_seconds(), 1);
                            steps += 1;
                        }
                        DecrementOutcome::AlreadyZero(_) => {
                            assert!(current.is_zero());
                            break;
                        }
                    }
                    current = next;
                }
                assert_eq!(steps, start.total_seconds(), "counting down from {}", start);
                assert_eq!(current.decrement(), DecrementOutcome::AlreadyZero(ClockMinutes::ZERO));
            }
        }
    }

    #[test]
    fn displays_as_minutes_and_seconds() {
        assert_eq!(GAME_CLOCK_START.to_string(), "12:00");
        assert_eq!(time(0, 7).to_string(), "00:07");
    }
}
