//! Two-digit bounded counter value

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ClockError, Decrement, DecrementOutcome};

/// An integer in `0..=99`, shown as two digits on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ClockNumber(u8);

impl ClockNumber {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(99);

    /// Create a clock number, rejecting anything that does not fit two digits
    pub fn new(value: u8) -> Result<Self, ClockError> {
        if value > Self::MAX.0 {
            return Err(ClockError::InvalidRange { value: value.into() });
        }
        Ok(Self(value))
    }

    /// Build a clock number in a const context; panics at compile time when out of range
    pub(crate) const fn from_const(value: u8) -> Self {
        assert!(value <= 99, "clock number out of range");
        Self(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Tens and units digits, in display order
    pub fn digits(self) -> (u8, u8) {
        (self.0 / 10, self.0 % 10)
    }
}

impl Decrement for ClockNumber {
    fn decrement(&self) -> DecrementOutcome<Self> {
        match self.0 {
            0 => DecrementOutcome::AlreadyZero(Self::ZERO),
            1 => DecrementOutcome::ReachedZero(Self::ZERO),
            value => DecrementOutcome::Decremented(Self(value - 1)),
        }
    }
}

impl TryFrom<u8> for ClockNumber {
    type Error = ClockError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClockNumber> for u8 {
    fn from(number: ClockNumber) -> Self {
        number.0
    }
}

impl fmt::Display for ClockNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (tens, units) = self.digits();
        write!(f, "{}{}", tens, units)
    }
}
