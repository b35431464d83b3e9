//! Decrement outcome and the shared decrement contract

use serde::{Deserialize, Serialize};

/// Result of decrementing a clock value by one unit.
///
/// Every variant carries the value the caller should store next, so a tick
/// can always write back the result and then branch on the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum DecrementOutcome<T> {
    /// The value went down and is still above zero
    Decremented(T),
    /// This decrement brought the value to zero
    ReachedZero(T),
    /// The value was already zero, nothing was decremented
    AlreadyZero(T),
}

impl<T> DecrementOutcome<T> {
    /// Borrow the value carried by the outcome
    pub fn value(&self) -> &T {
        match self {
            Self::Decremented(value) | Self::ReachedZero(value) | Self::AlreadyZero(value) => value,
        }
    }

    /// Take the value carried by the outcome
    pub fn into_value(self) -> T {
        match self {
            Self::Decremented(value) | Self::ReachedZero(value) | Self::AlreadyZero(value) => value,
        }
    }

    /// Whether the countdown can keep going after this outcome
    pub fn is_decremented(&self) -> bool {
        matches!(self, Self::Decremented(_))
    }
}

/// A clock value that can count down by one unit
pub trait Decrement: Sized {
    fn decrement(&self) -> DecrementOutcome<Self>;
}
