//! Error types for clock value construction

use thiserror::Error;

/// Errors raised when building a clock value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("clock value {value} is outside the two-digit range 0..=99")]
    InvalidRange { value: u32 },
}
