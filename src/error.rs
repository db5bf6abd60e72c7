use crate::consts::{BREAKS, MAX_DAY, MAX_MONTH};
use crate::prelude::*;

/// Failure to build or parse one of the crate's value types.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day: {} (must be 1-{})", "_0", MAX_DAY)]
    InvalidDay(u8),
    #[display(fmt = "Invalid calendar variant: {_0} (expected rojhalat or bashur)")]
    InvalidVariant(String),
    #[display(fmt = "Julian day number out of range: {_0}")]
    InvalidJulianDay(i64),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Error type for calendar conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Jalaali year outside the leap-cycle break-point table.
    #[error(
        "Invalid Jalaali year: {0} (must be {first}..{last})",
        first = BREAKS[0],
        last = BREAKS[BREAKS.len() - 1]
    )]
    InvalidYear(i32),

    /// A month or day index could not be turned into a typed value.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
