use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_DAY, MAX_MONTH,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
///
/// Shared by the Gregorian and Jalaali calendars; the Kurdish variants map
/// it onto their own month-name tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Builds a month from a 0-based offset produced by calendar arithmetic.
    ///
    /// Callers guarantee `offset < MAX_MONTH`.
    #[inline]
    pub(crate) const fn from_offset(offset: u8) -> Self {
        debug_assert!(offset < MAX_MONTH);
        Self(NonZeroU8::MIN.saturating_add(offset))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the 0-based month index (January / Farvardin is 0)
    #[inline]
    pub const fn index0(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month value in the range `1..=MAX_DAY` (1..=31)
///
/// Unlike a full date check this does not look at the month: the conversion
/// kernel accepts day 31 of a 30-day month and lets the arithmetic roll it
/// over. Use [`crate::GregorianDate::is_valid`] for the strict check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and <= `MAX_DAY`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or > `MAX_DAY`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidDay(value))?;
        if value > MAX_DAY {
            return Err(ParseError::InvalidDay(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub(crate) const fn from_offset(offset: u8) -> Self {
        debug_assert!(offset < MAX_DAY);
        Self(NonZeroU8::MIN.saturating_add(offset))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Gregorian helpers

/// Proleptic Gregorian leap rule. Works for negative (astronomical) years.
pub const fn is_leap_year(year: i32) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

/// Number of days in a Gregorian month.
pub const fn days_in_month(year: i32, month: Month) -> u8 {
    if month.get() == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.get() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(value: u8) -> Month {
        Month::new(value).unwrap()
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
        assert!(matches!(Month::new(255), Err(ParseError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_from_offset_and_index() {
        for offset in 0..12 {
            let m = Month::from_offset(offset);
            assert_eq!(m.get(), offset + 1);
            assert_eq!(m.index0(), offset as usize);
        }
    }

    #[test]
    fn test_month_serde() {
        let m = month(8);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "8");
        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(m, parsed);

        let result: Result<Month, _> = serde_json::from_str("13");
        assert!(result.is_err());
    }

    #[test]
    fn test_day_new() {
        assert!(Day::new(1).is_ok());
        assert!(Day::new(31).is_ok());
        assert!(matches!(Day::new(0), Err(ParseError::InvalidDay(0))));
        assert!(matches!(Day::new(32), Err(ParseError::InvalidDay(32))));
    }

    #[test]
    fn test_day_conversions() {
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);
        assert_eq!(day.to_string(), "15");
        let value: u8 = day.into();
        assert_eq!(value, 15);
        assert_eq!(Day::from_offset(30).get(), 31);
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 0,
                is_leap: true,
                description: "astronomical year 0 (1 BC)",
            },
            TestCase {
                year: -4,
                is_leap: true,
                description: "negative year divisible by 4",
            },
            TestCase {
                year: -1,
                is_leap: false,
                description: "negative year not divisible by 4",
            },
            TestCase {
                year: -100,
                is_leap: false,
                description: "negative century",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (i, days) in expected.iter().enumerate() {
            let m = month(u8::try_from(i + 1).unwrap());
            assert_eq!(days_in_month(2023, m), *days, "Month {m} has incorrect day count");
        }
        assert_eq!(days_in_month(2024, month(2)), 29);
        assert_eq!(days_in_month(1900, month(2)), 28);
        assert_eq!(days_in_month(2000, month(2)), 29);
    }
}
