use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::consts::{DATE_SEPARATOR, JALAALI_SEPARATOR};
use crate::kurdish::{self, CalendarVariant, KurdishDateResult};
use crate::prelude::*;
use crate::types::days_in_month;
use crate::{CalendarError, Day, Month, ParseError, jalaali};

/// A day count since the Julian Period epoch, used only as a pivot between calendars.
///
/// Bounded to the days of `i32` Gregorian years, from January 1 of
/// `i32::MIN` to December 31 of `i32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Deref, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct JulianDayNumber(i64);

impl JulianDayNumber {
    /// January 1 of year `i32::MIN`
    #[allow(clippy::cast_lossless)]
    pub const MIN: Self = Self(jalaali::raw_jdn(i32::MIN as i64, 1, 1));
    /// December 31 of year `i32::MAX`
    #[allow(clippy::cast_lossless)]
    pub const MAX: Self = Self(jalaali::raw_jdn(i32::MAX as i64, 12, 31));

    /// # Errors
    /// Returns `ParseError::InvalidJulianDay` outside [`Self::MIN`]..=[`Self::MAX`].
    pub const fn new(value: i64) -> Result<Self, ParseError> {
        if value < Self::MIN.0 || value > Self::MAX.0 {
            return Err(ParseError::InvalidJulianDay(value));
        }
        Ok(Self(value))
    }

    /// Callers guarantee the value is in range
    pub(crate) const fn from_raw(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Gregorian date falling on this day.
    pub fn to_gregorian(self) -> GregorianDate {
        jalaali::jdn_to_gregorian(self)
    }

    /// Jalaali date falling on this day.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` outside the supported Jalaali years.
    pub fn to_jalaali(self) -> Result<JalaaliDate, CalendarError> {
        self.to_gregorian().to_jalaali()
    }
}

/// A proleptic Gregorian calendar date.
///
/// Years are astronomical (1 BC is `0`). The month and day are range checked,
/// but day-for-month is not: `2023-02-31` is representable and converts as
/// the day it rolls over to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, "month.get()", "day.get()")]
pub struct GregorianDate {
    year: i32,
    month: Month,
    day: Day,
}

impl GregorianDate {
    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` or `ParseError::InvalidDay` when a
    /// component is outside `1..=12` / `1..=31`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self::from_parts(year, Month::new(month)?, Day::new(day)?))
    }

    /// Creates a date from already validated components
    pub const fn from_parts(year: i32, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Today's date in UTC.
    pub fn today() -> Self {
        Self::from(chrono::Utc::now().date_naive())
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// Whether the day exists in its month (February 29 only in leap years).
    pub const fn is_valid(&self) -> bool {
        self.day.get() <= days_in_month(self.year, self.month)
    }

    pub fn to_jdn(&self) -> JulianDayNumber {
        jalaali::gregorian_to_jdn(self.year, self.month, self.day)
    }

    /// # Errors
    /// Returns `CalendarError::InvalidYear` outside the supported Jalaali years.
    pub fn to_jalaali(&self) -> Result<JalaaliDate, CalendarError> {
        jalaali::gregorian_to_jalaali(self.year, self.month, self.day)
    }

    /// # Errors
    /// Returns `CalendarError::InvalidYear` for a Rojhalat date outside the
    /// supported Jalaali years. Bashur conversion never fails.
    pub fn to_kurdish(&self, variant: CalendarVariant) -> Result<KurdishDateResult, CalendarError> {
        kurdish::convert(*self, variant)
    }

    fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
        s.trim()
            .parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // A leading separator is the sign of an astronomical year, not a delimiter
        let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = body.split(DATE_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} {DATE_SEPARATOR} separators: {trimmed}",
                parts.len() - 1
            )));
        }

        let magnitude: i64 = Self::parse_component(parts[0])?;
        let month: u8 = Self::parse_component(parts[1])?;
        let day: u8 = Self::parse_component(parts[2])?;
        let year = i32::try_from(if negative { -magnitude } else { magnitude })
            .map_err(|_| ParseError::InvalidFormat(parts[0].to_owned()))?;

        Self::new(year, month, day)
    }
}

impl TryFrom<i64> for JulianDayNumber {
    type Error = ParseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NaiveDate> for GregorianDate {
    #[allow(clippy::cast_possible_truncation)]
    fn from(date: NaiveDate) -> Self {
        // chrono keeps month0 in 0..12 and day0 in 0..31
        Self::from_parts(
            date.year(),
            Month::from_offset(date.month0() as u8),
            Day::from_offset(date.day0() as u8),
        )
    }
}

impl TryFrom<GregorianDate> for NaiveDate {
    type Error = ParseError;

    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        Self::from_ymd_opt(date.year, u32::from(date.month.get()), u32::from(date.day.get()))
            .ok_or_else(|| ParseError::InvalidFormat(format!("{date} is not a calendar date")))
    }
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A Jalaali (Solar Hijri) calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JalaaliDate {
    year: i32,
    month: Month,
    day: Day,
}

impl JalaaliDate {
    /// # Errors
    /// Returns `ParseError::InvalidMonth` or `ParseError::InvalidDay` when a
    /// component is outside `1..=12` / `1..=31`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self::from_parts(year, Month::new(month)?, Day::new(day)?))
    }

    pub const fn from_parts(year: i32, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// Persian name of the month.
    pub const fn month_name(&self) -> &'static str {
        jalaali::jalaali_month_name(self.month)
    }

    /// # Errors
    /// Returns `CalendarError::InvalidYear` outside the supported Jalaali years.
    pub fn is_leap_year(&self) -> Result<bool, CalendarError> {
        jalaali::is_leap_jalaali_year(self.year)
    }

    /// # Errors
    /// Returns `CalendarError::InvalidYear` outside the supported Jalaali years.
    pub fn to_gregorian(&self) -> Result<GregorianDate, CalendarError> {
        jalaali::jalaali_to_gregorian(self.year, self.month, self.day)
    }

    /// # Errors
    /// Returns `CalendarError::InvalidYear` outside the supported Jalaali years.
    pub fn to_jdn(&self) -> Result<JulianDayNumber, CalendarError> {
        jalaali::jalaali_to_jdn(self.year, self.month, self.day)
    }
}

impl fmt::Display for JalaaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{JALAALI_SEPARATOR}{}{JALAALI_SEPARATOR}{}",
            self.year, self.month, self.day
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gregorian(year: i32, month: u8, day: u8) -> GregorianDate {
        GregorianDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        let date = "2024-03-21".parse::<GregorianDate>().unwrap();
        assert_eq!(date, gregorian(2024, 3, 21));
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month().get(), 3);
        assert_eq!(date.day().get(), 21);
    }

    #[test]
    fn test_parse_negative_year() {
        let date = "-040-07-04".parse::<GregorianDate>().unwrap();
        assert_eq!(date, gregorian(-40, 7, 4));
        assert_eq!(date.to_string(), "-040-07-04");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<GregorianDate>(), Err(ParseError::EmptyInput)));
        assert!(matches!(
            "2024-13-01".parse::<GregorianDate>(),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!("2024-01-32".parse::<GregorianDate>(), Err(ParseError::InvalidDay(32))));
        assert!(matches!("2024-01".parse::<GregorianDate>(), Err(ParseError::InvalidFormat(_))));
        assert!(matches!("2024-0X-01".parse::<GregorianDate>(), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(
            "2024-01-01-01".parse::<GregorianDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(gregorian(2024, 3, 1).to_string(), "2024-03-01");
        assert_eq!(gregorian(622, 3, 22).to_string(), "0622-03-22");
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(gregorian(2023, 12, 31) < gregorian(2024, 1, 1));
        assert!(gregorian(2024, 2, 29) < gregorian(2024, 3, 1));
        assert!(gregorian(-1, 12, 31) < gregorian(0, 1, 1));
    }

    #[test]
    fn test_is_valid() {
        assert!(gregorian(2024, 2, 29).is_valid());
        assert!(!gregorian(2023, 2, 29).is_valid());
        assert!(!gregorian(2023, 4, 31).is_valid());
        assert!(gregorian(2023, 12, 31).is_valid());
    }

    #[test]
    fn test_serde_string_format() {
        let date = gregorian(2024, 3, 21);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2024-03-21""#);
        let parsed: GregorianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);

        let result: Result<GregorianDate, _> = serde_json::from_str(r#""2024-00-10""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_chrono_interop() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let date = GregorianDate::from(naive);
        assert_eq!(date, gregorian(2024, 3, 20));
        assert_eq!(NaiveDate::try_from(date).unwrap(), naive);

        assert!(NaiveDate::try_from(gregorian(2023, 2, 30)).is_err());
    }

    #[test]
    fn test_today_is_a_real_date() {
        let today = GregorianDate::today();
        assert!(today.is_valid());
        assert!(today.year() >= 2024);
    }

    #[test]
    fn test_jdn_accessors() {
        let jdn = JulianDayNumber::new(2_451_545).unwrap();
        assert_eq!(jdn.get(), 2_451_545);
        assert_eq!(*jdn, 2_451_545);
        assert_eq!(i64::from(jdn), 2_451_545);
        assert_eq!(jdn.to_string(), "2451545");
        assert_eq!(jdn.to_gregorian(), gregorian(2000, 1, 1));
    }

    #[test]
    fn test_jdn_bounds() {
        let min = JulianDayNumber::MIN.get();
        let max = JulianDayNumber::MAX.get();
        assert_eq!(JulianDayNumber::new(min), Ok(JulianDayNumber::MIN));
        assert_eq!(JulianDayNumber::new(max), Ok(JulianDayNumber::MAX));
        assert_eq!(JulianDayNumber::new(min - 1), Err(ParseError::InvalidJulianDay(min - 1)));
        assert_eq!(JulianDayNumber::new(max + 1), Err(ParseError::InvalidJulianDay(max + 1)));
        assert_eq!(JulianDayNumber::new(i64::MAX / 2), Err(ParseError::InvalidJulianDay(i64::MAX / 2)));
        assert!(JulianDayNumber::try_from(i64::MIN).is_err());

        assert_eq!(JulianDayNumber::MIN.to_gregorian(), gregorian(i32::MIN, 1, 1));
        assert_eq!(JulianDayNumber::MAX.to_gregorian(), gregorian(i32::MAX, 12, 31));
    }

    #[test]
    fn test_jdn_serde_is_bounded() {
        let jdn: JulianDayNumber = serde_json::from_str("2451545").unwrap();
        assert_eq!(serde_json::to_string(&jdn).unwrap(), "2451545");

        let too_big = (JulianDayNumber::MAX.get() + 1).to_string();
        assert!(serde_json::from_str::<JulianDayNumber>(&too_big).is_err());
    }

    #[test]
    fn test_extreme_years_round_trip_through_strings() {
        for date in [gregorian(i32::MIN, 1, 1), gregorian(i32::MAX, 12, 31)] {
            let text = date.to_string();
            assert_eq!(text.parse::<GregorianDate>().unwrap(), date);
            let json = serde_json::to_string(&date).unwrap();
            assert_eq!(serde_json::from_str::<GregorianDate>(&json).unwrap(), date);
        }
        assert_eq!(gregorian(i32::MIN, 1, 1).to_string(), "-2147483648-01-01");

        assert!(matches!(
            "2147483648-01-01".parse::<GregorianDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "-2147483649-01-01".parse::<GregorianDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_extreme_year_to_jalaali_is_invalid_year() {
        assert_eq!(
            gregorian(i32::MIN, 1, 1).to_jalaali(),
            Err(CalendarError::InvalidYear(i32::MIN))
        );
    }

    #[test]
    fn test_jalaali_display_and_serde() {
        let date = JalaaliDate::new(1403, 1, 1).unwrap();
        assert_eq!(date.to_string(), "1403/1/1");
        assert_eq!(date.month_name(), "فروردین");

        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"year":1403,"month":1,"day":1}"#);
        let parsed: JalaaliDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn test_jalaali_new_rejects_bad_month() {
        assert!(matches!(JalaaliDate::new(1403, 0, 1), Err(ParseError::InvalidMonth(0))));
    }
}
