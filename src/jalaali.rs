//! Jalaali (Solar Hijri) calendar arithmetic.
//!
//! Every conversion pivots through a [`JulianDayNumber`]. Leap years are not
//! derived from an equinox model but from [`BREAKS`], the Jalaali years at
//! which the 33-year leap cycle restarts. Within a cycle the leap years fall
//! every 4 years (with one 5-year gap at the end), which lets the number of
//! leap years since the epoch be counted in closed form per cycle.
//!
//! All divisions here are floor divisions (`div_euclid`/`rem_euclid`). The
//! January/February year shift of the day-number formulas is applied
//! explicitly rather than through a signed division.

use serde::{Deserialize, Serialize};

use crate::consts::{
    BREAKS, JALAALI_COMMON_YEAR_DAYS, JALAALI_EPOCH_OFFSET, JALAALI_LAST_MONTH_DAYS,
    JALAALI_LONG_MONTH_DAYS, JALAALI_LONG_MONTHS, JALAALI_SHORT_MONTH_DAYS, MARCH, MAX_MONTH,
};
use crate::{CalendarError, Day, GregorianDate, JalaaliDate, JulianDayNumber, Month};

/// Length of a regular leap cycle in years
const CYCLE_YEARS: i64 = 33;
/// Leap years in a regular cycle
const CYCLE_LEAPS: i64 = 8;
/// Day offset of the first day of month 7 (six 31-day months)
const SECOND_HALF_OFFSET: i64 = JALAALI_LONG_MONTHS as i64 * JALAALI_LONG_MONTH_DAYS as i64;

/// Persian month names, Farvardin first.
pub const JALAALI_MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Where a Jalaali year sits relative to the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeapParameters {
    /// The year's last month has 30 days instead of 29
    pub is_leap: bool,
    /// Gregorian year in which Farvardin 1 falls
    pub gregorian_year: i32,
    /// Day of March on which Farvardin 1 falls
    pub march_day: i32,
}

impl LeapParameters {
    /// Julian day number of Farvardin 1.
    pub fn new_year_jdn(&self) -> JulianDayNumber {
        jdn_from_raw(i64::from(self.gregorian_year), i64::from(MARCH), i64::from(self.march_day))
    }

    /// Days in the Jalaali year.
    pub const fn year_length(&self) -> i64 {
        if self.is_leap {
            JALAALI_COMMON_YEAR_DAYS + 1
        } else {
            JALAALI_COMMON_YEAR_DAYS
        }
    }
}

#[inline]
const fn div(a: i64, b: i64) -> i64 {
    a.div_euclid(b)
}

#[inline]
const fn rem(a: i64, b: i64) -> i64 {
    a.rem_euclid(b)
}

/// Julian day number of a proleptic Gregorian date.
///
/// The triple is not checked for calendar correctness: day 31 of a 30-day
/// month lands on the first of the next month.
pub fn gregorian_to_jdn(year: i32, month: Month, day: Day) -> JulianDayNumber {
    jdn_from_raw(i64::from(year), i64::from(month.get()), i64::from(day.get()))
}

/// January and February are counted with the previous March-based year.
#[inline]
const fn march_year_shift(gm: i64) -> i64 {
    if gm < MARCH as i64 { 1 } else { 0 }
}

pub(crate) const fn raw_jdn(gy: i64, gm: i64, gd: i64) -> i64 {
    let my = gy - march_year_shift(gm) + 100_100;
    let d = div(my * 1461, 4) + div(153 * rem(gm + 9, 12) + 2, 5) + gd - 34_840_408;
    d - div(div(my, 100) * 3, 4) + 752
}

/// Every `i32` year with month/day in range maps inside [`JulianDayNumber::MIN`]..=[`JulianDayNumber::MAX`].
const fn jdn_from_raw(gy: i64, gm: i64, gd: i64) -> JulianDayNumber {
    JulianDayNumber::from_raw(raw_jdn(gy, gm, gd))
}

/// Proleptic Gregorian date of a Julian day number. Exact inverse of [`gregorian_to_jdn`].
///
/// [`JulianDayNumber`] is bounded to the days of `i32` years, so the year
/// always fits.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn jdn_to_gregorian(jdn: JulianDayNumber) -> GregorianDate {
    let jdn = jdn.get();
    let mut j = 4 * jdn + 139_361_631;
    j += div(div(4 * jdn + 183_187_720, 146_097) * 3, 4) * 4 - 3908;
    let i = div(rem(j, 1461), 4) * 5 + 308;
    let day0 = div(rem(i, 153), 5);
    let month0 = rem(div(i, 153), 12);
    let gy = div(j, 1461) - 100_100 + march_year_shift(month0 + 1);

    // Both offsets are remainders, so they fit the 0-based month/day ranges
    GregorianDate::from_parts(gy as i32, Month::from_offset(month0 as u8), Day::from_offset(day0 as u8))
}

/// Locates `jalaali_year` in the break-point table and derives its New Year
/// and leap flag.
///
/// # Errors
/// Returns `CalendarError::InvalidYear` when the year is below the first
/// break point or at/above the last one.
#[allow(clippy::cast_possible_truncation)]
pub fn compute_leap_parameters(jalaali_year: i32) -> Result<LeapParameters, CalendarError> {
    let first = BREAKS[0];
    let last = BREAKS[BREAKS.len() - 1];
    if jalaali_year < first || jalaali_year >= last {
        tracing::debug!(jalaali_year, first, last, "Jalaali year outside break-point table");
        return Err(CalendarError::InvalidYear(jalaali_year));
    }

    let jy = i64::from(jalaali_year);
    let gy = jy + i64::from(JALAALI_EPOCH_OFFSET);

    // Leap years from the epoch to the start of the cycle containing jy
    let mut leap_j: i64 = -14;
    let mut jp = i64::from(first);
    let mut jump = 0;
    for &brk in &BREAKS[1..] {
        let jm = i64::from(brk);
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += div(jump, CYCLE_YEARS) * CYCLE_LEAPS + div(rem(jump, CYCLE_YEARS), 4);
        jp = jm;
    }

    // ...plus those inside the current cycle up to jy
    let mut n = jy - jp;
    leap_j += div(n, CYCLE_YEARS) * CYCLE_LEAPS + div(rem(n, CYCLE_YEARS) + 3, 4);
    if rem(jump, CYCLE_YEARS) == 4 && jump - n == 4 {
        leap_j += 1;
    }

    // Same count in the Gregorian calendar up to gy
    let leap_g = div(gy, 4) - div((div(gy, 100) + 1) * 3, 4) - 150;
    let march_day = 20 + leap_j - leap_g;

    // Position inside the 4-year leap sub-cycle; 0 is the leap year itself
    if jump - n < 6 {
        n = n - jump + div(jump + 4, CYCLE_YEARS) * CYCLE_YEARS;
    }
    let years_since_leap = rem(rem(n + 1, CYCLE_YEARS) - 1, 4);

    Ok(LeapParameters {
        is_leap: years_since_leap == 0,
        gregorian_year: gy as i32,
        march_day: march_day as i32,
    })
}

/// # Errors
/// Returns `CalendarError::InvalidYear` outside the break-point table.
pub fn is_leap_jalaali_year(jalaali_year: i32) -> Result<bool, CalendarError> {
    Ok(compute_leap_parameters(jalaali_year)?.is_leap)
}

/// Days in a Jalaali month: 31 for months 1-6, 30 for 7-11, 29 or 30 for the last.
///
/// # Errors
/// Returns `CalendarError::InvalidYear` when asked for the last month of a
/// year outside the break-point table. The other months never consult it.
pub fn jalaali_month_length(jalaali_year: i32, month: Month) -> Result<u8, CalendarError> {
    Ok(match month.get() {
        m if m <= JALAALI_LONG_MONTHS => JALAALI_LONG_MONTH_DAYS,
        m if m < MAX_MONTH => JALAALI_SHORT_MONTH_DAYS,
        _ if is_leap_jalaali_year(jalaali_year)? => JALAALI_SHORT_MONTH_DAYS,
        _ => JALAALI_LAST_MONTH_DAYS,
    })
}

/// Persian name of a Jalaali month.
pub const fn jalaali_month_name(month: Month) -> &'static str {
    JALAALI_MONTH_NAMES[month.index0()]
}

/// Day offset of the first of `month` from Farvardin 1.
const fn month_offset(month: Month) -> i64 {
    let jm = month.get() as i64;
    (jm - 1) * JALAALI_LONG_MONTH_DAYS as i64 - div(jm, 7) * (jm - 7)
}

/// # Errors
/// Returns `CalendarError::InvalidYear` outside the break-point table.
pub fn jalaali_to_jdn(jalaali_year: i32, month: Month, day: Day) -> Result<JulianDayNumber, CalendarError> {
    let new_year = compute_leap_parameters(jalaali_year)?.new_year_jdn();
    Ok(JulianDayNumber::from_raw(
        new_year.get() + month_offset(month) + i64::from(day.get()) - 1,
    ))
}

/// Gregorian date of a Jalaali date.
///
/// # Errors
/// Returns `CalendarError::InvalidYear` outside the break-point table.
pub fn jalaali_to_gregorian(jalaali_year: i32, month: Month, day: Day) -> Result<GregorianDate, CalendarError> {
    Ok(jdn_to_gregorian(jalaali_to_jdn(jalaali_year, month, day)?))
}

/// Jalaali date of a Gregorian date.
///
/// # Errors
/// Returns `CalendarError::InvalidYear` when the date falls in a Jalaali year
/// outside the break-point table.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn gregorian_to_jalaali(year: i32, month: Month, day: Day) -> Result<JalaaliDate, CalendarError> {
    let jdn = gregorian_to_jdn(year, month, day).get();
    // Saturates into the rejected range for years near i32::MIN
    let mut jy = year.saturating_sub(JALAALI_EPOCH_OFFSET);
    let mut k = jdn - compute_leap_parameters(jy)?.new_year_jdn().get();

    if k < 0 {
        // Before Newroz: count from the previous year's Farvardin 1
        jy -= 1;
        k += compute_leap_parameters(jy)?.year_length();
    }

    let (month0, day0) = if k < SECOND_HALF_OFFSET {
        (
            div(k, i64::from(JALAALI_LONG_MONTH_DAYS)),
            rem(k, i64::from(JALAALI_LONG_MONTH_DAYS)),
        )
    } else {
        let k = k - SECOND_HALF_OFFSET;
        (
            i64::from(JALAALI_LONG_MONTHS) + div(k, i64::from(JALAALI_SHORT_MONTH_DAYS)),
            rem(k, i64::from(JALAALI_SHORT_MONTH_DAYS)),
        )
    };
    tracing::trace!(year, jalaali_year = jy, offset = k, "Gregorian to Jalaali");

    // A range-checked Gregorian input lands at most a year past Farvardin 1
    Ok(JalaaliDate::from_parts(
        jy,
        Month::from_offset(month0 as u8),
        Day::from_offset(day0 as u8),
    ))
}
