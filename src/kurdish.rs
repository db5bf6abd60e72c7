//! Kurdish calendar on top of the Gregorian and Jalaali calendars.
//!
//! Two variants are supported:
//!
//! - [`CalendarVariant::Rojhalat`] (Eastern Kurdistan) follows the Jalaali
//!   calendar month for month, with the year shifted by
//!   [`KURDISH_EPOCH_OFFSET`] and Kurdish month names. Newroz is Farvardin 1.
//! - [`CalendarVariant::Bashur`] (Southern Kurdistan) is the Gregorian
//!   calendar with Kurdish month names.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::KURDISH_EPOCH_OFFSET;
use crate::prelude::*;
use crate::types::days_in_month;
use crate::{CalendarError, Day, GregorianDate, Month, ParseError, jalaali};

/// Selects how a Gregorian date is rendered in the Kurdish calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarVariant {
    /// Eastern variant, structured like the Jalaali calendar
    #[default]
    #[display(fmt = "rojhalat")]
    Rojhalat,
    /// Southern variant, structured like the Gregorian calendar
    #[display(fmt = "bashur")]
    Bashur,
}

impl FromStr for CalendarVariant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if trimmed.eq_ignore_ascii_case("rojhalat") {
            Ok(Self::Rojhalat)
        } else if trimmed.eq_ignore_ascii_case("bashur") {
            Ok(Self::Bashur)
        } else {
            Err(ParseError::InvalidVariant(trimmed.to_owned()))
        }
    }
}

/// A month name in Sorani (Arabic script) and Latin transliteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthName {
    pub sorani: &'static str,
    pub latin: &'static str,
}

impl MonthName {
    const fn new(sorani: &'static str, latin: &'static str) -> Self {
        Self { sorani, latin }
    }
}

/// Rojhalat month names, Xakelêwe (starting at Newroz) first.
pub const ROJHALAT_MONTHS: [MonthName; 12] = [
    MonthName::new("خاکەلێوە", "Xakelêwe"),
    MonthName::new("گوڵان", "Gulan"),
    MonthName::new("جۆزەردان", "Cozerdan"),
    MonthName::new("پووشپەڕ", "Pûşper"),
    MonthName::new("گەلاوێژ", "Gelawêj"),
    MonthName::new("خەرمانان", "Xermanan"),
    MonthName::new("ڕەزبەر", "Rezber"),
    MonthName::new("گەڵاڕێزان", "Gelarêzan"),
    MonthName::new("سەرماوەز", "Sermawez"),
    MonthName::new("بەفرانبار", "Befranbar"),
    MonthName::new("ڕێبەندان", "Rêbendan"),
    MonthName::new("ڕەشەمە", "Reşeme"),
];

/// Bashur month names, January first.
pub const BASHUR_MONTHS: [MonthName; 12] = [
    MonthName::new("کانوونی دووەم", "Kanûnî Duwem"),
    MonthName::new("شوبات", "Şubat"),
    MonthName::new("ئازار", "Azar"),
    MonthName::new("نیسان", "Nîsan"),
    MonthName::new("مایس", "Mayis"),
    MonthName::new("حوزەیران", "Huzeyran"),
    MonthName::new("تەمووز", "Temûz"),
    MonthName::new("ئاب", "Ab"),
    MonthName::new("ئەیلوول", "Eylûl"),
    MonthName::new("تشرینی یەکەم", "Teşrînî Yekem"),
    MonthName::new("تشرینی دووەم", "Teşrînî Duwem"),
    MonthName::new("کانوونی یەکەم", "Kanûnî Yekem"),
];

/// Name of a Rojhalat month (1 = Xakelêwe).
pub const fn rojhalat_month_name(month: Month) -> MonthName {
    ROJHALAT_MONTHS[month.index0()]
}

/// Name of a Bashur month (1 = January).
pub const fn bashur_month_name(month: Month) -> MonthName {
    BASHUR_MONTHS[month.index0()]
}

/// A Gregorian date rendered in one of the Kurdish calendar variants.
///
/// Recomputed on every conversion; nothing here is cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{}", kurdish_date)]
#[serde(rename_all = "camelCase")]
pub struct KurdishDateResult {
    gregorian_date: GregorianDate,
    variant: CalendarVariant,
    year: i32,
    month: Month,
    day: Day,
    month_name: MonthName,
    kurdish_date: String,
    kurdish_date_latin: String,
}

impl KurdishDateResult {
    fn rojhalat(gregorian_date: GregorianDate, year: i32, month: Month, day: Day) -> Self {
        let month_name = rojhalat_month_name(month);
        Self {
            gregorian_date,
            variant: CalendarVariant::Rojhalat,
            year,
            month,
            day,
            month_name,
            kurdish_date: format!("{year} {} {day}", month_name.sorani),
            kurdish_date_latin: format!("{year} {} {day}", month_name.latin),
        }
    }

    fn bashur(gregorian_date: GregorianDate) -> Self {
        let (year, month, day) = (gregorian_date.year(), gregorian_date.month(), gregorian_date.day());
        let month_name = bashur_month_name(month);
        Self {
            gregorian_date,
            variant: CalendarVariant::Bashur,
            year,
            month,
            day,
            month_name,
            kurdish_date: format!("{day} {} {year}", month_name.sorani),
            kurdish_date_latin: format!("{day} {} {year}", month_name.latin),
        }
    }

    /// The Gregorian date this result was derived from
    pub const fn gregorian_date(&self) -> GregorianDate {
        self.gregorian_date
    }

    pub const fn variant(&self) -> CalendarVariant {
        self.variant
    }

    /// Kurdish year (Jalaali + 1321 for Rojhalat, Gregorian for Bashur)
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month within the variant's year, 1-based
    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    pub const fn month_name(&self) -> MonthName {
        self.month_name
    }

    /// Composite date in Sorani script
    pub fn kurdish_date(&self) -> &str {
        &self.kurdish_date
    }

    /// Composite date in Latin script
    pub fn kurdish_date_latin(&self) -> &str {
        &self.kurdish_date_latin
    }
}

/// Converts a Gregorian date to the Rojhalat Kurdish calendar.
///
/// # Errors
/// Returns `CalendarError::InvalidYear` when the date falls outside the
/// supported Jalaali years.
#[tracing::instrument(level = "trace", skip_all, fields(date = %date))]
pub fn to_kurdish_rojhalat(date: GregorianDate) -> Result<KurdishDateResult, CalendarError> {
    let jalaali = date.to_jalaali()?;
    Ok(KurdishDateResult::rojhalat(
        date,
        jalaali.year() + KURDISH_EPOCH_OFFSET,
        jalaali.month(),
        jalaali.day(),
    ))
}

/// Converts a Gregorian date to the Bashur Kurdish calendar. Never fails.
#[tracing::instrument(level = "trace", skip_all, fields(date = %date))]
pub fn to_kurdish_bashur(date: GregorianDate) -> KurdishDateResult {
    KurdishDateResult::bashur(date)
}

/// Converts a Gregorian date to the requested Kurdish calendar variant.
///
/// # Errors
/// Returns `CalendarError::InvalidYear` for a Rojhalat date outside the
/// supported Jalaali years.
#[tracing::instrument(level = "trace", skip_all, fields(date = %date, variant = %variant))]
pub fn convert(date: GregorianDate, variant: CalendarVariant) -> Result<KurdishDateResult, CalendarError> {
    match variant {
        CalendarVariant::Rojhalat => to_kurdish_rojhalat(date),
        CalendarVariant::Bashur => Ok(to_kurdish_bashur(date)),
    }
}

/// Today's date (UTC) in the requested variant.
///
/// # Errors
/// See [`convert`].
pub fn today(variant: CalendarVariant) -> Result<KurdishDateResult, CalendarError> {
    convert(GregorianDate::today(), variant)
}

/// Whether a Rojhalat Kurdish year has a 30-day Reşeme.
///
/// # Errors
/// Returns `CalendarError::InvalidYear` (carrying the Jalaali year) outside
/// the supported range.
pub fn is_kurdish_leap_year(kurdish_year: i32) -> Result<bool, CalendarError> {
    jalaali::is_leap_jalaali_year(kurdish_year.saturating_sub(KURDISH_EPOCH_OFFSET))
}

/// Number of days in a Kurdish month.
///
/// `month` is 1-based (1 = Xakelêwe) for [`CalendarVariant::Rojhalat`] and
/// 0-based (0 = January) for [`CalendarVariant::Bashur`].
///
/// # Errors
/// Returns `CalendarError::Parse` for a month index outside the variant's
/// range, and `CalendarError::InvalidYear` for the last Rojhalat month of an
/// unsupported year.
pub fn kurdish_month_length(year: i32, month: u8, variant: CalendarVariant) -> Result<u8, CalendarError> {
    match variant {
        CalendarVariant::Rojhalat => {
            let month = Month::new(month)?;
            jalaali::jalaali_month_length(year.saturating_sub(KURDISH_EPOCH_OFFSET), month)
        }
        CalendarVariant::Bashur => {
            let month = Month::new(month.saturating_add(1)).map_err(|_| ParseError::InvalidMonth(month))?;
            Ok(days_in_month(year, month))
        }
    }
}
