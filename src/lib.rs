//! Gregorian, Jalaali (Solar Hijri) and Kurdish calendar conversion.
//!
//! Dates are converted through a [`JulianDayNumber`]. The Jalaali calendar's
//! leap years come from a fixed table of leap-cycle break points, which
//! limits conversions to Jalaali years `-61..3178` (roughly Gregorian
//! 560-3798). Everything is a pure function over value types.
//!
//! ```
//! use kurdish_calendar::{CalendarVariant, GregorianDate};
//!
//! let newroz: GregorianDate = "2024-03-20".parse().unwrap();
//! let kurdish = newroz.to_kurdish(CalendarVariant::Rojhalat).unwrap();
//! assert_eq!(kurdish.kurdish_date_latin(), "2724 Xakelêwe 1");
//! assert_eq!(newroz.to_jalaali().unwrap().to_string(), "1403/1/1");
//! ```

mod consts;
mod date;
mod error;
pub mod jalaali;
pub mod kurdish;
mod prelude;
mod types;

pub use consts::*;
pub use date::{GregorianDate, JalaaliDate, JulianDayNumber};
pub use error::{CalendarError, ParseError};
pub use jalaali::{
    LeapParameters, compute_leap_parameters, gregorian_to_jalaali, gregorian_to_jdn,
    is_leap_jalaali_year, jalaali_month_length, jalaali_to_gregorian, jdn_to_gregorian,
};
pub use kurdish::{
    CalendarVariant, KurdishDateResult, MonthName, convert, is_kurdish_leap_year,
    kurdish_month_length, to_kurdish_bashur, to_kurdish_rojhalat,
};
pub use types::{Day, Month, days_in_month, is_leap_year};
