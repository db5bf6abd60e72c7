/// Jalaali years that open a leap cycle (usually 33 years long).
///
/// Strictly increasing. A Jalaali year `jy` is convertible only when
/// `BREAKS[0] <= jy < BREAKS[BREAKS.len() - 1]`.
pub const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324, 2394,
    2456, 3178,
];

/// Difference between a Gregorian year and the Jalaali year starting in it
pub const JALAALI_EPOCH_OFFSET: i32 = 621;

/// Kurdish (Rojhalat) year = Jalaali year + this offset
pub const KURDISH_EPOCH_OFFSET: i32 = 1321;

/// Maximum valid month (December / Esfand / Reşeme)
pub const MAX_MONTH: u8 = 12;

/// Maximum day number any month can carry
pub const MAX_DAY: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Month number for March, the Gregorian month of Newroz
pub const MARCH: u8 = 3;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Jalaali months 1..=6 have 31 days
pub const JALAALI_LONG_MONTH_DAYS: u8 = 31;
/// Jalaali months 7..=11 have 30 days, as does month 12 in a leap year
pub const JALAALI_SHORT_MONTH_DAYS: u8 = 30;
/// Last Jalaali month of a common year
pub const JALAALI_LAST_MONTH_DAYS: u8 = 29;
/// Number of leading 31-day months in a Jalaali year
pub const JALAALI_LONG_MONTHS: u8 = 6;

/// Days in a common Jalaali year
pub const JALAALI_COMMON_YEAR_DAYS: i64 = 365;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator used when rendering Jalaali dates
pub const JALAALI_SEPARATOR: char = '/';
