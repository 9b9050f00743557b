//! Helpers shared by the proleptic Gregorian and Julian calendars.
//!
//! Both calendars use the same month lengths and the same March-based year
//! decomposition; they differ only in the leap rule and in the day offset.
//! Civil years have no year zero: `-1` is 1 BCE, which is astronomical year 0.

use crate::consts::{
    FEBRUARY, FEBRUARY_DAYS_LEAP, MARCH_YEAR_SHIFT, MAX_PROLEPTIC_YEAR, WESTERN_MONTHS,
    WESTERN_MONTH_DAYS,
};
use crate::error::{check_day, check_month, check_year};
use crate::{Calendar, CalendarError};

/// Converts a civil year to astronomical numbering (1 BCE = 0)
pub(crate) const fn astronomical_year(year: i64) -> i64 {
    if year < 0 { year + 1 } else { year }
}

/// Converts an astronomical year back to civil numbering
pub(crate) const fn civil_year(year: i64) -> i64 {
    if year <= 0 { year - 1 } else { year }
}

/// Splits a civil date into a March-based year shifted clear of the epoch and a
/// March-based month (March = 0, February = 11).
pub(crate) const fn march_based(year: i64, month: u8) -> (i64, i64) {
    let year = astronomical_year(year) + MARCH_YEAR_SHIFT;
    if month > FEBRUARY {
        (year, month as i64 - 3)
    } else {
        (year - 1, month as i64 + 9)
    }
}

/// Undoes [`march_based`]: returns the civil year and the January-based month
pub(crate) const fn from_march_based(year: i64, month: i64) -> (i64, u8) {
    let carry = month / 10;
    (
        civil_year(year - MARCH_YEAR_SHIFT + carry),
        (month + 3 - 12 * carry) as u8,
    )
}

pub(crate) const fn month_days(month: u8, leap: bool) -> u8 {
    debug_assert!(month != 0 && month <= WESTERN_MONTHS);

    if month == FEBRUARY && leap {
        FEBRUARY_DAYS_LEAP
    } else {
        WESTERN_MONTH_DAYS[month as usize - 1]
    }
}

/// Rejects year zero and years beyond the supported span
pub(crate) const fn validate_year(calendar: Calendar, year: i64) -> Result<(), CalendarError> {
    if year == 0 {
        return Err(CalendarError::InvalidYear { calendar, year });
    }
    check_year(calendar, year, -MAX_PROLEPTIC_YEAR, MAX_PROLEPTIC_YEAR)
}

/// Validates a full date and returns the length of its month
pub(crate) fn validate(
    calendar: Calendar,
    leap: bool,
    year: i64,
    month: u8,
    day: Option<u8>,
) -> Result<u8, CalendarError> {
    validate_year(calendar, year)?;
    check_month(calendar, year, month, WESTERN_MONTHS)?;
    let max_day = month_days(month, leap);
    if let Some(day) = day {
        check_day(calendar, year, month, day, max_day)?;
    }
    Ok(max_day)
}
