//! Calendar-independent queries on a day number: weekday and month name.

use crate::consts::DAYS_PER_WEEK;
use crate::names::{CompatVariant, jewish_month_name};
use crate::{Calendar, CalendarAlgorithm, CalendarError, DayNumber, Weekday};

/// Day of the week of a day number. Day number 0 is a Monday.
pub const fn day_of_week(day_number: DayNumber) -> Weekday {
    // rem_euclid first so that i64::MAX cannot overflow
    let index = (day_number.get().rem_euclid(DAYS_PER_WEEK) + 1) % DAYS_PER_WEEK;
    Weekday::ALL[index as usize]
}

/// Weekday index with Sunday = 0
pub const fn day_of_week_index(day_number: DayNumber) -> u8 {
    day_of_week(day_number).index()
}

/// English weekday name, full or three-letter
pub const fn weekday_name(day_number: DayNumber, abbreviated: bool) -> &'static str {
    let weekday = day_of_week(day_number);
    if abbreviated { weekday.abbreviation() } else { weekday.name() }
}

/// Name of the month containing `day_number` in `calendar`.
///
/// The Jewish name comes from the leap or common table of the containing
/// year, in the requested variant. `abbreviated` only affects the Gregorian
/// and Julian calendars.
///
/// # Errors
/// Propagates the conversion error when the day number is outside the
/// calendar's domain.
pub fn month_name(
    calendar: Calendar,
    day_number: DayNumber,
    abbreviated: bool,
    variant: CompatVariant,
) -> Result<&'static str, CalendarError> {
    let date = calendar.day_number_to_civil(day_number)?;
    match calendar {
        Calendar::Jewish => {
            let leap = calendar.is_leap_year(date.year);
            jewish_month_name(date.month, leap, variant).ok_or_else(|| {
                CalendarError::InvalidMonth {
                    calendar,
                    year: date.year,
                    month: date.month,
                    max: calendar.months_in_year(date.year),
                }
            })
        }
        _ => calendar.month_name(date.year, date.month, abbreviated),
    }
}
