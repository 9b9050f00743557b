//! Error types for calendar conversions.

use crate::Calendar;

/// Coarse classification of a [`CalendarError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A year, month or day that is structurally invalid for the calendar
    InvalidCalendarField,
    /// A year or day number outside the calendar's representable domain
    DateOutOfRange,
    /// A calendar or mode selector that names nothing this crate knows
    UnknownCalendar,
}

/// Error type for all fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The calendar has no such year (year zero in the proleptic calendars).
    #[error("the {calendar} calendar has no year {year}")]
    InvalidYear {
        /// Calendar the year was given for.
        calendar: Calendar,
        /// The rejected year.
        year: i64,
    },

    /// Month number outside `1..=max` for the given year.
    #[error("invalid {calendar} month {month} for year {year} (must be 1-{max})")]
    InvalidMonth {
        /// Calendar the month was given for.
        calendar: Calendar,
        /// Year the month was checked against.
        year: i64,
        /// The rejected month.
        month: u8,
        /// Number of months in that year.
        max: u8,
    },

    /// Day number outside `1..=max` for the given month.
    #[error("invalid {calendar} day {day} for {year}-{month:02} (must be 1-{max})")]
    InvalidDay {
        /// Calendar the day was given for.
        calendar: Calendar,
        /// Year of the date.
        year: i64,
        /// Month of the date.
        month: u8,
        /// The rejected day.
        day: u8,
        /// Number of days in that month.
        max: u8,
    },

    /// Year outside the calendar's valid span.
    #[error("{calendar} year {year} is out of range ({min} to {max})")]
    YearOutOfRange {
        /// Calendar the year was given for.
        calendar: Calendar,
        /// The rejected year.
        year: i64,
        /// First valid year.
        min: i64,
        /// Last valid year.
        max: i64,
    },

    /// Julian Day Number outside the calendar's valid span.
    #[error("day number {day_number} is out of range for the {calendar} calendar ({min} to {max})")]
    DayNumberOutOfRange {
        /// Calendar the day number was converted with.
        calendar: Calendar,
        /// The rejected day number.
        day_number: i64,
        /// First valid day number.
        min: i64,
        /// Last valid day number.
        max: i64,
    },

    /// Jewish year outside the span that can be written in Hebrew letters.
    #[error("year {year} cannot be written as Hebrew text (must be 1-9999)")]
    HebrewTextOutOfRange {
        /// The rejected number.
        year: i64,
    },

    /// Day number whose Unix timestamp does not fit in an `i64`.
    #[error("day number {day_number} cannot be expressed as a Unix timestamp")]
    TimestampOutOfRange {
        /// The rejected day number.
        day_number: i64,
    },

    /// Selector that does not name a calendar or mode.
    #[error("unknown calendar: {0}")]
    UnknownCalendar(String),
}

impl CalendarError {
    /// Returns the coarse classification of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidYear { .. } | Self::InvalidMonth { .. } | Self::InvalidDay { .. } => {
                ErrorKind::InvalidCalendarField
            }
            Self::YearOutOfRange { .. }
            | Self::DayNumberOutOfRange { .. }
            | Self::HebrewTextOutOfRange { .. }
            | Self::TimestampOutOfRange { .. } => ErrorKind::DateOutOfRange,
            Self::UnknownCalendar(_) => ErrorKind::UnknownCalendar,
        }
    }

    /// True for structurally invalid year, month or day values
    pub const fn is_invalid_field(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidCalendarField)
    }

    /// True for values outside a calendar's representable domain
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::DateOutOfRange)
    }
}

// Field validation shared by the calendar algorithms.

pub(crate) const fn check_year(
    calendar: Calendar,
    year: i64,
    min: i64,
    max: i64,
) -> Result<(), CalendarError> {
    if year < min || year > max {
        return Err(CalendarError::YearOutOfRange {
            calendar,
            year,
            min,
            max,
        });
    }
    Ok(())
}

pub(crate) const fn check_month(
    calendar: Calendar,
    year: i64,
    month: u8,
    max: u8,
) -> Result<(), CalendarError> {
    if month == 0 || month > max {
        return Err(CalendarError::InvalidMonth {
            calendar,
            year,
            month,
            max,
        });
    }
    Ok(())
}

pub(crate) const fn check_day(
    calendar: Calendar,
    year: i64,
    month: u8,
    day: u8,
    max: u8,
) -> Result<(), CalendarError> {
    if day == 0 || day > max {
        return Err(CalendarError::InvalidDay {
            calendar,
            year,
            month,
            day,
            max,
        });
    }
    Ok(())
}

pub(crate) const fn check_day_number(
    calendar: Calendar,
    day_number: i64,
    min: i64,
    max: i64,
) -> Result<(), CalendarError> {
    if day_number < min || day_number > max {
        return Err(CalendarError::DayNumberOutOfRange {
            calendar,
            day_number,
            min,
            max,
        });
    }
    Ok(())
}
