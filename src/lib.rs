//! Conversions between historical calendars and Julian Day Numbers.
//!
//! Every calendar converts a `(year, month, day)` triple to and from a
//! [`DayNumber`], which serves as the interchange point between calendars:
//!
//! ```
//! use historic_calendars::{CalendarAlgorithm, CivilDate, Gregorian, Jewish};
//!
//! let day = Gregorian.civil_to_day_number(2021, 9, 10)?;
//! assert_eq!(day.get(), 2_459_468);
//! assert_eq!(Jewish.day_number_to_civil(day)?, CivilDate::new(5782, 1, 4));
//! # Ok::<(), historic_calendars::CalendarError>(())
//! ```
//!
//! The Gregorian and Julian calendars are proleptic and cover
//! `±MAX_PROLEPTIC_YEAR`; the French Republican calendar covers its historical
//! years 1 to 14; the Jewish calendar starts at 1 Tishri of year 1.
//!
//! [`compat::Boundary`] layers the historical conventions (sentinel values,
//! legacy name tables) over the fail-fast core.

/// Debug logging, compiled out unless the `log` feature is enabled
macro_rules! debug_log {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::debug!($($arg)+);
        #[cfg(not(feature = "log"))]
        {
            let _ = format_args!($($arg)+);
        }
    };
}

/// Trace logging, compiled out unless the `log` feature is enabled
macro_rules! trace_log {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::trace!($($arg)+);
        #[cfg(not(feature = "log"))]
        {
            let _ = format_args!($($arg)+);
        }
    };
}

pub(crate) use {debug_log, trace_log};

mod calendar;
pub mod compat;
mod consts;
pub mod day_index;
mod error;
mod french;
mod gregorian;
mod hebrew;
mod jewish;
mod julian;
mod names;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;
mod western;

pub use calendar::{Calendar, CalendarInfo, convert_date};
pub use consts::*;
pub use error::{CalendarError, ErrorKind};
pub use french::FrenchRepublican;
pub use gregorian::Gregorian;
pub use hebrew::{HebrewNumeralOptions, hebrew_numeral};
pub use jewish::{JEWISH_MAX_YEAR, Jewish, JewishYear, YearLength};
pub use julian::Julian;
pub use names::{
    CompatVariant, french_month_name, hebrew_month_name, jewish_month_name, western_month_name,
};
pub use types::{CivilDate, DayNumber, Weekday};

use std::fmt::Debug;

/// A calendar's rules for converting civil dates to and from day numbers.
///
/// Implementors are stateless; every method is a pure function of its
/// arguments. Months and days are numbered from 1.
pub trait CalendarAlgorithm: Send + Sync + Debug {
    /// The calendar these rules belong to
    fn calendar(&self) -> Calendar;

    fn is_leap_year(&self, year: i64) -> bool;

    /// Number of months in `year`; only the Jewish calendar varies
    fn months_in_year(&self, year: i64) -> u8;

    /// Length of a month.
    ///
    /// # Errors
    /// Fails for an invalid month or a year outside the calendar's domain.
    fn days_in_month(&self, year: i64, month: u8) -> Result<u8, CalendarError>;

    /// Day number of a civil date.
    ///
    /// # Errors
    /// `InvalidCalendarField` errors for a bad year, month or day, and
    /// `DateOutOfRange` errors outside the calendar's domain.
    fn civil_to_day_number(&self, year: i64, month: u8, day: u8) -> Result<DayNumber, CalendarError>;

    /// Civil date of a day number.
    ///
    /// # Errors
    /// `CalendarError::DayNumberOutOfRange` outside the calendar's domain.
    fn day_number_to_civil(&self, day_number: DayNumber) -> Result<CivilDate, CalendarError>;

    /// English (or French Republican) name of a month. The year selects the
    /// Jewish leap or common table and is ignored elsewhere.
    ///
    /// # Errors
    /// `CalendarError::InvalidMonth` for a month the table does not have.
    fn month_name(&self, year: i64, month: u8, abbreviated: bool) -> Result<&'static str, CalendarError>;

    /// [`Self::civil_to_day_number`] on a [`CivilDate`]
    ///
    /// # Errors
    /// See [`Self::civil_to_day_number`].
    fn date_to_day_number(&self, date: CivilDate) -> Result<DayNumber, CalendarError> {
        self.civil_to_day_number(date.year, date.month, date.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithms_are_send_and_sync() {
        fn assert_impl<T: Send + Sync + Copy + 'static>() {}
        assert_impl::<Gregorian>();
        assert_impl::<Julian>();
        assert_impl::<FrenchRepublican>();
        assert_impl::<Jewish>();
        assert_impl::<Calendar>();
    }

    #[test]
    fn test_trait_objects() {
        let algorithms: [&dyn CalendarAlgorithm; 4] = [&Gregorian, &Julian, &Jewish, &FrenchRepublican];
        for algorithm in algorithms {
            let calendar = algorithm.calendar();
            assert_eq!(calendar.algorithm().calendar(), calendar);

            let first = algorithm.civil_to_day_number(3, 1, 1).unwrap();
            assert_eq!(algorithm.day_number_to_civil(first), Ok(CivilDate::new(3, 1, 1)));
        }
    }

    #[test]
    fn test_date_to_day_number() {
        let date = CivilDate::new(2000, 1, 1);
        assert_eq!(Gregorian.date_to_day_number(date), Ok(DayNumber::new(2_451_545)));
        assert_eq!(
            Calendar::Gregorian.date_to_day_number(date),
            Gregorian.civil_to_day_number(2000, 1, 1)
        );
    }
}
