//! French Republican calendar.
//!
//! Years 1 through 14 (1792–1806), with the fixed leap rule `year mod 4 == 3`.
//! The real calendar only ever observed leap years 3, 7 and 11, which the
//! fixed rule reproduces. Twelve 30-day months are followed by the
//! complementary days, counted here as month 13 ("Extra").

use crate::consts::{
    DAYS_PER_4_YEARS, FRENCH_DAYS_PER_MONTH, FRENCH_DAY_OFFSET, FRENCH_EXTRA_DAYS,
    FRENCH_EXTRA_DAYS_LEAP, FRENCH_FIRST_DAY_NUMBER, FRENCH_LAST_DAY_NUMBER, FRENCH_LEAP_REMAINDER,
    FRENCH_MAX_YEAR, FRENCH_MIN_YEAR, FRENCH_MONTHS, LEAP_YEAR_CYCLE,
};
use crate::error::{check_day, check_day_number, check_month, check_year};
use crate::names::french_month_name;
use crate::{Calendar, CalendarAlgorithm, CalendarError, CivilDate, DayNumber};

/// The French Republican calendar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FrenchRepublican;

impl FrenchRepublican {
    pub const fn is_leap(year: i64) -> bool {
        year.rem_euclid(LEAP_YEAR_CYCLE) == FRENCH_LEAP_REMAINDER
    }

    const fn month_days(year: i64, month: u8) -> u8 {
        if month < FRENCH_MONTHS {
            FRENCH_DAYS_PER_MONTH
        } else if Self::is_leap(year) {
            FRENCH_EXTRA_DAYS_LEAP
        } else {
            FRENCH_EXTRA_DAYS
        }
    }

    fn validate(year: i64, month: u8) -> Result<u8, CalendarError> {
        check_year(Calendar::FrenchRepublican, year, FRENCH_MIN_YEAR, FRENCH_MAX_YEAR)?;
        check_month(Calendar::FrenchRepublican, year, month, FRENCH_MONTHS)?;
        Ok(Self::month_days(year, month))
    }
}

impl CalendarAlgorithm for FrenchRepublican {
    fn calendar(&self) -> Calendar {
        Calendar::FrenchRepublican
    }

    fn is_leap_year(&self, year: i64) -> bool {
        Self::is_leap(year)
    }

    fn months_in_year(&self, _year: i64) -> u8 {
        FRENCH_MONTHS
    }

    fn days_in_month(&self, year: i64, month: u8) -> Result<u8, CalendarError> {
        Self::validate(year, month)
    }

    fn civil_to_day_number(&self, year: i64, month: u8, day: u8) -> Result<DayNumber, CalendarError> {
        let max_day = Self::validate(year, month)?;
        check_day(Calendar::FrenchRepublican, year, month, day, max_day)?;

        let value = FRENCH_DAY_OFFSET
            + (year * DAYS_PER_4_YEARS) / 4
            + (i64::from(month) - 1) * i64::from(FRENCH_DAYS_PER_MONTH)
            + i64::from(day);
        Ok(DayNumber::new(value))
    }

    fn day_number_to_civil(&self, day_number: DayNumber) -> Result<CivilDate, CalendarError> {
        let value = day_number.get();
        check_day_number(
            Calendar::FrenchRepublican,
            value,
            FRENCH_FIRST_DAY_NUMBER,
            FRENCH_LAST_DAY_NUMBER,
        )?;

        let temp = (value - FRENCH_DAY_OFFSET) * 4 - 1;
        let year = temp / DAYS_PER_4_YEARS;
        let day_of_year = (temp % DAYS_PER_4_YEARS) / 4;
        let per_month = i64::from(FRENCH_DAYS_PER_MONTH);
        let month = (day_of_year / per_month + 1) as u8;
        let day = (day_of_year % per_month + 1) as u8;
        Ok(CivilDate::new(year, month, day))
    }

    fn month_name(&self, year: i64, month: u8, _abbreviated: bool) -> Result<&'static str, CalendarError> {
        french_month_name(month).ok_or(CalendarError::InvalidMonth {
            calendar: Calendar::FrenchRepublican,
            year,
            month,
            max: FRENCH_MONTHS,
        })
    }
}
