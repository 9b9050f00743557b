//! Proleptic Julian calendar.

use crate::consts::{
    DAYS_PER_4_YEARS, DAYS_PER_5_MONTHS, JULIAN_DAY_OFFSET, LEAP_YEAR_CYCLE, MAX_PROLEPTIC_YEAR,
    WESTERN_MONTHS,
};
use crate::error::check_day_number;
use crate::names::western_month_name;
use crate::western::{self, astronomical_year, from_march_based, march_based};
use crate::{Calendar, CalendarAlgorithm, CalendarError, CivilDate, DayNumber};

/// The proleptic Julian calendar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Julian;

impl Julian {
    /// Day number of 1 January of year `-MAX_PROLEPTIC_YEAR`
    pub const MIN_DAY_NUMBER: i64 = day_number(-MAX_PROLEPTIC_YEAR, 1, 1);
    /// Day number of 31 December of year `MAX_PROLEPTIC_YEAR`
    pub const MAX_DAY_NUMBER: i64 = day_number(MAX_PROLEPTIC_YEAR, 12, 31);

    pub const fn is_leap(year: i64) -> bool {
        astronomical_year(year) % LEAP_YEAR_CYCLE == 0
    }
}

const fn day_number(year: i64, month: u8, day: u8) -> i64 {
    let (y, m) = march_based(year, month);
    day as i64 + (DAYS_PER_5_MONTHS * m + 2) / 5 + 365 * y + y.div_euclid(4) - JULIAN_DAY_OFFSET
}

const fn civil(day_number: i64) -> CivilDate {
    let c = day_number + JULIAN_DAY_OFFSET - 1;
    let years = (4 * c + 3).div_euclid(DAYS_PER_4_YEARS);
    let day_of_year = c - (DAYS_PER_4_YEARS * years).div_euclid(4);
    let month = (5 * day_of_year + 2).div_euclid(DAYS_PER_5_MONTHS);
    let day = day_of_year - (DAYS_PER_5_MONTHS * month + 2).div_euclid(5) + 1;

    let (year, month) = from_march_based(years, month);
    CivilDate::new(year, month, day as u8)
}

impl CalendarAlgorithm for Julian {
    fn calendar(&self) -> Calendar {
        Calendar::Julian
    }

    fn is_leap_year(&self, year: i64) -> bool {
        Self::is_leap(year)
    }

    fn months_in_year(&self, _year: i64) -> u8 {
        WESTERN_MONTHS
    }

    fn days_in_month(&self, year: i64, month: u8) -> Result<u8, CalendarError> {
        western::validate(Calendar::Julian, Self::is_leap(year), year, month, None)
    }

    fn civil_to_day_number(&self, year: i64, month: u8, day: u8) -> Result<DayNumber, CalendarError> {
        western::validate(Calendar::Julian, Self::is_leap(year), year, month, Some(day))?;
        Ok(DayNumber::new(day_number(year, month, day)))
    }

    fn day_number_to_civil(&self, day_number: DayNumber) -> Result<CivilDate, CalendarError> {
        check_day_number(
            Calendar::Julian,
            day_number.get(),
            Self::MIN_DAY_NUMBER,
            Self::MAX_DAY_NUMBER,
        )?;
        Ok(civil(day_number.get()))
    }

    fn month_name(&self, year: i64, month: u8, abbreviated: bool) -> Result<&'static str, CalendarError> {
        western_month_name(month, abbreviated).ok_or(CalendarError::InvalidMonth {
            calendar: Calendar::Julian,
            year,
            month,
            max: WESTERN_MONTHS,
        })
    }
}
