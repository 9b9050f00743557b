//! Jewish (Hebrew) lunisolar calendar.
//!
//! The start of each year is derived from the *molad* (mean conjunction) of
//! Tishri, counted in halakim (1/1080 hour) from the molad of creation, and
//! then postponed by the deferral rules (*dehiyot*). Everything else follows
//! from the year start: the year length is the distance to the next year's
//! start, and its excess over the minimum length picks the month table.
//!
//! Months are numbered ordinally from Tishri. A common year has months
//! `1..=12` with Adar as month 6; a leap year has `1..=13` with Adar I as
//! month 6 and Adar II as month 7.
//!
//! Day counts in this module are relative to `JEWISH_DAY_OFFSET`, so that
//! day 1 is 1 Tishri of year 1 and `day % 7 == 0` is a Sunday.

use serde::{Deserialize, Serialize};

use crate::consts::{
    AM3_11_20, AM9_32_43, HALAKIM_PER_DAY, HALAKIM_PER_LUNAR_CYCLE, HEBREW_TEXT_MAX_YEAR, HESHVAN,
    JEWISH_DAY_OFFSET, JEWISH_FIRST_DAY_NUMBER, JEWISH_LAST_DAY_NUMBER, JEWISH_MIN_YEAR,
    JEWISH_MONTHS, JEWISH_MONTHS_LEAP, JEWISH_MONTH_DAYS, JEWISH_MONTH_DAYS_LEAP, KISLEV,
    MEAN_YEAR_DENOMINATOR, MEAN_YEAR_NUMERATOR, METONIC_CYCLE_YEARS, METONIC_LEAP_POSITIONS,
    METONIC_YEAR_OFFSET, MONTHS_PER_METONIC_CYCLE, NEW_MOON_OF_CREATION, NOON,
};
use crate::error::{check_day, check_day_number, check_month, check_year};
use crate::hebrew::{HebrewNumeralOptions, hebrew_numeral};
use crate::names::{CompatVariant, hebrew_month_name, jewish_month_name};
use crate::{Calendar, CalendarAlgorithm, CalendarError, CivilDate, DayNumber};

const SUNDAY: i64 = 0;
const MONDAY: i64 = 1;
const TUESDAY: i64 = 2;
const WEDNESDAY: i64 = 3;
const FRIDAY: i64 = 5;

/// Last year that lies entirely or partly inside the supported day numbers
pub const JEWISH_MAX_YEAR: i64 = year_containing(JEWISH_LAST_DAY_NUMBER - JEWISH_DAY_OFFSET);

/// The Jewish calendar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Jewish;

/// Length class of a Jewish year.
///
/// Combined with leap status this gives the six possible year lengths:
/// 353/354/355 days for common years, 383/384/385 for leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearLength {
    /// Heshvan and Kislev both have 29 days
    Deficient,
    /// Heshvan has 29 days, Kislev 30
    Regular,
    /// Heshvan and Kislev both have 30 days
    Abundant,
}

impl YearLength {
    /// Classifies a year by its number of days; `None` for impossible lengths
    pub const fn from_days(days: u16) -> Option<Self> {
        match days {
            353 | 383 => Some(Self::Deficient),
            354 | 384 => Some(Self::Regular),
            355 | 385 => Some(Self::Abundant),
            _ => None,
        }
    }
}

/// Derived facts about one Jewish year, fixed for the life of the year.
///
/// Serializes as the bare year number; everything else is recomputed on
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct JewishYear {
    year:   i64,
    start:  DayNumber,
    days:   u16,
    leap:   bool,
    length: YearLength,
}

impl JewishYear {
    /// Computes the year information.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` outside `1..=JEWISH_MAX_YEAR`.
    pub fn new(year: i64) -> Result<Self, CalendarError> {
        check_year(Calendar::Jewish, year, JEWISH_MIN_YEAR, JEWISH_MAX_YEAR)?;
        Ok(Self::compute(year))
    }

    const fn compute(year: i64) -> Self {
        let start = start_of_year(year);
        let days = (start_of_year(year + 1) - start) as u16;
        // 353/383, 354/384 and 355/385 share their last digit
        let length = match days % 10 {
            3 => YearLength::Deficient,
            5 => YearLength::Abundant,
            _ => YearLength::Regular,
        };
        Self {
            year,
            start: DayNumber::new(start + JEWISH_DAY_OFFSET),
            days,
            leap: is_leap(year),
            length,
        }
    }

    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Day number of 1 Tishri
    pub const fn start(&self) -> DayNumber {
        self.start
    }

    /// Number of days in the year
    pub const fn days(&self) -> u16 {
        self.days
    }

    pub const fn is_leap(&self) -> bool {
        self.leap
    }

    pub const fn length(&self) -> YearLength {
        self.length
    }

    pub const fn months(&self) -> u8 {
        if self.leap { JEWISH_MONTHS_LEAP } else { JEWISH_MONTHS }
    }

    /// Length of an ordinal month, without range checking
    const fn month_days_unchecked(&self, month: u8) -> u8 {
        let base = if self.leap {
            JEWISH_MONTH_DAYS_LEAP[month as usize - 1]
        } else {
            JEWISH_MONTH_DAYS[month as usize - 1]
        };
        match (month, self.length) {
            (HESHVAN, YearLength::Abundant) => base + 1,
            (KISLEV, YearLength::Deficient) => base - 1,
            _ => base,
        }
    }

    /// Length of an ordinal month in this year
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the year has no such month.
    pub fn month_days(&self, month: u8) -> Result<u8, CalendarError> {
        check_month(Calendar::Jewish, self.year, month, self.months())?;
        Ok(self.month_days_unchecked(month))
    }

    /// Lengths of every month in order, Tishri first
    pub fn month_lengths(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=self.months()).map(|month| self.month_days_unchecked(month))
    }
}

impl TryFrom<i64> for JewishYear {
    type Error = CalendarError;

    fn try_from(year: i64) -> Result<Self, Self::Error> {
        Self::new(year)
    }
}

impl From<JewishYear> for i64 {
    fn from(info: JewishYear) -> Self {
        info.year
    }
}

/// Leap years sit at positions 3, 6, 8, 11, 14, 17 and 19 of the Metonic cycle
const fn is_leap(year: i64) -> bool {
    let position = year.rem_euclid(METONIC_CYCLE_YEARS);
    let mut i = 0;
    while i < METONIC_LEAP_POSITIONS.len() {
        if METONIC_LEAP_POSITIONS[i] == position {
            return true;
        }
        i += 1;
    }
    false
}

/// Molad of Tishri as `(day, halakim)`
const fn molad_of_tishri(year: i64) -> (i64, i64) {
    let cycle = (year - 1).div_euclid(METONIC_CYCLE_YEARS);
    let position = (year - 1).rem_euclid(METONIC_CYCLE_YEARS) as usize;
    let months = cycle * MONTHS_PER_METONIC_CYCLE + METONIC_YEAR_OFFSET[position];
    let halakim = NEW_MOON_OF_CREATION + months * HALAKIM_PER_LUNAR_CYCLE;
    (
        halakim.div_euclid(HALAKIM_PER_DAY),
        halakim.rem_euclid(HALAKIM_PER_DAY),
    )
}

/// Day of 1 Tishri after applying the deferral rules
const fn start_of_year(year: i64) -> i64 {
    let (mut day, halakim) = molad_of_tishri(year);
    let mut weekday = day.rem_euclid(7);

    if halakim >= NOON
        || (!is_leap(year) && weekday == TUESDAY && halakim >= AM3_11_20)
        || (is_leap(year - 1) && weekday == MONDAY && halakim >= AM9_32_43)
    {
        day += 1;
        weekday = (weekday + 1) % 7;
    }

    // Applied last: the first postponement can land on a forbidden weekday.
    if weekday == SUNDAY || weekday == WEDNESDAY || weekday == FRIDAY {
        day += 1;
    }
    day
}

/// Year whose 1 Tishri is the latest one on or before `day`
const fn year_containing(day: i64) -> i64 {
    let mut year = day * MEAN_YEAR_DENOMINATOR / MEAN_YEAR_NUMERATOR + 1;
    while start_of_year(year + 1) <= day {
        year += 1;
    }
    while year > JEWISH_MIN_YEAR && start_of_year(year) > day {
        year -= 1;
    }
    year
}

impl Jewish {
    pub const fn is_leap(year: i64) -> bool {
        is_leap(year)
    }

    /// Year information for a Jewish year
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` outside `1..=JEWISH_MAX_YEAR`.
    pub fn year_info(&self, year: i64) -> Result<JewishYear, CalendarError> {
        JewishYear::new(year)
    }

    /// Renders a day number as a Hebrew date: day, month name and year in
    /// Hebrew letters, separated by spaces.
    ///
    /// # Errors
    /// Returns `CalendarError::DayNumberOutOfRange` outside the calendar and
    /// `CalendarError::HebrewTextOutOfRange` for years after 9999.
    pub fn hebrew_text(
        &self,
        day_number: DayNumber,
        options: HebrewNumeralOptions,
        variant: CompatVariant,
    ) -> Result<String, CalendarError> {
        let date = self.day_number_to_civil(day_number)?;
        if date.year > HEBREW_TEXT_MAX_YEAR {
            return Err(CalendarError::HebrewTextOutOfRange { year: date.year });
        }
        let month = hebrew_month_name(date.month, is_leap(date.year), variant).ok_or_else(|| {
            CalendarError::InvalidMonth {
                calendar: Calendar::Jewish,
                year: date.year,
                month: date.month,
                max: self.months_in_year(date.year),
            }
        })?;

        Ok(format!(
            "{} {} {}",
            hebrew_numeral(i64::from(date.day), options)?,
            month,
            hebrew_numeral(date.year, options)?
        ))
    }
}

impl CalendarAlgorithm for Jewish {
    fn calendar(&self) -> Calendar {
        Calendar::Jewish
    }

    fn is_leap_year(&self, year: i64) -> bool {
        is_leap(year)
    }

    fn months_in_year(&self, year: i64) -> u8 {
        if is_leap(year) { JEWISH_MONTHS_LEAP } else { JEWISH_MONTHS }
    }

    fn days_in_month(&self, year: i64, month: u8) -> Result<u8, CalendarError> {
        JewishYear::new(year)?.month_days(month)
    }

    fn civil_to_day_number(&self, year: i64, month: u8, day: u8) -> Result<DayNumber, CalendarError> {
        let info = JewishYear::new(year)?;
        let max_day = info.month_days(month)?;
        check_day(Calendar::Jewish, year, month, day, max_day)?;

        let preceding: i64 = info
            .month_lengths()
            .take(usize::from(month) - 1)
            .map(i64::from)
            .sum();
        let value = info.start().get() + preceding + i64::from(day) - 1;
        check_day_number(
            Calendar::Jewish,
            value,
            JEWISH_FIRST_DAY_NUMBER,
            JEWISH_LAST_DAY_NUMBER,
        )?;
        Ok(DayNumber::new(value))
    }

    fn day_number_to_civil(&self, day_number: DayNumber) -> Result<CivilDate, CalendarError> {
        let value = day_number.get();
        check_day_number(
            Calendar::Jewish,
            value,
            JEWISH_FIRST_DAY_NUMBER,
            JEWISH_LAST_DAY_NUMBER,
        )?;

        let year = year_containing(value - JEWISH_DAY_OFFSET);
        let info = JewishYear::compute(year);
        crate::trace_log!("day number {} falls in Jewish year {} ({} days)", value, year, info.days());

        let mut remaining = value - info.start().get();
        let mut month = 1;
        for length in info.month_lengths() {
            let length = i64::from(length);
            if remaining < length {
                break;
            }
            remaining -= length;
            month += 1;
        }
        Ok(CivilDate::new(year, month, (remaining + 1) as u8))
    }

    fn month_name(&self, year: i64, month: u8, _abbreviated: bool) -> Result<&'static str, CalendarError> {
        jewish_month_name(month, is_leap(year), CompatVariant::Canonical).ok_or_else(|| {
            CalendarError::InvalidMonth {
                calendar: Calendar::Jewish,
                year,
                month,
                max: self.months_in_year(year),
            }
        })
    }
}
