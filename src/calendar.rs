//! The closed set of supported calendars.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{FRENCH_DAYS_PER_MONTH, FRENCH_MONTHS, JEWISH_MONTHS_LEAP, WESTERN_MONTHS};
use crate::names::{CompatVariant, french_month_name, jewish_month_name, western_month_name};
use crate::prelude::*;
use crate::{
    CalendarAlgorithm, CalendarError, CivilDate, DayNumber, FrenchRepublican, Gregorian, Jewish,
    Julian,
};

/// A supported calendar system.
///
/// Dispatches [`CalendarAlgorithm`] to the matching algorithm, so code that
/// picks the calendar at runtime can hold a `Calendar` instead of a trait
/// object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calendar {
    #[display(fmt = "Gregorian")]
    Gregorian,
    #[display(fmt = "Julian")]
    Julian,
    #[display(fmt = "Jewish")]
    Jewish,
    #[display(fmt = "French Republican")]
    FrenchRepublican,
}

impl Calendar {
    /// All calendars in selector order
    pub const ALL: [Self; 4] = [Self::Gregorian, Self::Julian, Self::Jewish, Self::FrenchRepublican];

    /// Numeric selector: Gregorian 0, Julian 1, Jewish 2, French Republican 3
    pub const fn id(self) -> u8 {
        match self {
            Self::Gregorian => 0,
            Self::Julian => 1,
            Self::Jewish => 2,
            Self::FrenchRepublican => 3,
        }
    }

    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Gregorian),
            1 => Some(Self::Julian),
            2 => Some(Self::Jewish),
            3 => Some(Self::FrenchRepublican),
            _ => None,
        }
    }

    /// The algorithm behind this calendar
    pub fn algorithm(self) -> &'static dyn CalendarAlgorithm {
        match self {
            Self::Gregorian => &Gregorian,
            Self::Julian => &Julian,
            Self::Jewish => &Jewish,
            Self::FrenchRepublican => &FrenchRepublican,
        }
    }

    /// Short name used by the metadata tables
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Gregorian => "Gregorian",
            Self::Julian => "Julian",
            Self::Jewish => "Jewish",
            Self::FrenchRepublican => "French",
        }
    }

    /// Symbolic constant name of the calendar
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Gregorian => "CAL_GREGORIAN",
            Self::Julian => "CAL_JULIAN",
            Self::Jewish => "CAL_JEWISH",
            Self::FrenchRepublican => "CAL_FRENCH",
        }
    }

    /// Month tables and limits of this calendar.
    ///
    /// The Jewish table is the 13-month leap-year table in the requested
    /// variant; it has no abbreviations, so both maps hold the same names.
    pub fn info(self, variant: CompatVariant) -> CalendarInfo {
        let (months, abbreviated_months, max_days_in_month) = match self {
            Self::Gregorian | Self::Julian => (
                month_table(WESTERN_MONTHS, |m| western_month_name(m, false)),
                month_table(WESTERN_MONTHS, |m| western_month_name(m, true)),
                31,
            ),
            Self::Jewish => {
                let table = month_table(JEWISH_MONTHS_LEAP, |m| jewish_month_name(m, true, variant));
                (table.clone(), table, 30)
            }
            Self::FrenchRepublican => {
                let table = month_table(FRENCH_MONTHS, french_month_name);
                (table.clone(), table, FRENCH_DAYS_PER_MONTH)
            }
        };

        CalendarInfo {
            name: self.short_name(),
            symbol: self.symbol(),
            months,
            abbreviated_months,
            max_days_in_month,
        }
    }

    /// Re-expresses a date of this calendar in `target`.
    ///
    /// # Errors
    /// Fails if the date is invalid here or its day number is outside `target`.
    pub fn convert(self, date: CivilDate, target: Self) -> Result<CivilDate, CalendarError> {
        let day_number = self.date_to_day_number(date)?;
        target.day_number_to_civil(day_number)
    }
}

fn month_table(
    months: u8,
    name: impl Fn(u8) -> Option<&'static str>,
) -> BTreeMap<u8, &'static str> {
    (1..=months)
        .filter_map(|month| name(month).map(|name| (month, name)))
        .collect()
}

/// Converts `date` from one calendar to another
///
/// # Errors
/// See [`Calendar::convert`].
pub fn convert_date(from: Calendar, to: Calendar, date: CivilDate) -> Result<CivilDate, CalendarError> {
    from.convert(date, to)
}

impl FromStr for Calendar {
    type Err = CalendarError;

    /// Accepts a calendar name in any case or a numeric selector `0..=3`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<u8>() {
            return Self::from_id(id).ok_or_else(|| CalendarError::UnknownCalendar(s.to_owned()));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "gregorian" => Ok(Self::Gregorian),
            "julian" => Ok(Self::Julian),
            "jewish" | "hebrew" => Ok(Self::Jewish),
            "french" | "french_republican" | "french republican" => Ok(Self::FrenchRepublican),
            _ => Err(CalendarError::UnknownCalendar(s.to_owned())),
        }
    }
}

impl CalendarAlgorithm for Calendar {
    fn calendar(&self) -> Calendar {
        *self
    }

    fn is_leap_year(&self, year: i64) -> bool {
        self.algorithm().is_leap_year(year)
    }

    fn months_in_year(&self, year: i64) -> u8 {
        self.algorithm().months_in_year(year)
    }

    fn days_in_month(&self, year: i64, month: u8) -> Result<u8, CalendarError> {
        self.algorithm().days_in_month(year, month)
    }

    fn civil_to_day_number(&self, year: i64, month: u8, day: u8) -> Result<DayNumber, CalendarError> {
        self.algorithm().civil_to_day_number(year, month, day)
    }

    fn day_number_to_civil(&self, day_number: DayNumber) -> Result<CivilDate, CalendarError> {
        self.algorithm().day_number_to_civil(day_number)
    }

    fn month_name(&self, year: i64, month: u8, abbreviated: bool) -> Result<&'static str, CalendarError> {
        self.algorithm().month_name(year, month, abbreviated)
    }
}

/// Metadata describing one calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarInfo {
    /// Short calendar name
    pub name:               &'static str,
    /// Symbolic constant name, e.g. `CAL_GREGORIAN`
    pub symbol:             &'static str,
    /// Month names keyed by month number
    pub months:             BTreeMap<u8, &'static str>,
    /// Abbreviated month names keyed by month number
    pub abbreviated_months: BTreeMap<u8, &'static str>,
    /// Longest month length
    pub max_days_in_month:  u8,
}
