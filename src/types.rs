use crate::consts::{DAYS_PER_WEEK, SECONDS_PER_DAY, UNIX_EPOCH_DAY_NUMBER};
use crate::names::{WEEKDAY_ABBREVIATIONS, WEEKDAY_NAMES};
use crate::prelude::*;
use crate::CalendarError;
use serde::{Deserialize, Serialize};

/// A Julian Day Number: days elapsed since 1 January 4713 BCE (proleptic Julian).
///
/// Every supported calendar converts to and from this value, so it is the
/// interchange key between calendars.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Deref,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct DayNumber(i64);

impl DayNumber {
    /// The Unix epoch, 1970-01-01
    pub const UNIX_EPOCH: Self = Self(UNIX_EPOCH_DAY_NUMBER);

    /// Wraps a raw day number
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the day number as i64
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Day of the week this day falls on
    pub const fn weekday(self) -> Weekday {
        crate::day_index::day_of_week(self)
    }

    /// The day `days` after this one, or `None` on overflow
    pub const fn checked_add(self, days: i64) -> Option<Self> {
        match self.0.checked_add(days) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Creates a day number from a count of days since the Unix epoch.
    /// Returns `None` if the result does not fit in an `i64`.
    pub const fn from_unix_day(unix_day: i64) -> Option<Self> {
        Self::UNIX_EPOCH.checked_add(unix_day)
    }

    /// Days since the Unix epoch (negative before 1970), saturating at the `i64` bounds
    pub const fn to_unix_day(self) -> i64 {
        self.0.saturating_sub(UNIX_EPOCH_DAY_NUMBER)
    }

    /// Day containing the given Unix timestamp, in UTC
    pub const fn from_unix_timestamp(seconds: i64) -> Self {
        Self(seconds.div_euclid(SECONDS_PER_DAY) + UNIX_EPOCH_DAY_NUMBER)
    }

    /// Unix timestamp of midnight UTC at the start of this day
    ///
    /// # Errors
    /// Returns `CalendarError::TimestampOutOfRange` if the timestamp overflows an `i64`.
    pub const fn to_unix_timestamp(self) -> Result<i64, CalendarError> {
        let seconds = match self.0.checked_sub(UNIX_EPOCH_DAY_NUMBER) {
            Some(days) => days.checked_mul(SECONDS_PER_DAY),
            None => None,
        };
        match seconds {
            Some(seconds) => Ok(seconds),
            None => Err(CalendarError::TimestampOutOfRange { day_number: self.0 }),
        }
    }
}

/// A `(year, month, day)` triple in some calendar.
///
/// The meaning of each field depends on the calendar that produced it; a
/// `CivilDate` is never stored on its own, it always comes from or goes to a
/// [`DayNumber`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct CivilDate {
    /// Year number; negative years are BCE in the proleptic calendars
    pub year:  i64,
    /// Month number starting at 1
    pub month: u8,
    /// Day of the month starting at 1
    pub day:   u8,
}

impl CivilDate {
    /// Zero-valued placeholder reported for out-of-range dates under the sentinel convention
    pub const SENTINEL: Self = Self::new(0, 0, 0);

    pub const fn new(year: i64, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns `(year, month, day)`
    pub const fn to_tuple(self) -> (i64, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// True for the zero-valued placeholder
    pub const fn is_sentinel(self) -> bool {
        self.year == 0 && self.month == 0 && self.day == 0
    }
}

impl From<(i64, u8, u8)> for CivilDate {
    fn from((year, month, day): (i64, u8, u8)) -> Self {
        Self::new(year, month, day)
    }
}

/// Day of the week, numbered from Sunday = 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday = 0,
    #[display(fmt = "Monday")]
    Monday = 1,
    #[display(fmt = "Tuesday")]
    Tuesday = 2,
    #[display(fmt = "Wednesday")]
    Wednesday = 3,
    #[display(fmt = "Thursday")]
    Thursday = 4,
    #[display(fmt = "Friday")]
    Friday = 5,
    #[display(fmt = "Saturday")]
    Saturday = 6,
}

impl Weekday {
    /// All weekdays, Sunday first
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Weekday for an index in `0..7`, or `None`
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as i64) < DAYS_PER_WEEK {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Index with Sunday = 0
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Full English name
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }

    /// Three-letter English abbreviation
    pub const fn abbreviation(self) -> &'static str {
        WEEKDAY_ABBREVIATIONS[self as usize]
    }
}
