use crate::{CalendarAlgorithm, CivilDate, DayNumber, Gregorian};

pub fn jdn(value: i64) -> DayNumber {
    DayNumber::new(value)
}

pub fn date(year: i64, month: u8, day: u8) -> CivilDate {
    CivilDate::new(year, month, day)
}

/// Day number of a Gregorian date
pub fn gregorian(year: i64, month: u8, day: u8) -> DayNumber {
    Gregorian.civil_to_day_number(year, month, day).unwrap()
}
