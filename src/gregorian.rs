//! Proleptic Gregorian calendar.
//!
//! Closed-form conversion valid for every year in `±MAX_PROLEPTIC_YEAR`. Floor
//! division keeps the formulas exact for negative day numbers, so dates before
//! 4713 BCE need no special casing.

use crate::consts::{
    CENTURY_CYCLE, DAYS_PER_400_YEARS, DAYS_PER_4_YEARS, DAYS_PER_5_MONTHS, GREGORIAN_CYCLE,
    GREGORIAN_DAY_OFFSET, LEAP_YEAR_CYCLE, MAX_PROLEPTIC_YEAR, WESTERN_MONTHS,
};
use crate::error::check_day_number;
use crate::names::western_month_name;
use crate::western::{self, astronomical_year, from_march_based, march_based};
use crate::{Calendar, CalendarAlgorithm, CalendarError, CivilDate, DayNumber};

/// The proleptic Gregorian calendar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Gregorian;

impl Gregorian {
    /// Day number of 1 January of year `-MAX_PROLEPTIC_YEAR`
    pub const MIN_DAY_NUMBER: i64 = day_number(-MAX_PROLEPTIC_YEAR, 1, 1);
    /// Day number of 31 December of year `MAX_PROLEPTIC_YEAR`
    pub const MAX_DAY_NUMBER: i64 = day_number(MAX_PROLEPTIC_YEAR, 12, 31);

    pub const fn is_leap(year: i64) -> bool {
        let year = astronomical_year(year);
        (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || year % GREGORIAN_CYCLE == 0
    }
}

/// Day number of an already validated date
const fn day_number(year: i64, month: u8, day: u8) -> i64 {
    let (y, m) = march_based(year, month);
    day as i64 + (DAYS_PER_5_MONTHS * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - GREGORIAN_DAY_OFFSET
}

/// Civil date of a day number inside the supported span
const fn civil(day_number: i64) -> CivilDate {
    // Day count from 1 March 4801 BCE
    let a = day_number + GREGORIAN_DAY_OFFSET - 1;
    let centuries = (4 * a + 3).div_euclid(DAYS_PER_400_YEARS);
    let day_of_century = a - (DAYS_PER_400_YEARS * centuries).div_euclid(4);
    let years = (4 * day_of_century + 3).div_euclid(DAYS_PER_4_YEARS);
    let day_of_year = day_of_century - (DAYS_PER_4_YEARS * years).div_euclid(4);
    let month = (5 * day_of_year + 2).div_euclid(DAYS_PER_5_MONTHS);
    let day = day_of_year - (DAYS_PER_5_MONTHS * month + 2).div_euclid(5) + 1;

    let (year, month) = from_march_based(100 * centuries + years, month);
    CivilDate::new(year, month, day as u8)
}

impl CalendarAlgorithm for Gregorian {
    fn calendar(&self) -> Calendar {
        Calendar::Gregorian
    }

    fn is_leap_year(&self, year: i64) -> bool {
        Self::is_leap(year)
    }

    fn months_in_year(&self, _year: i64) -> u8 {
        WESTERN_MONTHS
    }

    fn days_in_month(&self, year: i64, month: u8) -> Result<u8, CalendarError> {
        western::validate(Calendar::Gregorian, Self::is_leap(year), year, month, None)
    }

    fn civil_to_day_number(&self, year: i64, month: u8, day: u8) -> Result<DayNumber, CalendarError> {
        western::validate(Calendar::Gregorian, Self::is_leap(year), year, month, Some(day))?;
        Ok(DayNumber::new(day_number(year, month, day)))
    }

    fn day_number_to_civil(&self, day_number: DayNumber) -> Result<CivilDate, CalendarError> {
        check_day_number(
            Calendar::Gregorian,
            day_number.get(),
            Self::MIN_DAY_NUMBER,
            Self::MAX_DAY_NUMBER,
        )?;
        Ok(civil(day_number.get()))
    }

    fn month_name(&self, year: i64, month: u8, abbreviated: bool) -> Result<&'static str, CalendarError> {
        western_month_name(month, abbreviated).ok_or(CalendarError::InvalidMonth {
            calendar: Calendar::Gregorian,
            year,
            month,
            max: WESTERN_MONTHS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, jdn};

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        i64,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
            TestCase {
                year:        -1,
                is_leap:     true,
                description: "1 BCE is astronomical year 0",
            },
            TestCase {
                year:        -5,
                is_leap:     true,
                description: "5 BCE is astronomical year -4",
            },
            TestCase {
                year:        -101,
                is_leap:     false,
                description: "101 BCE is astronomical year -100",
            },
            TestCase {
                year:        -401,
                is_leap:     true,
                description: "401 BCE is astronomical year -400",
            },
        ];

        for case in &cases {
            assert_eq!(
                Gregorian.is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_leap_years_per_400_year_cycle() {
        for start in [-2001, 1, 1601, 2001] {
            let count = (start..start + 400)
                .filter(|&year| year != 0 && Gregorian.is_leap_year(year))
                .count();
            assert_eq!(count, 97, "cycle starting at {start}");
        }
    }

    #[test]
    fn test_known_day_numbers() {
        assert_eq!(Gregorian.civil_to_day_number(2000, 1, 1).unwrap(), jdn(2_451_545));
        assert_eq!(Gregorian.civil_to_day_number(1970, 1, 1).unwrap(), jdn(2_440_588));
        assert_eq!(Gregorian.civil_to_day_number(1582, 10, 15).unwrap(), jdn(2_299_161));
        assert_eq!(Gregorian.civil_to_day_number(-4714, 11, 24).unwrap(), jdn(0));
        assert_eq!(Gregorian.civil_to_day_number(-1, 1, 1).unwrap(), jdn(1_721_060));
        assert_eq!(Gregorian.civil_to_day_number(1, 1, 1).unwrap(), jdn(1_721_426));
    }

    #[test]
    fn test_known_civil_dates() {
        assert_eq!(Gregorian.day_number_to_civil(jdn(2_451_545)).unwrap(), date(2000, 1, 1));
        assert_eq!(Gregorian.day_number_to_civil(jdn(0)).unwrap(), date(-4714, 11, 24));
        assert_eq!(Gregorian.day_number_to_civil(jdn(1_721_425)).unwrap(), date(-1, 12, 31));
        assert_eq!(
            Gregorian.day_number_to_civil(jdn(-1_000_000)).unwrap(),
            date(-7452, 12, 28)
        );
    }

    #[test]
    fn test_round_trip_day_numbers() {
        for value in (-800_000..3_000_000).step_by(37) {
            let civil = Gregorian.day_number_to_civil(jdn(value)).unwrap();
            let back = Gregorian
                .civil_to_day_number(civil.year, civil.month, civil.day)
                .unwrap();
            assert_eq!(back, jdn(value), "{civil}");
        }
    }

    #[test]
    fn test_round_trip_dates() {
        for year in [-4714, -401, -101, -5, -1, 1, 4, 1582, 1600, 1900, 2000, 2023, 2024] {
            for month in 1..=12 {
                let last = Gregorian.days_in_month(year, month).unwrap();
                for day in [1, 15, 28, last] {
                    let value = Gregorian.civil_to_day_number(year, month, day).unwrap();
                    assert_eq!(
                        Gregorian.day_number_to_civil(value).unwrap(),
                        date(year, month, day)
                    );
                }
            }
        }

        // February 29 exists exactly in the leap years and is followed by March 1
        for year in [-401, -5, -1, 4, 1600, 2000, 2024] {
            let leap_day = Gregorian.civil_to_day_number(year, 2, 29).unwrap();
            assert_eq!(Gregorian.day_number_to_civil(leap_day).unwrap(), date(year, 2, 29));
            let march = Gregorian.civil_to_day_number(year, 3, 1).unwrap();
            assert_eq!(march.get() - leap_day.get(), 1, "Year {year}");
        }
        for year in [-101, 1, 1900, 2023] {
            assert!(Gregorian.civil_to_day_number(year, 2, 29).is_err(), "Year {year}");
        }
    }

    #[test]
    fn test_round_trip_domain_edges() {
        for value in [
            Gregorian::MIN_DAY_NUMBER,
            Gregorian::MIN_DAY_NUMBER + 1,
            Gregorian::MAX_DAY_NUMBER - 1,
            Gregorian::MAX_DAY_NUMBER,
        ] {
            let civil = Gregorian.day_number_to_civil(jdn(value)).unwrap();
            let back = Gregorian
                .civil_to_day_number(civil.year, civil.month, civil.day)
                .unwrap();
            assert_eq!(back, jdn(value));
        }
        assert_eq!(
            Gregorian.day_number_to_civil(jdn(Gregorian::MAX_DAY_NUMBER)).unwrap(),
            date(MAX_PROLEPTIC_YEAR, 12, 31)
        );
    }

    #[test]
    fn test_day_number_out_of_range() {
        let result = Gregorian.day_number_to_civil(jdn(Gregorian::MAX_DAY_NUMBER + 1));
        assert!(matches!(result, Err(CalendarError::DayNumberOutOfRange { .. })));

        let result = Gregorian.day_number_to_civil(jdn(i64::MIN));
        assert!(matches!(result, Err(CalendarError::DayNumberOutOfRange { .. })));
    }

    #[test]
    fn test_invalid_fields() {
        assert!(matches!(
            Gregorian.civil_to_day_number(0, 1, 1),
            Err(CalendarError::InvalidYear { year: 0, .. })
        ));
        assert!(matches!(
            Gregorian.civil_to_day_number(2023, 2, 29),
            Err(CalendarError::InvalidDay { .. })
        ));
        assert!(matches!(
            Gregorian.days_in_month(2023, 14),
            Err(CalendarError::InvalidMonth { month: 14, .. })
        ));
        assert!(Gregorian.civil_to_day_number(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_days_in_month() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (month, days) in (1..=12).zip(expected) {
            assert_eq!(Gregorian.days_in_month(2023, month).unwrap(), days);
        }
        assert_eq!(Gregorian.days_in_month(2000, 2).unwrap(), 29);
        assert_eq!(Gregorian.days_in_month(1900, 2).unwrap(), 28);
        assert_eq!(Gregorian.months_in_year(2023), 12);
    }

    #[test]
    fn test_month_names() {
        assert_eq!(Gregorian.month_name(2023, 3, false).unwrap(), "March");
        assert_eq!(Gregorian.month_name(2023, 3, true).unwrap(), "Mar");
        assert!(Gregorian.month_name(2023, 0, false).is_err());
    }
}
