//! Compatibility boundary.
//!
//! The core algorithms always fail fast with a [`CalendarError`]. Callers that
//! need the historical behavior, with zero-valued placeholders instead of
//! errors and the legacy month-name tables, go through a [`Boundary`] built
//! from an explicit [`BoundaryConfig`]. Nothing here is inferred: the variant
//! and the error convention are always supplied by the caller.

use serde::{Deserialize, Serialize};

use crate::day_index;
use crate::hebrew::HebrewNumeralOptions;
use crate::names::CompatVariant;
use crate::prelude::*;
use crate::{Calendar, CalendarAlgorithm, CalendarError, CalendarInfo, CivilDate, DayNumber, Jewish};

/// How a [`Boundary`] reports failures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorConvention {
    /// Return the error
    #[default]
    Fail,
    /// Replace the error with the operation's zero-valued placeholder
    Sentinel,
}

/// Boundary configuration, usually deserialized from the host's settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "snake_case")]
pub struct BoundaryConfig {
    pub variant: CompatVariant,
    pub errors:  ErrorConvention,
}

/// Month-name selector of the historical interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum MonthNameMode {
    GregorianAbbreviated = 0,
    Gregorian = 1,
    JulianAbbreviated = 2,
    Julian = 3,
    Jewish = 4,
    French = 5,
}

impl MonthNameMode {
    pub const fn calendar(self) -> Calendar {
        match self {
            Self::GregorianAbbreviated | Self::Gregorian => Calendar::Gregorian,
            Self::JulianAbbreviated | Self::Julian => Calendar::Julian,
            Self::Jewish => Calendar::Jewish,
            Self::French => Calendar::FrenchRepublican,
        }
    }

    pub const fn is_abbreviated(self) -> bool {
        matches!(self, Self::GregorianAbbreviated | Self::JulianAbbreviated)
    }
}

impl TryFrom<u8> for MonthNameMode {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::GregorianAbbreviated),
            1 => Ok(Self::Gregorian),
            2 => Ok(Self::JulianAbbreviated),
            3 => Ok(Self::Julian),
            4 => Ok(Self::Jewish),
            5 => Ok(Self::French),
            _ => Err(CalendarError::UnknownCalendar(format!("month name mode {value}"))),
        }
    }
}

/// Day-of-week selector of the historical interface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum DayOfWeekMode {
    /// Index with Sunday = 0
    #[default]
    Number = 0,
    /// Full English name
    Name = 1,
    /// Three-letter English name
    Abbreviated = 2,
}

impl TryFrom<u8> for DayOfWeekMode {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Number),
            1 => Ok(Self::Name),
            2 => Ok(Self::Abbreviated),
            _ => Err(CalendarError::UnknownCalendar(format!("day of week mode {value}"))),
        }
    }
}

/// Result of [`Boundary::day_of_week`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(untagged)]
pub enum DayOfWeekValue {
    #[display(fmt = "{_0}")]
    Number(u8),
    #[display(fmt = "{_0}")]
    Name(&'static str),
}

/// The calendar operations, filtered through a [`BoundaryConfig`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Boundary {
    config: BoundaryConfig,
}

impl Boundary {
    pub const fn new(config: BoundaryConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> BoundaryConfig {
        self.config
    }

    /// Parses a calendar selector, a name or `0..=3`.
    ///
    /// # Errors
    /// Returns `CalendarError::UnknownCalendar` regardless of the error
    /// convention, so that an unknown selector never reaches the algorithms.
    pub fn calendar(&self, selector: &str) -> Result<Calendar, CalendarError> {
        selector.parse()
    }

    /// Day number of a date. Under the sentinel convention every failure,
    /// including an invalid field, yields day number 0.
    ///
    /// # Errors
    /// Under the fail convention, any conversion error.
    pub fn to_day_number(
        &self,
        calendar: Calendar,
        year: i64,
        month: u8,
        day: u8,
    ) -> Result<DayNumber, CalendarError> {
        let result = calendar.civil_to_day_number(year, month, day);
        self.settle("to_day_number", result, DayNumber::new(0), true)
    }

    /// Civil date of a day number; out-of-range days give `CivilDate::SENTINEL`
    /// under the sentinel convention.
    ///
    /// # Errors
    /// Under the fail convention, `CalendarError::DayNumberOutOfRange`.
    pub fn from_day_number(
        &self,
        calendar: Calendar,
        day_number: DayNumber,
    ) -> Result<CivilDate, CalendarError> {
        let result = calendar.day_number_to_civil(day_number);
        self.settle("from_day_number", result, CivilDate::SENTINEL, false)
    }

    /// Month name of a day number in the configured table variant; out-of-range
    /// days give an empty name under the sentinel convention.
    ///
    /// # Errors
    /// Under the fail convention, `CalendarError::DayNumberOutOfRange`.
    pub fn month_name(
        &self,
        mode: MonthNameMode,
        day_number: DayNumber,
    ) -> Result<&'static str, CalendarError> {
        let result = day_index::month_name(
            mode.calendar(),
            day_number,
            mode.is_abbreviated(),
            self.config.variant,
        );
        self.settle("month_name", result, "", false)
    }

    /// Day of the week in the requested form; defined for every day number
    pub const fn day_of_week(&self, day_number: DayNumber, mode: DayOfWeekMode) -> DayOfWeekValue {
        match mode {
            DayOfWeekMode::Number => DayOfWeekValue::Number(day_index::day_of_week_index(day_number)),
            DayOfWeekMode::Name => DayOfWeekValue::Name(day_index::weekday_name(day_number, false)),
            DayOfWeekMode::Abbreviated => {
                DayOfWeekValue::Name(day_index::weekday_name(day_number, true))
            }
        }
    }

    /// Length of a month; an out-of-range year gives 0 under the sentinel
    /// convention, an invalid month is always an error.
    ///
    /// # Errors
    /// `CalendarError::InvalidMonth`, and under the fail convention any
    /// out-of-range error.
    pub fn days_in_month(&self, calendar: Calendar, year: i64, month: u8) -> Result<u8, CalendarError> {
        let result = calendar.days_in_month(year, month);
        self.settle("days_in_month", result, 0, false)
    }

    /// Hebrew text of a Jewish date; out-of-range days give an empty string
    /// under the sentinel convention.
    ///
    /// # Errors
    /// Under the fail convention, `CalendarError::DayNumberOutOfRange` or
    /// `CalendarError::HebrewTextOutOfRange`.
    pub fn hebrew_text(
        &self,
        day_number: DayNumber,
        options: HebrewNumeralOptions,
    ) -> Result<String, CalendarError> {
        let result = Jewish.hebrew_text(day_number, options, self.config.variant);
        self.settle("hebrew_text", result, String::new(), false)
    }

    /// Month tables of a calendar in the configured variant
    pub fn calendar_info(&self, calendar: Calendar) -> CalendarInfo {
        calendar.info(self.config.variant)
    }

    /// Applies the error convention. Out-of-range errors become `sentinel`,
    /// invalid fields only when `recover_invalid` is set.
    fn settle<T>(
        &self,
        operation: &str,
        result: Result<T, CalendarError>,
        sentinel: T,
        recover_invalid: bool,
    ) -> Result<T, CalendarError> {
        match result {
            Err(error)
                if self.config.errors == ErrorConvention::Sentinel
                    && (error.is_out_of_range() || (recover_invalid && error.is_invalid_field())) =>
            {
                crate::debug_log!("{operation}: returning sentinel instead of error: {error}");
                Ok(sentinel)
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, gregorian, jdn};

    const FAIL: Boundary = Boundary::new(BoundaryConfig {
        variant: CompatVariant::Canonical,
        errors:  ErrorConvention::Fail,
    });

    const SENTINEL: Boundary = Boundary::new(BoundaryConfig {
        variant: CompatVariant::Legacy,
        errors:  ErrorConvention::Sentinel,
    });

    #[test]
    fn test_config_defaults() {
        let config: BoundaryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BoundaryConfig::default());
        assert_eq!(config.variant, CompatVariant::Canonical);
        assert_eq!(config.errors, ErrorConvention::Fail);
    }

    #[test]
    fn test_config_parsing() {
        let config: BoundaryConfig =
            serde_json::from_str(r#"{"variant":"legacy","errors":"sentinel"}"#).unwrap();
        assert_eq!(Boundary::new(config), SENTINEL);

        let unknown = serde_json::from_str::<BoundaryConfig>(r#"{"variant":"legacy","strict":true}"#);
        assert!(unknown.is_err());
        let bad_value = serde_json::from_str::<BoundaryConfig>(r#"{"errors":"ignore"}"#);
        assert!(bad_value.is_err());
    }

    #[test]
    fn test_to_day_number() {
        assert_eq!(
            FAIL.to_day_number(Calendar::Gregorian, 2000, 1, 1),
            Ok(jdn(2_451_545))
        );
        assert!(matches!(
            FAIL.to_day_number(Calendar::Gregorian, 2023, 2, 30),
            Err(CalendarError::InvalidDay { .. })
        ));
        assert_eq!(SENTINEL.to_day_number(Calendar::Gregorian, 2023, 2, 30), Ok(jdn(0)));
        assert_eq!(SENTINEL.to_day_number(Calendar::Gregorian, 0, 1, 1), Ok(jdn(0)));
        assert_eq!(SENTINEL.to_day_number(Calendar::FrenchRepublican, 15, 1, 1), Ok(jdn(0)));
        assert_eq!(SENTINEL.to_day_number(Calendar::Jewish, 5781, 13, 1), Ok(jdn(0)));
    }

    #[test]
    fn test_from_day_number() {
        assert_eq!(
            FAIL.from_day_number(Calendar::Jewish, gregorian(2021, 9, 10)),
            Ok(date(5782, 1, 4))
        );
        assert!(matches!(
            FAIL.from_day_number(Calendar::FrenchRepublican, jdn(0)),
            Err(CalendarError::DayNumberOutOfRange { .. })
        ));
        assert_eq!(
            SENTINEL.from_day_number(Calendar::FrenchRepublican, jdn(0)),
            Ok(CivilDate::SENTINEL)
        );
        assert_eq!(
            SENTINEL.from_day_number(Calendar::Jewish, jdn(100)),
            Ok(CivilDate::SENTINEL)
        );
    }

    #[test]
    fn test_month_name_modes() {
        let value = gregorian(2022, 3, 10);
        assert_eq!(FAIL.month_name(MonthNameMode::Gregorian, value), Ok("March"));
        assert_eq!(FAIL.month_name(MonthNameMode::GregorianAbbreviated, value), Ok("Mar"));
        assert_eq!(FAIL.month_name(MonthNameMode::Julian, value), Ok("February"));
        assert_eq!(FAIL.month_name(MonthNameMode::JulianAbbreviated, value), Ok("Feb"));
        assert_eq!(FAIL.month_name(MonthNameMode::Jewish, value), Ok("Adar II"));
        assert_eq!(SENTINEL.month_name(MonthNameMode::Jewish, value), Ok("AdarII"));

        assert!(FAIL.month_name(MonthNameMode::French, value).is_err());
        assert_eq!(SENTINEL.month_name(MonthNameMode::French, value), Ok(""));
    }

    #[test]
    fn test_mode_selectors() {
        for id in 0..=5 {
            let mode = MonthNameMode::try_from(id).unwrap();
            assert_eq!(mode as u8, id);
        }
        assert_eq!(MonthNameMode::try_from(5).unwrap().calendar(), Calendar::FrenchRepublican);
        assert!(matches!(
            MonthNameMode::try_from(6),
            Err(CalendarError::UnknownCalendar(_))
        ));

        assert_eq!(DayOfWeekMode::try_from(2), Ok(DayOfWeekMode::Abbreviated));
        assert!(DayOfWeekMode::try_from(3).is_err());
    }

    #[test]
    fn test_day_of_week_modes() {
        let value = gregorian(2000, 1, 1);
        assert_eq!(FAIL.day_of_week(value, DayOfWeekMode::Number), DayOfWeekValue::Number(6));
        assert_eq!(
            FAIL.day_of_week(value, DayOfWeekMode::Name),
            DayOfWeekValue::Name("Saturday")
        );
        assert_eq!(FAIL.day_of_week(value, DayOfWeekMode::Abbreviated).to_string(), "Sat");
        assert_eq!(FAIL.day_of_week(value, DayOfWeekMode::Number).to_string(), "6");

        let json = serde_json::to_string(&FAIL.day_of_week(value, DayOfWeekMode::Number)).unwrap();
        assert_eq!(json, "6");
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(FAIL.days_in_month(Calendar::Jewish, 5783, 2), Ok(30));
        assert!(matches!(
            FAIL.days_in_month(Calendar::FrenchRepublican, 20, 1),
            Err(CalendarError::YearOutOfRange { .. })
        ));
        assert_eq!(SENTINEL.days_in_month(Calendar::FrenchRepublican, 20, 1), Ok(0));
        assert!(matches!(
            SENTINEL.days_in_month(Calendar::Gregorian, 2000, 13),
            Err(CalendarError::InvalidMonth { .. })
        ));
    }

    #[test]
    fn test_hebrew_text() {
        let value = gregorian(2022, 3, 10);
        assert_eq!(
            FAIL.hebrew_text(value, HebrewNumeralOptions::default()).unwrap(),
            "ז אדר ב' התשפב"
        );
        assert_eq!(
            SENTINEL.hebrew_text(jdn(0), HebrewNumeralOptions::default()),
            Ok(String::new())
        );
        assert!(FAIL.hebrew_text(jdn(0), HebrewNumeralOptions::default()).is_err());
    }

    #[test]
    fn test_unknown_selector_is_never_masked() {
        assert_eq!(SENTINEL.calendar("1"), Ok(Calendar::Julian));
        assert_eq!(
            SENTINEL.calendar("coptic"),
            Err(CalendarError::UnknownCalendar("coptic".to_owned()))
        );
    }

    #[test]
    fn test_calendar_info_uses_variant() {
        assert_eq!(FAIL.calendar_info(Calendar::Jewish).months[&6], "Adar I");
        assert_eq!(SENTINEL.calendar_info(Calendar::Jewish).months[&6], "AdarI");
    }
}
