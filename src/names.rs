//! Month and weekday name tables.
//!
//! Tables are plain arrays indexed from month 1; the lookup functions take the
//! 1-based month number and return `None` outside the table. Jewish months use
//! ordinal numbering, so the table depends on whether the year is a leap year.

use serde::{Deserialize, Serialize};

/// Which generation of name tables to surface.
///
/// `Canonical` is the leap-aware table set. `Legacy` reproduces the older
/// single Jewish table ("AdarI"/"AdarII") in which the one Adar of a common
/// year is reported under the Adar I name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatVariant {
    #[default]
    Canonical,
    Legacy,
}

pub(crate) const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub(crate) const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub(crate) const WESTERN_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub(crate) const WESTERN_MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub(crate) const FRENCH_MONTH_NAMES: [&str; 13] = [
    "Vendemiaire",
    "Brumaire",
    "Frimaire",
    "Nivose",
    "Pluviose",
    "Ventose",
    "Germinal",
    "Floreal",
    "Prairial",
    "Messidor",
    "Thermidor",
    "Fructidor",
    "Extra",
];

const JEWISH_MONTH_NAMES: [&str; 12] = [
    "Tishri", "Heshvan", "Kislev", "Tevet", "Shevat", "Adar", "Nisan", "Iyyar", "Sivan", "Tammuz",
    "Av", "Elul",
];

pub(crate) const JEWISH_MONTH_NAMES_LEAP: [&str; 13] = [
    "Tishri", "Heshvan", "Kislev", "Tevet", "Shevat", "Adar I", "Adar II", "Nisan", "Iyyar",
    "Sivan", "Tammuz", "Av", "Elul",
];

const JEWISH_MONTH_NAMES_LEGACY: [&str; 13] = [
    "Tishri", "Heshvan", "Kislev", "Tevet", "Shevat", "AdarI", "AdarII", "Nisan", "Iyyar",
    "Sivan", "Tammuz", "Av", "Elul",
];

const HEBREW_MONTH_NAMES: [&str; 12] = [
    "תשרי", "חשון", "כסלו", "טבת", "שבט", "אדר", "ניסן", "אייר", "סיון", "תמוז", "אב", "אלול",
];

const HEBREW_MONTH_NAMES_LEAP: [&str; 13] = [
    "תשרי", "חשון", "כסלו", "טבת", "שבט", "אדר א'", "אדר ב'", "ניסן", "אייר", "סיון", "תמוז",
    "אב", "אלול",
];

// The legacy table spells both Adars the same way as the leap table.
const HEBREW_MONTH_NAMES_LEGACY: [&str; 13] = HEBREW_MONTH_NAMES_LEAP;

/// Looks up a 1-based month in a table
fn lookup<const N: usize>(table: &[&'static str; N], month: u8) -> Option<&'static str> {
    usize::from(month)
        .checked_sub(1)
        .and_then(|index| table.get(index))
        .copied()
}

/// Legacy tables always have 13 slots; a common year skips the Adar II slot.
const fn legacy_slot(month: u8, leap: bool) -> u8 {
    if leap || month < 7 { month } else { month + 1 }
}

/// Gregorian/Julian month name
pub fn western_month_name(month: u8, abbreviated: bool) -> Option<&'static str> {
    if abbreviated {
        lookup(&WESTERN_MONTH_ABBREVIATIONS, month)
    } else {
        lookup(&WESTERN_MONTH_NAMES, month)
    }
}

/// French Republican month name; month 13 is the complementary days
pub fn french_month_name(month: u8) -> Option<&'static str> {
    lookup(&FRENCH_MONTH_NAMES, month)
}

/// English name of an ordinal Jewish month
pub fn jewish_month_name(month: u8, leap: bool, variant: CompatVariant) -> Option<&'static str> {
    match (variant, leap) {
        (CompatVariant::Canonical, true) => lookup(&JEWISH_MONTH_NAMES_LEAP, month),
        (CompatVariant::Canonical, false) => lookup(&JEWISH_MONTH_NAMES, month),
        (CompatVariant::Legacy, _) => {
            if month > JEWISH_MONTH_NAMES.len() as u8 + u8::from(leap) {
                return None;
            }
            lookup(&JEWISH_MONTH_NAMES_LEGACY, legacy_slot(month, leap))
        }
    }
}

/// Hebrew-script name of an ordinal Jewish month
pub fn hebrew_month_name(month: u8, leap: bool, variant: CompatVariant) -> Option<&'static str> {
    match (variant, leap) {
        (CompatVariant::Canonical, true) => lookup(&HEBREW_MONTH_NAMES_LEAP, month),
        (CompatVariant::Canonical, false) => lookup(&HEBREW_MONTH_NAMES, month),
        (CompatVariant::Legacy, _) => {
            if month > HEBREW_MONTH_NAMES.len() as u8 + u8::from(leap) {
                return None;
            }
            lookup(&HEBREW_MONTH_NAMES_LEGACY, legacy_slot(month, leap))
        }
    }
}
