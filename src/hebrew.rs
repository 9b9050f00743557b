//! Hebrew letter numerals (gematria).
//!
//! Numbers are written additively: thousands, then hundreds (400s repeat
//! tav), tens and ones. 15 and 16 are written tet-vav and tet-zayin. The
//! thousands letter can be marked with a geresh and/or followed by the word
//! "alafim", and the remaining letters can carry gershayim punctuation.

use serde::{Deserialize, Serialize};

use crate::CalendarError;
use crate::consts::HEBREW_TEXT_MAX_YEAR;

const ONES: [char; 9] = ['א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט'];
const TENS: [char; 9] = ['י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ'];
const HUNDREDS: [char; 3] = ['ק', 'ר', 'ש'];
const FOUR_HUNDRED: char = 'ת';

const GERESH: char = '\'';
const GERSHAYIM: char = '"';
const ALAFIM: &str = " אלפים ";

/// Rendering options for Hebrew numerals.
///
/// The integer flag form matches the historical bit values: `2` for the
/// thousands geresh, `4` for the word "alafim" and `8` for gershayim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HebrewNumeralOptions {
    /// Geresh after the thousands letter
    pub alafim_geresh: bool,
    /// The word "alafim" after the thousands letter
    pub alafim:        bool,
    /// Geresh after a single letter, gershayim before the last of several
    pub gershayim:     bool,
}

impl HebrewNumeralOptions {
    pub const ALAFIM_GERESH: u8 = 2;
    pub const ALAFIM: u8 = 4;
    pub const GERSHAYIM: u8 = 8;

    /// Options with every punctuation flag set
    pub const ALL: Self = Self {
        alafim_geresh: true,
        alafim:        true,
        gershayim:     true,
    };

    /// Decodes the integer flag form; unknown bits are ignored
    pub const fn from_flags(flags: u8) -> Self {
        Self {
            alafim_geresh: flags & Self::ALAFIM_GERESH != 0,
            alafim:        flags & Self::ALAFIM != 0,
            gershayim:     flags & Self::GERSHAYIM != 0,
        }
    }

    pub const fn flags(self) -> u8 {
        let mut flags = 0;
        if self.alafim_geresh {
            flags |= Self::ALAFIM_GERESH;
        }
        if self.alafim {
            flags |= Self::ALAFIM;
        }
        if self.gershayim {
            flags |= Self::GERSHAYIM;
        }
        flags
    }
}

/// Writes `1..=9999` in Hebrew letters.
///
/// # Errors
/// Returns `CalendarError::HebrewTextOutOfRange` for any other value.
pub fn hebrew_numeral(value: i64, options: HebrewNumeralOptions) -> Result<String, CalendarError> {
    if !(1..=HEBREW_TEXT_MAX_YEAR).contains(&value) {
        return Err(CalendarError::HebrewTextOutOfRange { year: value });
    }
    // In range, so the cast and the index arithmetic below are exact.
    let mut n = value as usize;
    let mut text = String::new();

    if n >= 1000 {
        text.push(ONES[n / 1000 - 1]);
        if options.alafim_geresh {
            text.push(GERESH);
        }
        if options.alafim {
            text.push_str(ALAFIM);
        }
        n %= 1000;
    }

    let mut letters: Vec<char> = Vec::new();
    while n >= 400 {
        letters.push(FOUR_HUNDRED);
        n -= 400;
    }
    if n >= 100 {
        letters.push(HUNDREDS[n / 100 - 1]);
        n %= 100;
    }
    match n {
        15 | 16 => {
            letters.push(ONES[8]);
            letters.push(ONES[n - 10]);
        }
        _ => {
            if n >= 10 {
                letters.push(TENS[n / 10 - 1]);
            }
            if !n.is_multiple_of(10) {
                letters.push(ONES[n % 10 - 1]);
            }
        }
    }

    if options.gershayim {
        match letters.len() {
            0 => {}
            1 => letters.push(GERESH),
            len => letters.insert(len - 1, GERSHAYIM),
        }
    }
    text.extend(letters);
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: i64, flags: u8) -> String {
        hebrew_numeral(value, HebrewNumeralOptions::from_flags(flags)).unwrap()
    }

    #[test]
    fn test_numerals() {
        struct TestCase {
            value:    i64,
            flags:    u8,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                value:    1,
                flags:    0,
                expected: "א",
            },
            TestCase {
                value:    1,
                flags:    8,
                expected: "א'",
            },
            TestCase {
                value:    15,
                flags:    0,
                expected: "טו",
            },
            TestCase {
                value:    16,
                flags:    8,
                expected: "ט\"ז",
            },
            TestCase {
                value:    20,
                flags:    8,
                expected: "כ'",
            },
            TestCase {
                value:    27,
                flags:    0,
                expected: "כז",
            },
            TestCase {
                value:    115,
                flags:    0,
                expected: "קטו",
            },
            TestCase {
                value:    800,
                flags:    8,
                expected: "ת\"ת",
            },
            TestCase {
                value:    5782,
                flags:    0,
                expected: "התשפב",
            },
            TestCase {
                value:    5782,
                flags:    2,
                expected: "ה'תשפב",
            },
            TestCase {
                value:    5782,
                flags:    4,
                expected: "ה אלפים תשפב",
            },
            TestCase {
                value:    5782,
                flags:    14,
                expected: "ה' אלפים תשפ\"ב",
            },
            TestCase {
                value:    5783,
                flags:    8,
                expected: "התשפ\"ג",
            },
            TestCase {
                value:    5000,
                flags:    10,
                expected: "ה'",
            },
            TestCase {
                value:    9999,
                flags:    0,
                expected: "טתתקצט",
            },
        ];

        for case in &cases {
            assert_eq!(
                render(case.value, case.flags),
                case.expected,
                "{} with flags {}",
                case.value,
                case.flags
            );
        }
    }

    #[test]
    fn test_never_spells_divine_name() {
        for value in 1..1000 {
            let text = render(value, 0);
            assert!(!text.ends_with("יה") && !text.ends_with("יו"), "{value} -> {text}");
        }
    }

    #[test]
    fn test_out_of_range() {
        for value in [0, -1, 10_000] {
            assert_eq!(
                hebrew_numeral(value, HebrewNumeralOptions::default()),
                Err(CalendarError::HebrewTextOutOfRange { year: value })
            );
        }
    }

    #[test]
    fn test_flags_round_trip() {
        for flags in [0, 2, 4, 6, 8, 10, 12, 14] {
            assert_eq!(HebrewNumeralOptions::from_flags(flags).flags(), flags);
        }
        assert_eq!(HebrewNumeralOptions::from_flags(1), HebrewNumeralOptions::default());
        assert_eq!(HebrewNumeralOptions::ALL.flags(), 14);
    }

    #[test]
    fn test_options_deserialize() {
        let options: HebrewNumeralOptions = serde_json::from_str(r#"{"gershayim":true}"#).unwrap();
        assert_eq!(options.flags(), HebrewNumeralOptions::GERSHAYIM);

        let result = serde_json::from_str::<HebrewNumeralOptions>(r#"{"geresh":true}"#);
        assert!(result.is_err());
    }
}
