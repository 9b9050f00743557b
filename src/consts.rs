/// Julian Day Number of 1970-01-01 (Gregorian), the Unix epoch day
pub const UNIX_EPOCH_DAY_NUMBER: i64 = 2_440_588;

/// Seconds in a civil day (no leap seconds)
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Days in a week
pub const DAYS_PER_WEEK: i64 = 7;

/// Largest absolute civil year accepted by the proleptic Gregorian and Julian calendars
pub const MAX_PROLEPTIC_YEAR: i64 = 1_000_000_000_000;

/// Months in a Gregorian or Julian year
pub const WESTERN_MONTHS: u8 = 12;

/// Month number of February, the only Western month whose length varies
pub const FEBRUARY: u8 = 2;

/// Length of February in a leap year
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Gregorian/Julian month lengths in a common year, January first
pub const WESTERN_MONTH_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Julian leap cycle in years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Gregorian century exception
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// Gregorian exception to the century exception
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Days in four Julian years
pub(crate) const DAYS_PER_4_YEARS: i64 = 1_461;
/// Days in four hundred Gregorian years
pub(crate) const DAYS_PER_400_YEARS: i64 = 146_097;
/// Days in the five-month March-based block (31+30+31+30+31)
pub(crate) const DAYS_PER_5_MONTHS: i64 = 153;
/// Offset that puts 4801 BCE, March 1 (Gregorian) at day zero
pub(crate) const GREGORIAN_DAY_OFFSET: i64 = 32_045;
/// Offset that puts 4801 BCE, March 1 (Julian) at day zero
pub(crate) const JULIAN_DAY_OFFSET: i64 = 32_083;
/// Years added to the astronomical year so the March-based year is never negative near the epoch
pub(crate) const MARCH_YEAR_SHIFT: i64 = 4_800;

// French Republican calendar

/// Months in a Republican year, the complementary days counted as month 13
pub const FRENCH_MONTHS: u8 = 13;
/// Days in each regular Republican month
pub const FRENCH_DAYS_PER_MONTH: u8 = 30;
/// Complementary ("Extra") days in a common Republican year
pub const FRENCH_EXTRA_DAYS: u8 = 5;
/// Complementary days in a Republican leap year
pub const FRENCH_EXTRA_DAYS_LEAP: u8 = 6;
/// First valid Republican year
pub const FRENCH_MIN_YEAR: i64 = 1;
/// Last valid Republican year
pub const FRENCH_MAX_YEAR: i64 = 14;
/// JDN of 1 Vendemiaire, year 1
pub const FRENCH_FIRST_DAY_NUMBER: i64 = 2_375_840;
/// JDN of the fifth complementary day of year 14
pub const FRENCH_LAST_DAY_NUMBER: i64 = 2_380_952;
/// Offset between JDN and the quadrennial Republican day count
pub(crate) const FRENCH_DAY_OFFSET: i64 = 2_375_474;
/// Position of the leap year in the fixed four-year Republican cycle
pub(crate) const FRENCH_LEAP_REMAINDER: i64 = 3;

// Jewish calendar

/// Months in a common Jewish year
pub const JEWISH_MONTHS: u8 = 12;
/// Months in a Jewish leap year
pub const JEWISH_MONTHS_LEAP: u8 = 13;
/// First valid Jewish year (anno mundi)
pub const JEWISH_MIN_YEAR: i64 = 1;
/// JDN of 1 Tishri, year 1
pub const JEWISH_FIRST_DAY_NUMBER: i64 = 347_998;
/// Largest JDN accepted by the Jewish calendar
pub const JEWISH_LAST_DAY_NUMBER: i64 = 324_542_846;
/// Largest year rendered as Hebrew text
pub const HEBREW_TEXT_MAX_YEAR: i64 = 9_999;

/// Offset between JDN and the day count used by molad arithmetic
pub(crate) const JEWISH_DAY_OFFSET: i64 = 347_997;
/// Halakim (parts) per hour
pub(crate) const HALAKIM_PER_HOUR: i64 = 1_080;
/// Halakim per day
pub(crate) const HALAKIM_PER_DAY: i64 = 24 * HALAKIM_PER_HOUR;
/// Mean lunation: 29 days, 12 hours, 793 parts
pub(crate) const HALAKIM_PER_LUNAR_CYCLE: i64 = 29 * HALAKIM_PER_DAY + 13_753;
/// Years in a Metonic cycle
pub(crate) const METONIC_CYCLE_YEARS: i64 = 19;
/// Lunations in a Metonic cycle
pub(crate) const MONTHS_PER_METONIC_CYCLE: i64 = 235;
/// Molad of Tishri, year 1: day 1 (Monday), 5 hours, 204 parts
pub(crate) const NEW_MOON_OF_CREATION: i64 = HALAKIM_PER_DAY + 5 * HALAKIM_PER_HOUR + 204;
/// Molad at or after noon postpones Rosh Hashanah
pub(crate) const NOON: i64 = 18 * HALAKIM_PER_HOUR;
/// 9h 204p, Tuesday threshold in a common year
pub(crate) const AM3_11_20: i64 = 9 * HALAKIM_PER_HOUR + 204;
/// 15h 589p, Monday threshold after a leap year
pub(crate) const AM9_32_43: i64 = 15 * HALAKIM_PER_HOUR + 589;
/// Mean Jewish year is `35_975_351 / 98_496` days; used to estimate the year of a day count
pub(crate) const MEAN_YEAR_NUMERATOR: i64 = 35_975_351;
pub(crate) const MEAN_YEAR_DENOMINATOR: i64 = 98_496;

/// Lunations elapsed from the start of a Metonic cycle to Tishri of each of its years
pub(crate) const METONIC_YEAR_OFFSET: [i64; 19] = [
    0, 12, 24, 37, 49, 61, 74, 86, 99, 111, 123, 136, 148, 160, 173, 185, 197, 210, 222,
];

/// Positions (`year mod 19`) of the leap years in the Metonic cycle
pub(crate) const METONIC_LEAP_POSITIONS: [i64; 7] = [0, 3, 6, 8, 11, 14, 17];

/// Month lengths of a regular common year, Tishri first
pub(crate) const JEWISH_MONTH_DAYS: [u8; 12] = [30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29];

/// Month lengths of a regular leap year, Tishri first; Adar I is month 6
pub(crate) const JEWISH_MONTH_DAYS_LEAP: [u8; 13] =
    [30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29];

/// Month number of Heshvan
pub const HESHVAN: u8 = 2;
/// Month number of Kislev
pub const KISLEV: u8 = 3;
