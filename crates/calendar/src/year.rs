//! Hebrew year arithmetic: leap years, the molad, the Rosh Hashanah
//! postponement rules, and year/month lengths.
//!
//! All molad arithmetic is exact integer arithmetic in halakim
//! ("parts", 1080 per hour, 25920 per day). The postponement rules test
//! exact equality on fractional day boundaries, so floating point is
//! never used.

use crate::error::CalendarError;
use crate::month;
use crate::weekday::{day_of_week, Weekday};

/// Years of the 19-year Metonic cycle, counted with `year % 19`, that
/// are leap years. Verified against 5774 (leap) and 5775 (common).
const LEAP_YEAR_RESIDUES: [i32; 7] = [0, 3, 6, 8, 11, 14, 17];

/// Halakim per hour.
const PARTS_PER_HOUR: i64 = 1080;
/// Halakim per day.
const PARTS_PER_DAY: i64 = 24 * PARTS_PER_HOUR;
/// Mean synodic month: 29 days, 12 hours, 793 parts.
const MONTH_PARTS: i64 = 29 * PARTS_PER_DAY + 12 * PARTS_PER_HOUR + 793;
/// Julian day number of 1 Tishri, Hebrew year 1 (a Monday).
pub const HEBREW_EPOCH: i64 = 347_998;
/// Molad of Tishri, year 1 ("molad tohu"): 5 hours and 204 parts into
/// the Hebrew day of the epoch, measured in parts from JDN 0.
const MOLAD_TOHU_PARTS: i64 = HEBREW_EPOCH * PARTS_PER_DAY + 5 * PARTS_PER_HOUR + 204;

/// Molad at or after noon postpones Rosh Hashanah (the Hebrew day
/// starts at 18:00, so noon is 18 hours in).
const NOON_PARTS: i64 = 18 * PARTS_PER_HOUR;
/// GaTaRaD boundary: 9 hours 204 parts, for a Tuesday molad in a
/// common year.
const GATARAD_PARTS: i64 = 9 * PARTS_PER_HOUR + 204;
/// BeTuTaKPaT boundary: 15 hours 589 parts, for a Monday molad in a
/// year following a leap year.
const BETUTAKPAT_PARTS: i64 = 15 * PARTS_PER_HOUR + 589;

/// A mean lunar conjunction, split into a day count (Julian day number)
/// and parts within the Hebrew day (0..25920).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Molad {
    /// Julian day number of the Hebrew day containing the conjunction.
    pub day: i64,
    /// Halakim elapsed within that day, counted from 18:00 the prior
    /// evening.
    pub parts: u16,
}

/// Returns whether a Hebrew year is a leap year (13 months).
pub fn is_leap_year(year: i32) -> bool {
    LEAP_YEAR_RESIDUES.contains(&year.rem_euclid(19))
}

/// Returns the number of months in a Hebrew year: 13 for leap years,
/// 12 otherwise.
pub fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) {
        13
    } else {
        12
    }
}

/// Lunar months elapsed from the epoch to the molad of Tishri of `year`.
///
/// Each 19-year cycle contributes 235 months; within the running cycle,
/// `(7r + 1) / 19` counts the leap months among its first `r` years,
/// which reproduces [`LEAP_YEAR_RESIDUES`] exactly.
fn months_elapsed(year: i32) -> i64 {
    let y = i64::from(year) - 1;
    235 * (y / 19) + 12 * (y % 19) + (7 * (y % 19) + 1) / 19
}

/// Returns the molad of Tishri of `year`: the mean lunar conjunction
/// preceding (or starting) the year.
///
/// Years before 1 are outside the supported domain.
pub fn molad(year: i32) -> Molad {
    debug_assert!(year >= 1, "molad is only defined for years >= 1");
    let total = MOLAD_TOHU_PARTS + months_elapsed(year) * MONTH_PARTS;
    Molad {
        day: total / PARTS_PER_DAY,
        parts: (total % PARTS_PER_DAY) as u16,
    }
}

/// Returns the day count (Julian day number) of 1 Tishri of `year`,
/// applying the four postponement rules (dehiyot) to the molad:
///
/// 1. molad at or after noon: postpone one day;
/// 2. GaTaRaD: Tuesday molad at or after 9h 204p in a common year:
///    postpone one day (the lo-ADU rule then makes it two);
/// 3. BeTuTaKPaT: Monday molad at or after 15h 589p in a year
///    following a leap year: postpone one day;
/// 4. lo-ADU: never on Sunday, Wednesday, or Friday: postpone one day.
///
/// At most one of the molad-based rules fires for a given year; lo-ADU
/// is applied to the result.
pub fn rosh_hashanah(year: i32) -> i64 {
    let molad = molad(year);
    let parts = i64::from(molad.parts);
    let mut day = molad.day;

    if parts >= NOON_PARTS
        || (day_of_week(day) == Weekday::Tuesday
            && parts >= GATARAD_PARTS
            && !is_leap_year(year))
        || (day_of_week(day) == Weekday::Monday
            && parts >= BETUTAKPAT_PARTS
            && is_leap_year(year - 1))
    {
        day += 1;
    }

    if matches!(
        day_of_week(day),
        Weekday::Sunday | Weekday::Wednesday | Weekday::Friday
    ) {
        day += 1;
    }

    day
}

/// Returns the length of a Hebrew year in days.
///
/// # Panics
///
/// Panics if the computed length is not one of 353/354/355 for a common
/// year or 383/384/385 for a leap year. That is an internal consistency
/// failure in the molad arithmetic, not a caller error.
pub fn year_length(year: i32) -> u16 {
    let length = (rosh_hashanah(year + 1) - rosh_hashanah(year)) as u16;
    let leap = is_leap_year(year);
    match length {
        353..=355 if !leap => length,
        383..=385 if leap => length,
        _ => panic!(
            "Hebrew year {year} has impossible length {length} (leap: {leap}); \
             the molad arithmetic is broken"
        ),
    }
}

/// The shape of a Hebrew year, determined by how Heshvan and Kislev
/// absorb the year length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearKind {
    /// 353 or 383 days: Heshvan and Kislev both 29 days.
    Deficient,
    /// 354 or 384 days: Heshvan 29, Kislev 30.
    Regular,
    /// 355 or 385 days: Heshvan and Kislev both 30 days.
    Complete,
}

/// Returns the shape of a Hebrew year.
pub fn year_kind(year: i32) -> YearKind {
    match year_length(year) {
        353 | 383 => YearKind::Deficient,
        354 | 384 => YearKind::Regular,
        355 | 385 => YearKind::Complete,
        other => unreachable!("year_length returned unvalidated length {other}"),
    }
}

/// Returns the length in days (29 or 30) of a month of a Hebrew year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] for years before 1 and
/// [`CalendarError::InvalidMonth`] if `month` is not a month of that
/// year (month 6, Adar I, exists only in leap years).
pub fn month_length(year: i32, month: u8) -> Result<u8, CalendarError> {
    if year < 1 {
        return Err(CalendarError::InvalidYear { year });
    }
    let leap = is_leap_year(year);
    if !month::is_valid_month(month, leap) {
        return Err(CalendarError::InvalidMonth { month, year });
    }
    Ok(match month {
        month::TISHRI | month::SHEVAT | month::NISAN | month::SIVAN | month::AV => 30,
        month::TEVET | month::ADAR | month::IYAR | month::TAMMUZ | month::ELUL => 29,
        // Adar I only exists in leap years, where it is always full.
        month::ADAR_I => 30,
        month::HESHVAN => {
            if year_kind(year) == YearKind::Complete {
                30
            } else {
                29
            }
        }
        month::KISLEV => {
            if year_kind(year) == YearKind::Deficient {
                29
            } else {
                30
            }
        }
        _ => unreachable!("month {month} passed validity check"),
    })
}
