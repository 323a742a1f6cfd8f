//! Bidirectional mapping between the continuous day-count axis and
//! Hebrew or Gregorian (year, month, day) triples.
//!
//! The day-count axis is the Julian day number. It is the single source
//! of truth for date identity: the Hebrew and Gregorian mappings are two
//! views of the same axis and agree on every day count.

use tracing::debug;

use crate::error::CalendarError;
use crate::month;
use crate::year::{is_leap_year, month_length, rosh_hashanah, HEBREW_EPOCH};

/// Converts a Hebrew (year, month, day) triple to a day count.
///
/// # Errors
///
/// Returns [`CalendarError`] if the year is before 1, the month is not
/// a month of that year, or the day exceeds the month length.
pub fn hebrew_to_day_count(year: i32, month: u8, day: u8) -> Result<i64, CalendarError> {
    if year < 1 {
        return Err(CalendarError::InvalidYear { year });
    }
    let leap = is_leap_year(year);
    if !month::is_valid_month(month, leap) {
        return Err(CalendarError::InvalidMonth { month, year });
    }
    let max_day = month_length(year, month)?;
    if day == 0 || day > max_day {
        return Err(CalendarError::InvalidDay {
            day,
            month,
            year,
            max_day,
        });
    }

    let mut day_count = rosh_hashanah(year);
    for &m in month::months_of_year(leap) {
        if m == month {
            break;
        }
        day_count += i64::from(month_length(year, m)?);
    }
    Ok(day_count + i64::from(day) - 1)
}

/// Converts a day count to a Hebrew (year, month, day) triple.
///
/// The year is located by walking forward from an underestimate;
/// `rosh_hashanah` is strictly increasing, so the walk is bounded.
///
/// # Errors
///
/// Returns [`CalendarError::BeforeEpoch`] for day counts preceding
/// 1 Tishri of year 1.
pub fn day_count_to_hebrew(day_count: i64) -> Result<(i32, u8, u8), CalendarError> {
    if day_count < HEBREW_EPOCH {
        return Err(CalendarError::BeforeEpoch { day_count });
    }

    // No Hebrew year exceeds 385 days, so elapsed/366 never overshoots.
    let mut year = ((day_count - HEBREW_EPOCH) / 366) as i32 + 1;
    while rosh_hashanah(year + 1) <= day_count {
        year += 1;
    }
    debug!(day_count, year, "resolved Hebrew year");

    let mut remaining = day_count - rosh_hashanah(year);
    for &m in month::months_of_year(is_leap_year(year)) {
        let length = i64::from(month_length(year, m)?);
        if remaining < length {
            return Ok((year, m, (remaining + 1) as u8));
        }
        remaining -= length;
    }
    unreachable!("day count {day_count} exceeds the months of year {year}")
}

/// Returns whether a proleptic Gregorian year is a leap year.
pub fn is_gregorian_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn gregorian_month_length(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_gregorian_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!("month {month} validated by caller"),
    }
}

/// Converts a proleptic Gregorian (year, month, day) triple to a day
/// count, using the closed-form Fliegel-Van Flandern formula.
///
/// # Errors
///
/// Returns [`CalendarError`] if the month is outside 1..=12 or the day
/// exceeds the month length (February 29 only in leap years).
pub fn gregorian_to_day_count(year: i32, month: u8, day: u8) -> Result<i64, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidGregorianMonth { month });
    }
    let max_day = gregorian_month_length(year, month);
    if day == 0 || day > max_day {
        return Err(CalendarError::InvalidGregorianDay {
            day,
            month,
            year,
            max_day,
        });
    }

    let y = i64::from(year);
    let m = i64::from(month);
    let d = i64::from(day);
    // Shift the year to start in March so leap days fall at the end.
    let a = (14 - m) / 12;
    let shifted_year = y + 4800 - a;
    let shifted_month = m + 12 * a - 3;
    Ok(d
        + (153 * shifted_month + 2) / 5
        + 365 * shifted_year
        + shifted_year / 4
        - shifted_year / 100
        + shifted_year / 400
        - 32_045)
}

/// Converts a day count to a proleptic Gregorian (year, month, day)
/// triple. Inverse of [`gregorian_to_day_count`] for non-negative day
/// counts.
pub fn day_count_to_gregorian(day_count: i64) -> (i32, u8, u8) {
    let a = day_count + 32_044;
    let b = (4 * a + 3) / 146_097;
    let c = a - 146_097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;

    let day = (e - (153 * m + 2) / 5 + 1) as u8;
    let month = (m + 3 - 12 * (m / 10)) as u8;
    let year = (100 * b + d - 4800 + m / 10) as i32;
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hebrew_epoch_is_first_day() {
        assert_eq!(hebrew_to_day_count(1, 1, 1).unwrap(), HEBREW_EPOCH);
        assert_eq!(day_count_to_hebrew(HEBREW_EPOCH).unwrap(), (1, 1, 1));
    }

    #[test]
    fn day_before_epoch_rejected() {
        assert_eq!(
            day_count_to_hebrew(HEBREW_EPOCH - 1).unwrap_err(),
            CalendarError::BeforeEpoch {
                day_count: HEBREW_EPOCH - 1
            }
        );
    }

    #[test]
    fn hebrew_to_day_count_known_date() {
        // 13 Nisan 5778 = 2018-03-29 = JDN 2458207.
        assert_eq!(hebrew_to_day_count(5778, 8, 13).unwrap(), 2_458_207);
    }

    #[test]
    fn hebrew_rejects_year_zero() {
        assert_eq!(
            hebrew_to_day_count(0, 1, 1).unwrap_err(),
            CalendarError::InvalidYear { year: 0 }
        );
    }

    #[test]
    fn hebrew_rejects_adar_i_in_common_year() {
        assert_eq!(
            hebrew_to_day_count(5775, month::ADAR_I, 14).unwrap_err(),
            CalendarError::InvalidMonth {
                month: 6,
                year: 5775,
            }
        );
    }

    #[test]
    fn hebrew_rejects_day_30_in_short_month() {
        // Heshvan 5778 has 29 days (regular year).
        assert_eq!(
            hebrew_to_day_count(5778, month::HESHVAN, 30).unwrap_err(),
            CalendarError::InvalidDay {
                day: 30,
                month: 2,
                year: 5778,
                max_day: 29,
            }
        );
    }

    #[test]
    fn hebrew_rejects_day_zero() {
        assert_eq!(
            hebrew_to_day_count(5778, month::TISHRI, 0).unwrap_err(),
            CalendarError::InvalidDay {
                day: 0,
                month: 1,
                year: 5778,
                max_day: 30,
            }
        );
    }

    #[test]
    fn gregorian_known_day_counts() {
        let cases: &[((i32, u8, u8), i64)] = &[
            ((2000, 1, 1), 2_451_545),
            ((2018, 3, 25), 2_458_203),
            ((2018, 3, 29), 2_458_207),
            ((2017, 9, 21), 2_458_018), // 1 Tishri 5778
        ];
        for &((y, m, d), expected) in cases {
            assert_eq!(
                gregorian_to_day_count(y, m, d).unwrap(),
                expected,
                "{y}-{m}-{d}"
            );
            assert_eq!(day_count_to_gregorian(expected), (y, m, d));
        }
    }

    #[test]
    fn gregorian_leap_year_rules() {
        assert!(is_gregorian_leap_year(2000));
        assert!(is_gregorian_leap_year(2016));
        assert!(!is_gregorian_leap_year(1900));
        assert!(!is_gregorian_leap_year(2018));
    }

    #[test]
    fn gregorian_feb_29_only_in_leap_years() {
        assert!(gregorian_to_day_count(2000, 2, 29).is_ok());
        assert_eq!(
            gregorian_to_day_count(1900, 2, 29).unwrap_err(),
            CalendarError::InvalidGregorianDay {
                day: 29,
                month: 2,
                year: 1900,
                max_day: 28,
            }
        );
    }

    #[test]
    fn gregorian_rejects_month_13() {
        assert_eq!(
            gregorian_to_day_count(2018, 13, 1).unwrap_err(),
            CalendarError::InvalidGregorianMonth { month: 13 }
        );
    }

    #[test]
    fn gregorian_round_trip_across_leap_boundary() {
        let start = gregorian_to_day_count(2000, 2, 27).unwrap();
        for offset in 0..5 {
            let dc = start + offset;
            let (y, m, d) = day_count_to_gregorian(dc);
            assert_eq!(gregorian_to_day_count(y, m, d).unwrap(), dc);
        }
    }

    #[test]
    fn calendars_agree_on_the_axis() {
        // Both views of JDN 2458207.
        assert_eq!(
            gregorian_to_day_count(2018, 3, 29).unwrap(),
            hebrew_to_day_count(5778, 8, 13).unwrap()
        );
    }
}
