//! Holiday and observance predicates.
//!
//! Every predicate is a pure function of the date (and, where customs
//! differ, the [`Locale`]); none has side effects, so they may be
//! evaluated in any order against the same date.
//!
//! Sabbath postponements are decided by the weekday of the *nominal*
//! date: a fast nominally on a Saturday is observed on the following
//! Sunday (or, for Tanis Esther, the preceding Thursday).

use luach_calendar::{day_of_week, hebrew_to_day_count, month, HebrewDate, Weekday};

use crate::error::HolidayError;

/// Selects between diaspora and Israel observance rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Diaspora customs (the default): second festival days, later
    /// Chol HaMoed start.
    #[default]
    Diaspora,
    /// Israel customs.
    Israel,
}

impl Locale {
    /// Returns whether diaspora rules apply.
    pub fn is_diaspora(self) -> bool {
        matches!(self, Locale::Diaspora)
    }
}

/// Day count of a fixed (month, day) observance in the year of `date`.
///
/// The nominal dates used by the rules below exist in every year, so
/// this cannot fail for a valid `HebrewDate`.
fn nominal(date: HebrewDate, month: u8, day: u8) -> i64 {
    hebrew_to_day_count(date.year(), month, day)
        .expect("nominal observance date exists in every year")
}

/// A fast nominally on `(month, day)`, observed the next day (Sunday)
/// when the nominal date is a Saturday.
fn postponed_fast(date: HebrewDate, month: u8, day: u8) -> bool {
    let nominal = nominal(date, month, day);
    let observed = if day_of_week(nominal) == Weekday::Saturday {
        nominal + 1
    } else {
        nominal
    };
    date.day_count() == observed
}

pub fn is_erev_rosh_hashanah(date: HebrewDate) -> bool {
    date.month() == month::ELUL && date.day() == 29
}

pub fn is_rosh_hashanah_day_1(date: HebrewDate) -> bool {
    date.month() == month::TISHRI && date.day() == 1
}

pub fn is_rosh_hashanah_day_2(date: HebrewDate) -> bool {
    date.month() == month::TISHRI && date.day() == 2
}

/// Tzom Gedaliah: 3 Tishri, postponed to Sunday when it falls on
/// Saturday.
pub fn is_tzom_gedaliah(date: HebrewDate) -> bool {
    postponed_fast(date, month::TISHRI, 3)
}

pub fn is_erev_yom_kippur(date: HebrewDate) -> bool {
    date.month() == month::TISHRI && date.day() == 9
}

pub fn is_yom_kippur(date: HebrewDate) -> bool {
    date.month() == month::TISHRI && date.day() == 10
}

pub fn is_erev_sukkot(date: HebrewDate) -> bool {
    date.month() == month::TISHRI && date.day() == 14
}

pub fn is_sukkot_day_1(date: HebrewDate) -> bool {
    date.month() == month::TISHRI && date.day() == 15
}

pub fn is_sukkot_day_2(date: HebrewDate) -> bool {
    date.month() == month::TISHRI && date.day() == 16
}

/// Chol HaMoed Sukkot: 17-20 Tishri in the diaspora, 16-20 in Israel.
pub fn is_chol_hamoed_sukkot(date: HebrewDate, locale: Locale) -> bool {
    let first = if locale.is_diaspora() { 17 } else { 16 };
    date.month() == month::TISHRI && (first..=20).contains(&date.day())
}

pub fn is_hoshana_rabbah(date: HebrewDate) -> bool {
    date.month() == month::TISHRI && date.day() == 21
}

pub fn is_shemini_atzeret(date: HebrewDate) -> bool {
    date.month() == month::TISHRI && date.day() == 22
}

/// Simchat Torah: 23 Tishri in the diaspora; in Israel it coincides
/// with Shemini Atzeret.
pub fn is_simchat_torah(date: HebrewDate, locale: Locale) -> bool {
    if locale.is_diaspora() {
        date.month() == month::TISHRI && date.day() == 23
    } else {
        is_shemini_atzeret(date)
    }
}

pub fn is_isru_chag_sukkot(date: HebrewDate, locale: Locale) -> bool {
    let day = if locale.is_diaspora() { 24 } else { 23 };
    date.month() == month::TISHRI && date.day() == day
}

/// Whether `date` is the `day`-th day of Hanukkah (day 1 = 25 Kislev).
///
/// # Errors
///
/// Returns [`HolidayError::InvalidHanukkahDay`] for indices outside
/// 1..=8.
pub fn hanukkah_day(date: HebrewDate, day: u8) -> Result<bool, HolidayError> {
    if !(1..=8).contains(&day) {
        return Err(HolidayError::InvalidHanukkahDay { day });
    }
    let start = nominal(date, month::KISLEV, 25);
    Ok(date.day_count() == start + i64::from(day) - 1)
}

/// Whether `date` falls on any of the eight days of Hanukkah.
pub fn is_hanukkah(date: HebrewDate) -> bool {
    let start = nominal(date, month::KISLEV, 25);
    (start..start + 8).contains(&date.day_count())
}

/// Tzom Tevet: 10 Tevet, postponed to Sunday when it falls on Saturday.
pub fn is_tzom_tevet(date: HebrewDate) -> bool {
    postponed_fast(date, month::TEVET, 10)
}

pub fn is_tu_b_shevat(date: HebrewDate) -> bool {
    date.month() == month::SHEVAT && date.day() == 15
}

/// Purim Katan: 14 Adar I. Only exists in leap years; in a common year
/// month 6 never occurs, so this is simply false.
pub fn is_purim_katan(date: HebrewDate) -> bool {
    date.month() == month::ADAR_I && date.day() == 14
}

pub fn is_shushan_purim_katan(date: HebrewDate) -> bool {
    date.month() == month::ADAR_I && date.day() == 15
}

/// Tanis Esther: 13 Adar, observed on the preceding Thursday (11 Adar)
/// when the nominal date is a Saturday.
pub fn is_tanis_esther(date: HebrewDate) -> bool {
    let nominal = nominal(date, month::ADAR, 13);
    let observed = if day_of_week(nominal) == Weekday::Saturday {
        nominal - 2
    } else {
        nominal
    };
    date.day_count() == observed
}

pub fn is_purim(date: HebrewDate) -> bool {
    date.month() == month::ADAR && date.day() == 14
}

/// Shushan Purim: 15 Adar. Some customs postpone it to Sunday when it
/// falls on Saturday; that rule is disputed and deliberately not
/// implemented here.
pub fn is_shushan_purim(date: HebrewDate) -> bool {
    date.month() == month::ADAR && date.day() == 15
}

/// Shabbat HaGadol: the nearest Saturday on or before 15 Nisan, found
/// by stepping backward one day at a time.
pub fn is_shabbat_hagadol(date: HebrewDate) -> bool {
    let mut day_count = nominal(date, month::NISAN, 15);
    while day_of_week(day_count) != Weekday::Saturday {
        day_count -= 1;
    }
    date.day_count() == day_count
}

pub fn is_erev_pesach(date: HebrewDate) -> bool {
    date.month() == month::NISAN && date.day() == 14
}

pub fn is_pesach_day_1(date: HebrewDate) -> bool {
    date.month() == month::NISAN && date.day() == 15
}

pub fn is_pesach_day_2(date: HebrewDate) -> bool {
    date.month() == month::NISAN && date.day() == 16
}

/// Chol HaMoed Pesach: 17-20 Nisan in the diaspora, 16-20 in Israel.
pub fn is_chol_hamoed_pesach(date: HebrewDate, locale: Locale) -> bool {
    let first = if locale.is_diaspora() { 17 } else { 16 };
    date.month() == month::NISAN && (first..=20).contains(&date.day())
}

pub fn is_pesach_day_7(date: HebrewDate) -> bool {
    date.month() == month::NISAN && date.day() == 21
}

pub fn is_pesach_day_8(date: HebrewDate) -> bool {
    date.month() == month::NISAN && date.day() == 22
}

pub fn is_isru_chag_pesach(date: HebrewDate, locale: Locale) -> bool {
    let day = if locale.is_diaspora() { 23 } else { 22 };
    date.month() == month::NISAN && date.day() == day
}

pub fn is_pesach_sheini(date: HebrewDate) -> bool {
    date.month() == month::IYAR && date.day() == 14
}

pub fn is_lag_b_omer(date: HebrewDate) -> bool {
    date.month() == month::IYAR && date.day() == 18
}

pub fn is_yom_yerushalayim(date: HebrewDate) -> bool {
    date.month() == month::IYAR && date.day() == 28
}

pub fn is_erev_shavuot(date: HebrewDate) -> bool {
    date.month() == month::SIVAN && date.day() == 5
}

pub fn is_shavuot_day_1(date: HebrewDate) -> bool {
    date.month() == month::SIVAN && date.day() == 6
}

pub fn is_shavuot_day_2(date: HebrewDate) -> bool {
    date.month() == month::SIVAN && date.day() == 7
}

pub fn is_isru_chag_shavuot(date: HebrewDate, locale: Locale) -> bool {
    let day = if locale.is_diaspora() { 8 } else { 7 };
    date.month() == month::SIVAN && date.day() == day
}

/// Tzom Tammuz: 17 Tammuz, postponed to Sunday when it falls on
/// Saturday.
pub fn is_tzom_tammuz(date: HebrewDate) -> bool {
    postponed_fast(date, month::TAMMUZ, 17)
}

/// Tisha B'Av: 9 Av, postponed to Sunday when it falls on Saturday.
pub fn is_tisha_b_av(date: HebrewDate) -> bool {
    postponed_fast(date, month::AV, 9)
}

pub fn is_tu_b_av(date: HebrewDate) -> bool {
    date.month() == month::AV && date.day() == 15
}

/// Rosh Chodesh: the first day of a month, or the 30th day of the
/// preceding month.
pub fn is_rosh_chodesh(date: HebrewDate) -> bool {
    date.day() == 1 || date.day() == 30
}

#[cfg(test)]
mod tests {
    use super::*;
    use luach_calendar::HebrewDate;

    fn date(year: i32, month: u8, day: u8) -> HebrewDate {
        HebrewDate::new(year, month, day).unwrap()
    }

    #[test]
    fn fixed_dates() {
        assert!(is_yom_kippur(date(5778, month::TISHRI, 10)));
        assert!(!is_yom_kippur(date(5778, month::TISHRI, 11)));
        assert!(is_tu_b_shevat(date(5778, month::SHEVAT, 15)));
        assert!(is_purim(date(5778, month::ADAR, 14)));
        assert!(is_lag_b_omer(date(5778, month::IYAR, 18)));
    }

    #[test]
    fn rosh_chodesh_first_and_thirtieth() {
        assert!(is_rosh_chodesh(date(5778, month::TISHRI, 1)));
        assert!(is_rosh_chodesh(date(5778, month::KISLEV, 30)));
        assert!(!is_rosh_chodesh(date(5778, month::TISHRI, 2)));
    }

    #[test]
    fn shushan_purim_never_postponed() {
        // 15 Adar 5781 falls on a Saturday; the disputed postponement
        // is deliberately not applied.
        let shushan = date(5781, month::ADAR, 15);
        assert!(shushan.is_saturday());
        assert!(is_shushan_purim(shushan));
        assert!(!is_shushan_purim(date(5781, month::ADAR, 16)));
    }

    #[test]
    fn purim_katan_only_in_leap_years() {
        assert!(is_purim_katan(date(5774, month::ADAR_I, 14)));
        // In a common year no date carries month 6 at all.
        assert!(!is_purim_katan(date(5775, month::ADAR, 14)));
    }
}
