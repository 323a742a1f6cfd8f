//! Month numbering and name tables for the Hebrew calendar.
//!
//! Months are numbered from Tishri (the start of the civil year). The
//! numbering is fixed across year shapes: Adar I is month 6 and exists
//! only in leap years, Adar (called Adar II in leap years) is month 7.
//! A common year therefore has the 12 valid months {1..=5, 7..=13} and
//! a leap year has all 13.

/// Tishri, month 1. Contains Rosh Hashanah, Yom Kippur, and Sukkot.
pub const TISHRI: u8 = 1;
/// Heshvan, month 2. 29 or 30 days depending on the year kind.
pub const HESHVAN: u8 = 2;
/// Kislev, month 3. 29 or 30 days depending on the year kind.
pub const KISLEV: u8 = 3;
/// Tevet, month 4.
pub const TEVET: u8 = 4;
/// Shevat, month 5.
pub const SHEVAT: u8 = 5;
/// Adar I, month 6. Leap years only.
pub const ADAR_I: u8 = 6;
/// Adar, month 7. In leap years this slot is Adar II.
pub const ADAR: u8 = 7;
/// Adar II, the leap-year name for month 7.
pub const ADAR_II: u8 = ADAR;
/// Nisan, month 8. Contains Pesach.
pub const NISAN: u8 = 8;
/// Iyar, month 9.
pub const IYAR: u8 = 9;
/// Sivan, month 10. Contains Shavuot.
pub const SIVAN: u8 = 10;
/// Tammuz, month 11.
pub const TAMMUZ: u8 = 11;
/// Av, month 12.
pub const AV: u8 = 12;
/// Elul, month 13. The last month of the civil year.
pub const ELUL: u8 = 13;

/// Months of a common year, in calendar order.
pub const COMMON_YEAR_MONTHS: [u8; 12] = [
    TISHRI, HESHVAN, KISLEV, TEVET, SHEVAT, ADAR, NISAN, IYAR, SIVAN, TAMMUZ, AV, ELUL,
];

/// Months of a leap year, in calendar order.
pub const LEAP_YEAR_MONTHS: [u8; 13] = [
    TISHRI, HESHVAN, KISLEV, TEVET, SHEVAT, ADAR_I, ADAR_II, NISAN, IYAR, SIVAN, TAMMUZ, AV, ELUL,
];

/// Month names for a common year, in calendar order.
#[rustfmt::skip]
const COMMON_YEAR_NAMES: [(u8, &str); 12] = [
    (TISHRI, "Tishri"),
    (HESHVAN, "Heshvan"),
    (KISLEV, "Kislev"),
    (TEVET, "Tevet"),
    (SHEVAT, "Shevat"),
    (ADAR, "Adar"),
    (NISAN, "Nisan"),
    (IYAR, "Iyar"),
    (SIVAN, "Sivan"),
    (TAMMUZ, "Tammuz"),
    (AV, "Av"),
    (ELUL, "Elul"),
];

/// Month names for a leap year, in calendar order.
#[rustfmt::skip]
const LEAP_YEAR_NAMES: [(u8, &str); 13] = [
    (TISHRI, "Tishri"),
    (HESHVAN, "Heshvan"),
    (KISLEV, "Kislev"),
    (TEVET, "Tevet"),
    (SHEVAT, "Shevat"),
    (ADAR_I, "Adar I"),
    (ADAR_II, "Adar II"),
    (NISAN, "Nisan"),
    (IYAR, "Iyar"),
    (SIVAN, "Sivan"),
    (TAMMUZ, "Tammuz"),
    (AV, "Av"),
    (ELUL, "Elul"),
];

/// Returns the months of a year in calendar order.
pub fn months_of_year(leap_year: bool) -> &'static [u8] {
    if leap_year {
        &LEAP_YEAR_MONTHS
    } else {
        &COMMON_YEAR_MONTHS
    }
}

/// Returns whether `month` is a month of a year with the given shape.
pub fn is_valid_month(month: u8, leap_year: bool) -> bool {
    months_of_year(leap_year).contains(&month)
}

/// Returns the English name of `month` in a year with the given shape,
/// or `None` if the month number is not valid for that shape.
///
/// Month 7 is named "Adar" in common years and "Adar II" in leap years.
pub fn month_name(month: u8, leap_year: bool) -> Option<&'static str> {
    let table: &[(u8, &str)] = if leap_year {
        &LEAP_YEAR_NAMES
    } else {
        &COMMON_YEAR_NAMES
    };
    table.iter().find(|&&(m, _)| m == month).map(|&(_, name)| name)
}
