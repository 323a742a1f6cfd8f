//! An immutable Hebrew calendar date backed by a single day count.

use crate::convert::{
    day_count_to_gregorian, day_count_to_hebrew, gregorian_to_day_count, hebrew_to_day_count,
};
use crate::error::CalendarError;
use crate::month;
use crate::weekday::{day_of_week, Weekday};
use crate::year::is_leap_year;

/// A date in the Hebrew calendar.
///
/// The day count (Julian day number) is the identity of the date: two
/// dates are equal iff their day counts are equal, regardless of how
/// they were constructed. The resolved (year, month, day) view is
/// stored alongside it at construction, so accessors are free.
///
/// All operations return new values; a `HebrewDate` never mutates.
#[derive(Debug, Clone, Copy)]
pub struct HebrewDate {
    day_count: i64,
    year: i32,
    month: u8,
    day: u8,
}

impl PartialEq for HebrewDate {
    fn eq(&self, other: &Self) -> bool {
        self.day_count == other.day_count
    }
}

impl Eq for HebrewDate {}

impl std::hash::Hash for HebrewDate {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.day_count.hash(state);
    }
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HebrewDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.day_count.cmp(&other.day_count)
    }
}

impl HebrewDate {
    /// Creates a `HebrewDate` from Hebrew (year, month, day) components.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the components are not a valid date
    /// of the Hebrew calendar (see [`hebrew_to_day_count`]).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let day_count = hebrew_to_day_count(year, month, day)?;
        Ok(Self {
            day_count,
            year,
            month,
            day,
        })
    }

    /// Creates a `HebrewDate` from proleptic Gregorian components.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the Gregorian components are
    /// invalid or the date precedes Hebrew year 1.
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::from_day_count(gregorian_to_day_count(year, month, day)?)
    }

    /// Creates a `HebrewDate` from a day count (Julian day number).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::BeforeEpoch`] for day counts preceding
    /// 1 Tishri of year 1.
    pub fn from_day_count(day_count: i64) -> Result<Self, CalendarError> {
        let (year, month, day) = day_count_to_hebrew(day_count)?;
        Ok(Self {
            day_count,
            year,
            month,
            day,
        })
    }

    /// Returns the day count (Julian day number).
    pub fn day_count(self) -> i64 {
        self.day_count
    }

    /// Returns the Hebrew year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the Hebrew month number (Tishri = 1 .. Elul = 13).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=30).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the English name of the month, honoring the year shape
    /// (month 7 is "Adar" in common years, "Adar II" in leap years).
    pub fn month_name(self) -> &'static str {
        month::month_name(self.month, self.is_leap_year())
            .expect("HebrewDate always holds a valid month")
    }

    /// Returns whether the date falls in a leap year.
    pub fn is_leap_year(self) -> bool {
        is_leap_year(self.year)
    }

    /// Returns the same date in the proleptic Gregorian calendar.
    pub fn to_gregorian(self) -> (i32, u8, u8) {
        day_count_to_gregorian(self.day_count)
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        day_of_week(self.day_count)
    }

    /// Returns a new date `days` later.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::BeforeEpoch`] if the result precedes
    /// Hebrew year 1 (only possible with a negative `days`).
    pub fn add_days(self, days: i64) -> Result<Self, CalendarError> {
        Self::from_day_count(self.day_count + days)
    }

    /// Returns a new date `days` earlier.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::BeforeEpoch`] if the result precedes
    /// Hebrew year 1.
    pub fn sub_days(self, days: i64) -> Result<Self, CalendarError> {
        Self::from_day_count(self.day_count - days)
    }

    pub fn is_sunday(self) -> bool {
        self.weekday() == Weekday::Sunday
    }

    pub fn is_monday(self) -> bool {
        self.weekday() == Weekday::Monday
    }

    pub fn is_tuesday(self) -> bool {
        self.weekday() == Weekday::Tuesday
    }

    pub fn is_wednesday(self) -> bool {
        self.weekday() == Weekday::Wednesday
    }

    pub fn is_thursday(self) -> bool {
        self.weekday() == Weekday::Thursday
    }

    pub fn is_friday(self) -> bool {
        self.weekday() == Weekday::Friday
    }

    pub fn is_saturday(self) -> bool {
        self.weekday() == Weekday::Saturday
    }
}
