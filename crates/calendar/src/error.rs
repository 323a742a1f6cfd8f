//! Error types for the luach-calendar crate.

/// Error type for all fallible operations in the luach-calendar crate.
///
/// This enum covers validation failures for Hebrew year/month/day
/// components, Gregorian month/day components, and day counts that
/// precede the Hebrew epoch.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a Hebrew year is before year 1.
    #[error("invalid Hebrew year: {year} (must be >= 1)")]
    InvalidYear {
        /// The invalid year that was provided.
        year: i32,
    },

    /// Returned when a month number is not a month of the given Hebrew
    /// year. Month 6 (Adar I) only exists in leap years.
    #[error("invalid Hebrew month: {month} for year {year}")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
        /// The year for which the month is invalid.
        year: i32,
    },

    /// Returned when a day number exceeds the length of the given Hebrew
    /// month in the given year.
    #[error("invalid Hebrew day: {day} for month {month} of year {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year context (month lengths vary by year).
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a Gregorian month number is outside 1..=12.
    #[error("invalid Gregorian month: {month} (must be 1..=12)")]
    InvalidGregorianMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the length of the given
    /// Gregorian month.
    #[error("invalid Gregorian day: {day} for month {month} of year {year} (max {max_day})")]
    InvalidGregorianDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year context (February varies).
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a day count precedes 1 Tishri of Hebrew year 1.
    #[error("day count {day_count} precedes 1 Tishri of Hebrew year 1")]
    BeforeEpoch {
        /// The out-of-domain day count.
        day_count: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth {
            month: 6,
            year: 5775,
        };
        assert_eq!(err.to_string(), "invalid Hebrew month: 6 for year 5775");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 30,
            month: 2,
            year: 5778,
            max_day: 29,
        };
        assert_eq!(
            err.to_string(),
            "invalid Hebrew day: 30 for month 2 of year 5778 (max 29)"
        );
    }

    #[test]
    fn error_before_epoch() {
        let err = CalendarError::BeforeEpoch { day_count: 347_997 };
        assert_eq!(
            err.to_string(),
            "day count 347997 precedes 1 Tishri of Hebrew year 1"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::InvalidGregorianMonth { month: 13 };
        let b = CalendarError::InvalidGregorianMonth { month: 13 };
        assert_eq!(a, b);

        let c = CalendarError::InvalidGregorianMonth { month: 0 };
        assert_ne!(a, c);
    }
}
