//! Error types for the luach-holidays crate.

/// Error type for fallible holiday queries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HolidayError {
    /// Returned when a Hanukkah day index is outside 1..=8.
    #[error("invalid Hanukkah day: {day} (must be 1..=8)")]
    InvalidHanukkahDay {
        /// The invalid day index that was provided.
        day: u8,
    },
}
