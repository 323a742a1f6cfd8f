//! # luach-calendar
//!
//! Hebrew lunisolar calendar arithmetic from first principles: leap
//! years, the molad (mean lunar conjunction), the Rosh Hashanah
//! postponement rules, and bidirectional conversion between a
//! continuous day-count axis (Julian day numbers) and Hebrew or
//! proleptic Gregorian dates.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["year (molad + dehiyot)"] -->|"month_length()"| B["convert"]
//!     B -->|"hebrew_to_day_count()"| C["day count"]
//!     C -->|"day_count_to_hebrew()"| B
//!     C -->|"day_of_week()"| D["Weekday"]
//!     C --> E["HebrewDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use luach_calendar::{month, HebrewDate};
//!
//! let date = HebrewDate::from_gregorian(2018, 3, 29)?; // 13 Nisan 5778
//! assert_eq!((date.year(), date.month(), date.day()), (5778, month::NISAN, 13));
//!
//! let pesach = HebrewDate::new(5778, month::NISAN, 15)?;
//! assert!(pesach.is_saturday());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `year` | Leap years, molad, postponement rules, year/month lengths |
//! | `convert` | Day count <-> Hebrew and Gregorian triples |
//! | `date` | Immutable Hebrew date value |
//! | `month` | Month numbering and name tables |
//! | `weekday` | Day-of-week on the day-count axis |
//! | `error` | Error types |

mod convert;
mod date;
mod error;
pub mod month;
mod weekday;
mod year;

pub use convert::{
    day_count_to_gregorian, day_count_to_hebrew, gregorian_to_day_count, hebrew_to_day_count,
    is_gregorian_leap_year,
};
pub use date::HebrewDate;
pub use error::CalendarError;
pub use weekday::{day_of_week, Weekday};
pub use year::{
    is_leap_year, molad, month_length, months_in_year, rosh_hashanah, year_kind, year_length,
    Molad, YearKind, HEBREW_EPOCH,
};
