//! # luach-holidays
//!
//! Jewish holiday and observance predicates over
//! [`HebrewDate`](luach_calendar::HebrewDate) values.
//!
//! Every rule is a pure, stateless function; the only configuration is
//! the [`Locale`] (diaspora vs. Israel customs). Fast days nominally on
//! a Saturday are resolved to their observed date (Tanis Esther moves
//! back to Thursday, the other fasts forward to Sunday); Shabbat
//! HaGadol is found by searching backward from 15 Nisan.
//!
//! ## Quick Start
//!
//! ```ignore
//! use luach_calendar::{month, HebrewDate};
//! use luach_holidays::{holidays_on, rules, Locale};
//!
//! let date = HebrewDate::new(5778, month::TISHRI, 10)?;
//! assert!(rules::is_yom_kippur(date));
//! assert_eq!(holidays_on(date, Locale::default()).len(), 1);
//! ```
//!
//! Not implemented, on purpose: the disputed Saturday postponement of
//! Shushan Purim, and the Israeli civil holidays (Yom HaShoah, Yom
//! HaZikaron, Yom HaAtzmaut), whose shift rules changed over time.

mod error;
mod registry;
pub mod rules;

pub use error::HolidayError;
pub use registry::{holidays_on, Holiday};
pub use rules::{hanukkah_day, Locale};
