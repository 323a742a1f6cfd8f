//! Holiday lookup subcommand.

use anyhow::Result;
use tracing::info;

use luach_calendar::HebrewDate;
use luach_holidays::{holidays_on, Locale};

use crate::cli::HolidaysArgs;
use crate::parse::{format_date, parse_date, parse_field_order, DEFAULT_FIELD_ORDER};

/// Runs the `holidays` subcommand.
pub fn run(args: HolidaysArgs) -> Result<()> {
    let order = match &args.order {
        Some(spec) => parse_field_order(spec)?,
        None => DEFAULT_FIELD_ORDER,
    };
    let raw = parse_date(&args.date, order)?;
    let date = if args.gregorian {
        HebrewDate::from_gregorian(raw.year, raw.month, raw.day)?
    } else {
        HebrewDate::new(raw.year, raw.month, raw.day)?
    };
    let locale = if args.israel {
        Locale::Israel
    } else {
        Locale::Diaspora
    };

    let found = holidays_on(date, locale);
    info!(
        day_count = date.day_count(),
        matches = found.len(),
        "evaluated holiday rules"
    );

    println!(
        "{}  ({} {} {}, {})",
        format_date(date.month(), date.day(), date.year()),
        date.day(),
        date.month_name(),
        date.year(),
        date.weekday().name()
    );
    if found.is_empty() {
        println!("no holidays or observances");
    } else {
        for holiday in found {
            println!("{}", holiday.name());
        }
    }
    Ok(())
}
