//! Date conversion subcommands.

use anyhow::Result;
use tracing::info;

use luach_calendar::HebrewDate;

use crate::cli::{ToGregorianArgs, ToHebrewArgs};
use crate::parse::{format_date, parse_date, parse_field_order, DEFAULT_FIELD_ORDER};

/// Runs the `to-hebrew` subcommand.
pub fn to_hebrew(args: ToHebrewArgs) -> Result<()> {
    let order = match &args.order {
        Some(spec) => parse_field_order(spec)?,
        None => DEFAULT_FIELD_ORDER,
    };
    let raw = parse_date(&args.date, order)?;
    let date = HebrewDate::from_gregorian(raw.year, raw.month, raw.day)?;
    info!(day_count = date.day_count(), "converted Gregorian date");

    println!(
        "{}  ({} {} {}, {})",
        format_date(date.month(), date.day(), date.year()),
        date.day(),
        date.month_name(),
        date.year(),
        date.weekday().name()
    );
    Ok(())
}

/// Runs the `to-gregorian` subcommand.
pub fn to_gregorian(args: ToGregorianArgs) -> Result<()> {
    let order = match &args.order {
        Some(spec) => parse_field_order(spec)?,
        None => DEFAULT_FIELD_ORDER,
    };
    let raw = parse_date(&args.date, order)?;
    let date = HebrewDate::new(raw.year, raw.month, raw.day)?;
    info!(day_count = date.day_count(), "converted Hebrew date");

    let (year, month, day) = date.to_gregorian();
    println!(
        "{}  ({})",
        format_date(month, day, year),
        date.weekday().name()
    );
    Ok(())
}
