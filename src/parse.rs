//! Lenient textual date parsing and formatting.
//!
//! A date renders as `"{month}-{day}-{year}"`. The parser extracts the
//! first three groups of consecutive digits from the input and assigns
//! them to fields according to a field-order configuration, so
//! "8-13-5778", "8/13/5778", and "month 8, day 13, year 5778" all parse
//! the same way. Calendar validation happens afterwards, when the
//! components are handed to `HebrewDate`.

use anyhow::{bail, Context, Result};

/// A date component the parser can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Month,
    Day,
    Year,
}

/// The default field order: month, day, year.
pub const DEFAULT_FIELD_ORDER: [Field; 3] = [Field::Month, Field::Day, Field::Year];

/// Date components extracted from text, not yet validated against any
/// calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// Parses a date string by extracting its first three digit groups and
/// assigning them per `order`.
///
/// # Errors
///
/// Fails if the input holds fewer than three digit groups or a group
/// does not fit its field's range.
pub fn parse_date(input: &str, order: [Field; 3]) -> Result<RawDate> {
    let groups: Vec<&str> = input
        .split(|c: char| !c.is_ascii_digit())
        .filter(|group| !group.is_empty())
        .take(3)
        .collect();
    if groups.len() < 3 {
        bail!(
            "expected three numeric fields in {input:?}, found {}",
            groups.len()
        );
    }

    let mut year: i32 = 0;
    let mut month: u8 = 0;
    let mut day: u8 = 0;
    for (field, group) in order.iter().zip(&groups) {
        match field {
            Field::Year => {
                year = group
                    .parse()
                    .with_context(|| format!("year field {group:?} out of range"))?;
            }
            Field::Month => {
                month = group
                    .parse()
                    .with_context(|| format!("month field {group:?} out of range"))?;
            }
            Field::Day => {
                day = group
                    .parse()
                    .with_context(|| format!("day field {group:?} out of range"))?;
            }
        }
    }
    Ok(RawDate { year, month, day })
}

/// Parses a comma-separated field order like "year,month,day".
///
/// # Errors
///
/// Fails on unknown field names and on orders that do not name each of
/// the three fields exactly once.
pub fn parse_field_order(s: &str) -> Result<[Field; 3]> {
    let mut fields = Vec::with_capacity(3);
    for part in s.split(',') {
        let field = match part.trim().to_lowercase().as_str() {
            "month" | "m" => Field::Month,
            "day" | "d" => Field::Day,
            "year" | "y" => Field::Year,
            other => bail!("unknown date field: {other:?}"),
        };
        if fields.contains(&field) {
            bail!("duplicate date field in order {s:?}");
        }
        fields.push(field);
    }
    if fields.len() != 3 {
        bail!("field order must name month, day, and year; got {s:?}");
    }
    Ok([fields[0], fields[1], fields[2]])
}

/// Renders a date in the canonical `"{month}-{day}-{year}"` form.
pub fn format_date(month: u8, day: u8, year: i32) -> String {
    format!("{month}-{day}-{year}")
}
