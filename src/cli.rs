use clap::{Parser, Subcommand};

/// Luach Hebrew calendar tool.
#[derive(Parser)]
#[command(
    name = "luach",
    version,
    about = "Hebrew calendar date conversions and holiday lookup"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date to the Hebrew calendar.
    ToHebrew(ToHebrewArgs),
    /// Convert a Hebrew date to the Gregorian calendar.
    ToGregorian(ToGregorianArgs),
    /// List holidays and observances falling on a date.
    Holidays(HolidaysArgs),
}

/// Arguments for the `to-hebrew` subcommand.
#[derive(clap::Args)]
pub struct ToHebrewArgs {
    /// Gregorian date, e.g. "3-29-2018".
    pub date: String,

    /// Field order of the date string, e.g. "year,month,day"
    /// [default: month,day,year].
    #[arg(short, long)]
    pub order: Option<String>,
}

/// Arguments for the `to-gregorian` subcommand.
#[derive(clap::Args)]
pub struct ToGregorianArgs {
    /// Hebrew date, e.g. "8-13-5778" (months numbered from Tishri).
    pub date: String,

    /// Field order of the date string, e.g. "year,month,day"
    /// [default: month,day,year].
    #[arg(short, long)]
    pub order: Option<String>,
}

/// Arguments for the `holidays` subcommand.
#[derive(clap::Args)]
pub struct HolidaysArgs {
    /// Date to look up (Hebrew unless --gregorian is given).
    pub date: String,

    /// Field order of the date string, e.g. "year,month,day"
    /// [default: month,day,year].
    #[arg(short, long)]
    pub order: Option<String>,

    /// Interpret the date as Gregorian.
    #[arg(short, long)]
    pub gregorian: bool,

    /// Use Israel observance rules instead of diaspora rules.
    #[arg(long)]
    pub israel: bool,
}
