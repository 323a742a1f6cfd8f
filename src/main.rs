mod cli;
mod convert_cmd;
mod holidays_cmd;
mod logging;
mod parse;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::ToHebrew(args) => convert_cmd::to_hebrew(args),
        Command::ToGregorian(args) => convert_cmd::to_gregorian(args),
        Command::Holidays(args) => holidays_cmd::run(args),
    }
}
