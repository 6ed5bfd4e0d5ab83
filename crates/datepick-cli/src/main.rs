mod cli;
mod commands;
mod logging;
mod script;

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
        Command::Days(args) => commands::days(args),
        Command::Locale(args) => commands::locale(args),
        Command::Grid(args) => commands::grid(args),
        Command::Run(args) => commands::run(args),
    }
}
