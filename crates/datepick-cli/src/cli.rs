use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Terminal host for the datepick engine.
#[derive(Parser)]
#[command(
    name = "datepick",
    version,
    about = "Drive a date/time picker from the terminal"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the days of a month.
    Days(DaysArgs),
    /// Print a resolved locale as JSON.
    Locale(LocaleArgs),
    /// Render the picker surface for a month.
    Grid(GridArgs),
    /// Drive one picker through scripted events.
    Run(RunArgs),
}

#[derive(clap::Args)]
pub struct DaysArgs {
    pub year: i32,

    /// Month, 1-12.
    #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,
}

#[derive(clap::Args)]
pub struct LocaleArgs {
    /// Language tag; unknown tags fall back to "us".
    pub lang: String,

    /// Year the synthesized year range is centered on (default: this year).
    #[arg(long)]
    pub year: Option<i32>,
}

#[derive(clap::Args)]
pub struct GridArgs {
    pub year: i32,

    /// Month, 1-12.
    #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,

    #[arg(long, default_value = "us")]
    pub lang: String,

    /// Show captions and the "select a day" prompt.
    #[arg(long)]
    pub label: bool,

    /// Pin "now" to an ISO timestamp instead of the system clock.
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// Initial value as an ISO timestamp (default: now).
    #[arg(long)]
    pub value: Option<String>,

    /// Enable hour/minute selection.
    #[arg(long)]
    pub time: bool,

    /// Show captions and the "select a day" prompt.
    #[arg(long)]
    pub label: bool,

    #[arg(long)]
    pub lang: Option<String>,

    /// Name of the hidden form field.
    #[arg(long)]
    pub name: Option<String>,

    /// JSON picker config; flags override its fields.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pin "now" to an ISO timestamp instead of the system clock.
    #[arg(long)]
    pub now: Option<String>,

    /// Print the text grid to stderr after each event while open.
    #[arg(long)]
    pub show: bool,

    /// Events: activate, dismiss, inside, year=<label>, month=<label>,
    /// day=<n>, hour=<label>, minute=<label>, hover=<n>, unhover.
    #[arg(required = true)]
    pub events: Vec<String>,
}
