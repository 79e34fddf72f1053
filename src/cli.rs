use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Mascot event resolver.
#[derive(Parser)]
#[command(
    name = "mascot",
    version,
    about = "Clickable mascot with calendar-bound event skins"
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
    /// Print the active event for a date.
    Resolve(ResolveArgs),
    /// Validate the configuration and list the event table.
    Check(CheckArgs),
    /// Print the active event for every day of a year, as runs.
    Timeline(TimelineArgs),
    /// Print the sprite a character shows on a date.
    Sprite(SpriteArgs),
}

/// Arguments for the `resolve` subcommand.
#[derive(clap::Args)]
pub struct ResolveArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "mascot.toml")]
    pub config: PathBuf,

    /// Date to resolve (YYYY-MM-DD). Defaults to today's local date.
    #[arg(short, long)]
    pub date: Option<String>,

    /// Print a JSON object instead of the bare event name.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "mascot.toml")]
    pub config: PathBuf,
}

/// Arguments for the `timeline` subcommand.
#[derive(clap::Args)]
pub struct TimelineArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "mascot.toml")]
    pub config: PathBuf,

    /// Calendar year to walk.
    #[arg(short, long)]
    pub year: i32,
}

/// Arguments for the `sprite` subcommand.
#[derive(clap::Args)]
pub struct SpriteArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "mascot.toml")]
    pub config: PathBuf,

    /// Character name as given in the configuration.
    #[arg(long = "character", visible_alias = "char")]
    pub character: String,

    /// Sprite state: `idle` or `clicked`.
    #[arg(short, long, default_value = "idle")]
    pub state: String,

    /// Date to resolve (YYYY-MM-DD). Defaults to today's local date.
    #[arg(short, long)]
    pub date: Option<String>,
}
