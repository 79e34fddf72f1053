mod check_cmd;
mod cli;
mod clock;
mod config;
mod convert;
mod logging;
mod resolve_cmd;
mod sprite_cmd;
mod timeline_cmd;

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
        Command::Resolve(args) => resolve_cmd::run(args),
        Command::Check(args) => check_cmd::run(args),
        Command::Timeline(args) => timeline_cmd::run(args),
        Command::Sprite(args) => sprite_cmd::run(args),
    }
}
