//! Resolve command: print the active event for a date.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use mascot_events::{Clock, EventResolver};

use crate::cli::ResolveArgs;
use crate::clock::CliClock;
use crate::config;
use crate::convert;

/// JSON shape printed by `resolve --json`.
#[derive(Debug, PartialEq, Serialize)]
struct ResolveReport {
    date: String,
    event: Option<String>,
}

/// Reads the clock once and resolves against that date, so the reported
/// date and event always agree.
fn report<C: Clock>(resolver: &EventResolver<C>) -> ResolveReport {
    let today = resolver.clock().today();
    let event = resolver.at(today);
    info!(%today, event = event.as_ref().map(|e| e.name()), "resolved");
    ResolveReport {
        date: today.to_string(),
        event: event.map(|e| e.name().to_owned()),
    }
}

/// Run the resolve command.
pub fn run(args: ResolveArgs) -> Result<()> {
    let _cmd = info_span!("resolve").entered();
    let config = config::load(&args.config)?;
    let table = convert::build_event_table(&config.events)?;
    let resolver = EventResolver::new(table, CliClock::from_arg(args.date.as_deref())?);

    let report = report(&resolver);
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{json}");
    } else {
        println!("{}", report.event.as_deref().unwrap_or("none"));
    }
    Ok(())
}
