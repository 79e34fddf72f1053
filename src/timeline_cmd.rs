//! Timeline command: walk a calendar year and print which event is active.

use anyhow::Result;
use tracing::{info, info_span};

use mascot_calendar::{CalendarDate, date_sequence, days_in_year};
use mascot_events::{EventIdentity, EventTable, resolve};

use crate::cli::TimelineArgs;
use crate::config;
use crate::convert;

/// A maximal run of consecutive days with the same resolution result.
#[derive(Debug, PartialEq, Eq)]
pub struct Run {
    pub first: CalendarDate,
    pub last: CalendarDate,
    pub event: Option<EventIdentity>,
}

/// Resolves every day of `year` and collapses consecutive equal results.
pub fn timeline(table: &EventTable, year: i32) -> Result<Vec<Run>> {
    let start = CalendarDate::new(year, 1, 1)?;
    let mut runs: Vec<Run> = Vec::new();
    for day in date_sequence(start, usize::from(days_in_year(year))) {
        let event = resolve(day, table);
        match runs.last_mut() {
            Some(run) if run.event == event => run.last = day,
            _ => runs.push(Run {
                first: day,
                last: day,
                event,
            }),
        }
    }
    Ok(runs)
}

/// Run the timeline command.
pub fn run(args: TimelineArgs) -> Result<()> {
    let _cmd = info_span!("timeline", year = args.year).entered();
    let config = config::load(&args.config)?;
    let table = convert::build_event_table(&config.events)?;

    let runs = timeline(&table, args.year)?;
    info!(n_runs = runs.len(), "timeline computed");

    for run in &runs {
        let name = run.event.as_ref().map_or("-", |e| e.name());
        println!("{}..{}  {name}", run.first, run.last);
    }
    Ok(())
}
