//! Clocks available to the CLI.

use anyhow::Result;
use chrono::Local;

use mascot_calendar::CalendarDate;
use mascot_events::{Clock, FixedClock};

use crate::convert;

/// The host's local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> CalendarDate {
        Local::now().date_naive().into()
    }
}

/// Either an explicit `--date` or the local clock.
#[derive(Debug, Clone, Copy)]
pub enum CliClock {
    Fixed(FixedClock),
    Local(LocalClock),
}

impl CliClock {
    /// Uses `date` when given, otherwise the local clock.
    pub fn from_arg(date: Option<&str>) -> Result<Self> {
        match date {
            Some(s) => Ok(Self::Fixed(FixedClock::new(convert::parse_date(s)?))),
            None => Ok(Self::Local(LocalClock)),
        }
    }
}

impl Clock for CliClock {
    fn today(&self) -> CalendarDate {
        match self {
            Self::Fixed(clock) => clock.today(),
            Self::Local(clock) => clock.today(),
        }
    }
}
