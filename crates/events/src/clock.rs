//! Sources of "today".

use mascot_calendar::CalendarDate;

/// Supplies the caller's local calendar date.
///
/// No timezone handling happens past this point: whatever date the clock
/// returns is authoritative.
pub trait Clock {
    /// Returns the current local date.
    fn today(&self) -> CalendarDate;
}

/// A clock frozen at one date. Used by tests and by explicit `--date` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(CalendarDate);

impl FixedClock {
    /// Creates a clock that always returns `date`.
    pub fn new(date: CalendarDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> CalendarDate,
{
    fn today(&self) -> CalendarDate {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_constant() {
        let date = CalendarDate::new(2024, 10, 15).unwrap();
        let clock = FixedClock::new(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.today(), date);
    }

    #[test]
    fn closure_is_a_clock() {
        let date = CalendarDate::new(2000, 8, 15).unwrap();
        let clock = move || date;
        assert_eq!(Clock::today(&clock), date);
    }
}
