//! Active-event resolution.

use mascot_calendar::CalendarDate;
use tracing::{debug, trace};

use crate::clock::Clock;
use crate::table::EventTable;
use crate::window::EventWindow;

/// Identity of the active event, handed to sprite selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventIdentity {
    name: String,
}

impl EventIdentity {
    /// Creates an identity for the named event.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the event name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&EventWindow> for EventIdentity {
    fn from(window: &EventWindow) -> Self {
        Self::new(window.name())
    }
}

/// Returns the first `(key, window)` in table order that contains `today`.
pub fn active_window(today: CalendarDate, table: &EventTable) -> Option<(&str, &EventWindow)> {
    table.iter().find(|(key, window)| {
        let hit = window.contains(today);
        trace!(%today, key, window = %window, hit, "checked window");
        hit
    })
}

/// Resolves the active event for `today`.
///
/// Windows are scanned in declaration order and the first containing window
/// wins, even when a later one is narrower. `None` means no event is active
/// and the default appearance applies.
///
/// # Example
///
/// ```
/// use mascot_calendar::{CalendarDate, MonthDay};
/// use mascot_events::{EventTable, EventWindow, resolve};
///
/// let halloween = EventWindow::yearly(
///     "halloween",
///     MonthDay::new(10, 1).unwrap(),
///     MonthDay::new(10, 31).unwrap(),
/// )
/// .unwrap();
/// let table = EventTable::from_windows([halloween]).unwrap();
///
/// let today = CalendarDate::new(2024, 10, 15).unwrap();
/// assert_eq!(resolve(today, &table).unwrap().name(), "halloween");
///
/// let today = CalendarDate::new(2024, 11, 1).unwrap();
/// assert!(resolve(today, &table).is_none());
/// ```
#[tracing::instrument(skip_all, fields(%today, n_windows = table.len()))]
pub fn resolve(today: CalendarDate, table: &EventTable) -> Option<EventIdentity> {
    match active_window(today, table) {
        Some((key, window)) => {
            debug!(key, event = window.name(), "active event");
            Some(EventIdentity::from(window))
        }
        None => {
            debug!("no active event");
            None
        }
    }
}

/// An event table paired with the clock it is resolved against.
///
/// Holds no state besides the two, so every call re-reads the clock and
/// picks up day changes.
#[derive(Debug, Clone)]
pub struct EventResolver<C> {
    table: EventTable,
    clock: C,
}

impl<C: Clock> EventResolver<C> {
    /// Creates a resolver over `table` reading dates from `clock`.
    pub fn new(table: EventTable, clock: C) -> Self {
        Self { table, clock }
    }

    /// Resolves the active event for the clock's current date.
    pub fn current(&self) -> Option<EventIdentity> {
        resolve(self.clock.today(), &self.table)
    }

    /// Resolves the active event for an explicit date.
    pub fn at(&self, today: CalendarDate) -> Option<EventIdentity> {
        resolve(today, &self.table)
    }

    /// Returns the table.
    pub fn table(&self) -> &EventTable {
        &self.table
    }

    /// Returns the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
