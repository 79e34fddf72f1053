//! Error types for the mascot-events crate.

use mascot_calendar::{CalendarDate, CalendarError};

/// A malformed event definition or event table.
///
/// Raised while building [`EventWindow`](crate::EventWindow)s and
/// [`EventTable`](crate::EventTable)s. Resolution itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// Returned when an event has an empty (or whitespace-only) name.
    #[error("event name must not be empty")]
    EmptyName,

    /// Returned when exactly one of the start and end years is set.
    #[error("event {name:?}: start and end years must both be set or both be omitted")]
    MixedYears {
        /// Name of the offending event.
        name: String,
    },

    /// Returned when a start or end boundary is not a valid calendar day.
    #[error("event {name:?}: invalid {which} boundary: {source}")]
    InvalidBoundary {
        /// Name of the offending event.
        name: String,
        /// Either `"start"` or `"end"`.
        which: &'static str,
        /// The underlying calendar validation failure.
        #[source]
        source: CalendarError,
    },

    /// Returned when a pinned window still ends before it starts after the
    /// one-year wrap correction.
    #[error("event {name:?}: pinned window ends ({end}) before it starts ({start})")]
    InvertedPinnedWindow {
        /// Name of the offending event.
        name: String,
        /// Declared start date.
        start: CalendarDate,
        /// Declared end date.
        end: CalendarDate,
    },

    /// Returned when two table entries share a key.
    #[error("duplicate event key: {key:?}")]
    DuplicateKey {
        /// The repeated key.
        key: String,
    },

    /// Returned when two table entries share an event name.
    #[error("duplicate event name: {name:?}")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },
}
