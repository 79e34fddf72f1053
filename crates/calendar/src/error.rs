//! Error types for the mascot-calendar crate.

/// Error type for all fallible operations in the mascot-calendar crate.
///
/// Covers validation failures for month numbers and day-within-month values,
/// both for year-less [`MonthDay`](crate::MonthDay) pairs and for concrete
/// [`CalendarDate`](crate::CalendarDate) values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the longest form of the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month in any year.
        max_day: u8,
    },

    /// Returned when a day does not exist in the given month of a specific year.
    #[error("invalid date: {year:04}-{month:02}-{day:02} (month has {max_day} days)")]
    InvalidDate {
        /// The year of the rejected date.
        year: i32,
        /// The month of the rejected date.
        month: u8,
        /// The invalid day number.
        day: u8,
        /// The number of days the month has in that year.
        max_day: u8,
    },

    /// Returned when a year lies outside the range chrono can represent.
    #[error("year out of range: {year}")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
    },
}
