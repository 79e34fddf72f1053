//! # mascot-calendar
//!
//! Date primitives for the proleptic Gregorian calendar. Concrete dates wrap
//! [`chrono::NaiveDate`]; [`MonthDay`] covers the year-less boundaries chrono
//! has no type for.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["MonthDay (month, day)"] -->|"CalendarDate::from_month_day()"| B["CalendarDate"]
//!     B -->|".month_day()"| A
//!     B -->|".next()"| B
//!     B -->|"date_sequence()"| C["Vec of CalendarDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use mascot_calendar::{CalendarDate, MonthDay, date_sequence, days_in_year};
//!
//! // Year-less boundary of a recurring event
//! let halloween = MonthDay::new(10, 31).unwrap();
//!
//! // Attach a year and walk forward
//! let date = CalendarDate::from_month_day(2024, halloween).unwrap();
//! assert_eq!(date.next(), CalendarDate::new(2024, 11, 1).ok());
//!
//! // Every day of a leap year
//! let start = CalendarDate::new(2024, 1, 1).unwrap();
//! let year = date_sequence(start, usize::from(days_in_year(2024)));
//! assert_eq!(year.len(), 366);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month_day` | Year-less month-day pairs |
//! | `date` | Gregorian date with year context, leap-year and month-length queries |
//! | `sequence` | Date sequence generation |
//! | `error` | Error types |

mod date;
mod error;
mod month_day;
mod sequence;

pub use date::{CalendarDate, days_in_month, days_in_year, is_leap_year};
pub use error::CalendarError;
pub use month_day::MonthDay;
pub use sequence::date_sequence;
