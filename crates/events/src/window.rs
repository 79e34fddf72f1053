//! Named date windows and their membership test.

use std::fmt;

use mascot_calendar::{CalendarDate, MonthDay};

use crate::error::ConfigurationError;

/// One unvalidated window boundary as it appears in configuration.
///
/// `year` is `None` for a yearly-recurring boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    /// Month number (1..=12).
    pub month: u8,
    /// Day within the month.
    pub day: u8,
    /// Literal year for pinned windows.
    pub year: Option<i32>,
}

impl Boundary {
    /// Creates a year-less boundary.
    pub fn new(month: u8, day: u8) -> Self {
        Self {
            month,
            day,
            year: None,
        }
    }

    /// Pins the boundary to a literal year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}

/// How the boundaries of a window map onto concrete years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    /// Re-evaluated every year against the current year.
    Yearly,
    /// Active only within the literal years given.
    Pinned {
        /// Year of the start boundary.
        start_year: i32,
        /// Year of the end boundary, as declared (before wrap correction).
        end_year: i32,
    },
}

/// A named, inclusive calendar interval.
///
/// Built only through validating constructors, so the start/end year pairing
/// is always consistent and every boundary is a real calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventWindow {
    name: String,
    start: MonthDay,
    end: MonthDay,
    span: Span,
}

impl EventWindow {
    /// Builds a window from raw configuration boundaries.
    ///
    /// Both years absent gives a yearly window, both present a pinned one.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::EmptyName`] for a blank name.
    /// - [`ConfigurationError::MixedYears`] if only one boundary has a year.
    /// - [`ConfigurationError::InvalidBoundary`] if a boundary is not a real day.
    /// - [`ConfigurationError::InvertedPinnedWindow`] if a pinned window ends
    ///   before it starts even after wrap correction.
    pub fn new(
        name: impl Into<String>,
        start: Boundary,
        end: Boundary,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        match (start.year, end.year) {
            (None, None) => {
                let start = month_day(&name, "start", start)?;
                let end = month_day(&name, "end", end)?;
                Self::yearly(name, start, end)
            }
            (Some(start_year), Some(end_year)) => {
                let start = calendar_date(&name, "start", start_year, start)?;
                let end = calendar_date(&name, "end", end_year, end)?;
                Self::pinned(name, start, end)
            }
            _ => {
                ensure_name(&name)?;
                Err(ConfigurationError::MixedYears { name })
            }
        }
    }

    /// Creates a window that recurs every year.
    ///
    /// An `end` earlier in the year than `start` wraps across December 31.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyName`] for a blank name.
    pub fn yearly(
        name: impl Into<String>,
        start: MonthDay,
        end: MonthDay,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        ensure_name(&name)?;
        Ok(Self {
            name,
            start,
            end,
            span: Span::Yearly,
        })
    }

    /// Creates a window pinned to literal dates.
    ///
    /// If `end` precedes `start`, the end is moved into the following year
    /// when the window is evaluated.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::EmptyName`] for a blank name.
    /// - [`ConfigurationError::InvertedPinnedWindow`] if the end still precedes
    ///   the start after moving it one year forward.
    pub fn pinned(
        name: impl Into<String>,
        start: CalendarDate,
        end: CalendarDate,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        ensure_name(&name)?;
        if start > end {
            let wrapped = end
                .year()
                .checked_add(1)
                .map(|year| (year, end.month_day()));
            if wrapped.is_none_or(|wrapped| wrapped < (start.year(), start.month_day())) {
                return Err(ConfigurationError::InvertedPinnedWindow { name, start, end });
            }
        }
        Ok(Self {
            name,
            start: start.month_day(),
            end: end.month_day(),
            span: Span::Pinned {
                start_year: start.year(),
                end_year: end.year(),
            },
        })
    }

    /// Returns the event name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the start boundary without its year.
    pub fn start(&self) -> MonthDay {
        self.start
    }

    /// Returns the end boundary without its year.
    pub fn end(&self) -> MonthDay {
        self.end
    }

    /// Returns how the boundaries map onto years.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns `true` for a yearly-recurring window.
    pub fn is_yearly(&self) -> bool {
        self.span == Span::Yearly
    }

    /// Returns `true` if `today` falls inside the window, both ends inclusive.
    pub fn contains(&self, today: CalendarDate) -> bool {
        match self.span {
            Span::Yearly => in_yearly_range(today.month_day(), self.start, self.end),
            Span::Pinned {
                start_year,
                end_year,
            } => {
                let start = (start_year, self.start);
                let mut end = (end_year, self.end);
                if start > end {
                    end.0 = end.0.saturating_add(1);
                }
                let now = (today.year(), today.month_day());
                start <= now && now <= end
            }
        }
    }
}

impl fmt::Display for EventWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span {
            Span::Yearly => write!(f, "{} {}..{} (yearly)", self.name, self.start, self.end),
            Span::Pinned {
                start_year,
                end_year,
            } => write!(
                f,
                "{} {start_year:04}-{}..{end_year:04}-{} (pinned)",
                self.name, self.start, self.end
            ),
        }
    }
}

/// Month-day containment for a recurring window placed in today's year.
///
/// With `start <= end` this is the plain inclusive range. When the end month
/// precedes the start month the range runs from `start` through December 31
/// and on from January 1 to `end`. When both fall in the same month with the
/// end day first, the end belongs to the following year, so only `start`
/// through December 31 of the current year matches.
fn in_yearly_range(today: MonthDay, start: MonthDay, end: MonthDay) -> bool {
    if start <= end {
        start <= today && today <= end
    } else if start.month() == end.month() {
        today >= start
    } else {
        today >= start || today <= end
    }
}

fn ensure_name(name: &str) -> Result<(), ConfigurationError> {
    if name.trim().is_empty() {
        return Err(ConfigurationError::EmptyName);
    }
    Ok(())
}

fn month_day(
    name: &str,
    which: &'static str,
    boundary: Boundary,
) -> Result<MonthDay, ConfigurationError> {
    MonthDay::new(boundary.month, boundary.day).map_err(|source| {
        ConfigurationError::InvalidBoundary {
            name: name.to_owned(),
            which,
            source,
        }
    })
}

fn calendar_date(
    name: &str,
    which: &'static str,
    year: i32,
    boundary: Boundary,
) -> Result<CalendarDate, ConfigurationError> {
    CalendarDate::new(year, boundary.month, boundary.day).map_err(|source| {
        ConfigurationError::InvalidBoundary {
            name: name.to_owned(),
            which,
            source,
        }
    })
}
