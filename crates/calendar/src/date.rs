//! Gregorian date with year context, backed by [`chrono::NaiveDate`].

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;
use crate::month_day::MonthDay;

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
///
/// Years outside chrono's supported range are reported as common years.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 1, 1).is_some_and(|d| d.leap_year())
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
/// Returns [`CalendarError::YearOutOfRange`] if chrono cannot represent `year`.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if NaiveDate::from_ymd_opt(year, month.into(), 1).is_none() {
        return Err(CalendarError::YearOutOfRange { year });
    }
    let len = (28..=31u8)
        .rev()
        .find(|&day| NaiveDate::from_ymd_opt(year, month.into(), day.into()).is_some())
        .unwrap_or(28);
    Ok(len)
}

/// Returns the number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// A concrete day in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a new `CalendarDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDate`] if the day does not exist in
    /// that month of that year (e.g. February 29 in a common year).
    /// Returns [`CalendarError::YearOutOfRange`] if chrono cannot represent `year`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        match NaiveDate::from_ymd_opt(year, month.into(), day.into()) {
            Some(date) => Ok(Self(date)),
            None => {
                let max_day = days_in_month(year, month)?;
                Err(CalendarError::InvalidDate {
                    year,
                    month,
                    day,
                    max_day,
                })
            }
        }
    }

    /// Attaches a year to a [`MonthDay`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] for February 29 in a common year.
    pub fn from_month_day(year: i32, month_day: MonthDay) -> Result<Self, CalendarError> {
        Self::new(year, month_day.month(), month_day.day())
    }

    /// Returns the underlying chrono date.
    pub fn naive(self) -> NaiveDate {
        self.0
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.0.day() as u8
    }

    /// Returns the year-less part of this date.
    pub fn month_day(self) -> MonthDay {
        MonthDay::new(self.month(), self.day()).expect("chrono dates always hold a valid month-day")
    }

    /// Returns the next calendar day, or `None` past chrono's last representable date.
    pub fn next(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = CalendarDate::new(2024, 10, 15).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 10);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            CalendarDate::new(2024, 13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn new_leap_day() {
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert_eq!(
            CalendarDate::new(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29,
                max_day: 28,
            }
        );
    }

    #[test]
    fn new_invalid_day_zero() {
        assert!(matches!(
            CalendarDate::new(2024, 1, 0),
            Err(CalendarError::InvalidDate { day: 0, .. })
        ));
    }

    #[test]
    fn new_year_out_of_range() {
        assert_eq!(
            CalendarDate::new(i32::MAX, 1, 1).unwrap_err(),
            CalendarError::YearOutOfRange { year: i32::MAX }
        );
    }

    #[test]
    fn naive_date_conversion() {
        let naive = NaiveDate::from_ymd_opt(2024, 6, 19).unwrap();
        let date = CalendarDate::from(naive);
        assert_eq!(date, CalendarDate::new(2024, 6, 19).unwrap());
        assert_eq!(NaiveDate::from(date), naive);
        assert_eq!(date.naive(), naive);
    }

    #[test]
    fn from_month_day() {
        let md = MonthDay::new(12, 31).unwrap();
        let date = CalendarDate::from_month_day(1999, md).unwrap();
        assert_eq!(date, CalendarDate::new(1999, 12, 31).unwrap());
        assert_eq!(date.month_day(), md);
    }

    #[test]
    fn from_month_day_leap_day_in_common_year() {
        let md = MonthDay::new(2, 29).unwrap();
        assert!(CalendarDate::from_month_day(2025, md).is_err());
    }

    #[test]
    fn next_rolls_over_month_and_year() {
        let cases = [
            ((2024, 1, 15), (2024, 1, 16)),
            ((2024, 4, 30), (2024, 5, 1)),
            ((2024, 2, 28), (2024, 2, 29)),
            ((2023, 2, 28), (2023, 3, 1)),
            ((2023, 12, 31), (2024, 1, 1)),
            ((-1, 12, 31), (0, 1, 1)),
        ];
        for ((y, m, d), (ny, nm, nd)) in cases {
            let next = CalendarDate::new(y, m, d).unwrap().next();
            assert_eq!(next, CalendarDate::new(ny, nm, nd).ok(), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn next_past_last_date_is_none() {
        assert_eq!(CalendarDate::from(NaiveDate::MAX).next(), None);
    }

    #[test]
    fn ord_is_chronological() {
        let dec31 = CalendarDate::new(2023, 12, 31).unwrap();
        let jan1 = CalendarDate::new(2024, 1, 1).unwrap();
        let jun1 = CalendarDate::new(2024, 6, 1).unwrap();
        assert!(dec31 < jan1);
        assert!(jan1 < jun1);
    }

    #[test]
    fn display() {
        let date = CalendarDate::new(2024, 6, 9).unwrap();
        assert_eq!(date.to_string(), "2024-06-09");
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(0));
        assert!(!is_leap_year(i32::MAX));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(2023, 4).unwrap(), 30);
        assert_eq!(days_in_month(2023, 12).unwrap(), 31);
        assert_eq!(
            days_in_month(2024, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn last_month_of_range_is_full_length() {
        let max = NaiveDate::MAX;
        let month = max.month() as u8;
        assert_eq!(days_in_month(max.year(), month).unwrap(), max.day() as u8);
    }

    #[test]
    fn month_lengths_sum_to_year_length() {
        for year in [1900, 2000, 2023, 2024] {
            let total: u16 = (1..=12u8)
                .map(|m| u16::from(days_in_month(year, m).unwrap()))
                .sum();
            assert_eq!(total, days_in_year(year), "year {year}");
        }
    }
}
