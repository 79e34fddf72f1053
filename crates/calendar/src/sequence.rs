//! Date sequence generation.

use crate::date::CalendarDate;

/// Returns up to `n_days` consecutive dates beginning at `start`.
///
/// The sequence is cut short at the end of chrono's representable range.
///
/// # Example
///
/// ```
/// use mascot_calendar::{CalendarDate, date_sequence};
///
/// let start = CalendarDate::new(2023, 12, 30).unwrap();
/// let dates = date_sequence(start, 4);
/// assert_eq!(dates[3], CalendarDate::new(2024, 1, 2).unwrap());
/// ```
pub fn date_sequence(start: CalendarDate, n_days: usize) -> Vec<CalendarDate> {
    start
        .naive()
        .iter_days()
        .take(n_days)
        .map(CalendarDate::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn leap_day_only_in_leap_years() {
        let feb27 = |year| CalendarDate::new(year, 2, 27).unwrap();
        let leap: Vec<String> = date_sequence(feb27(2024), 3).iter().map(|d| d.to_string()).collect();
        let common: Vec<String> = date_sequence(feb27(2023), 3).iter().map(|d| d.to_string()).collect();
        assert_eq!(leap, ["2024-02-27", "2024-02-28", "2024-02-29"]);
        assert_eq!(common, ["2023-02-27", "2023-02-28", "2023-03-01"]);
    }

    #[test]
    fn each_date_is_next_of_previous() {
        let start = CalendarDate::new(1999, 11, 1).unwrap();
        let dates = date_sequence(start, 500);
        assert_eq!(dates.first(), Some(&start));
        assert!(dates.windows(2).all(|w| w[0].next() == Some(w[1])));
    }

    #[test]
    fn cut_short_at_end_of_range() {
        let start = CalendarDate::from(NaiveDate::MAX.pred_opt().unwrap());
        let dates = date_sequence(start, 10);
        assert_eq!(dates.first(), Some(&start));
        assert!(dates.len() < 10);
    }
}
