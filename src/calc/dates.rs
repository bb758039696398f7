//! Calendar Date Arithmetic
//!
//! Day-granular helpers over [`chrono::NaiveDate`]. Arithmetic returns
//! `None` when the result leaves chrono's supported range.

use chrono::{Days, NaiveDate};

/// Returns every date from `start` to `end`, both inclusive.
///
/// Empty when `start` is after `end`.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use stopclock::calc::create_period;
///
/// let start = NaiveDate::from_ymd_opt(2023, 1, 30).unwrap();
/// let end = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
/// assert_eq!(create_period(start, end).len(), 3);
/// ```
pub fn create_period(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|date| *date <= end).collect()
}

/// Moves `date` forward by `days`, or backward when negative.
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let offset = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(offset)
    } else {
        date.checked_sub_days(offset)
    }
}

/// Moves `date` backward by `days`, or forward when negative.
pub fn sub_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    add_days(date, days.checked_neg()?)
}

/// Absolute number of days between two dates.
pub fn date_diff(first: NaiveDate, second: NaiveDate) -> i64 {
    first.signed_duration_since(second).num_days().abs()
}
