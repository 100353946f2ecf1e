//! Working-day calculation.
//!
//! Counts the Monday–Friday days of a Buddhist year and removes the
//! holidays that land on them.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::Holiday;

use super::calendar::to_gregorian_year;

/// Working days in a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDaySummary {
    /// The Buddhist year counted.
    pub year: i32,
    /// Monday–Friday days in the year.
    pub weekdays: u32,
    /// Distinct holidays in the year that fall on a weekday.
    pub holidays_on_weekdays: u32,
    /// `weekdays - holidays_on_weekdays`.
    pub total_work_days: u32,
}

/// Counts the working days of a Buddhist year.
///
/// Holidays outside the year, or on a weekend, are ignored; two holidays
/// on the same date count once.
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::calculate_work_days;
/// use allowance_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holidays = vec![Holiday {
///     id: "h1".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), // Wednesday
///     name: "วันขึ้นปีใหม่".to_string(),
/// }];
/// let summary = calculate_work_days(2568, &holidays);
/// assert_eq!(summary.weekdays, 261);
/// assert_eq!(summary.holidays_on_weekdays, 1);
/// assert_eq!(summary.total_work_days, 260);
/// ```
pub fn calculate_work_days(buddhist_year: i32, holidays: &[Holiday]) -> WorkDaySummary {
    let gregorian_year = to_gregorian_year(buddhist_year);

    let weekdays = NaiveDate::from_ymd_opt(gregorian_year, 1, 1)
        .map(|first| {
            first
                .iter_days()
                .take_while(|d| d.year() == gregorian_year)
                .filter(|d| is_weekday(*d))
                .count() as u32
        })
        .unwrap_or(0);

    let holiday_dates: BTreeSet<NaiveDate> = holidays
        .iter()
        .map(|h| h.date)
        .filter(|d| d.year() == gregorian_year && is_weekday(*d))
        .collect();
    let holidays_on_weekdays = holiday_dates.len() as u32;

    WorkDaySummary {
        year: buddhist_year,
        weekdays,
        holidays_on_weekdays,
        total_work_days: weekdays.saturating_sub(holidays_on_weekdays),
    }
}

fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
