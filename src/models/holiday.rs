//! Public holiday model.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::calculation::to_buddhist_year;

/// A public holiday.
///
/// # Example
///
/// ```
/// use allowance_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     id: "h1".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 4, 14).unwrap(),
///     name: "วันสงกรานต์".to_string(),
/// };
/// assert_eq!(holiday.buddhist_year(), 2568);
/// assert!(holiday.is_weekday());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Unique identifier.
    #[serde(default)]
    pub id: String,
    /// The Gregorian date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
}

impl Holiday {
    /// The Buddhist year the holiday falls in.
    pub fn buddhist_year(&self) -> i32 {
        to_buddhist_year(self.date.year())
    }

    /// Returns true if the holiday falls Monday through Friday.
    pub fn is_weekday(&self) -> bool {
        !matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}
