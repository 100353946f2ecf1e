//! Buddhist-calendar helpers.
//!
//! Every year the engine displays or accepts is a Buddhist-era year
//! (Gregorian + 543). Conversion happens only at the edges where a
//! [`chrono::NaiveDate`] is involved.

use chrono::{Datelike, Local};

/// Offset between the Buddhist and Gregorian calendars.
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Converts a Gregorian year to a Buddhist year.
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::to_buddhist_year;
///
/// assert_eq!(to_buddhist_year(2025), 2568);
/// ```
pub fn to_buddhist_year(gregorian_year: i32) -> i32 {
    gregorian_year.saturating_add(BUDDHIST_ERA_OFFSET)
}

/// Converts a Buddhist year to a Gregorian year.
pub fn to_gregorian_year(buddhist_year: i32) -> i32 {
    buddhist_year.saturating_sub(BUDDHIST_ERA_OFFSET)
}

/// The current Buddhist year according to the local clock.
pub fn current_buddhist_year() -> i32 {
    to_buddhist_year(Local::now().year())
}
