//! Per-year overtime and special-assistance line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;
use crate::calculation::saturating_product;

/// One overtime budget line for a year.
///
/// The hourly rate is `rate` when given, otherwise it is derived from
/// `salary`. When `days` is absent the effective working-day count of
/// the year is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeItem {
    /// Unique identifier.
    #[serde(default)]
    pub id: String,
    /// Buddhist year the line belongs to.
    #[serde(deserialize_with = "lenient::year", default)]
    pub year: i32,
    /// Description of the work.
    #[serde(default)]
    pub description: String,
    /// Number of occurrences.
    #[serde(deserialize_with = "lenient::count", default)]
    pub instances: u32,
    /// Days per occurrence.
    #[serde(
        deserialize_with = "lenient::optional_count",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub days: Option<u32>,
    /// Hours per day.
    #[serde(deserialize_with = "lenient::decimal", default)]
    pub hours: Decimal,
    /// Number of people.
    #[serde(deserialize_with = "lenient::count", default)]
    pub people: u32,
    /// Monthly salary used to derive the hourly rate.
    #[serde(deserialize_with = "lenient::decimal", default)]
    pub salary: Decimal,
    /// Explicit hourly rate.
    #[serde(
        deserialize_with = "lenient::optional_decimal",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub rate: Option<Decimal>,
}

/// One special-assistance budget line for a year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialAssistItem {
    /// Unique identifier.
    #[serde(default)]
    pub id: String,
    /// Buddhist year the line belongs to.
    #[serde(deserialize_with = "lenient::year", default)]
    pub year: i32,
    /// Description of the assistance.
    #[serde(default)]
    pub description: String,
    /// Number of people.
    #[serde(deserialize_with = "lenient::count", default)]
    pub people: u32,
    /// Number of months.
    #[serde(deserialize_with = "lenient::count", default)]
    pub months: u32,
    /// Amount per person per month.
    #[serde(deserialize_with = "lenient::decimal", default)]
    pub rate: Decimal,
}

impl SpecialAssistItem {
    /// `people × months × rate`.
    pub fn total(&self) -> Decimal {
        saturating_product([Decimal::from(self.people), Decimal::from(self.months), self.rate])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_assist_item_total() {
        let json = r#"{"year": 2568, "people": 4, "months": 12, "rate": "1,000"}"#;
        let item: SpecialAssistItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.total(), Decimal::from(48000));
    }

    #[test]
    fn test_special_assist_item_garbage_rate_is_zero() {
        let item: SpecialAssistItem =
            serde_json::from_str(r#"{"people": 4, "months": 12, "rate": "?"}"#).unwrap();
        assert_eq!(item.total(), Decimal::ZERO);
    }

    #[test]
    fn test_overtime_item_optional_fields() {
        let item: OvertimeItem = serde_json::from_str(
            r#"{"year": "2568", "instances": 1, "hours": 8, "people": 2, "salary": 21000}"#,
        )
        .unwrap();
        assert_eq!(item.year, 2568);
        assert_eq!(item.days, None);
        assert_eq!(item.rate, None);
        assert_eq!(item.people, 2);
    }

    #[test]
    fn test_overtime_item_days_from_string() {
        let item: OvertimeItem =
            serde_json::from_str(r#"{"days": "1", "hours": 8, "salary": 21000}"#).unwrap();
        assert_eq!(item.days, Some(1));

        let item: OvertimeItem = serde_json::from_str(r#"{"days": ""}"#).unwrap();
        assert_eq!(item.days, None);

        let item: OvertimeItem = serde_json::from_str(r#"{"days": "สองวัน"}"#).unwrap();
        assert_eq!(item.days, Some(0));
    }

    #[test]
    fn test_special_assist_item_total_saturates() {
        let item: SpecialAssistItem = serde_json::from_str(
            r#"{"people": 4294967295, "months": 4294967295, "rate": "2e28"}"#,
        )
        .unwrap();
        assert_eq!(item.total(), Decimal::MAX);
    }
}
