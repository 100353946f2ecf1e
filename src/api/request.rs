//! Request types for the allowance engine API.
//!
//! Calculation endpoints run over the records already in the store, so
//! their bodies carry only the year and the per-run adjustments.

use serde::{Deserialize, Serialize};

use crate::calculation::{SpecialAssistOptions, current_buddhist_year};

/// Body for calculations that need nothing but a year.
///
/// Used by the travel, family-visit, manager-rotation, and overtime
/// endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YearRequest {
    /// Buddhist year to calculate for. Defaults to the current year.
    #[serde(default)]
    pub year: Option<i32>,
}

impl YearRequest {
    /// The requested year, or the current Buddhist year.
    pub fn year(&self) -> i32 {
        self.year.unwrap_or_else(current_buddhist_year)
    }
}

/// Body for `POST /api/calculate/special-assist`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecialAssistRequest {
    /// Buddhist year to calculate for. Defaults to the current year.
    #[serde(default)]
    pub year: Option<i32>,
    /// Months and lump-sum overrides.
    #[serde(flatten)]
    pub options: SpecialAssistOptions,
}

impl SpecialAssistRequest {
    /// The requested year, or the current Buddhist year.
    pub fn year(&self) -> i32 {
        self.year.unwrap_or_else(current_buddhist_year)
    }
}

/// Body for `POST /api/calculate/company-trip`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyTripRequest {
    /// Buddhist year to calculate for. Defaults to the current year.
    #[serde(default)]
    pub year: Option<i32>,
    /// Province the trip goes to.
    pub destination: String,
}

impl CompanyTripRequest {
    /// The requested year, or the current Buddhist year.
    pub fn year(&self) -> i32 {
        self.year.unwrap_or_else(current_buddhist_year)
    }
}

/// `?year=` query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct YearQuery {
    /// Buddhist year filter.
    pub year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_year_defaults_to_current_buddhist_year() {
        let request: YearRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.year(), current_buddhist_year());

        let request: YearRequest = serde_json::from_str(r#"{"year": 2570}"#).unwrap();
        assert_eq!(request.year(), 2570);
    }

    #[test]
    fn test_special_assist_request_flattens_options() {
        let request: SpecialAssistRequest =
            serde_json::from_str(r#"{"year": 2568, "months": 6, "lump_sums": {"e1": 7000}}"#)
                .unwrap();
        assert_eq!(request.year(), 2568);
        assert_eq!(request.options.months, 6);
        assert_eq!(request.options.lump_sums["e1"], Decimal::from(7000));

        let request: SpecialAssistRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.options, SpecialAssistOptions::default());
    }

    #[test]
    fn test_company_trip_requires_destination() {
        let result = serde_json::from_str::<CompanyTripRequest>(r#"{"year": 2568}"#);
        assert!(result.unwrap_err().to_string().contains("missing field"));
    }
}
