//! Employee model and related types.
//!
//! This module defines the [`Employee`] record maintained by the HR edit
//! forms, its eligibility status, and the optional per-employee travel
//! rate overrides.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// Whether an employee currently receives status-gated allowances.
///
/// The stored values are the Thai labels used on the HR forms. Any label
/// other than the eligible one reads as [`EmployeeStatus::Ineligible`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmployeeStatus {
    /// Entitled to family-visit and special-assistance allowances.
    #[serde(rename = "มีสิทธิ์", alias = "eligible")]
    Eligible,
    /// Not entitled.
    #[default]
    #[serde(rename = "ไม่มีสิทธิ์", alias = "ineligible", other)]
    Ineligible,
}

/// Per-employee overrides for the travel columns of the rate card.
///
/// A `Some` value replaces the rate card's value for that employee only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomTravelRates {
    /// Hotel rate per night.
    #[serde(deserialize_with = "lenient::optional_decimal", default)]
    pub hotel: Option<Decimal>,
    /// Per-diem rate per day.
    #[serde(deserialize_with = "lenient::optional_decimal", default)]
    pub per_diem: Option<Decimal>,
    /// Travel fare per leg.
    #[serde(deserialize_with = "lenient::optional_decimal", default)]
    pub travel: Option<Decimal>,
    /// Local transport per leg.
    #[serde(deserialize_with = "lenient::optional_decimal", default)]
    pub local: Option<Decimal>,
}

/// An employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    #[serde(default)]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text gender label.
    #[serde(default)]
    pub gender: String,
    /// Buddhist-calendar year the employee started work.
    #[serde(deserialize_with = "lenient::year", default)]
    pub start_year: i32,
    /// Pay-grade code keying the rate card.
    #[serde(default)]
    pub level: String,
    /// Eligibility status flag.
    #[serde(default)]
    pub status: EmployeeStatus,
    /// Province the employee travels to for family visits.
    #[serde(default)]
    pub visit_province: String,
    /// One-way bus fare to the visit province.
    #[serde(deserialize_with = "lenient::decimal", default)]
    pub bus_fare: Decimal,
    /// Working days used by manager-rotation trips.
    #[serde(deserialize_with = "lenient::count", default)]
    pub working_days: u32,
    /// Optional overrides for the travel rates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_travel_rates: Option<CustomTravelRates>,
}

impl Employee {
    /// Returns true if the employee's status is [`EmployeeStatus::Eligible`].
    ///
    /// # Examples
    ///
    /// ```
    /// use allowance_engine::models::{Employee, EmployeeStatus};
    ///
    /// let json = r#"{"name": "สมชาย", "status": "มีสิทธิ์"}"#;
    /// let employee: Employee = serde_json::from_str(json).unwrap();
    /// assert!(employee.is_eligible());
    /// assert_eq!(employee.status, EmployeeStatus::Eligible);
    /// ```
    pub fn is_eligible(&self) -> bool {
        self.status == EmployeeStatus::Eligible
    }

    /// Years of service in the given Buddhist year.
    pub fn tenure(&self, year: i32) -> i32 {
        year.saturating_sub(self.start_year)
    }
}
