//! Calculation result models.
//!
//! Each calculator returns an [`AllowanceReport`] holding one line per
//! qualifying employee (or overtime item), the grand total, and an
//! [`AuditStep`] recording the constants and counts that were used.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::saturating_sum;

/// Identifies which allowance a report was produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowanceKind {
    /// Long-service travel reimbursement.
    Travel,
    /// Family-visit bus fare.
    FamilyVisit,
    /// Special assistance (rent and monthly assistance).
    SpecialAssist,
    /// Company trip lodging and bus fare.
    CompanyTrip,
    /// Manager rotation travel.
    ManagerRotation,
    /// Overtime pay.
    Overtime,
}

/// A single computed line that contributes to a report total.
pub trait AllowanceLine {
    /// The amount this line contributes to the report total.
    fn total(&self) -> Decimal;
}

/// A record of one calculation run.
///
/// Captures the inputs, outputs, and a human-readable explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// Identifier of the rule that was applied.
    pub rule_id: String,
    /// Human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Explanation of the result.
    pub reasoning: String,
}

/// The result of running one allowance calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowanceReport<L> {
    /// Which allowance was computed.
    pub allowance: AllowanceKind,
    /// The Buddhist year the calculation was made for.
    pub year: i32,
    /// One line per qualifying record.
    pub lines: Vec<L>,
    /// Sum of every line's total.
    pub total: Decimal,
    /// Audit record for this run.
    pub audit_step: AuditStep,
}

impl<L: AllowanceLine> AllowanceReport<L> {
    /// Builds a report, summing the line totals.
    pub fn new(allowance: AllowanceKind, year: i32, lines: Vec<L>, audit_step: AuditStep) -> Self {
        let total = saturating_sum(lines.iter().map(AllowanceLine::total));
        Self {
            allowance,
            year,
            lines,
            total,
            audit_step,
        }
    }
}

/// Long-service travel reimbursement for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelLine {
    /// Employee identifier.
    pub employee_id: String,
    /// Employee name.
    pub name: String,
    /// Employee level.
    pub level: String,
    /// Years of service in the calculation year.
    pub tenure: i32,
    /// Hotel nights paid.
    pub hotel_nights: u32,
    /// Hotel rate per night.
    pub hotel_rate: Decimal,
    /// `hotel_nights × hotel_rate`.
    pub hotel_amount: Decimal,
    /// Per-diem days paid.
    pub per_diem_days: u32,
    /// Per-diem rate.
    pub per_diem_rate: Decimal,
    /// `per_diem_days × per_diem_rate`.
    pub per_diem_amount: Decimal,
    /// Travel fare per leg.
    pub travel_rate: Decimal,
    /// Two legs of travel fare.
    pub travel_amount: Decimal,
    /// Local transport per leg.
    pub local_rate: Decimal,
    /// Two legs of local transport.
    pub local_amount: Decimal,
    /// Sum of the four amounts.
    pub total: Decimal,
}

impl AllowanceLine for TravelLine {
    fn total(&self) -> Decimal {
        self.total
    }
}

/// Family-visit fare for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyVisitLine {
    /// Employee identifier.
    pub employee_id: String,
    /// Employee name.
    pub name: String,
    /// Province visited.
    pub visit_province: String,
    /// One-way bus fare.
    pub bus_fare: Decimal,
    /// Round-trip fare.
    pub round_trip_fare: Decimal,
    /// Visits paid per year.
    pub trips_per_year: u32,
    /// `round_trip_fare × trips_per_year`.
    pub total: Decimal,
}

impl AllowanceLine for FamilyVisitLine {
    fn total(&self) -> Decimal {
        self.total
    }
}

/// Special assistance for one employee.
///
/// The lump sum is tracked beside the total and is not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialAssistLine {
    /// Employee identifier.
    pub employee_id: String,
    /// Employee name.
    pub name: String,
    /// Employee level.
    pub level: String,
    /// Months paid.
    pub months: u32,
    /// Monthly rent allowance.
    pub rent: Decimal,
    /// `rent × months`.
    pub rent_amount: Decimal,
    /// Monthly assistance.
    pub monthly_assist: Decimal,
    /// `monthly_assist × months`.
    pub assist_amount: Decimal,
    /// Lump-sum allowance, editable per employee.
    pub lump_sum: Decimal,
    /// `rent_amount + assist_amount`.
    pub total: Decimal,
}

impl AllowanceLine for SpecialAssistLine {
    fn total(&self) -> Decimal {
        self.total
    }
}

impl AllowanceReport<SpecialAssistLine> {
    /// Sum of the lump sums, reported separately from [`Self::total`].
    pub fn lump_sum_total(&self) -> Decimal {
        saturating_sum(self.lines.iter().map(|line| line.lump_sum))
    }
}

/// Company trip cost for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyTripLine {
    /// Employee identifier.
    pub employee_id: String,
    /// Employee name.
    pub name: String,
    /// Employee level.
    pub level: String,
    /// Employee's home province.
    pub visit_province: String,
    /// True when the employee shares a room (half hotel rate).
    pub room_shared: bool,
    /// True when the employee lives in the destination province.
    pub local_resident: bool,
    /// Accommodation cost.
    pub accommodation: Decimal,
    /// Escalated round-trip bus fare.
    pub bus_fare: Decimal,
    /// Year multiplier applied to the bus fare.
    pub multiplier: Decimal,
    /// `accommodation + bus_fare`.
    pub total: Decimal,
}

impl AllowanceLine for CompanyTripLine {
    fn total(&self) -> Decimal {
        self.total
    }
}

/// Manager rotation travel for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerRotationLine {
    /// Employee identifier.
    pub employee_id: String,
    /// Employee name.
    pub name: String,
    /// Employee level.
    pub level: String,
    /// Working days at the rotation site.
    pub working_days: u32,
    /// Per-diem days paid.
    pub per_diem_days: u32,
    /// Per-diem rate.
    pub per_diem_rate: Decimal,
    /// `per_diem_days × per_diem_rate`.
    pub per_diem_amount: Decimal,
    /// Hotel nights paid.
    pub hotel_nights: u32,
    /// Hotel rate per night.
    pub hotel_rate: Decimal,
    /// `hotel_nights × hotel_rate`.
    pub hotel_amount: Decimal,
    /// Fixed travel cost.
    pub travel_cost: Decimal,
    /// Fixed local transport cost.
    pub local_cost: Decimal,
    /// Fixed other expenses.
    pub other_cost: Decimal,
    /// Year multiplier applied to the subtotal.
    pub multiplier: Decimal,
    /// Escalated sum of every component.
    pub total: Decimal,
}

impl AllowanceLine for ManagerRotationLine {
    fn total(&self) -> Decimal {
        self.total
    }
}

/// Where an overtime hourly rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// The item carried an explicit rate.
    Explicit,
    /// Derived from the monthly salary.
    Salary,
}

/// One computed overtime item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeLine {
    /// Overtime item identifier.
    pub item_id: String,
    /// Description of the work.
    pub description: String,
    /// Number of occurrences.
    pub instances: u32,
    /// Days per occurrence.
    pub days: u32,
    /// Hours per day.
    pub hours: Decimal,
    /// Number of people.
    pub people: u32,
    /// Hourly overtime rate.
    pub hourly_rate: Decimal,
    /// Where the hourly rate came from.
    pub rate_source: RateSource,
    /// `instances × days × hours × people × hourly_rate`.
    pub total: Decimal,
}

impl AllowanceLine for OvertimeLine {
    fn total(&self) -> Decimal {
        self.total
    }
}
