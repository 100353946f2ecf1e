//! Long-service travel reimbursement.
//!
//! Employees who reach a tenure milestone in the budget year receive one
//! trip: two hotel nights, three per-diem days, and a round trip of both
//! travel fare and local transport, all priced from their rate card.

use rust_decimal::Decimal;

use crate::models::{AllowanceKind, AllowanceReport, AuditStep, Employee, RateTable, TravelLine};

use super::eligibility::{TENURE_MILESTONES, is_travel_eligible};
use super::money::{saturating_mul, saturating_sum};
use super::rate_lookup::lookup_rate;

/// Hotel nights paid per trip.
pub const TRAVEL_HOTEL_NIGHTS: u32 = 2;

/// Per-diem days paid per trip.
pub const TRAVEL_PER_DIEM_DAYS: u32 = 3;

/// Legs of travel (there and back).
pub const TRAVEL_LEGS: u32 = 2;

/// Calculates the long-service travel reimbursement for `year`.
///
/// Only employees whose tenure in `year` is one of
/// [`TENURE_MILESTONES`] appear in the report. Each line totals
/// `2 × hotel + 3 × per_diem + 2 × travel + 2 × local`.
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::calculate_travel;
/// use allowance_engine::models::{Employee, RateCard, RateTable};
/// use rust_decimal::Decimal;
///
/// let mut card = RateCard::zeroed("C5");
/// card.hotel = Decimal::from(1500);
/// card.per_diem = Decimal::from(240);
/// let rates = RateTable::from_cards(vec![card]);
///
/// let employee: Employee =
///     serde_json::from_str(r#"{"name": "ก", "level": "C5", "start_year": 2548}"#).unwrap();
/// let report = calculate_travel(&[employee], &rates, 2568);
/// assert_eq!(report.total, Decimal::from(3720)); // 2×1500 + 3×240
/// ```
pub fn calculate_travel(
    employees: &[Employee],
    rates: &RateTable,
    year: i32,
) -> AllowanceReport<TravelLine> {
    let nights = Decimal::from(TRAVEL_HOTEL_NIGHTS);
    let days = Decimal::from(TRAVEL_PER_DIEM_DAYS);
    let legs = Decimal::from(TRAVEL_LEGS);

    let lines: Vec<TravelLine> = employees
        .iter()
        .filter(|e| is_travel_eligible(e, year))
        .map(|employee| {
            let card = lookup_rate(employee, rates).card;
            let hotel_amount = saturating_mul(nights, card.hotel);
            let per_diem_amount = saturating_mul(days, card.per_diem);
            let travel_amount = saturating_mul(legs, card.travel);
            let local_amount = saturating_mul(legs, card.local);

            TravelLine {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                level: employee.level.clone(),
                tenure: employee.tenure(year),
                hotel_nights: TRAVEL_HOTEL_NIGHTS,
                hotel_rate: card.hotel,
                hotel_amount,
                per_diem_days: TRAVEL_PER_DIEM_DAYS,
                per_diem_rate: card.per_diem,
                per_diem_amount,
                travel_rate: card.travel,
                travel_amount,
                local_rate: card.local,
                local_amount,
                total: saturating_sum([hotel_amount, per_diem_amount, travel_amount, local_amount]),
            }
        })
        .collect();

    let audit_step = AuditStep {
        rule_id: "travel_allowance".to_string(),
        rule_name: "Long-Service Travel".to_string(),
        input: serde_json::json!({
            "year": year,
            "employees": employees.len(),
            "tenure_milestones": TENURE_MILESTONES,
            "hotel_nights": TRAVEL_HOTEL_NIGHTS,
            "per_diem_days": TRAVEL_PER_DIEM_DAYS,
            "legs": TRAVEL_LEGS
        }),
        output: serde_json::json!({
            "eligible": lines.len()
        }),
        reasoning: format!(
            "{} of {} employees reach a tenure milestone in {}",
            lines.len(),
            employees.len(),
            year
        ),
    };

    AllowanceReport::new(AllowanceKind::Travel, year, lines, audit_step)
}
