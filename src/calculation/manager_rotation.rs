//! Manager rotation travel.
//!
//! Top-level managers rotate to a branch site for `working_days` days.
//! They are paid one extra per-diem day per working day beyond the first
//! on top of a three-day base, and likewise one extra hotel night on a
//! two-night base. Travel, local transport and other costs are fixed.
//! The whole trip is escalated by budget year.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    AllowanceKind, AllowanceReport, AuditStep, Employee, ManagerRotationLine, RateTable,
};

use super::eligibility::is_manager_rotation_eligible;
use super::escalation::year_multiplier;
use super::money::{saturating_mul, saturating_sum};
use super::rate_lookup::lookup_rate;

/// Per-diem days paid for a one-day rotation.
pub const ROTATION_BASE_PER_DIEM_DAYS: u32 = 3;

/// Hotel nights paid for a one-day rotation.
pub const ROTATION_BASE_HOTEL_NIGHTS: u32 = 2;

/// Fixed travel cost per rotation.
pub const ROTATION_TRAVEL_COST: i64 = 4000;

/// Fixed local transport cost per rotation.
pub const ROTATION_LOCAL_COST: i64 = 1000;

/// Fixed other expenses per rotation.
pub const ROTATION_OTHER_COST: i64 = 500;

/// Trip multipliers as percentages: base year, next year, later years.
pub const ROTATION_ESCALATION: [i64; 3] = [100, 108, 115];

/// Calculates manager rotation travel for `year`.
///
/// Only employees at `manager_level` qualify. A `working_days` of zero is
/// treated as a one-day rotation.
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::calculate_manager_rotation;
/// use allowance_engine::models::{Employee, RateTable};
/// use rust_decimal::Decimal;
///
/// let employee: Employee =
///     serde_json::from_str(r#"{"name": "ก", "level": "M1", "working_days": 1}"#).unwrap();
/// let report = calculate_manager_rotation(&[employee], &RateTable::default(), "M1", 2568);
/// // unknown level: only the fixed costs remain
/// assert_eq!(report.total, Decimal::from(5500));
/// ```
pub fn calculate_manager_rotation(
    employees: &[Employee],
    rates: &RateTable,
    manager_level: &str,
    year: i32,
) -> AllowanceReport<ManagerRotationLine> {
    let multiplier = year_multiplier(year, ROTATION_ESCALATION);
    let travel_cost = Decimal::from(ROTATION_TRAVEL_COST);
    let local_cost = Decimal::from(ROTATION_LOCAL_COST);
    let other_cost = Decimal::from(ROTATION_OTHER_COST);

    let lines: Vec<ManagerRotationLine> = employees
        .iter()
        .filter(|e| is_manager_rotation_eligible(e, manager_level))
        .map(|employee| {
            let card = lookup_rate(employee, rates).card;
            let extra_days = employee.working_days.saturating_sub(1);
            let per_diem_days = ROTATION_BASE_PER_DIEM_DAYS.saturating_add(extra_days);
            let hotel_nights = ROTATION_BASE_HOTEL_NIGHTS.saturating_add(extra_days);

            let per_diem_amount = saturating_mul(Decimal::from(per_diem_days), card.per_diem);
            let hotel_amount = saturating_mul(Decimal::from(hotel_nights), card.hotel);
            let subtotal = saturating_sum([
                per_diem_amount,
                hotel_amount,
                travel_cost,
                local_cost,
                other_cost,
            ]);

            ManagerRotationLine {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                level: employee.level.clone(),
                working_days: employee.working_days,
                per_diem_days,
                per_diem_rate: card.per_diem,
                per_diem_amount,
                hotel_nights,
                hotel_rate: card.hotel,
                hotel_amount,
                travel_cost,
                local_cost,
                other_cost,
                multiplier,
                total: saturating_mul(subtotal, multiplier)
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            }
        })
        .collect();

    let audit_step = AuditStep {
        rule_id: "manager_rotation".to_string(),
        rule_name: "Manager Rotation".to_string(),
        input: serde_json::json!({
            "year": year,
            "manager_level": manager_level,
            "employees": employees.len(),
            "travel_cost": ROTATION_TRAVEL_COST,
            "local_cost": ROTATION_LOCAL_COST,
            "other_cost": ROTATION_OTHER_COST
        }),
        output: serde_json::json!({
            "eligible": lines.len(),
            "multiplier": multiplier.to_string()
        }),
        reasoning: format!(
            "{} managers at level {}, trip cost × {}",
            lines.len(),
            manager_level,
            multiplier
        ),
    };

    AllowanceReport::new(AllowanceKind::ManagerRotation, year, lines, audit_step)
}
