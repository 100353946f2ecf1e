//! Overtime pay calculation.
//!
//! The hourly overtime rate is one and a half times the ordinary hourly
//! rate, where the ordinary rate spreads a monthly salary over 30 days of
//! 8 hours. An item may carry its own rate instead.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    AllowanceKind, AllowanceReport, AuditStep, OvertimeItem, OvertimeLine, RateSource,
};

use super::money::saturating_product;
use super::work_days::WorkDaySummary;

/// Days a monthly salary is spread over.
pub const SALARY_DAYS_PER_MONTH: i64 = 30;

/// Ordinary hours per day.
pub const ORDINARY_HOURS_PER_DAY: i64 = 8;

/// Overtime multiplier over the ordinary hourly rate.
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// The overtime hourly rate for a monthly salary: `(salary / 30 / 8) × 1.5`.
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::overtime_hourly_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(overtime_hourly_rate(Decimal::from(21000)), Decimal::new(13125, 2));
/// ```
pub fn overtime_hourly_rate(salary: Decimal) -> Decimal {
    salary / Decimal::from(SALARY_DAYS_PER_MONTH) / Decimal::from(ORDINARY_HOURS_PER_DAY)
        * OVERTIME_MULTIPLIER
}

/// Calculates overtime for a set of items.
///
/// Each line totals `instances × days × hours × people × rate`, rounded
/// to two decimal places. Items without `days` use the year's effective
/// working days from `work_days`, or zero if none was supplied.
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::calculate_overtime;
/// use allowance_engine::models::OvertimeItem;
/// use rust_decimal::Decimal;
///
/// let item: OvertimeItem = serde_json::from_str(
///     r#"{"year": 2568, "instances": 1, "days": 1, "hours": 8, "people": 1, "salary": 21000}"#,
/// ).unwrap();
/// let report = calculate_overtime(&[item], 2568, None);
/// assert_eq!(report.total, Decimal::new(105000, 2));
/// ```
pub fn calculate_overtime(
    items: &[OvertimeItem],
    year: i32,
    work_days: Option<&WorkDaySummary>,
) -> AllowanceReport<OvertimeLine> {
    let default_days = work_days.map(|w| w.total_work_days).unwrap_or(0);

    let lines: Vec<OvertimeLine> = items
        .iter()
        .map(|item| {
            let (hourly_rate, rate_source) = match item.rate {
                Some(rate) => (rate, RateSource::Explicit),
                None => (overtime_hourly_rate(item.salary), RateSource::Salary),
            };
            let days = item.days.unwrap_or(default_days);
            let total = saturating_product([
                Decimal::from(item.instances),
                Decimal::from(days),
                item.hours,
                Decimal::from(item.people),
                hourly_rate,
            ])
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

            OvertimeLine {
                item_id: item.id.clone(),
                description: item.description.clone(),
                instances: item.instances,
                days,
                hours: item.hours,
                people: item.people,
                hourly_rate,
                rate_source,
                total,
            }
        })
        .collect();

    let audit_step = AuditStep {
        rule_id: "overtime".to_string(),
        rule_name: "Overtime Pay".to_string(),
        input: serde_json::json!({
            "year": year,
            "items": items.len(),
            "default_days": default_days,
            "multiplier": OVERTIME_MULTIPLIER.to_string()
        }),
        output: serde_json::json!({
            "lines": lines.len(),
            "salary_derived": lines.iter().filter(|l| l.rate_source == RateSource::Salary).count()
        }),
        reasoning: format!(
            "instances × days × hours × people × rate over {} items",
            lines.len()
        ),
    };

    AllowanceReport::new(AllowanceKind::Overtime, year, lines, audit_step)
}
