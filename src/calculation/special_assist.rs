//! Special assistance allowance.
//!
//! Eligible employees receive their level's monthly rent allowance and
//! monthly assistance for a number of months. The level's lump sum is
//! carried on each line but kept out of the total, since HR edits it
//! per employee.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AllowanceKind, AllowanceReport, AuditStep, Employee, RateTable, SpecialAssistLine,
};

use crate::models::lenient;

use super::eligibility::is_special_assist_eligible;
use super::money::{saturating_add, saturating_mul, saturating_sum};
use super::rate_lookup::lookup_rate;

/// Months paid when no other count is given.
pub const DEFAULT_ASSIST_MONTHS: u32 = 12;

/// Adjustable inputs for the special-assistance calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialAssistOptions {
    /// Months paid to every employee.
    #[serde(deserialize_with = "lenient::count", default = "default_months")]
    pub months: u32,
    /// Lump sums keyed by employee id, replacing the rate card's value.
    #[serde(default)]
    pub lump_sums: HashMap<String, Decimal>,
}

fn default_months() -> u32 {
    DEFAULT_ASSIST_MONTHS
}

impl Default for SpecialAssistOptions {
    fn default() -> Self {
        Self {
            months: DEFAULT_ASSIST_MONTHS,
            lump_sums: HashMap::new(),
        }
    }
}

/// Calculates special assistance: `rent × months + monthly_assist × months`.
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::{SpecialAssistOptions, calculate_special_assist};
/// use allowance_engine::models::{Employee, RateCard, RateTable};
/// use rust_decimal::Decimal;
///
/// let mut card = RateCard::zeroed("C5");
/// card.rent = Decimal::from(3000);
/// card.monthly_assist = Decimal::from(1500);
/// let rates = RateTable::from_cards(vec![card]);
///
/// let employee: Employee =
///     serde_json::from_str(r#"{"name": "ก", "level": "C5", "status": "มีสิทธิ์"}"#).unwrap();
/// let options = SpecialAssistOptions::default();
/// let report = calculate_special_assist(&[employee], &rates, 2568, &options);
/// assert_eq!(report.total, Decimal::from(54000));
/// ```
pub fn calculate_special_assist(
    employees: &[Employee],
    rates: &RateTable,
    year: i32,
    options: &SpecialAssistOptions,
) -> AllowanceReport<SpecialAssistLine> {
    let months = Decimal::from(options.months);

    let lines: Vec<SpecialAssistLine> = employees
        .iter()
        .filter(|e| is_special_assist_eligible(e))
        .map(|employee| {
            let card = lookup_rate(employee, rates).card;
            let rent_amount = saturating_mul(card.rent, months);
            let assist_amount = saturating_mul(card.monthly_assist, months);
            let lump_sum = options
                .lump_sums
                .get(&employee.id)
                .copied()
                .unwrap_or(card.lump_sum);

            SpecialAssistLine {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                level: employee.level.clone(),
                months: options.months,
                rent: card.rent,
                rent_amount,
                monthly_assist: card.monthly_assist,
                assist_amount,
                lump_sum,
                total: saturating_add(rent_amount, assist_amount),
            }
        })
        .collect();

    let lump_sum_total = saturating_sum(lines.iter().map(|l| l.lump_sum));
    let audit_step = AuditStep {
        rule_id: "special_assist".to_string(),
        rule_name: "Special Assistance".to_string(),
        input: serde_json::json!({
            "year": year,
            "employees": employees.len(),
            "months": options.months,
            "lump_sum_overrides": options.lump_sums.len()
        }),
        output: serde_json::json!({
            "eligible": lines.len(),
            "lump_sum_total": lump_sum_total.to_string()
        }),
        reasoning: format!(
            "(rent + monthly assistance) × {} months for {} eligible employees",
            options.months,
            lines.len()
        ),
    };

    AllowanceReport::new(AllowanceKind::SpecialAssist, year, lines, audit_step)
}
