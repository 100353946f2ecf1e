//! Budget sheet subtotals.
//!
//! Walks the flat, ordered budget rows and totals the data rows under
//! each section header, per year.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BudgetItem, BudgetItemType};

use super::money::saturating_add;

/// Year-by-year totals for one section header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSection {
    /// Identifier of the header row.
    pub item_id: String,
    /// Header kind.
    #[serde(rename = "type")]
    pub item_type: BudgetItemType,
    /// Header account code.
    pub code: String,
    /// Header name.
    pub name: String,
    /// Sum of the section's data rows per year.
    pub totals: BTreeMap<i32, Decimal>,
}

/// Subtotals for every section plus the grand total.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// One entry per header row, in sheet order.
    pub sections: Vec<BudgetSection>,
    /// Sum of every data row per year.
    pub grand_total: BTreeMap<i32, Decimal>,
}

/// Totals the budget sheet.
///
/// A data row counts toward the nearest `header` above it and the
/// nearest `main_header` above that. A new `main_header` closes the
/// current `header`. Amounts on header rows are ignored.
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::summarize_budget;
/// use allowance_engine::models::BudgetItem;
///
/// let items: Vec<BudgetItem> = serde_json::from_str(r#"[
///     {"type": "main_header", "name": "งบบุคลากร"},
///     {"name": "เงินเดือน", "amounts": {"2568": 1000}},
///     {"name": "ค่าจ้าง", "amounts": {"2568": 500}}
/// ]"#).unwrap();
/// let summary = summarize_budget(&items);
/// assert_eq!(summary.sections[0].totals[&2568].to_string(), "1500");
/// ```
pub fn summarize_budget(items: &[BudgetItem]) -> BudgetSummary {
    let mut summary = BudgetSummary::default();
    let mut main_index: Option<usize> = None;
    let mut header_index: Option<usize> = None;

    for item in items {
        match item.item_type {
            BudgetItemType::MainHeader => {
                summary.sections.push(section_for(item));
                main_index = Some(summary.sections.len() - 1);
                header_index = None;
            }
            BudgetItemType::Header => {
                summary.sections.push(section_for(item));
                header_index = Some(summary.sections.len() - 1);
            }
            BudgetItemType::Data => {
                for (year, amount) in &item.amounts {
                    for index in [main_index, header_index].into_iter().flatten() {
                        add_amount(&mut summary.sections[index].totals, *year, *amount);
                    }
                    add_amount(&mut summary.grand_total, *year, *amount);
                }
            }
        }
    }

    summary
}

fn add_amount(totals: &mut BTreeMap<i32, Decimal>, year: i32, amount: Decimal) {
    let total = totals.entry(year).or_insert(Decimal::ZERO);
    *total = saturating_add(*total, amount);
}

fn section_for(item: &BudgetItem) -> BudgetSection {
    BudgetSection {
        item_id: item.id.clone(),
        item_type: item.item_type,
        code: item.code.clone(),
        name: item.name.clone(),
        totals: BTreeMap::new(),
    }
}
