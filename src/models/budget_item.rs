//! Multi-year budget line items.
//!
//! Budget sheets are flat ordered lists: section headers are ordinary rows
//! distinguished by [`BudgetItemType`], and a data row belongs to the
//! nearest header above it.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// The role a row plays in the budget sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetItemType {
    /// Top-level section header.
    MainHeader,
    /// Sub-section header.
    Header,
    /// A row carrying amounts.
    #[default]
    Data,
}

/// One row of the budget sheet.
///
/// # Example
///
/// ```
/// use allowance_engine::models::{BudgetItem, BudgetItemType};
///
/// let json = r#"{"type": "header", "name": "ค่าตอบแทน", "amounts": {}}"#;
/// let item: BudgetItem = serde_json::from_str(json).unwrap();
/// assert_eq!(item.item_type, BudgetItemType::Header);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Unique identifier.
    #[serde(default)]
    pub id: String,
    /// Row role.
    #[serde(rename = "type", default)]
    pub item_type: BudgetItemType,
    /// Account code.
    #[serde(default)]
    pub code: String,
    /// Display name.
    pub name: String,
    /// Amount per Buddhist year.
    #[serde(deserialize_with = "lenient::yearly_amounts", default)]
    pub amounts: BTreeMap<i32, Decimal>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
    /// Position in the sheet; rows are listed in ascending order.
    #[serde(default)]
    pub sort_order: i64,
}
