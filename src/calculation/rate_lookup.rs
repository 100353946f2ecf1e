//! Rate card lookup.
//!
//! Resolves the rate card that applies to an employee: the master table's
//! card for the employee's level, with any per-employee travel overrides
//! laid on top.

use tracing::warn;

use crate::models::{Employee, RateCard, RateTable};

/// The result of a rate lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct RateLookupResult {
    /// The effective rate card.
    pub card: RateCard,
    /// False when the level was missing and a zeroed card was used.
    pub found: bool,
    /// Names of the fields replaced by per-employee overrides.
    pub overridden: Vec<&'static str>,
}

/// Looks up the effective rate card for an employee.
///
/// Non-null fields of `employee.custom_travel_rates` (hotel, per diem,
/// travel, local) replace the table's values. An unknown level does not
/// fail: it yields a zero-valued card so the employee still appears in
/// the report with zero amounts.
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::lookup_rate;
/// use allowance_engine::models::{Employee, RateTable};
/// use rust_decimal::Decimal;
///
/// let employee: Employee = serde_json::from_str(r#"{"name": "ก", "level": "X"}"#).unwrap();
/// let result = lookup_rate(&employee, &RateTable::default());
/// assert!(!result.found);
/// assert_eq!(result.card.hotel, Decimal::ZERO);
/// ```
pub fn lookup_rate(employee: &Employee, table: &RateTable) -> RateLookupResult {
    let (mut card, found) = match table.get(&employee.level) {
        Some(card) => (card.clone(), true),
        None => {
            warn!(
                employee_id = %employee.id,
                level = %employee.level,
                "Level missing from rate table, using zero rates"
            );
            (RateCard::zeroed(employee.level.clone()), false)
        }
    };

    let mut overridden = Vec::new();
    if let Some(custom) = &employee.custom_travel_rates {
        if let Some(hotel) = custom.hotel {
            card.hotel = hotel;
            overridden.push("hotel");
        }
        if let Some(per_diem) = custom.per_diem {
            card.per_diem = per_diem;
            overridden.push("per_diem");
        }
        if let Some(travel) = custom.travel {
            card.travel = travel;
            overridden.push("travel");
        }
        if let Some(local) = custom.local {
            card.local = local;
            overridden.push("local");
        }
    }

    RateLookupResult {
        card,
        found,
        overridden,
    }
}
