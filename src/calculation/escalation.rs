//! Year-indexed cost escalators.
//!
//! Multi-year budgets scale fixed costs by a multiplier that steps up with
//! the budget year. The steps are literal business constants.

use rust_decimal::Decimal;

/// Last Buddhist year priced at the base multiplier.
pub const ESCALATION_BASE_YEAR: i32 = 2568;

/// Picks the multiplier for `year` from `[base, next, after]`, given as
/// percentages.
///
/// Years up to [`ESCALATION_BASE_YEAR`] use `base`, the following year
/// uses `next`, and every later year uses `after`.
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::year_multiplier;
/// use rust_decimal::Decimal;
///
/// let steps = [100, 105, 110];
/// assert_eq!(year_multiplier(2568, steps), Decimal::new(100, 2));
/// assert_eq!(year_multiplier(2569, steps), Decimal::new(105, 2));
/// assert_eq!(year_multiplier(2575, steps), Decimal::new(110, 2));
/// ```
pub fn year_multiplier(year: i32, percent_steps: [i64; 3]) -> Decimal {
    let [base, next, after] = percent_steps;
    let percent = if year <= ESCALATION_BASE_YEAR {
        base
    } else if year == ESCALATION_BASE_YEAR + 1 {
        next
    } else {
        after
    };
    Decimal::new(percent, 2)
}
