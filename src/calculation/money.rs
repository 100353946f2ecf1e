//! Saturating money arithmetic.
//!
//! Lenient input lets any amount through, so products of rates and
//! counts can exceed what a [`Decimal`] holds. These helpers clamp to
//! [`Decimal::MAX`] or [`Decimal::MIN`] instead of panicking.

use rust_decimal::Decimal;

fn clamp(negative: bool) -> Decimal {
    if negative { Decimal::MIN } else { Decimal::MAX }
}

/// `a × b`, clamped on overflow.
///
/// # Example
///
/// ```
/// use allowance_engine::calculation::saturating_mul;
/// use rust_decimal::Decimal;
///
/// assert_eq!(saturating_mul(Decimal::from(300), Decimal::TWO), Decimal::from(600));
/// assert_eq!(saturating_mul(Decimal::MAX, Decimal::TWO), Decimal::MAX);
/// assert_eq!(saturating_mul(Decimal::MAX, -Decimal::TWO), Decimal::MIN);
/// ```
pub fn saturating_mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b)
        .unwrap_or_else(|| clamp(a.is_sign_negative() != b.is_sign_negative()))
}

/// `a + b`, clamped on overflow.
pub fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or_else(|| clamp(a.is_sign_negative()))
}

/// Product of every factor, clamped on overflow.
pub fn saturating_product<I: IntoIterator<Item = Decimal>>(factors: I) -> Decimal {
    factors.into_iter().fold(Decimal::ONE, saturating_mul)
}

/// Sum of every amount, clamped on overflow.
pub fn saturating_sum<I: IntoIterator<Item = Decimal>>(amounts: I) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, saturating_add)
}
