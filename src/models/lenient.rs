//! Lenient numeric deserialization.
//!
//! Form input arrives as numbers, numeric strings ("1,200.50"), empty
//! strings, or `null`. Anything that does not parse is treated as zero
//! rather than rejected, so a half-filled row still produces a total.
//!
//! Use these with `#[serde(deserialize_with = "...", default)]`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer};
use serde::de::{self, Visitor};

/// Parses a user-entered amount, falling back to zero.
///
/// Thousands separators and surrounding whitespace are ignored.
///
/// # Example
///
/// ```
/// use allowance_engine::models::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("1,200.50"), Decimal::new(120050, 2));
/// assert_eq!(parse_amount("abc"), Decimal::ZERO);
/// assert_eq!(parse_amount(""), Decimal::ZERO);
/// ```
pub fn parse_amount(input: &str) -> Decimal {
    parse_strict(input).unwrap_or(Decimal::ZERO)
}

fn parse_strict(input: &str) -> Option<Decimal> {
    let cleaned: String = input.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()
}

struct LenientDecimal;

impl<'de> Visitor<'de> for LenientDecimal {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Decimal, E> {
        Ok(Decimal::ZERO)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
        Ok(Decimal::try_from(v).unwrap_or(Decimal::ZERO))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
        Ok(parse_amount(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Decimal, E> {
        Ok(Decimal::ZERO)
    }

    fn visit_none<E: de::Error>(self) -> Result<Decimal, E> {
        Ok(Decimal::ZERO)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Decimal, D::Error> {
        deserializer.deserialize_any(LenientDecimal)
    }
}

/// Deserializes a [`Decimal`], coercing invalid input to zero.
pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientDecimal)
}

/// Deserializes an optional [`Decimal`].
///
/// `null`, a missing field, and a blank string are `None`; any other
/// value goes through the same coercion as [`decimal`].
pub fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OptionalDecimal;

    impl<'de> Visitor<'de> for OptionalDecimal {
        type Value = Option<Decimal>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number, a numeric string, or null")
        }

        fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
            Ok(Some(Decimal::ZERO))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            LenientDecimal.visit_i64(v).map(Some)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            LenientDecimal.visit_u64(v).map(Some)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            LenientDecimal.visit_f64(v).map(Some)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            if v.trim().is_empty() {
                Ok(None)
            } else {
                Ok(Some(parse_amount(v)))
            }
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(
            self,
            deserializer: D,
        ) -> Result<Self::Value, D::Error> {
            deserializer.deserialize_any(OptionalDecimal)
        }
    }

    deserializer.deserialize_any(OptionalDecimal)
}

/// Deserializes a non-negative whole count (days, people, months).
///
/// Fractions are truncated; negative or unparseable input becomes zero.
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = decimal(deserializer)?;
    Ok(value.trunc().to_u32().unwrap_or(0))
}

/// Deserializes an optional count.
///
/// `null`, a missing field, and a blank string are `None`; anything else
/// is coerced like [`count`].
pub fn optional_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = optional_decimal(deserializer)?;
    Ok(value.map(|v| v.trunc().to_u32().unwrap_or(0)))
}

/// Deserializes a calendar year, coercing invalid input to zero.
pub fn year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = decimal(deserializer)?;
    Ok(value.trunc().to_i32().unwrap_or(0))
}

/// Deserializes a year-to-amount map, coercing each amount like
/// [`decimal`]. `null` reads as an empty map.
pub fn yearly_amounts<'de, D>(deserializer: D) -> Result<BTreeMap<i32, Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    struct Amount(Decimal);

    impl<'de> Deserialize<'de> for Amount {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            decimal(deserializer).map(Amount)
        }
    }

    let raw = Option::<BTreeMap<i32, Amount>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(year, amount)| (year, amount.0))
        .collect())
}
