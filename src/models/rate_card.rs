//! Master rate table models.
//!
//! A [`RateCard`] holds the standard allowance amounts for one level; the
//! [`RateTable`] maps level codes to their cards.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// Standard allowance amounts for one employee level.
///
/// # Example
///
/// ```
/// use allowance_engine::models::RateCard;
/// use rust_decimal::Decimal;
///
/// let card = RateCard::zeroed("C9");
/// assert_eq!(card.level, "C9");
/// assert_eq!(card.hotel, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RateCard {
    /// The level code this card belongs to.
    #[serde(default)]
    pub level: String,
    /// Position label shown next to the level.
    #[serde(default)]
    pub position: String,
    /// Monthly rent allowance.
    #[serde(deserialize_with = "lenient::decimal", default)]
    pub rent: Decimal,
    /// Monthly assistance.
    #[serde(deserialize_with = "lenient::decimal", default)]
    pub monthly_assist: Decimal,
    /// Lump-sum allowance.
    #[serde(deserialize_with = "lenient::decimal", default)]
    pub lump_sum: Decimal,
    /// Travel fare per leg.
    #[serde(deserialize_with = "lenient::decimal", default)]
    pub travel: Decimal,
    /// Local transport per leg.
    #[serde(deserialize_with = "lenient::decimal", default)]
    pub local: Decimal,
    /// Per-diem rate per day.
    #[serde(deserialize_with = "lenient::decimal", default)]
    pub per_diem: Decimal,
    /// Hotel rate per night.
    #[serde(deserialize_with = "lenient::decimal", default)]
    pub hotel: Decimal,
}

impl RateCard {
    /// A card for `level` with every amount set to zero.
    pub fn zeroed(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Default::default()
        }
    }
}

/// Level code to rate card mapping.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RateTable {
    /// Rate cards keyed by level code.
    pub levels: BTreeMap<String, RateCard>,
}

impl RateTable {
    /// Builds a table from a list of cards, keyed by each card's level.
    ///
    /// Later cards replace earlier ones with the same level.
    pub fn from_cards(cards: impl IntoIterator<Item = RateCard>) -> Self {
        let levels = cards
            .into_iter()
            .map(|card| (card.level.clone(), card))
            .collect();
        Self { levels }
    }

    /// Returns the card for a level, if present.
    pub fn get(&self, level: &str) -> Option<&RateCard> {
        self.levels.get(level)
    }

    /// Returns the cards in level order.
    pub fn cards(&self) -> impl Iterator<Item = &RateCard> {
        self.levels.values()
    }

    /// Copies each map key into its card's `level` field.
    ///
    /// Configuration files key the cards by level and usually omit the
    /// field inside the card itself.
    pub fn normalize_levels(&mut self) {
        for (level, card) in self.levels.iter_mut() {
            card.level = level.clone();
        }
    }
}
