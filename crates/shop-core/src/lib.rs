#![deny(warnings)]

//! Core inventory model and per-category aging rules.
//!
//! This crate defines the serializable [`Item`] record, the closed set of
//! update-rule categories ([`ItemKind`]) derived from an item's name, the
//! per-day quality delta of each category, and validation helpers for callers
//! that want to check inputs before simulating.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Name of the cheese that improves with age.
pub const AGED_BRIE: &str = "Aged Brie";
/// Name of the legendary item that never ages.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
/// Name of the concert ticket whose value peaks right before the show.
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
/// Name of the conjured item that degrades twice as fast.
pub const CONJURED: &str = "Conjured Mana Cake";

/// Lowest quality any non-legendary item can have after an update.
pub const MIN_QUALITY: i32 = 0;
/// Highest quality any non-legendary item can have after an update.
pub const MAX_QUALITY: i32 = 50;
/// Fixed quality of legendary items.
pub const LEGENDARY_QUALITY: i32 = 80;

/// One inventory line.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Display name; also selects the update rule.
    pub name: String,
    /// Days left before the sell-by date. Negative once the date has passed.
    pub sell_in: i32,
    /// Desirability score.
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// A legendary item with its quality pinned at [`LEGENDARY_QUALITY`].
    pub fn legendary(sell_in: i32) -> Self {
        Self::new(SULFURAS, sell_in, LEGENDARY_QUALITY)
    }

    /// Update-rule category of this item, resolved from its name.
    pub fn kind(&self) -> ItemKind {
        ItemKind::from_name(&self.name)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Update-rule categories. The set is closed; unknown names map to `Default`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Ordinary goods: lose one quality point per day.
    Default,
    /// Gains quality with age, twice as fast after the sell-by date.
    AgedBrie,
    /// Exempt from aging: neither `sell_in` nor `quality` ever change.
    Legendary,
    /// Gains quality as the concert approaches, worthless afterwards.
    BackstagePass,
    /// Degrades twice as fast as ordinary goods.
    Conjured,
}

impl ItemKind {
    /// Resolve the category by exact, case-sensitive name match.
    pub fn from_name(name: &str) -> Self {
        match name {
            AGED_BRIE => ItemKind::AgedBrie,
            SULFURAS => ItemKind::Legendary,
            BACKSTAGE_PASSES => ItemKind::BackstagePass,
            CONJURED => ItemKind::Conjured,
            _ => ItemKind::Default,
        }
    }

    /// Whether items of this kind are skipped by the daily update.
    pub fn is_legendary(self) -> bool {
        self == ItemKind::Legendary
    }

    /// Signed quality change for one day, before clamping.
    ///
    /// `sell_in` must be the value *after* the day's decrement.
    pub fn quality_delta(self, sell_in: i32, quality: i32) -> i32 {
        match self {
            ItemKind::Default => -1,
            ItemKind::AgedBrie if sell_in < 0 => 2,
            ItemKind::AgedBrie => 1,
            ItemKind::Legendary => 0,
            // Expired passes drop by their whole quality, landing on zero.
            ItemKind::BackstagePass if sell_in < 0 => quality.saturating_neg(),
            ItemKind::BackstagePass if sell_in <= 5 => 3,
            ItemKind::BackstagePass if sell_in <= 10 => 2,
            ItemKind::BackstagePass => 1,
            ItemKind::Conjured if sell_in < 0 => -4,
            ItemKind::Conjured => -2,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ItemKind::Default => "default",
            ItemKind::AgedBrie => "aged-brie",
            ItemKind::Legendary => "legendary",
            ItemKind::BackstagePass => "backstage-pass",
            ItemKind::Conjured => "conjured",
        };
        f.write_str(s)
    }
}

/// Apply `delta` to `quality` and bound the result to `[MIN_QUALITY, MAX_QUALITY]`.
pub fn clamp_quality(quality: i32, delta: i32) -> i32 {
    quality.saturating_add(delta).clamp(MIN_QUALITY, MAX_QUALITY)
}

/// Validation errors for inventory items.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Item name is blank.
    #[error("item name must not be empty")]
    EmptyName,
    /// Non-legendary quality outside `[0, 50]`.
    #[error("quality {0} is out of range [0, 50]")]
    QualityOutOfRange(i32),
    /// Legendary quality differs from the fixed value.
    #[error("legendary quality must be 80, got {0}")]
    LegendaryQuality(i32),
}

/// Validate a single item.
pub fn validate_item(item: &Item) -> Result<(), ValidationError> {
    if item.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    match item.kind() {
        ItemKind::Legendary if item.quality != LEGENDARY_QUALITY => {
            Err(ValidationError::LegendaryQuality(item.quality))
        }
        ItemKind::Legendary => Ok(()),
        _ if !(MIN_QUALITY..=MAX_QUALITY).contains(&item.quality) => {
            Err(ValidationError::QualityOutOfRange(item.quality))
        }
        _ => Ok(()),
    }
}

/// Validate every item, returning the index and error of each failure.
pub fn validate_inventory(items: &[Item]) -> Vec<(usize, ValidationError)> {
    let mut failures = Vec::new();
    for (idx, item) in items.iter().enumerate() {
        if let Err(e) = validate_item(item) {
            debug!(idx, name = %item.name, error = %e, "item failed validation");
            failures.push((idx, e));
        }
    }
    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn resolves_recognized_names() {
        assert_eq!(ItemKind::from_name(AGED_BRIE), ItemKind::AgedBrie);
        assert_eq!(ItemKind::from_name(SULFURAS), ItemKind::Legendary);
        assert_eq!(ItemKind::from_name(BACKSTAGE_PASSES), ItemKind::BackstagePass);
        assert_eq!(ItemKind::from_name(CONJURED), ItemKind::Conjured);
    }

    #[test]
    fn unknown_and_near_miss_names_fall_back_to_default() {
        assert_eq!(ItemKind::from_name("foo"), ItemKind::Default);
        assert_eq!(ItemKind::from_name(""), ItemKind::Default);
        assert_eq!(ItemKind::from_name("aged brie"), ItemKind::Default);
        assert_eq!(ItemKind::from_name("Aged Brie "), ItemKind::Default);
        assert_eq!(ItemKind::from_name("Sulfuras"), ItemKind::Default);
    }

    #[test]
    fn default_delta_ignores_sell_date() {
        assert_eq!(ItemKind::Default.quality_delta(14, 5), -1);
        assert_eq!(ItemKind::Default.quality_delta(-1, 5), -1);
    }

    #[test]
    fn aged_brie_doubles_after_sell_date() {
        assert_eq!(ItemKind::AgedBrie.quality_delta(0, 5), 1);
        assert_eq!(ItemKind::AgedBrie.quality_delta(-1, 5), 2);
    }

    #[test]
    fn legendary_delta_is_zero() {
        assert_eq!(ItemKind::Legendary.quality_delta(15, 80), 0);
        assert_eq!(ItemKind::Legendary.quality_delta(-1, 80), 0);
    }

    #[test]
    fn backstage_brackets_are_inclusive() {
        let k = ItemKind::BackstagePass;
        assert_eq!(k.quality_delta(15, 5), 1);
        assert_eq!(k.quality_delta(11, 5), 1);
        assert_eq!(k.quality_delta(10, 5), 2);
        assert_eq!(k.quality_delta(6, 5), 2);
        assert_eq!(k.quality_delta(5, 5), 3);
        assert_eq!(k.quality_delta(0, 5), 3);
        assert_eq!(k.quality_delta(-1, 5), -5);
        assert_eq!(k.quality_delta(-1, 37), -37);
    }

    #[test]
    fn conjured_degrades_twice_as_fast() {
        assert_eq!(ItemKind::Conjured.quality_delta(0, 5), -2);
        assert_eq!(ItemKind::Conjured.quality_delta(-1, 5), -4);
    }

    #[test]
    fn clamp_bounds_both_ends() {
        assert_eq!(clamp_quality(0, -1), 0);
        assert_eq!(clamp_quality(50, 2), 50);
        assert_eq!(clamp_quality(49, 3), 50);
        assert_eq!(clamp_quality(10, -3), 7);
        assert_eq!(clamp_quality(120, -1), 50);
        assert_eq!(clamp_quality(-7, 1), 0);
        assert_eq!(clamp_quality(i32::MAX, 3), 50);
    }

    #[test]
    fn legendary_constructor_pins_quality() {
        let item = Item::legendary(-1);
        assert_eq!(item.name, SULFURAS);
        assert_eq!(item.quality, LEGENDARY_QUALITY);
        assert_eq!(item.kind(), ItemKind::Legendary);
    }

    #[test]
    fn kind_display_is_kebab_case() {
        let names: Vec<String> = [AGED_BRIE, SULFURAS, BACKSTAGE_PASSES, CONJURED, "foo"]
            .iter()
            .map(|n| ItemKind::from_name(n).to_string())
            .collect();
        assert_eq!(
            names,
            ["aged-brie", "legendary", "backstage-pass", "conjured", "default"]
        );
    }

    #[test]
    fn display_matches_fixture_format() {
        let item = Item::new("foo", -1, 0);
        assert_eq!(item.to_string(), "foo, -1, 0");
    }

    #[test]
    fn serde_uses_camel_case_keys() {
        let item = Item::new(AGED_BRIE, 2, 0);
        let s = serde_json::to_string(&item).unwrap();
        assert_eq!(s, r#"{"name":"Aged Brie","sellIn":2,"quality":0}"#);
        let back: Item = serde_json::from_str(&s).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn validation_catches_bad_items() {
        assert_eq!(validate_item(&Item::new("foo", 1, 10)), Ok(()));
        assert_eq!(validate_item(&Item::legendary(0)), Ok(()));
        assert_eq!(
            validate_item(&Item::new("  ", 1, 10)),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            validate_item(&Item::new("foo", 1, 51)),
            Err(ValidationError::QualityOutOfRange(51))
        );
        assert_eq!(
            validate_item(&Item::new(SULFURAS, 1, 50)),
            Err(ValidationError::LegendaryQuality(50))
        );
    }

    #[test]
    fn validate_inventory_reports_indices() {
        let items = vec![
            Item::new("ok", 1, 1),
            Item::new("bad", 1, -3),
            Item::legendary(0),
            Item::new("", 0, 0),
        ];
        let failures = validate_inventory(&items);
        assert_eq!(
            failures,
            vec![
                (1, ValidationError::QualityOutOfRange(-3)),
                (3, ValidationError::EmptyName),
            ]
        );
    }

    proptest! {
        #[test]
        fn clamp_stays_in_range(q in any::<i32>(), d in any::<i32>()) {
            let out = clamp_quality(q, d);
            prop_assert!((MIN_QUALITY..=MAX_QUALITY).contains(&out));
        }

        #[test]
        fn expired_backstage_always_clamps_to_zero(q in 0i32..=50, s in i32::MIN..0) {
            let delta = ItemKind::BackstagePass.quality_delta(s, q);
            prop_assert_eq!(clamp_quality(q, delta), 0);
        }
    }
}
