#![deny(warnings)]

//! Day-tick engine: advances every inventory item by one simulated day.
//!
//! Each call moves the whole collection forward exactly one day. Items are
//! updated independently and in place; nothing is added, removed or reordered.
//! Callers run multi-day simulations by calling the engine once per day.

use serde::{Deserialize, Serialize};
use shop_core::{clamp_quality, Item};
use tracing::{debug, trace};

/// Advance a single item by one day.
///
/// Legendary items are left untouched. Every other item goes through two
/// ordered steps:
/// 1. `sell_in` is decremented;
/// 2. the category's quality delta is computed from the *decremented*
///    `sell_in` and applied, with the result clamped to `[0, 50]`.
pub fn advance_item(item: &mut Item) {
    let kind = item.kind();
    if kind.is_legendary() {
        trace!(name = %item.name, "legendary item skipped");
        return;
    }

    let (sell_in_before, quality_before) = (item.sell_in, item.quality);

    // Step 1: the delta below must observe the new sell_in.
    item.sell_in = item.sell_in.saturating_sub(1);

    // Step 2
    let delta = kind.quality_delta(item.sell_in, item.quality);
    item.quality = clamp_quality(item.quality, delta);

    trace!(
        name = %item.name,
        %kind,
        sell_in_before,
        sell_in = item.sell_in,
        quality_before,
        quality = item.quality,
        delta,
        "item advanced"
    );
}

/// Advance every item in `items` by one day, in order.
pub fn update_quality(items: &mut [Item]) {
    debug!(items = items.len(), "advancing inventory one day");
    for item in items.iter_mut() {
        advance_item(item);
    }
}

/// Owned inventory that can be advanced one day at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Advance all items by one day and return them.
    pub fn update_quality(&mut self) -> &[Item] {
        update_quality(&mut self.items);
        &self.items
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
