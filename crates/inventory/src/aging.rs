//! End-of-day aging rules.
//!
//! Each call to [`advance_one_day`] ages every item in the inventory by one
//! day. Per item the rule is picked from its [`ItemCategory`] and evaluated
//! against the *day-start* `sell_in` (before the decrement): an item with
//! `sell_in == 0` at the start of the update already counts as expired for
//! that update. Quality adjustments clamp into `[Quality::MIN, Quality::MAX]`;
//! legendary items are exempt from the whole procedure.
//!
//! The rule table:
//!
//! | Category       | Before sell date | On/after sell date |
//! |----------------|------------------|--------------------|
//! | Normal         | -1               | -2                 |
//! | Aged Brie      | +1               | +2                 |
//! | Backstage pass | +1 / +2 / +3 (*) | drops to 0         |
//! | Conjured       | -2 (-1 off)      | -4 (-2 off)        |
//! | Legendary      | unchanged        | unchanged          |
//!
//! (*) +2 at ten days or fewer, +3 at five days or fewer. The conjured
//! acceleration is governed by [`AgingPolicy::conjured_double_decay`].

use crate::category::ItemCategory;
use crate::item::Item;
use crate::policy::AgingPolicy;
use crate::quality::Quality;

/// Age every item in `items` by one day, in place.
///
/// Items are updated independently and in order; the slice never grows or
/// shrinks. The same `policy` applies to the whole pass.
pub fn advance_one_day(items: &mut [Item], policy: &AgingPolicy) {
    for item in items.iter_mut() {
        advance_item(item, policy);
    }
}

pub(crate) fn advance_item(item: &mut Item, policy: &AgingPolicy) {
    let expired = item.is_expired();

    item.quality = match item.category() {
        ItemCategory::Legendary => return,
        ItemCategory::AgedBrie => item.quality.adjusted_by(if expired { 2 } else { 1 }),
        ItemCategory::BackstagePass => match item.sell_in {
            ..=0 => Quality::WORTHLESS,
            1..=5 => item.quality.adjusted_by(3),
            6..=10 => item.quality.adjusted_by(2),
            _ => item.quality.adjusted_by(1),
        },
        ItemCategory::Conjured if policy.conjured_double_decay => {
            item.quality.adjusted_by(if expired { -4 } else { -2 })
        }
        ItemCategory::Conjured | ItemCategory::Normal => {
            item.quality.adjusted_by(if expired { -2 } else { -1 })
        }
    };
    item.sell_in = item.sell_in.saturating_sub(1);
}
