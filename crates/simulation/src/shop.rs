//! The shop: an owned inventory plus the simulated-day loop.

use tracing::debug;

use gildedrose_inventory::{AgingPolicy, Item};

/// A shop whose inventory ages one day per tick.
///
/// The shop owns its items and an elapsed-day counter. Aging itself is
/// delegated to the inventory rules; the shop contributes sequencing and a
/// debug trace per advanced day. Item order is the intake order and never
/// changes.
#[derive(Debug, Clone)]
pub struct Shop {
    items: Vec<Item>,
    policy: AgingPolicy,
    days_elapsed: u32,
}

impl Shop {
    /// Open a shop over `items` with the default aging policy.
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_policy(items, AgingPolicy::default())
    }

    /// Open a shop over `items` with an explicit aging policy.
    pub fn with_policy(items: Vec<Item>, policy: AgingPolicy) -> Self {
        Self {
            items,
            policy,
            days_elapsed: 0,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn policy(&self) -> AgingPolicy {
        self.policy
    }

    /// Number of days this shop has been advanced since opening.
    pub fn days_elapsed(&self) -> u32 {
        self.days_elapsed
    }

    /// Age the whole inventory by one day.
    pub fn advance_one_day(&mut self) {
        gildedrose_inventory::advance_one_day(&mut self.items, &self.policy);
        self.days_elapsed += 1;
        debug!(
            day = self.days_elapsed,
            items = self.items.len(),
            "advanced inventory by one day"
        );
    }

    /// Age the whole inventory by `days` days, one day at a time.
    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance_one_day();
        }
    }
}
