//! An item on the shop floor.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::aging;
use crate::category::ItemCategory;
use crate::policy::AgingPolicy;
use crate::quality::Quality;

/// A single stocked item: its name, days left to sell, and quality.
///
/// `sell_in` may go negative (days past the sell-by date) and keeps counting
/// down forever. `quality` is stored as given at intake, even when it falls
/// outside the usual bounds: the aging rules pull it back into range on the
/// next update rather than rejecting it up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub(crate) name: String,
    pub(crate) sell_in: i32,
    pub(crate) quality: Quality,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality: Quality::new(quality),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality.value()
    }

    /// Which rule family applies to this item, resolved from its name.
    pub fn category(&self) -> ItemCategory {
        ItemCategory::from_name(&self.name)
    }

    /// True once the sell-by date has passed (at or below zero days left).
    pub fn is_expired(&self) -> bool {
        self.sell_in <= 0
    }

    /// Age this item by one day under the given policy.
    pub fn advance_one_day(&mut self, policy: &AgingPolicy) {
        aging::advance_item(self, policy);
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
