//! Item categories: the closed set of aging behaviors, selected by exact name.

use serde::{Deserialize, Serialize};

/// Name that marks an item as legendary.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Name that marks an item as maturing cheese.
pub const AGED_BRIE: &str = "Aged Brie";

/// Name that marks an item as a backstage pass.
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Name that marks an item as conjured.
pub const CONJURED: &str = "Conjured Mana Cake";

/// Aging behavior of an item, derived from its exact name.
///
/// Any name outside the recognized set is `Normal`. The enum is closed on
/// purpose: the aging rules match on it exhaustively, so a category cannot be
/// added without also deciding its rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Never has to be sold, never changes.
    Legendary,
    /// Gains quality as it matures.
    AgedBrie,
    /// Gains quality as the concert nears, worthless once it has passed.
    BackstagePass,
    /// Loses quality twice as fast when the policy says so.
    Conjured,
    /// Everything else: plain decay.
    Normal,
}

impl ItemCategory {
    /// Derive the category from an item name. Matching is exact: casing and
    /// punctuation count, and near-misses fall through to `Normal`.
    pub fn from_name(name: &str) -> Self {
        match name {
            SULFURAS => Self::Legendary,
            AGED_BRIE => Self::AgedBrie,
            BACKSTAGE_PASS => Self::BackstagePass,
            CONJURED => Self::Conjured,
            _ => Self::Normal,
        }
    }

    /// True for the category exempt from all mutation.
    pub fn is_legendary(self) -> bool {
        matches!(self, Self::Legendary)
    }
}
