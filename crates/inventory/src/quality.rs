//! Quality value object: a desirability score with a clamped update rule.

use serde::{Deserialize, Serialize};

use gildedrose_core::ValueObject;

/// Desirability score of an item.
///
/// The closed range [`Quality::MIN`, `Quality::MAX`] is an invariant of every
/// *update*, not of construction: initial values outside the range are
/// accepted as given (legendary items legitimately sit at 80) and get pulled
/// back into range by the first clamped adjustment.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quality(i32);

impl Quality {
    /// Lower bound enforced on every update.
    pub const MIN: i32 = 0;

    /// Upper bound enforced on every update.
    pub const MAX: i32 = 50;

    /// What a backstage pass is worth once the concert has happened.
    pub const WORTHLESS: Self = Self(0);

    /// Wrap a raw score. Out-of-range values are accepted unchanged.
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// The raw score.
    pub fn value(self) -> i32 {
        self.0
    }

    /// Apply a delta, then clamp the result into [`Quality::MIN`, `Quality::MAX`].
    ///
    /// This is the only mutation path the aging rules use, so a score can sit
    /// outside the range for at most one update step.
    pub fn adjusted_by(self, delta: i32) -> Self {
        Self(self.0.saturating_add(delta).clamp(Self::MIN, Self::MAX))
    }

    /// True if the score lies within the invariant range.
    pub fn in_range(self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self.0)
    }
}

impl ValueObject for Quality {}

impl From<i32> for Quality {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Quality> for i32 {
    fn from(quality: Quality) -> Self {
        quality.0
    }
}

impl core::fmt::Display for Quality {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_preserves_out_of_range_scores() {
        assert_eq!(Quality::new(80).value(), 80);
        assert_eq!(Quality::new(-5).value(), -5);
        assert!(!Quality::new(80).in_range());
        assert!(Quality::new(50).in_range());
        assert!(Quality::new(0).in_range());
    }

    #[test]
    fn adjustments_clamp_at_both_bounds() {
        assert_eq!(Quality::new(49).adjusted_by(3), Quality::new(50));
        assert_eq!(Quality::new(1).adjusted_by(-2), Quality::new(0));
        assert_eq!(Quality::new(50).adjusted_by(1), Quality::new(50));
        assert_eq!(Quality::new(0).adjusted_by(-1), Quality::new(0));
    }

    #[test]
    fn adjustment_pulls_out_of_range_scores_back() {
        // One step is enough, whatever the delta's direction.
        assert_eq!(Quality::new(55).adjusted_by(-1), Quality::new(50));
        assert_eq!(Quality::new(-5).adjusted_by(1), Quality::new(0));
        assert_eq!(Quality::new(i32::MAX).adjusted_by(3), Quality::new(50));
    }

    #[test]
    fn worthless_is_the_floor() {
        assert_eq!(Quality::WORTHLESS.value(), 0);
        assert_eq!(Quality::WORTHLESS, Quality::new(0));
    }

    #[test]
    fn displays_as_the_raw_score() {
        assert_eq!(Quality::new(42).to_string(), "42");
        assert_eq!(Quality::new(-3).to_string(), "-3");
    }
}
