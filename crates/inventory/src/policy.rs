//! Aging policy: the configurable part of the rule set.

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, ValueObject};

/// Environment variable read by [`AgingPolicy::from_env`].
pub const CONJURED_DOUBLE_DECAY_ENV: &str = "GILDEDROSE_CONJURED_DOUBLE_DECAY";

/// Tunable rule selection for the day advancer.
///
/// The rule table is fixed except for one knob: whether conjured items decay
/// twice as fast as normal ones. Deployments that want conjured stock to
/// behave like normal stock can turn the acceleration off; the default keeps
/// it on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingPolicy {
    /// Conjured items lose 2 quality per day (4 once expired) when true;
    /// they decay like normal items when false.
    pub conjured_double_decay: bool,
}

impl Default for AgingPolicy {
    fn default() -> Self {
        Self {
            conjured_double_decay: true,
        }
    }
}

impl AgingPolicy {
    pub fn with_conjured_double_decay(mut self, enabled: bool) -> Self {
        self.conjured_double_decay = enabled;
        self
    }

    /// Build a policy from the process environment.
    ///
    /// `GILDEDROSE_CONJURED_DOUBLE_DECAY` accepts `true`/`false`/`1`/`0`
    /// (trimmed, case-insensitive); unset means the default policy.
    pub fn from_env() -> DomainResult<Self> {
        let raw = std::env::var(CONJURED_DOUBLE_DECAY_ENV).ok();
        Self::from_env_value(raw.as_deref())
    }

    fn from_env_value(raw: Option<&str>) -> DomainResult<Self> {
        match raw {
            None => Ok(Self::default()),
            Some(raw) => {
                let flag = parse_bool(raw).ok_or_else(|| {
                    DomainError::validation(format!(
                        "{CONJURED_DOUBLE_DECAY_ENV}: expected true/false/1/0, got {raw:?}"
                    ))
                })?;
                Ok(Self::default().with_conjured_double_decay(flag))
            }
        }
    }
}

impl ValueObject for AgingPolicy {}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
