//! Save-data tier and its point budget.
//!
//! The budget is `30 + 10 * (level - 1)`. It is always derived from the
//! level, never stored beside it.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SavePointsError};
use crate::rules::TierRules;

/// Maximum points for a tier level under the standard formula.
///
/// ```
/// use savedata_points::points::max_points_for_tier;
///
/// assert_eq!(max_points_for_tier(1), 30);
/// assert_eq!(max_points_for_tier(5), 70);
/// ```
#[must_use]
pub const fn max_points_for_tier(level: u32) -> u32 {
    TierRules::STANDARD.max_points(level)
}

/// A player's chosen save-data tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SaveDataTier {
    level: u32,
}

impl SaveDataTier {
    /// Tier 1, the starting tier.
    pub const FIRST: SaveDataTier = SaveDataTier { level: 1 };

    /// Create a tier. Level 0 is rejected.
    pub fn new(level: u32) -> Result<Self> {
        if level == 0 {
            return Err(SavePointsError::InvalidTierLevel(level));
        }
        Ok(Self { level })
    }

    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Budget under the standard formula.
    #[must_use]
    pub const fn max_points(&self) -> u32 {
        max_points_for_tier(self.level)
    }

    /// Budget under a substitute formula.
    #[must_use]
    pub const fn max_points_with(&self, rules: &TierRules) -> u32 {
        rules.max_points(self.level)
    }
}

impl Default for SaveDataTier {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u32> for SaveDataTier {
    type Error = SavePointsError;

    fn try_from(level: u32) -> Result<Self> {
        Self::new(level)
    }
}

impl From<SaveDataTier> for u32 {
    fn from(tier: SaveDataTier) -> Self {
        tier.level
    }
}
