//! Point rules catalog.
//!
//! `PointRules` holds every cost constant plus the two escalating
//! schedules (copy and removal). It is a plain value: pass a different
//! one to `CostEvaluator` to price cards under a substitute rule set.
//!
//! ## Schedules
//!
//! Both schedules price the n-th occurrence (1-indexed) of an action:
//!
//! | n | copy | remove (standard) | remove (privileged) |
//! |---|------|-------------------|---------------------|
//! | 1 | 0    | 0                 | 0                   |
//! | 2 | 10   | 10                | 20                  |
//! | 3 | 30   | 10                | 20                  |
//! | 4 | 50   | 10                | 20                  |
//!
//! Copies escalate by `copy_step` after the second; removals stay flat.
//!
//! ## Loading
//!
//! ```
//! use savedata_points::rules::PointRules;
//!
//! let rules = PointRules::from_json(r#"{ "monster_card": 100 }"#).unwrap();
//! assert_eq!(rules.monster_card, 100);
//! assert_eq!(rules.common_card, 20); // unspecified fields keep defaults
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::CardRarity;
use crate::error::Result;

/// Tier budget formula: `base + step * (level - 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierRules {
    pub base: u32,
    pub step: u32,
}

impl TierRules {
    pub const STANDARD: TierRules = TierRules { base: 30, step: 10 };

    /// Maximum points for `level`. Level 0 is treated as level 1.
    #[must_use]
    pub const fn max_points(&self, level: u32) -> u32 {
        self.base
            .saturating_add(self.step.saturating_mul(level.saturating_sub(1)))
    }
}

impl Default for TierRules {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Cost constants and escalation schedules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointRules {
    /// Base cost of a common-rarity card.
    pub common_card: u32,
    /// Base cost of a monster card that is not common.
    pub monster_card: u32,
    /// Base cost of a forbidden card; also the flat forbidden bucket rate.
    pub forbidden_card: u32,

    /// Epiphany on a starting or unique card.
    pub starting_unique_epiphany: u32,
    /// Epiphany on any other rarity.
    pub neutral_monster_epiphany: u32,
    /// Divine epiphany, regardless of rarity.
    pub divine_epiphany: u32,

    /// Per conversion.
    pub convert: u32,

    pub copy_first: u32,
    pub copy_second: u32,
    /// Added per copy beyond the second.
    pub copy_step: u32,

    pub remove_first: u32,
    /// Each removal after the first on a privileged card.
    pub remove_privileged: u32,
    /// Each removal after the first on any other card.
    pub remove_standard: u32,

    pub tier: TierRules,
}

impl PointRules {
    /// The standard catalog.
    pub const STANDARD: PointRules = PointRules {
        common_card: 20,
        monster_card: 80,
        forbidden_card: 20,
        starting_unique_epiphany: 0,
        neutral_monster_epiphany: 10,
        divine_epiphany: 20,
        convert: 10,
        copy_first: 0,
        copy_second: 10,
        copy_step: 20,
        remove_first: 0,
        remove_privileged: 20,
        remove_standard: 10,
        tier: TierRules::STANDARD,
    };

    /// Parse a rules catalog from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Cost of one epiphany on a card of `rarity`.
    #[must_use]
    pub const fn epiphany_cost(&self, rarity: CardRarity) -> u32 {
        if rarity.is_starting_or_unique() {
            self.starting_unique_epiphany
        } else {
            self.neutral_monster_epiphany
        }
    }

    /// Cost of the `n`-th copy (1-indexed). `n == 0` costs nothing.
    #[must_use]
    pub const fn copy_cost(&self, n: u32) -> u32 {
        match n {
            0 => 0,
            1 => self.copy_first,
            _ => self
                .copy_second
                .saturating_add((n - 2).saturating_mul(self.copy_step)),
        }
    }

    /// Cost of the `n`-th removal (1-indexed). `n == 0` costs nothing.
    #[must_use]
    pub const fn remove_cost(&self, n: u32, is_privileged: bool) -> u32 {
        match n {
            0 => 0,
            1 => self.remove_first,
            _ if is_privileged => self.remove_privileged,
            _ => self.remove_standard,
        }
    }

    /// Sum of `copy_cost(1..=count)`, clamped to `u32::MAX`.
    #[must_use]
    pub const fn total_copy_cost(&self, count: u32) -> u32 {
        if count == 0 {
            return 0;
        }
        // copy_first + sum over n in 2..=count of (copy_second + (n - 2) * copy_step)
        let later = (count - 1) as u128;
        let steps = later * later.saturating_sub(1) / 2;
        let sum = self.copy_first as u128
            + later * self.copy_second as u128
            + steps * self.copy_step as u128;
        clamp_u32(sum)
    }

    /// Sum of `remove_cost(1..=count, is_privileged)`, clamped to `u32::MAX`.
    #[must_use]
    pub const fn total_remove_cost(&self, count: u32, is_privileged: bool) -> u32 {
        if count == 0 {
            return 0;
        }
        let rate = if is_privileged {
            self.remove_privileged
        } else {
            self.remove_standard
        };
        let sum = self.remove_first as u128 + (count - 1) as u128 * rate as u128;
        clamp_u32(sum)
    }

    /// Max points for a tier under these rules.
    #[must_use]
    pub const fn max_points(&self, level: u32) -> u32 {
        self.tier.max_points(level)
    }

    // === Builders ===

    #[must_use]
    pub fn with_common_card(mut self, cost: u32) -> Self {
        self.common_card = cost;
        self
    }

    #[must_use]
    pub fn with_monster_card(mut self, cost: u32) -> Self {
        self.monster_card = cost;
        self
    }

    #[must_use]
    pub fn with_forbidden_card(mut self, cost: u32) -> Self {
        self.forbidden_card = cost;
        self
    }

    #[must_use]
    pub fn with_epiphany(mut self, starting_unique: u32, other: u32) -> Self {
        self.starting_unique_epiphany = starting_unique;
        self.neutral_monster_epiphany = other;
        self
    }

    #[must_use]
    pub fn with_divine_epiphany(mut self, cost: u32) -> Self {
        self.divine_epiphany = cost;
        self
    }

    #[must_use]
    pub fn with_convert(mut self, cost: u32) -> Self {
        self.convert = cost;
        self
    }

    /// Replace the copy schedule.
    #[must_use]
    pub fn with_copy_schedule(mut self, first: u32, second: u32, step: u32) -> Self {
        self.copy_first = first;
        self.copy_second = second;
        self.copy_step = step;
        self
    }

    /// Replace the removal schedule.
    #[must_use]
    pub fn with_remove_schedule(mut self, first: u32, privileged: u32, standard: u32) -> Self {
        self.remove_first = first;
        self.remove_privileged = privileged;
        self.remove_standard = standard;
        self
    }

    #[must_use]
    pub fn with_tier(mut self, tier: TierRules) -> Self {
        self.tier = tier;
        self
    }
}

const fn clamp_u32(value: u128) -> u32 {
    if value > u32::MAX as u128 {
        u32::MAX
    } else {
        value as u32
    }
}

impl Default for PointRules {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_constants() {
        let rules = PointRules::default();
        assert_eq!(rules.common_card, 20);
        assert_eq!(rules.monster_card, 80);
        assert_eq!(rules.forbidden_card, 20);
        assert_eq!(rules.starting_unique_epiphany, 0);
        assert_eq!(rules.neutral_monster_epiphany, 10);
        assert_eq!(rules.divine_epiphany, 20);
        assert_eq!(rules.convert, 10);
    }

    #[test]
    fn test_copy_schedule() {
        let rules = PointRules::STANDARD;
        let per_copy: Vec<_> = (1..=5).map(|n| rules.copy_cost(n)).collect();
        assert_eq!(per_copy, vec![0, 10, 30, 50, 70]);
        assert_eq!(rules.copy_cost(0), 0);
        assert_eq!(rules.total_copy_cost(3), 40);
        assert_eq!(rules.total_copy_cost(0), 0);
    }

    #[test]
    fn test_schedule_totals_match_per_occurrence_sum() {
        let rules = PointRules::STANDARD.with_copy_schedule(3, 7, 11);
        for count in 0..40 {
            let copies: u32 = (1..=count).map(|n| rules.copy_cost(n)).sum();
            assert_eq!(rules.total_copy_cost(count), copies);
            let removals: u32 = (1..=count).map(|n| rules.remove_cost(n, true)).sum();
            assert_eq!(rules.total_remove_cost(count, true), removals);
        }
    }

    #[test]
    fn test_schedule_totals_saturate() {
        let rules = PointRules::STANDARD;
        assert_eq!(rules.total_copy_cost(30_000), u32::MAX);
        assert_eq!(rules.total_copy_cost(u32::MAX), u32::MAX);
        assert_eq!(rules.total_remove_cost(u32::MAX, true), u32::MAX);
        assert_eq!(rules.total_remove_cost(u32::MAX, false), u32::MAX);
    }

    #[test]
    fn test_remove_schedule_is_flat_after_first() {
        let rules = PointRules::STANDARD;
        assert_eq!(rules.remove_cost(1, true), 0);
        assert_eq!(rules.remove_cost(1, false), 0);
        for n in 2..=6 {
            assert_eq!(rules.remove_cost(n, true), 20);
            assert_eq!(rules.remove_cost(n, false), 10);
        }
        assert_eq!(rules.total_remove_cost(3, false), 20);
        assert_eq!(rules.total_remove_cost(3, true), 40);
    }

    #[test]
    fn test_epiphany_cost_by_rarity() {
        let rules = PointRules::STANDARD;
        assert_eq!(rules.epiphany_cost(CardRarity::Starting), 0);
        assert_eq!(rules.epiphany_cost(CardRarity::Unique), 0);
        assert_eq!(rules.epiphany_cost(CardRarity::Common), 10);
        assert_eq!(rules.epiphany_cost(CardRarity::Divine), 10);
    }

    #[test]
    fn test_tier_formula() {
        let tier = TierRules::STANDARD;
        assert_eq!(tier.max_points(1), 30);
        assert_eq!(tier.max_points(5), 70);
        assert_eq!(tier.max_points(0), 30);
    }

    #[test]
    fn test_builder_pattern() {
        let rules = PointRules::default()
            .with_monster_card(60)
            .with_copy_schedule(5, 15, 5)
            .with_tier(TierRules { base: 40, step: 5 });

        assert_eq!(rules.monster_card, 60);
        assert_eq!(rules.copy_cost(1), 5);
        assert_eq!(rules.copy_cost(3), 20);
        assert_eq!(rules.max_points(3), 50);
    }

    #[test]
    fn test_from_json_partial() {
        let rules = PointRules::from_json(r#"{ "convert": 15, "tier": { "step": 20 } }"#).unwrap();
        assert_eq!(rules.convert, 15);
        assert_eq!(rules.tier.base, 30);
        assert_eq!(rules.tier.step, 20);
        assert_eq!(rules.copy_step, 20);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(PointRules::from_json("{ not json").is_err());
        assert!(PointRules::from_json(r#"{ "convert": -1 }"#).is_err());
    }

    #[test]
    fn test_serialization() {
        let rules = PointRules::default();
        let json = serde_json::to_string(&rules).unwrap();
        let deserialized = PointRules::from_json(&json).unwrap();
        assert_eq!(rules, deserialized);
    }
}
