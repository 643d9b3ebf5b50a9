//! Per-card cost evaluation.
//!
//! A card's cost is its base cost plus the cost of every recorded action:
//!
//! 1. Base: common rarity, else monster origin, else forbidden rarity, else 0
//! 2. Epiphany: count x epiphany rate for the card's rarity
//! 3. Divine epiphany: count x flat rate
//! 4. Copy: sum of the copy schedule over 1..=count
//! 5. Remove: sum of the removal schedule over 1..=count, privileged or not
//! 6. Convert: count x flat rate
//!
//! Evaluation is pure: the same card always costs the same.

use serde::{Deserialize, Serialize};

use super::catalog::PointRules;
use crate::cards::{ActionKind, Card, CardOrigin, CardRarity};

/// Itemized cost of one card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardCost {
    pub base: u32,
    pub epiphany: u32,
    pub divine_epiphany: u32,
    pub copy: u32,
    pub remove: u32,
    pub convert: u32,
}

impl CardCost {
    /// Sum of every line, clamped to `u32::MAX`.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.base.saturating_add(self.actions())
    }

    /// Sum of the action lines (everything but base).
    #[must_use]
    pub const fn actions(&self) -> u32 {
        self.epiphany
            .saturating_add(self.divine_epiphany)
            .saturating_add(self.copy)
            .saturating_add(self.remove)
            .saturating_add(self.convert)
    }
}

/// Prices cards against an injected rules catalog.
///
/// ## Example
///
/// ```
/// use savedata_points::cards::{ActionKind, ActionSet, Card, CardOrigin, CardRarity};
/// use savedata_points::core::CardId;
/// use savedata_points::rules::{CostEvaluator, PointRules};
///
/// let rules = PointRules::default();
/// let evaluator = CostEvaluator::new(&rules);
///
/// let card = Card::new(CardId::new(0), "Strike", CardOrigin::Neutral, CardRarity::Common, ActionSet::all())
///     .with_action(ActionKind::Copy, 3)
///     .unwrap();
///
/// // 20 base + (0 + 10 + 30) copies
/// assert_eq!(evaluator.card_cost(&card), 60);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CostEvaluator<'r> {
    rules: &'r PointRules,
}

impl<'r> CostEvaluator<'r> {
    #[must_use]
    pub fn new(rules: &'r PointRules) -> Self {
        Self { rules }
    }

    /// The rules this evaluator prices with.
    #[must_use]
    pub fn rules(&self) -> &'r PointRules {
        self.rules
    }

    /// Base cost from classification alone, checked in fixed priority.
    #[must_use]
    pub fn base_cost(&self, card: &Card) -> u32 {
        if card.rarity == CardRarity::Common {
            self.rules.common_card
        } else if card.origin == CardOrigin::Monster {
            self.rules.monster_card
        } else if card.rarity == CardRarity::Forbidden {
            self.rules.forbidden_card
        } else {
            0
        }
    }

    /// Whether removals on `card` use the privileged rate.
    ///
    /// Privileged: starting/unique rarity, or any epiphany recorded.
    #[must_use]
    pub fn is_privileged(card: &Card) -> bool {
        card.rarity.is_starting_or_unique() || card.actions().has_epiphany()
    }

    /// Cost of `count` occurrences of `kind` on `card`, priced one
    /// occurrence at a time.
    #[must_use]
    pub fn action_cost(&self, card: &Card, kind: ActionKind, count: u32) -> u32 {
        match kind {
            ActionKind::Epiphany => count.saturating_mul(self.rules.epiphany_cost(card.rarity)),
            ActionKind::DivineEpiphany => count.saturating_mul(self.rules.divine_epiphany),
            ActionKind::Copy => self.rules.total_copy_cost(count),
            ActionKind::Remove => self
                .rules
                .total_remove_cost(count, Self::is_privileged(card)),
            ActionKind::Convert => count.saturating_mul(self.rules.convert),
        }
    }

    /// Itemized cost of `card`.
    #[must_use]
    pub fn cost_detail(&self, card: &Card) -> CardCost {
        let actions = card.actions();
        let line = |kind| self.action_cost(card, kind, actions.count(kind));

        CardCost {
            base: self.base_cost(card),
            epiphany: line(ActionKind::Epiphany),
            divine_epiphany: line(ActionKind::DivineEpiphany),
            copy: line(ActionKind::Copy),
            remove: line(ActionKind::Remove),
            convert: line(ActionKind::Convert),
        }
    }

    /// Total cost of `card`.
    #[must_use]
    pub fn card_cost(&self, card: &Card) -> u32 {
        let cost = self.cost_detail(card).total();
        tracing::trace!(card = %card.id, origin = %card.origin, cost, "evaluated card cost");
        cost
    }
}

/// Total cost of `card` under the standard rules.
#[must_use]
pub fn evaluate_card_cost(card: &Card) -> u32 {
    CostEvaluator::new(&PointRules::STANDARD).card_cost(card)
}
