//! Categorized point breakdown over a card collection.
//!
//! Two passes run over the same cards:
//!
//! - **Origin pass**: each card's full cost goes into exactly one origin
//!   bucket. Character cards (basic, unique) feed `character_cards`,
//!   neutral and monster cards feed `deck_cards`. Forbidden cards feed
//!   `forbidden` at the flat forbidden rate, ignoring their actions.
//! - **Action pass**: every recorded action is priced again and summed
//!   per action kind.
//!
//! `total()` adds all eight fields. Action costs on non-forbidden cards
//! therefore count twice: once inside their origin bucket and once in
//! their action bucket. `origin_total()` and `action_total()` expose the
//! two passes separately.
//!
//! A breakdown is never cached: it is rebuilt from the cards each time.

use serde::{Deserialize, Serialize};

use crate::cards::{ActionKind, Card, CardOrigin};
use crate::rules::{CostEvaluator, PointRules};

/// Per-category point sums.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointBreakdown {
    pub character_cards: u32,
    pub deck_cards: u32,
    pub epiphanies: u32,
    pub divine_epiphanies: u32,
    pub copies: u32,
    pub conversions: u32,
    pub removals: u32,
    pub forbidden: u32,
}

impl PointBreakdown {
    /// Grand total: the sum of all eight categories.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.origin_total().saturating_add(self.action_total())
    }

    /// Character + deck + forbidden buckets.
    #[must_use]
    pub const fn origin_total(&self) -> u32 {
        self.character_cards
            .saturating_add(self.deck_cards)
            .saturating_add(self.forbidden)
    }

    /// Epiphany, divine epiphany, copy, conversion, and removal buckets.
    #[must_use]
    pub const fn action_total(&self) -> u32 {
        self.epiphanies
            .saturating_add(self.divine_epiphanies)
            .saturating_add(self.copies)
            .saturating_add(self.conversions)
            .saturating_add(self.removals)
    }

    /// Labelled categories in summary order.
    #[must_use]
    pub fn line_items(&self) -> [(&'static str, u32); 8] {
        [
            ("Character Cards", self.character_cards),
            ("Deck Cards", self.deck_cards),
            ("Epiphanies", self.epiphanies),
            ("Divine Epiphanies", self.divine_epiphanies),
            ("Copies", self.copies),
            ("Conversions", self.conversions),
            ("Removals", self.removals),
            ("Forbidden Cards", self.forbidden),
        ]
    }

    fn action_bucket(&mut self, kind: ActionKind) -> &mut u32 {
        match kind {
            ActionKind::Epiphany => &mut self.epiphanies,
            ActionKind::DivineEpiphany => &mut self.divine_epiphanies,
            ActionKind::Copy => &mut self.copies,
            ActionKind::Convert => &mut self.conversions,
            ActionKind::Remove => &mut self.removals,
        }
    }
}

impl std::fmt::Display for PointBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (label, value) in self.line_items() {
            writeln!(f, "{label}: {value}")?;
        }
        write!(f, "Total Points: {}", self.total())
    }
}

/// Aggregate `cards` under the standard rules.
pub fn aggregate_breakdown<I>(cards: I) -> PointBreakdown
where
    I: IntoIterator,
    I::Item: AsRef<Card>,
{
    aggregate_with(&PointRules::STANDARD, cards)
}

/// Aggregate `cards` under `rules`.
pub fn aggregate_with<I>(rules: &PointRules, cards: I) -> PointBreakdown
where
    I: IntoIterator,
    I::Item: AsRef<Card>,
{
    let evaluator = CostEvaluator::new(rules);
    let mut breakdown = PointBreakdown::default();

    for item in cards {
        let card = item.as_ref();

        let bucket = match card.origin {
            CardOrigin::Basic | CardOrigin::Unique => &mut breakdown.character_cards,
            CardOrigin::Neutral | CardOrigin::Monster => &mut breakdown.deck_cards,
            CardOrigin::Forbidden => &mut breakdown.forbidden,
        };
        let cost = match card.origin {
            CardOrigin::Forbidden => rules.forbidden_card,
            _ => evaluator.card_cost(card),
        };
        *bucket = bucket.saturating_add(cost);

        for entry in card.actions() {
            let bucket = breakdown.action_bucket(entry.action);
            *bucket = bucket.saturating_add(evaluator.action_cost(card, entry.action, entry.count));
        }
    }

    tracing::trace!(total = breakdown.total(), "aggregated breakdown");
    breakdown
}
