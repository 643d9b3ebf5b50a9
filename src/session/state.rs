//! Save session: the card collection and the player's tier.
//!
//! `SaveSession` is the single source of truth for the cards. The
//! breakdown and limit status are views recomputed from the cards on
//! every call; the session never stores a point total.
//!
//! Card pools are `im::Vector`s, so cloning a session is O(1). Hand a
//! clone to anything that needs a stable snapshot.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{
    ActionKind, Adjust, Card, CardOrigin, CardRarity, Character, CharacterCard,
    CharacterRegistry, DeckCard,
};
use crate::core::{CardId, CardIdAllocator, CharacterId};
use crate::error::{Result, SavePointsError};
use crate::points::{aggregate_with, LimitStatus, PointBreakdown, SaveDataTier};
use crate::rules::{CostEvaluator, PointRules};

/// A player's tier choice plus their character and deck cards.
///
/// ## Example
///
/// ```
/// use savedata_points::cards::{ActionKind, Adjust, CardOrigin};
/// use savedata_points::content::builtin_registry;
/// use savedata_points::session::SaveSession;
///
/// let registry = builtin_registry();
/// let mut session = SaveSession::new();
/// session.set_tier(5).unwrap();
/// session.select_from(&registry, &"zagreus".into()).unwrap();
///
/// let id = session.add_deck_card(CardOrigin::Neutral).unwrap();
/// session.update_action(id, ActionKind::Copy, Adjust::Increment).unwrap();
///
/// // 3 basic cards at 20 each, plus a 20-point neutral card
/// assert_eq!(session.breakdown().total(), 80);
/// assert!(session.limit_status().is_over_limit());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SaveSession {
    rules: PointRules,
    tier: SaveDataTier,
    selected_character: Option<CharacterId>,
    character_cards: Vector<CharacterCard>,
    deck_cards: Vector<DeckCard>,
    ids: CardIdAllocator,
}

impl SaveSession {
    /// Empty session at tier 1 under the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty session at tier 1 under `rules`.
    #[must_use]
    pub fn with_rules(rules: PointRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn rules(&self) -> &PointRules {
        &self.rules
    }

    // === Tier ===

    #[must_use]
    pub fn tier(&self) -> SaveDataTier {
        self.tier
    }

    /// Change the tier level. The budget follows automatically.
    pub fn set_tier(&mut self, level: u32) -> Result<()> {
        self.tier = SaveDataTier::new(level)?;
        tracing::debug!(level, max_points = self.max_points(), "tier changed");
        Ok(())
    }

    /// Budget for the current tier under this session's rules.
    #[must_use]
    pub fn max_points(&self) -> u32 {
        self.tier.max_points_with(&self.rules.tier)
    }

    // === Character ===

    #[must_use]
    pub fn selected_character(&self) -> Option<&CharacterId> {
        self.selected_character.as_ref()
    }

    /// Select `character`, replacing the character pool with fresh copies
    /// of its template cards.
    pub fn select_character(&mut self, character: &Character) {
        self.character_cards = character.instantiate(&mut self.ids).into_iter().collect();
        self.selected_character = Some(character.id.clone());
        tracing::debug!(
            character = %character.id,
            cards = self.character_cards.len(),
            "character selected"
        );
    }

    /// Look up `id` in `registry` and select it.
    pub fn select_from(&mut self, registry: &CharacterRegistry, id: &CharacterId) -> Result<()> {
        let character = registry
            .get(id)
            .ok_or_else(|| SavePointsError::UnknownCharacter(id.clone()))?;
        self.select_character(character);
        Ok(())
    }

    // === Deck ===

    /// Add a deck card named after its origin. Returns its id.
    pub fn add_deck_card(&mut self, origin: CardOrigin) -> Result<CardId> {
        let card = DeckCard::new(self.ids.peek(), origin)?;
        Ok(self.push_deck_card(card))
    }

    /// Add a deck card with an explicit name.
    pub fn add_named_deck_card(
        &mut self,
        origin: CardOrigin,
        name: impl Into<String>,
    ) -> Result<CardId> {
        let card = DeckCard::named(self.ids.peek(), name, origin)?;
        Ok(self.push_deck_card(card))
    }

    /// Add a deck card with a non-default rarity.
    pub fn add_deck_card_with_rarity(
        &mut self,
        origin: CardOrigin,
        rarity: CardRarity,
    ) -> Result<CardId> {
        let card = DeckCard::new(self.ids.peek(), origin)?.with_rarity(rarity);
        Ok(self.push_deck_card(card))
    }

    // `card.id` was peeked; commit the allocation only once the card is valid.
    fn push_deck_card(&mut self, card: DeckCard) -> CardId {
        let id = self.ids.alloc();
        debug_assert_eq!(id, card.card.id);
        tracing::debug!(card = %id, origin = %card.card.origin, "deck card added");
        self.deck_cards.push_back(card);
        id
    }

    /// Delete a deck card from the pool. Returns whether it was present.
    ///
    /// This is not the cost-bearing remove action.
    pub fn remove_from_deck(&mut self, id: CardId) -> bool {
        match self.deck_cards.iter().position(|c| c.card.id == id) {
            Some(index) => {
                self.deck_cards.remove(index);
                tracing::debug!(card = %id, "deck card removed");
                true
            }
            None => {
                tracing::warn!(card = %id, "remove from deck: no such deck card");
                false
            }
        }
    }

    // === Actions ===

    /// Increment or decrement `kind` on the card with `id`.
    ///
    /// Returns the new count, or `None` when no card has `id` (a no-op).
    /// Incrementing an action the card does not allow fails.
    pub fn update_action(
        &mut self,
        id: CardId,
        kind: ActionKind,
        adjust: Adjust,
    ) -> Result<Option<u32>> {
        let Some(card) = self.card_mut(id) else {
            tracing::warn!(card = %id, action = %kind, "action update for unknown card ignored");
            return Ok(None);
        };
        let count = card.adjust(kind, adjust)?;
        tracing::debug!(card = %id, action = %kind, ?adjust, count, "action updated");
        Ok(Some(count))
    }

    // === Lookup ===

    #[must_use]
    pub fn character_cards(&self) -> &Vector<CharacterCard> {
        &self.character_cards
    }

    #[must_use]
    pub fn deck_cards(&self) -> &Vector<DeckCard> {
        &self.deck_cards
    }

    /// Every card: character pool first, then deck pool.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.character_cards
            .iter()
            .map(|c| &c.card)
            .chain(self.deck_cards.iter().map(|c| &c.card))
    }

    /// Look up any card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards().find(|c| c.id == id)
    }

    fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        if let Some(index) = self.character_cards.iter().position(|c| c.card.id == id) {
            return self.character_cards.get_mut(index).map(|c| &mut c.card);
        }
        let index = self.deck_cards.iter().position(|c| c.card.id == id)?;
        self.deck_cards.get_mut(index).map(|c| &mut c.card)
    }

    // === Derived views ===

    /// Cost of one card under this session's rules.
    #[must_use]
    pub fn card_cost(&self, id: CardId) -> Option<u32> {
        let evaluator = CostEvaluator::new(&self.rules);
        self.card(id).map(|card| evaluator.card_cost(card))
    }

    /// Breakdown over every card, recomputed from scratch.
    #[must_use]
    pub fn breakdown(&self) -> PointBreakdown {
        aggregate_with(&self.rules, self.cards())
    }

    /// Current total measured against the tier budget.
    #[must_use]
    pub fn limit_status(&self) -> LimitStatus {
        LimitStatus::new(self.breakdown().total(), self.max_points())
    }
}
