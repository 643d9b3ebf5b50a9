//! Deck cards added during a run.
//!
//! A deck card's origin is one of neutral, monster, or forbidden. Its
//! allowed actions are decided by origin alone: forbidden cards can only
//! be removed, everything else allows all five actions.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::kind::{ActionSet, CardOrigin, CardRarity};
use crate::core::CardId;
use crate::error::{Result, SavePointsError};

/// A card in the run deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckCard {
    pub card: Card,

    /// Times this card was added during the run. Not priced yet.
    #[serde(default)]
    pub added_to_run_count: u32,
}

impl DeckCard {
    /// Create a deck card named `"<Origin> Card"`.
    pub fn new(id: CardId, origin: CardOrigin) -> Result<Self> {
        Self::named(id, format!("{} Card", origin.label()), origin)
    }

    /// Create a deck card with an explicit name.
    ///
    /// Rarity defaults to forbidden for forbidden cards and common for the
    /// rest; use `with_rarity` to override.
    pub fn named(id: CardId, name: impl Into<String>, origin: CardOrigin) -> Result<Self> {
        if !origin.is_deck() {
            return Err(SavePointsError::InvalidDeckOrigin(origin));
        }
        Ok(Self {
            card: Card::new(
                id,
                name,
                origin,
                Self::default_rarity(origin),
                ActionSet::for_deck_origin(origin),
            ),
            added_to_run_count: 0,
        })
    }

    /// Rarity a new deck card of `origin` starts with.
    #[must_use]
    pub const fn default_rarity(origin: CardOrigin) -> CardRarity {
        match origin {
            CardOrigin::Forbidden => CardRarity::Forbidden,
            _ => CardRarity::Common,
        }
    }

    /// Override the rarity (builder pattern).
    #[must_use]
    pub fn with_rarity(mut self, rarity: CardRarity) -> Self {
        self.card.rarity = rarity;
        self
    }
}

impl AsRef<Card> for DeckCard {
    fn as_ref(&self) -> &Card {
        &self.card
    }
}

impl AsMut<Card> for DeckCard {
    fn as_mut(&mut self) -> &mut Card {
        &mut self.card
    }
}
