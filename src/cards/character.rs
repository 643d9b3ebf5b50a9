//! Characters and their card kits.
//!
//! Each `Character` owns exactly 3 basic cards and 5 unique cards. These
//! are templates: selecting a character in a session instantiates fresh
//! `CharacterCard` copies with session-unique ids and empty action logs.
//!
//! Template ids are local to the character (`Card(0)` .. `Card(7)`), they
//! never leak into a session.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::kind::{ActionSet, CardOrigin, CardRarity};
use crate::core::{CardId, CardIdAllocator, CharacterId};

/// Basic cards per character.
pub const BASIC_CARDS_PER_CHARACTER: usize = 3;

/// Unique cards per character. The last one is flagged `is_last_unique`.
pub const UNIQUE_CARDS_PER_CHARACTER: usize = 5;

/// A card belonging to a character's kit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterCard {
    pub card: Card,
    pub character_id: CharacterId,
    pub is_basic: bool,
}

impl CharacterCard {
    /// Basic card: common rarity, convert and remove only.
    #[must_use]
    pub fn basic(id: CardId, name: impl Into<String>, character_id: CharacterId) -> Self {
        Self {
            card: Card::new(
                id,
                name,
                CardOrigin::Basic,
                CardRarity::Common,
                ActionSet::BASIC,
            ),
            character_id,
            is_basic: true,
        }
    }

    /// Unique card: unique rarity, every action allowed unless `is_last`.
    #[must_use]
    pub fn unique(
        id: CardId,
        name: impl Into<String>,
        character_id: CharacterId,
        is_last: bool,
    ) -> Self {
        let card = Card::new(
            id,
            name,
            CardOrigin::Unique,
            CardRarity::Unique,
            ActionSet::all(),
        );
        Self {
            card: if is_last { card.last_unique() } else { card },
            character_id,
            is_basic: false,
        }
    }

    /// Copy this card under a new id with no recorded actions.
    #[must_use]
    pub fn fresh_copy(&self, id: CardId) -> Self {
        let mut copy = self.clone();
        copy.card.id = id;
        copy.card.clear_actions();
        copy
    }
}

impl AsRef<Card> for CharacterCard {
    fn as_ref(&self) -> &Card {
        &self.card
    }
}

impl AsMut<Card> for CharacterCard {
    fn as_mut(&mut self) -> &mut Card {
        &mut self.card
    }
}

/// A selectable character and its card templates.
///
/// ```
/// use savedata_points::cards::Character;
///
/// let hero = Character::new(
///     "hero",
///     "Hero",
///     ["Strike", "Dash", "Cast"],
///     ["A", "B", "C", "D", "E"],
/// );
/// assert_eq!(hero.basic_cards().len(), 3);
/// assert!(hero.unique_cards()[4].card.is_last_unique());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    basic_cards: Vec<CharacterCard>,
    unique_cards: Vec<CharacterCard>,
}

impl Character {
    /// Build a character from its card names.
    #[must_use]
    pub fn new(
        id: impl Into<CharacterId>,
        name: impl Into<String>,
        basic_names: [&str; BASIC_CARDS_PER_CHARACTER],
        unique_names: [&str; UNIQUE_CARDS_PER_CHARACTER],
    ) -> Self {
        let id = id.into();
        let mut local = CardIdAllocator::new();

        let basic_cards = basic_names
            .iter()
            .map(|name| CharacterCard::basic(local.alloc(), *name, id.clone()))
            .collect();

        let unique_cards = unique_names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let is_last = i == UNIQUE_CARDS_PER_CHARACTER - 1;
                CharacterCard::unique(local.alloc(), *name, id.clone(), is_last)
            })
            .collect();

        Self {
            id,
            name: name.into(),
            basic_cards,
            unique_cards,
        }
    }

    #[must_use]
    pub fn basic_cards(&self) -> &[CharacterCard] {
        &self.basic_cards
    }

    #[must_use]
    pub fn unique_cards(&self) -> &[CharacterCard] {
        &self.unique_cards
    }

    /// Template cards, basics first.
    pub fn template_cards(&self) -> impl Iterator<Item = &CharacterCard> {
        self.basic_cards.iter().chain(self.unique_cards.iter())
    }

    /// Fresh session copies of every template card.
    pub fn instantiate(&self, ids: &mut CardIdAllocator) -> Vec<CharacterCard> {
        self.template_cards()
            .map(|template| template.fresh_copy(ids.alloc()))
            .collect()
    }
}
