//! Card system: classification, recorded actions, character and deck cards.
//!
//! ## Key Types
//!
//! - `CardOrigin` / `CardRarity`: classification used by the cost rules
//! - `ActionKind` / `ActionSet`: the five repeatable actions and allowed sets
//! - `ActionLog`: recorded action multiset for one card
//! - `Card`: base card (classification + allowed + recorded actions)
//! - `CharacterCard` / `Character`: a character's 3 basic + 5 unique cards
//! - `DeckCard`: a card added to the run deck
//! - `CharacterRegistry`: character lookup
//!
//! ## Remove action vs. remove from deck
//!
//! `ActionKind::Remove` is a cost-bearing game action recorded on a card.
//! Deleting a deck card from the pool is a session operation and has no
//! cost of its own.

pub mod actions;
pub mod card;
pub mod character;
pub mod deck;
pub mod kind;
pub mod registry;

pub use actions::{ActionEntry, ActionLog, Adjust};
pub use card::Card;
pub use character::{
    Character, CharacterCard, BASIC_CARDS_PER_CHARACTER, UNIQUE_CARDS_PER_CHARACTER,
};
pub use deck::DeckCard;
pub use kind::{ActionKind, ActionSet, CardOrigin, CardRarity};
pub use registry::CharacterRegistry;
