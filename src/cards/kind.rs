//! Card classification and action kinds.
//!
//! - `CardOrigin`: structural category; decides which breakdown bucket a card feeds
//! - `CardRarity`: decides base cost and epiphany/removal pricing
//! - `ActionKind`: the five repeatable, cost-bearing actions
//! - `ActionSet`: a set of `ActionKind`s (what a card allows)
//!
//! String forms are snake_case both for `Display`/`FromStr` and serde:
//!
//! ```
//! use savedata_points::cards::ActionKind;
//!
//! let kind: ActionKind = "divine_epiphany".parse().unwrap();
//! assert_eq!(kind, ActionKind::DivineEpiphany);
//! assert_eq!(kind.to_string(), "divine_epiphany");
//! ```

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Structural category of a card.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardOrigin {
    /// Character starter card.
    Basic,
    /// Character signature card.
    Unique,
    /// Deck card with no special category.
    Neutral,
    /// Deck card picked up from a monster.
    Monster,
    /// Forbidden deck card; always saved.
    Forbidden,
}

impl CardOrigin {
    /// Origins that belong to a character's kit.
    #[must_use]
    pub const fn is_character(self) -> bool {
        matches!(self, CardOrigin::Basic | CardOrigin::Unique)
    }

    /// Origins a deck card may be created with.
    #[must_use]
    pub const fn is_deck(self) -> bool {
        !self.is_character()
    }

    /// Capitalized label used for generated card names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CardOrigin::Basic => "Basic",
            CardOrigin::Unique => "Unique",
            CardOrigin::Neutral => "Neutral",
            CardOrigin::Monster => "Monster",
            CardOrigin::Forbidden => "Forbidden",
        }
    }
}

/// Card rarity.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardRarity {
    Common,
    Starting,
    Unique,
    Divine,
    Forbidden,
}

impl CardRarity {
    /// Starting and unique rarities get free epiphanies and the
    /// higher removal tier.
    #[must_use]
    pub const fn is_starting_or_unique(self) -> bool {
        matches!(self, CardRarity::Starting | CardRarity::Unique)
    }
}

/// A repeatable, cost-bearing action applied to a card.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    Epiphany,
    DivineEpiphany,
    Copy,
    Convert,
    Remove,
}

impl ActionKind {
    /// Every action kind, in display order.
    pub const ALL: [ActionKind; 5] = [
        ActionKind::Epiphany,
        ActionKind::DivineEpiphany,
        ActionKind::Copy,
        ActionKind::Convert,
        ActionKind::Remove,
    ];

    /// The single-kind `ActionSet` for this action.
    #[must_use]
    pub const fn flag(self) -> ActionSet {
        match self {
            ActionKind::Epiphany => ActionSet::EPIPHANY,
            ActionKind::DivineEpiphany => ActionSet::DIVINE_EPIPHANY,
            ActionKind::Copy => ActionSet::COPY,
            ActionKind::Convert => ActionSet::CONVERT,
            ActionKind::Remove => ActionSet::REMOVE,
        }
    }

    /// Epiphany or divine epiphany.
    #[must_use]
    pub const fn is_epiphany(self) -> bool {
        matches!(self, ActionKind::Epiphany | ActionKind::DivineEpiphany)
    }
}

bitflags! {
    /// Set of actions a card allows.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ActionSet: u8 {
        const EPIPHANY        = 1 << 0;
        const DIVINE_EPIPHANY = 1 << 1;
        const COPY            = 1 << 2;
        const CONVERT         = 1 << 3;
        const REMOVE          = 1 << 4;
    }
}

impl ActionSet {
    /// Allowed on the last unique card of a character.
    pub const LAST_UNIQUE: ActionSet = ActionSet::COPY
        .union(ActionSet::CONVERT)
        .union(ActionSet::REMOVE);

    /// Allowed on a character's basic cards.
    pub const BASIC: ActionSet = ActionSet::CONVERT.union(ActionSet::REMOVE);

    /// Allowed on forbidden cards.
    pub const FORBIDDEN: ActionSet = ActionSet::REMOVE;

    /// Check whether `kind` is in the set.
    #[must_use]
    pub const fn allows(self, kind: ActionKind) -> bool {
        self.contains(kind.flag())
    }

    /// Allowed set for a freshly added deck card; decided by origin alone.
    #[must_use]
    pub const fn for_deck_origin(origin: CardOrigin) -> ActionSet {
        match origin {
            CardOrigin::Forbidden => ActionSet::FORBIDDEN,
            _ => ActionSet::all(),
        }
    }

    /// Iterate the allowed kinds in display order.
    pub fn kinds(self) -> impl Iterator<Item = ActionKind> {
        ActionKind::ALL.into_iter().filter(move |k| self.allows(*k))
    }
}

impl From<ActionKind> for ActionSet {
    fn from(kind: ActionKind) -> Self {
        kind.flag()
    }
}

impl FromIterator<ActionKind> for ActionSet {
    fn from_iter<I: IntoIterator<Item = ActionKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ActionSet::empty(), |set, kind| set | kind.flag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_strings() {
        assert_eq!(CardOrigin::Monster.to_string(), "monster");
        assert_eq!("Forbidden".parse::<CardOrigin>().unwrap(), CardOrigin::Forbidden);
        assert!("dragon".parse::<CardOrigin>().is_err());
    }

    #[test]
    fn test_origin_pools() {
        assert!(CardOrigin::Basic.is_character());
        assert!(CardOrigin::Unique.is_character());
        assert!(CardOrigin::Neutral.is_deck());
        assert!(CardOrigin::Monster.is_deck());
        assert!(CardOrigin::Forbidden.is_deck());
    }

    #[test]
    fn test_rarity_privilege() {
        assert!(CardRarity::Starting.is_starting_or_unique());
        assert!(CardRarity::Unique.is_starting_or_unique());
        assert!(!CardRarity::Common.is_starting_or_unique());
        assert!(!CardRarity::Divine.is_starting_or_unique());
        assert!(!CardRarity::Forbidden.is_starting_or_unique());
    }

    #[test]
    fn test_action_serde_snake_case() {
        let json = serde_json::to_string(&ActionKind::DivineEpiphany).unwrap();
        assert_eq!(json, "\"divine_epiphany\"");
        let back: ActionKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ActionKind::DivineEpiphany);
    }

    #[test]
    fn test_last_unique_set() {
        let set = ActionSet::LAST_UNIQUE;
        assert!(!set.allows(ActionKind::Epiphany));
        assert!(!set.allows(ActionKind::DivineEpiphany));
        assert!(set.allows(ActionKind::Copy));
        assert!(set.allows(ActionKind::Convert));
        assert!(set.allows(ActionKind::Remove));
    }

    #[test]
    fn test_deck_origin_sets() {
        assert_eq!(ActionSet::for_deck_origin(CardOrigin::Forbidden), ActionSet::REMOVE);
        assert_eq!(ActionSet::for_deck_origin(CardOrigin::Neutral), ActionSet::all());
        assert_eq!(ActionSet::for_deck_origin(CardOrigin::Monster), ActionSet::all());
    }

    #[test]
    fn test_kinds_iteration_and_collect() {
        let set: ActionSet = [ActionKind::Remove, ActionKind::Convert].into_iter().collect();
        assert_eq!(set, ActionSet::BASIC);
        let kinds: Vec<_> = set.kinds().collect();
        assert_eq!(kinds, vec![ActionKind::Convert, ActionKind::Remove]);
    }
}
