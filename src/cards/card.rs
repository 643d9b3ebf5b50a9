//! The card base type shared by character and deck cards.
//!
//! A `Card` carries its classification (origin, rarity), the set of
//! actions it allows, and the actions recorded against it. The recorded
//! actions are always a subset of the allowed set: `record` rejects
//! anything else, and marking a card as the last unique narrows the
//! allowed set and drops any epiphanies already recorded.

use serde::{Deserialize, Serialize};

use super::actions::{ActionLog, Adjust};
use super::kind::{ActionKind, ActionSet, CardOrigin, CardRarity};
use crate::core::CardId;
use crate::error::{Result, SavePointsError};

/// A card with its recorded actions.
///
/// ## Example
///
/// ```
/// use savedata_points::cards::{ActionKind, ActionSet, Card, CardOrigin, CardRarity};
/// use savedata_points::core::CardId;
///
/// let card = Card::new(CardId::new(1), "Strike", CardOrigin::Neutral, CardRarity::Common, ActionSet::all())
///     .with_action(ActionKind::Copy, 2)
///     .unwrap();
///
/// assert_eq!(card.actions().count(ActionKind::Copy), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardFields")]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub origin: CardOrigin,
    pub rarity: CardRarity,
    #[serde(default)]
    is_last_unique: bool,
    allowed: ActionSet,
    #[serde(default)]
    actions: ActionLog,
}

impl Card {
    /// Create a card with no recorded actions.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        origin: CardOrigin,
        rarity: CardRarity,
        allowed: ActionSet,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            origin,
            rarity,
            is_last_unique: false,
            allowed,
            actions: ActionLog::new(),
        }
    }

    /// Mark as the last unique card of a character (builder pattern).
    ///
    /// Epiphany and divine epiphany become unavailable.
    #[must_use]
    pub fn last_unique(mut self) -> Self {
        self.is_last_unique = true;
        self.allowed &= ActionSet::LAST_UNIQUE;
        self.actions.set(ActionKind::Epiphany, 0);
        self.actions.set(ActionKind::DivineEpiphany, 0);
        self
    }

    /// Record `count` occurrences of `kind` (builder pattern).
    pub fn with_action(mut self, kind: ActionKind, count: u32) -> Result<Self> {
        self.record(kind, count)?;
        Ok(self)
    }

    #[must_use]
    pub fn is_last_unique(&self) -> bool {
        self.is_last_unique
    }

    /// Actions this card allows.
    #[must_use]
    pub fn allowed_actions(&self) -> ActionSet {
        self.allowed
    }

    /// Check whether `kind` may be recorded on this card.
    #[must_use]
    pub fn allows(&self, kind: ActionKind) -> bool {
        self.allowed.allows(kind)
    }

    /// Recorded actions.
    #[must_use]
    pub fn actions(&self) -> &ActionLog {
        &self.actions
    }

    /// Set the recorded count for `kind`. Zero removes the entry.
    pub fn record(&mut self, kind: ActionKind, count: u32) -> Result<()> {
        if count > 0 && !self.allows(kind) {
            return Err(SavePointsError::ActionNotAllowed {
                card: self.id,
                action: kind,
            });
        }
        self.actions.set(kind, count);
        Ok(())
    }

    /// Increment or decrement the count for `kind`. Returns the new count.
    ///
    /// Incrementing a disallowed kind fails. Decrementing never fails: a
    /// disallowed kind cannot be recorded, so it is already at zero.
    pub fn adjust(&mut self, kind: ActionKind, adjust: Adjust) -> Result<u32> {
        if adjust == Adjust::Increment && !self.allows(kind) {
            return Err(SavePointsError::ActionNotAllowed {
                card: self.id,
                action: kind,
            });
        }
        Ok(self.actions.adjust(kind, adjust))
    }

    /// Drop every recorded action.
    pub fn clear_actions(&mut self) {
        self.actions.clear();
    }
}

/// Wire shape of a `Card`, checked before it becomes one.
#[derive(Deserialize)]
struct CardFields {
    id: CardId,
    name: String,
    origin: CardOrigin,
    rarity: CardRarity,
    #[serde(default)]
    is_last_unique: bool,
    allowed: ActionSet,
    #[serde(default)]
    actions: ActionLog,
}

impl TryFrom<CardFields> for Card {
    type Error = SavePointsError;

    fn try_from(fields: CardFields) -> Result<Self> {
        let mut allowed = fields.allowed;
        if fields.is_last_unique {
            allowed &= ActionSet::LAST_UNIQUE;
        }
        if let Some(entry) = fields.actions.iter().find(|e| !allowed.allows(e.action)) {
            return Err(SavePointsError::ActionNotAllowed {
                card: fields.id,
                action: entry.action,
            });
        }

        Ok(Self {
            id: fields.id,
            name: fields.name,
            origin: fields.origin,
            rarity: fields.rarity,
            is_last_unique: fields.is_last_unique,
            allowed,
            actions: fields.actions,
        })
    }
}

impl AsRef<Card> for Card {
    fn as_ref(&self) -> &Card {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral() -> Card {
        Card::new(
            CardId::new(1),
            "Neutral Card",
            CardOrigin::Neutral,
            CardRarity::Common,
            ActionSet::all(),
        )
    }

    #[test]
    fn test_new_card_has_no_actions() {
        let card = neutral();
        assert!(card.actions().is_empty());
        assert!(!card.is_last_unique());
        assert_eq!(card.allowed_actions(), ActionSet::all());
    }

    #[test]
    fn test_record_disallowed_fails() {
        let mut card = Card::new(
            CardId::new(2),
            "Forbidden Card",
            CardOrigin::Forbidden,
            CardRarity::Forbidden,
            ActionSet::FORBIDDEN,
        );

        let err = card.record(ActionKind::Copy, 1).unwrap_err();
        assert!(matches!(
            err,
            SavePointsError::ActionNotAllowed { action: ActionKind::Copy, .. }
        ));
        assert!(card.actions().is_empty());

        card.record(ActionKind::Remove, 2).unwrap();
        assert_eq!(card.actions().count(ActionKind::Remove), 2);
    }

    #[test]
    fn test_record_zero_disallowed_is_fine() {
        let mut card = neutral().last_unique();
        assert!(card.record(ActionKind::Epiphany, 0).is_ok());
    }

    #[test]
    fn test_last_unique_narrows_and_drops_epiphanies() {
        let card = neutral()
            .with_action(ActionKind::Epiphany, 1)
            .unwrap()
            .with_action(ActionKind::Copy, 1)
            .unwrap()
            .last_unique();

        assert!(card.is_last_unique());
        assert!(!card.allows(ActionKind::Epiphany));
        assert!(!card.allows(ActionKind::DivineEpiphany));
        assert_eq!(card.actions().count(ActionKind::Epiphany), 0);
        assert_eq!(card.actions().count(ActionKind::Copy), 1);
    }

    #[test]
    fn test_adjust() {
        let mut card = neutral();
        assert_eq!(card.adjust(ActionKind::Convert, Adjust::Increment).unwrap(), 1);
        assert_eq!(card.adjust(ActionKind::Convert, Adjust::Decrement).unwrap(), 0);
        assert_eq!(card.adjust(ActionKind::Convert, Adjust::Decrement).unwrap(), 0);
        assert!(card.actions().is_empty());
    }

    #[test]
    fn test_adjust_decrement_disallowed_is_noop() {
        let mut card = neutral().last_unique();
        assert_eq!(card.adjust(ActionKind::Epiphany, Adjust::Decrement).unwrap(), 0);
        assert!(card.adjust(ActionKind::Epiphany, Adjust::Increment).is_err());
    }

    #[test]
    fn test_serialization() {
        let card = neutral().with_action(ActionKind::Remove, 1).unwrap();
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }

    fn card_json(card: &Card) -> serde_json::Value {
        serde_json::to_value(card).unwrap()
    }

    #[test]
    fn test_deserialize_rejects_disallowed_action() {
        let forbidden = Card::new(
            CardId::new(2),
            "Forbidden Card",
            CardOrigin::Forbidden,
            CardRarity::Forbidden,
            ActionSet::FORBIDDEN,
        );
        let mut json = card_json(&forbidden);
        json["actions"] = serde_json::json!([{ "action": "copy", "count": 3 }]);

        let err = serde_json::from_value::<Card>(json).unwrap_err();
        assert!(err.to_string().contains("not allowed"));
    }

    #[test]
    fn test_deserialize_rejects_malformed_log() {
        let mut json = card_json(&neutral());
        json["actions"] = serde_json::json!([{ "action": "epiphany", "count": 0 }]);
        assert!(serde_json::from_value::<Card>(json).is_err());

        let mut json = card_json(&neutral());
        json["actions"] = serde_json::json!([
            { "action": "copy", "count": 2 },
            { "action": "copy", "count": 5 }
        ]);
        assert!(serde_json::from_value::<Card>(json).is_err());
    }

    #[test]
    fn test_deserialize_narrows_last_unique() {
        // Stored as last unique but with the full allowed set.
        let mut json = card_json(&neutral());
        json["is_last_unique"] = serde_json::json!(true);

        let card: Card = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(card.allowed_actions(), ActionSet::LAST_UNIQUE);
        assert!(!card.allows(ActionKind::Epiphany));

        json["actions"] = serde_json::json!([{ "action": "epiphany", "count": 1 }]);
        assert!(serde_json::from_value::<Card>(json).is_err());
    }
}
