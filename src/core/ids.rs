//! Identifier types for cards and characters.
//!
//! ## CardId
//!
//! Every card in a session (character or deck) carries a `CardId`. Ids are
//! handed out by a `CardIdAllocator` owned by the session, so two cards in
//! the same session never share one, even after a deck card is removed.
//!
//! ## CharacterId
//!
//! Characters are keyed by a stable slug (`"zagreus"`, `"melinoe"`).

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Monotonic card id source.
///
/// Never reuses an id: removing a card does not free its id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardIdAllocator {
    next: u32,
}

impl CardIdAllocator {
    /// Create an allocator starting at `Card(0)`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn alloc(&mut self) -> CardId {
        let id = CardId(self.next);
        self.next += 1;
        id
    }

    /// Peek at the id the next `alloc` call will return.
    #[must_use]
    pub fn peek(&self) -> CardId {
        CardId(self.next)
    }
}

/// Stable character identifier (a lowercase slug).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub String);

impl CharacterId {
    /// Create a new character ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CharacterId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CharacterId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_allocator_is_monotonic() {
        let mut ids = CardIdAllocator::new();
        assert_eq!(ids.peek(), CardId(0));
        assert_eq!(ids.alloc(), CardId(0));
        assert_eq!(ids.alloc(), CardId(1));
        assert_eq!(ids.peek(), CardId(2));
    }

    #[test]
    fn test_character_id_from() {
        let a = CharacterId::new("zagreus");
        let b: CharacterId = "zagreus".into();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "zagreus");
        assert_eq!(a.to_string(), "zagreus");
    }

    #[test]
    fn test_character_id_serializes_as_string() {
        let id = CharacterId::new("orpheus");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"orpheus\"");
    }
}
