//! Character registry for selection lookup.
//!
//! The `CharacterRegistry` stores every selectable character. It provides
//! lookup by `CharacterId` and iterates in registration order so a
//! presentation layer can list characters stably.

use rustc_hash::FxHashMap;

use super::character::Character;
use crate::core::CharacterId;
use crate::error::{Result, SavePointsError};

/// Registry of selectable characters.
///
/// ## Example
///
/// ```
/// use savedata_points::cards::{Character, CharacterRegistry};
///
/// let mut registry = CharacterRegistry::new();
/// registry
///     .register(Character::new("hero", "Hero", ["a", "b", "c"], ["1", "2", "3", "4", "5"]))
///     .unwrap();
///
/// let found = registry.get(&"hero".into()).unwrap();
/// assert_eq!(found.name, "Hero");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CharacterRegistry {
    characters: FxHashMap<CharacterId, Character>,
    order: Vec<CharacterId>,
}

impl CharacterRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a character.
    ///
    /// Fails if a character with the same id already exists.
    pub fn register(&mut self, character: Character) -> Result<()> {
        if self.characters.contains_key(&character.id) {
            return Err(SavePointsError::DuplicateCharacter(character.id));
        }
        self.order.push(character.id.clone());
        self.characters.insert(character.id.clone(), character);
        Ok(())
    }

    /// Get a character by ID.
    #[must_use]
    pub fn get(&self, id: &CharacterId) -> Option<&Character> {
        self.characters.get(id)
    }

    /// Check if a character ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CharacterId) -> bool {
        self.characters.contains_key(id)
    }

    /// Get the number of registered characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Iterate over characters in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.order.iter().filter_map(|id| self.characters.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(id: &str) -> Character {
        Character::new(id, id.to_uppercase(), ["a", "b", "c"], ["1", "2", "3", "4", "5"])
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = CharacterRegistry::new();
        registry.register(character("hero")).unwrap();

        let found = registry.get(&"hero".into());
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "HERO");

        assert!(registry.get(&"villain".into()).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = CharacterRegistry::new();
        registry.register(character("hero")).unwrap();

        let err = registry.register(character("hero")).unwrap_err();
        assert!(matches!(err, SavePointsError::DuplicateCharacter(_)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_iteration_keeps_registration_order() {
        let mut registry = CharacterRegistry::new();
        for id in ["c", "a", "b"] {
            registry.register(character(id)).unwrap();
        }

        let ids: Vec<_> = registry.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_contains() {
        let mut registry = CharacterRegistry::new();
        assert!(registry.is_empty());
        registry.register(character("hero")).unwrap();

        assert!(registry.contains(&"hero".into()));
        assert!(!registry.contains(&"nobody".into()));
    }
}
