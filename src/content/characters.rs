//! Built-in characters.

use crate::cards::{Character, CharacterRegistry};

/// The built-in characters in display order.
#[must_use]
pub fn builtin_characters() -> Vec<Character> {
    vec![
        Character::new(
            "zagreus",
            "Zagreus",
            ["Zagreus Strike", "Zagreus Dash", "Zagreus Cast"],
            [
                "Greater Reflex",
                "Shadow Presence",
                "Fiery Presence",
                "Chthonic Vitality",
                "Death Defiance",
            ],
        ),
        Character::new(
            "melinoe",
            "Melinoë",
            ["Melinoë Strike", "Melinoë Sprint", "Melinoë Cast"],
            [
                "Witch's Staff",
                "Sister Blades",
                "Moonstone Axe",
                "Umbral Flames",
                "Silver Wheel",
            ],
        ),
        Character::new(
            "orpheus",
            "Orpheus",
            ["Orpheus Strike", "Orpheus Dash", "Orpheus Cast"],
            [
                "Legendary Lyre",
                "Harmonic Flow",
                "Resonant Voice",
                "Soothing Melody",
                "Song of the Underworld",
            ],
        ),
    ]
}

/// A registry holding every built-in character.
#[must_use]
pub fn builtin_registry() -> CharacterRegistry {
    let mut registry = CharacterRegistry::new();
    for character in builtin_characters() {
        registry
            .register(character)
            .expect("built-in character ids are distinct");
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry() {
        let registry = builtin_registry();
        assert_eq!(registry.len(), 3);

        let ids: Vec<_> = registry.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["zagreus", "melinoe", "orpheus"]);
    }

    #[test]
    fn test_last_unique_names() {
        let registry = builtin_registry();
        let zagreus = registry.get(&"zagreus".into()).unwrap();
        let last = &zagreus.unique_cards()[4];
        assert_eq!(last.card.name, "Death Defiance");
        assert!(last.card.is_last_unique());
    }
}
