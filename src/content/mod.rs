//! Shipped game content.

pub mod characters;

pub use characters::{builtin_characters, builtin_registry};
