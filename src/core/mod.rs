//! Core building blocks: identifiers and deterministic RNG.

pub mod ids;
pub mod rng;

pub use ids::{CardId, CardIdAllocator, CharacterId};
pub use rng::{SaveRng, SaveRngState};
