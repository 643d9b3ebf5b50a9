//! # savedata-points
//!
//! Save-data point budget calculator for a card-collection game.
//!
//! Given a tier, a character, and a deck (with repeatable actions recorded
//! on individual cards), it computes each card's point cost, a categorized
//! breakdown, and whether the total fits under the tier's cap.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: cost evaluation, aggregation, and tier math are
//!    functions of their inputs. Nothing is cached.
//!
//! 2. **Rules are data**: `PointRules` is injected wherever prices are
//!    computed. Substitute it to price under a different catalog.
//!
//! 3. **Cards are the source of truth**: breakdowns and limit status are
//!    recomputed from the card pools on every call.
//!
//! ## Entry points
//!
//! ```
//! use savedata_points::{aggregate_breakdown, evaluate_card_cost, max_points_for_tier};
//! use savedata_points::cards::{ActionSet, Card, CardOrigin, CardRarity};
//! use savedata_points::core::CardId;
//!
//! let monster = Card::new(CardId::new(0), "Wyrm", CardOrigin::Monster, CardRarity::Divine, ActionSet::all());
//!
//! assert_eq!(evaluate_card_cost(&monster), 80);
//! assert_eq!(aggregate_breakdown([&monster]).deck_cards, 80);
//! assert_eq!(max_points_for_tier(6), 80);
//! ```
//!
//! ## Modules
//!
//! - `core`: Card and character ids, deterministic RNG
//! - `cards`: Classification, action log, character and deck cards
//! - `rules`: Rules catalog and per-card cost evaluator
//! - `points`: Breakdown aggregation, tier budget, limit status
//! - `session`: Session state, mutation operations, save simulation
//! - `content`: Built-in characters

pub mod cards;
pub mod content;
pub mod core;
pub mod error;
pub mod points;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{CardId, CardIdAllocator, CharacterId, SaveRng, SaveRngState};

pub use crate::cards::{
    ActionEntry, ActionKind, ActionLog, ActionSet, Adjust, Card, CardOrigin, CardRarity,
    Character, CharacterCard, CharacterRegistry, DeckCard,
};

pub use crate::error::{Result, SavePointsError};

pub use crate::rules::{evaluate_card_cost, CardCost, CostEvaluator, PointRules, TierRules};

pub use crate::points::{
    aggregate_breakdown, aggregate_with, is_over_limit, max_points_for_tier, remaining,
    LimitStatus, PointBreakdown, SaveDataTier,
};

pub use crate::session::{simulate_save, SaveOutcome, SaveSession};
