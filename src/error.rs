//! Errors surfaced by session operations and rules loading.
//!
//! Cost evaluation and aggregation are total over well-formed cards and
//! never fail; these errors come from the layer that builds and mutates
//! cards on behalf of a player.

use thiserror::Error;

use crate::cards::{ActionKind, CardOrigin};
use crate::core::{CardId, CharacterId};

/// Errors raised while building or mutating a save session.
#[derive(Debug, Error)]
pub enum SavePointsError {
    #[error("tier level must be at least 1, got {0}")]
    InvalidTierLevel(u32),

    #[error("unknown character: {0}")]
    UnknownCharacter(CharacterId),

    #[error("action {action} is not allowed on {card}")]
    ActionNotAllowed { card: CardId, action: ActionKind },

    #[error("action {0} is recorded with a zero count")]
    ZeroActionCount(ActionKind),

    #[error("action {0} is recorded more than once")]
    DuplicateAction(ActionKind),

    #[error("deck cards cannot have origin {0}")]
    InvalidDeckOrigin(CardOrigin),

    #[error("character {0} is already registered")]
    DuplicateCharacter(CharacterId),

    #[error("invalid rules catalog: {0}")]
    Rules(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SavePointsError>;
