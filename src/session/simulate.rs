//! End-of-run save simulation.
//!
//! When a run ends over the point cap, faint memories are lost at random
//! until the total fits. Character cards and forbidden cards are always
//! kept; neutral and monster deck cards are the faint memories that can
//! be dropped.

use serde::{Deserialize, Serialize};

use super::state::SaveSession;
use crate::cards::{CardOrigin, DeckCard};
use crate::core::{SaveRng, SaveRngState};
use crate::points::{LimitStatus, PointBreakdown};

/// Result of settling a session against its cap.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveOutcome {
    /// The session after drops.
    pub kept: SaveSession,
    /// Deck cards lost, in the order they were dropped.
    pub dropped: Vec<DeckCard>,
    pub breakdown: PointBreakdown,
    pub status: LimitStatus,
    /// RNG position after the last draw; resume with `SaveRng::from_state`.
    pub rng_state: SaveRngState,
}

impl SaveOutcome {
    /// Whether the kept cards fit under the cap.
    #[must_use]
    pub fn fits(&self) -> bool {
        !self.status.is_over_limit()
    }
}

/// Whether a deck card may be dropped when over the cap.
#[must_use]
pub fn is_faint_memory(card: &DeckCard) -> bool {
    matches!(card.card.origin, CardOrigin::Neutral | CardOrigin::Monster)
}

/// Drop random faint memories from a copy of `session` until its total is
/// within the cap or nothing droppable is left.
///
/// `session` itself is untouched. The same `rng` seed always drops the
/// same cards.
pub fn simulate_save(session: &SaveSession, rng: &mut SaveRng) -> SaveOutcome {
    let mut kept = session.clone();
    let mut dropped = Vec::new();
    let mut status = kept.limit_status();

    if status.is_over_limit() {
        tracing::warn!(%status, seed = rng.seed(), "save over limit, dropping faint memories");
    }

    while status.is_over_limit() {
        let candidates: Vec<_> = kept
            .deck_cards()
            .iter()
            .filter(|c| is_faint_memory(c))
            .map(|c| c.card.id)
            .collect();

        let Some(pick) = rng.pick_index(candidates.len()) else {
            break;
        };

        let id = candidates[pick];
        if let Some(card) = kept.deck_cards().iter().find(|c| c.card.id == id).cloned() {
            kept.remove_from_deck(id);
            tracing::debug!(card = %id, name = %card.card.name, "faint memory lost");
            dropped.push(card);
        }
        status = kept.limit_status();
    }

    SaveOutcome {
        breakdown: kept.breakdown(),
        kept,
        dropped,
        status,
        rng_state: rng.state(),
    }
}
