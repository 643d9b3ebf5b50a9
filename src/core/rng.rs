//! Deterministic random number generation for save simulation.
//!
//! Which faint memories are lost when a run ends over the point cap is
//! random in-game. `SaveRng` reproduces that draw deterministically: the
//! same seed against the same card pools always drops the same cards.
//!
//! ```
//! use savedata_points::core::SaveRng;
//!
//! let mut a = SaveRng::new(7);
//! let mut b = SaveRng::new(7);
//! assert_eq!(a.pick_index(10), b.pick_index(10));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded ChaCha8 RNG used to pick which cards are dropped.
#[derive(Clone, Debug)]
pub struct SaveRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SaveRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick an index in `0..len`.
    ///
    /// Returns `None` for an empty range.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.inner.gen_range(0..len))
    }

    /// Capture the current position for later replay.
    #[must_use]
    pub fn state(&self) -> SaveRngState {
        SaveRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a captured state.
    #[must_use]
    pub fn from_state(state: &SaveRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
