//! Injectable randomness for the computer opponent.
//!
//! ## Key Features
//!
//! - **`RandomSource`**: the seam every random choice goes through
//! - **Deterministic**: `GameRng` with the same seed produces the same picks
//! - **Serializable**: O(1) state capture and restore
//! - **Scriptable**: `ScriptedSource` pins picks exactly for tests
//!
//! ```
//! use rust_ttt::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! let corners = [0, 2, 6, 8];
//! assert_eq!(a.choose_cell(&corners), b.choose_cell(&corners));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniform random picks.
pub trait RandomSource {
    /// Pick an index uniformly in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Pick one cell from `cells`, or `None` if it is empty.
    ///
    /// An out-of-range pick wraps modulo `cells.len()`.
    fn choose_cell(&mut self, cells: &[usize]) -> Option<usize> {
        if cells.is_empty() {
            return None;
        }
        cells.get(self.pick_index(cells.len()) % cells.len()).copied()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// Seeded RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range_usize(0..len)
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of how
/// many numbers have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed list of picks.
///
/// Each pick is reduced modulo the requested length; once the script runs
/// out every pick is `0`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    picks: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    /// Picks not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl RandomSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().map_or(0, |pick| pick % len)
    }
}
