//! Opponent policy seam.
//!
//! A session asks its `OpponentPolicy` for the computer's move. The
//! greedy heuristic is the only policy; the trait keeps the session
//! independent of how moves are chosen.

use crate::core::{Board, Mark, RandomSource};

use super::heuristic::{decide, Decision, DEFAULT_AI_MARK};

/// Chooses moves for the computer opponent.
pub trait OpponentPolicy: Send + Sync {
    /// The mark this policy plays.
    fn mark(&self) -> Mark;

    /// Choose a move on `board`, or `None` if no cell is empty.
    fn choose_move(&self, board: &Board, rng: &mut dyn RandomSource) -> Option<Decision>;
}

/// Win, block, center, corner, random.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeuristicOpponent {
    mark: Mark,
}

impl HeuristicOpponent {
    #[must_use]
    pub const fn new(mark: Mark) -> Self {
        Self { mark }
    }
}

impl Default for HeuristicOpponent {
    fn default() -> Self {
        Self::new(DEFAULT_AI_MARK)
    }
}

impl OpponentPolicy for HeuristicOpponent {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn choose_move(&self, board: &Board, rng: &mut dyn RandomSource) -> Option<Decision> {
        decide(board, self.mark, rng)
    }
}
