//! Greedy move selection for the computer opponent.
//!
//! Rules are tried in priority order and the first that yields a cell wins:
//!
//! 1. **Win**: complete one of our own lines
//! 2. **Block**: fill the cell that would complete an opponent line
//! 3. **Center**: take cell 4
//! 4. **Corner**: a uniformly random empty corner
//! 5. **Random**: a uniformly random empty cell
//!
//! Win and Block scan empty cells in ascending index order, so when several
//! cells qualify the lowest index is chosen. Corner and Random draw from a
//! caller-supplied `RandomSource`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, CellList, Mark, RandomSource, CENTER, CORNERS};
use crate::rules::check_winner;

/// The computer's mark unless configured otherwise.
pub const DEFAULT_AI_MARK: Mark = Mark::O;

/// Which heuristic rule produced a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    Win,
    Block,
    Center,
    Corner,
    Random,
}

/// A chosen cell and the rule that chose it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub position: usize,
    pub rule: Rule,
}

/// Lowest empty cell where placing `mark` completes a line for `mark`.
///
/// Each candidate is tested on a copy of the board; `board` itself is
/// never touched.
#[must_use]
pub fn find_winning_move(board: &Board, mark: Mark) -> Option<usize> {
    board
        .empty_cells()
        .into_iter()
        .find(|&position| {
            board
                .with_mark(position, mark)
                .is_some_and(|next| check_winner(&next) == Some(mark))
        })
}

/// Pick a move for `ai_mark`, reporting which rule fired.
///
/// Returns `None` only when the board has no empty cell.
pub fn decide<R: RandomSource + ?Sized>(board: &Board, ai_mark: Mark, rng: &mut R) -> Option<Decision> {
    let decision = find_winning_move(board, ai_mark)
        .map(|position| Decision { position, rule: Rule::Win })
        .or_else(|| {
            find_winning_move(board, ai_mark.opponent())
                .map(|position| Decision { position, rule: Rule::Block })
        })
        .or_else(|| {
            board
                .is_empty_at(CENTER)
                .then_some(Decision { position: CENTER, rule: Rule::Center })
        })
        .or_else(|| {
            let corners: CellList = CORNERS
                .iter()
                .copied()
                .filter(|&c| board.is_empty_at(c))
                .collect();
            rng.choose_cell(&corners)
                .map(|position| Decision { position, rule: Rule::Corner })
        })
        .or_else(|| {
            rng.choose_cell(&board.empty_cells())
                .map(|position| Decision { position, rule: Rule::Random })
        });

    if let Some(Decision { position, rule }) = decision {
        debug!(%ai_mark, position, ?rule, "opponent decided");
    }
    decision
}

/// Pick a cell for `ai_mark`. See the module docs for the rule order.
pub fn choose_ai_move<R: RandomSource + ?Sized>(board: &Board, ai_mark: Mark, rng: &mut R) -> Option<usize> {
    decide(board, ai_mark, rng).map(|d| d.position)
}
