//! Move application and outcome detection.
//!
//! All functions here are pure: `apply_move` borrows the current state and
//! returns a new one, so a rejected move can never leave a half-applied
//! state behind.

use tracing::{debug, info, trace};

use super::lines::{completed_line, winning_line};
use crate::core::{Board, GameState, GameStatus, Mark, Move, MoveError, MoveOutcome, BOARD_SIZE};

/// The mark owning the first completed line, if any.
///
/// Two completed lines can only ever share a mark, since a cell holds one
/// mark; the scan order therefore never changes the answer.
#[must_use]
pub fn check_winner(board: &Board) -> Option<Mark> {
    completed_line(board).map(|(_, mark)| mark)
}

/// True iff the board is full and nobody has a line.
#[must_use]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

/// Classify a board.
#[must_use]
pub fn status_of(board: &Board) -> GameStatus {
    match check_winner(board) {
        Some(mark) => GameStatus::Won(mark),
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

/// A fresh game: empty board, X to move, in progress.
#[must_use]
pub fn reset() -> GameState {
    GameState::new()
}

/// Place `mark` at `position`.
///
/// Checks, in order: the game is still in progress, the position is on the
/// board, the cell is empty. On success returns the next state and the
/// change descriptor; the turn passes only if the game continues.
pub fn apply_move(
    state: &GameState,
    position: usize,
    mark: Mark,
) -> Result<(GameState, MoveOutcome), MoveError> {
    validate_move(state, position).inspect_err(|err| {
        trace!(position, %mark, %err, "move rejected");
    })?;

    let mut next = state.clone();
    next.board.place(position, mark);
    next.history.push_back(Move::new(position, mark));
    next.status = status_of(&next.board);
    if !next.status.is_terminal() {
        next.current_player = next.current_player.opponent();
    }

    let outcome = MoveOutcome {
        position,
        mark,
        status: next.status,
        winning_line: if next.status.winner().is_some() {
            winning_line(&next.board)
        } else {
            None
        },
    };

    debug!(position, %mark, status = %next.status, "move applied");
    if next.status.is_terminal() {
        info!(status = %next.status, moves = next.move_count(), "game over");
    }

    Ok((next, outcome))
}

fn validate_move(state: &GameState, position: usize) -> Result<(), MoveError> {
    if state.status.is_terminal() {
        return Err(MoveError::GameAlreadyOver);
    }
    if position >= BOARD_SIZE {
        return Err(MoveError::InvalidPosition(position));
    }
    if !state.board.is_empty_at(position) {
        return Err(MoveError::CellOccupied(position));
    }
    Ok(())
}
