//! Game state: board, turn and outcome.
//!
//! ## GameStatus
//!
//! `InProgress` until a line is completed (`Won`) or the board fills
//! without one (`Draw`). Terminal statuses only leave via reset.
//!
//! ## GameState
//!
//! The full state of one game. Changed only by `rules::apply_move`, which
//! returns a new value; replaced wholesale by `rules::reset`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::Move;
use super::board::Board;
use super::mark::Mark;

/// Outcome classification of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    /// A player completed a line.
    Won(Mark),
    /// Board full, no line.
    Draw,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning mark, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }

    /// Stable lowercase name (`in_progress`, `x_won`, `o_won`, `draw`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::InProgress => "in_progress",
            GameStatus::Won(Mark::X) => "x_won",
            GameStatus::Won(Mark::O) => "o_won",
            GameStatus::Draw => "draw",
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(mark) => write!(f, "{mark} won"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete state of a single game.
///
/// The move history uses `im::Vector` so cloning a state for a snapshot is
/// O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Mark,
    pub(crate) status: GameStatus,
    pub(crate) history: Vector<Move>,
}

impl GameState {
    /// A fresh game: empty board, X to move, in progress.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            status: GameStatus::InProgress,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is. Frozen once the game is over.
    #[must_use]
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Moves applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Move> {
        &self.history
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// The most recent move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
