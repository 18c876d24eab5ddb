//! Moves and move outcomes.
//!
//! A `Move` is what a player did; a `MoveOutcome` is the change descriptor
//! handed to the presentation layer after the move was applied: which cell
//! changed, to what, and what the game status became.

use serde::{Deserialize, Serialize};

use super::mark::Mark;
use super::state::GameStatus;
use crate::rules::Line;

/// A mark placed at a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Cell index (0-8).
    pub position: usize,
    /// The mark placed.
    pub mark: Mark,
}

impl Move {
    #[must_use]
    pub const fn new(position: usize, mark: Mark) -> Self {
        Self { position, mark }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.mark, self.position)
    }
}

/// Result of a successfully applied move.
///
/// `winning_line` is set only when the move won the game, and names the
/// line to highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Cell that changed.
    pub position: usize,
    /// Mark now in that cell.
    pub mark: Mark,
    /// Game status after the move.
    pub status: GameStatus,
    /// Completed line, when the move won.
    pub winning_line: Option<Line>,
}

impl MoveOutcome {
    /// The move this outcome describes.
    #[must_use]
    pub const fn as_move(&self) -> Move {
        Move::new(self.position, self.mark)
    }

    /// Whether this move ended the game.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
