//! Error types for move application and board parsing.
//!
//! Every error here is local and recoverable: callers decide whether to
//! surface a message or ignore the attempt. A rejected move never changes
//! the game state.

use super::mark::Mark;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Position outside `0..9`.
    #[display("Position {_0} is outside the board")]
    InvalidPosition(usize),

    /// The target cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(usize),

    /// The game has been won or drawn.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// A human tried to move while the computer opponent is to play.
    #[display("It is {_0}'s turn")]
    NotYourTurn(Mark),
}

impl std::error::Error for MoveError {}

/// Why a board notation string could not be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The notation did not describe exactly nine cells.
    #[display("Expected 9 cells, found {_0}")]
    BadLength(usize),

    /// A character that is neither a mark nor an empty-cell marker.
    #[display("Unexpected character {_0:?} in board notation")]
    BadChar(char),
}

impl std::error::Error for BoardParseError {}
