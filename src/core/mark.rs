//! Player marks and board cells.
//!
//! ## Mark
//!
//! The symbol a player places: `X` always moves first.
//!
//! ## Cell
//!
//! One board position: empty, or holding a mark.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Moves first.
    X,
    /// Moves second.
    O,
}

impl Mark {
    /// Both marks in turn order.
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// The other player's mark.
    ///
    /// ```
    /// use rust_ttt::core::Mark;
    ///
    /// assert_eq!(Mark::X.opponent(), Mark::O);
    /// assert_eq!(Mark::O.opponent(), Mark::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character symbol used in board notation.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// Parse a mark from its symbol (case-insensitive).
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }

    /// Parse a mark from a one-symbol string such as `"X"` or `"o"`.
    #[must_use]
    pub fn from_name(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_symbol(c),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Mark),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The mark in this cell, if any.
    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Occupied(mark)
    }
}
