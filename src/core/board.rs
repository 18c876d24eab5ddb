//! The 3x3 board.
//!
//! Cells are indexed 0-8 in row-major order:
//!
//! ```text
//! 0 | 1 | 2
//! --+---+--
//! 3 | 4 | 5
//! --+---+--
//! 6 | 7 | 8
//! ```
//!
//! ## Notation
//!
//! Boards parse from and print to a compact string form. `X`/`O` (either
//! case) are marks; `.`, `_`, `-` and spaces are empty cells; `/` and
//! newlines separate rows and are otherwise ignored.
//!
//! ```
//! use rust_ttt::core::{Board, Cell, Mark};
//!
//! let board: Board = "XX./.O./...".parse().unwrap();
//! assert_eq!(board.get(1), Some(Cell::Occupied(Mark::X)));
//! assert_eq!(board.get(4), Some(Cell::Occupied(Mark::O)));
//! assert_eq!(board.to_string(), "XX./.O./...");
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::error::BoardParseError;
use super::mark::{Cell, Mark};

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// Index of the center cell.
pub const CENTER: usize = 4;

/// Indices of the four corner cells, ascending.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Indices of empty cells, ascending. Never spills to the heap.
pub type CellList = SmallVec<[usize; BOARD_SIZE]>;

/// Nine cells in row-major order.
///
/// `Board` is `Copy`: hypothetical placements work on a copy and leave the
/// original untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// An all-empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    #[must_use]
    pub const fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// The cell at `position`, or `None` if off the board.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    /// The mark at `position`, if the position is on the board and occupied.
    #[must_use]
    pub fn mark_at(&self, position: usize) -> Option<Mark> {
        self.get(position).and_then(Cell::mark)
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Whether `position` is on the board and empty.
    #[must_use]
    pub fn is_empty_at(&self, position: usize) -> bool {
        matches!(self.get(position), Some(Cell::Empty))
    }

    /// Empty cell indices in ascending order.
    #[must_use]
    pub fn empty_cells(&self) -> CellList {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of cells holding a mark.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// True when every cell holds a mark.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// True when no cell holds a mark.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    /// A copy of this board with `mark` placed at `position`, or `None` if
    /// `position` is off the board.
    ///
    /// Does not check that the cell is empty; callers validate first.
    #[must_use]
    pub fn with_mark(mut self, position: usize, mark: Mark) -> Option<Self> {
        *self.cells.get_mut(position)? = Cell::Occupied(mark);
        Some(self)
    }

    /// Place `mark` at a validated empty `position`.
    pub(crate) fn place(&mut self, position: usize, mark: Mark) {
        debug_assert!(self.is_empty_at(position), "cell {position} is not empty");
        self.cells[position] = Cell::Occupied(mark);
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; BOARD_SIZE];
        let mut count = 0;

        for c in s.chars() {
            let cell = match c {
                '/' | '\n' | '\r' => continue,
                '.' | '_' | '-' | ' ' => Cell::Empty,
                _ => Cell::Occupied(Mark::from_symbol(c).ok_or(BoardParseError::BadChar(c))?),
            };
            if count < BOARD_SIZE {
                cells[count] = cell;
            }
            count += 1;
        }

        if count != BOARD_SIZE {
            return Err(BoardParseError::BadLength(count));
        }
        Ok(Self { cells })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                write!(f, "/")?;
            }
            match cell.mark() {
                Some(mark) => write!(f, "{mark}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}
