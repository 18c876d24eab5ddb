//! The eight winning lines.

use crate::core::{Board, Mark};

/// Three cell indices forming a row, column or diagonal.
pub type Line = [usize; 3];

/// Every winning line, in scan order: rows top to bottom, columns left to
/// right, then the two diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// The mark filling all three cells of `line`, if any.
#[must_use]
pub fn line_owner(board: &Board, line: Line) -> Option<Mark> {
    let [a, b, c] = line;
    let mark = board.mark_at(a)?;
    (board.mark_at(b) == Some(mark) && board.mark_at(c) == Some(mark)).then_some(mark)
}

/// The first completed line in scan order, with its owner.
#[must_use]
pub fn completed_line(board: &Board) -> Option<(Line, Mark)> {
    LINES
        .iter()
        .find_map(|&line| line_owner(board, line).map(|mark| (line, mark)))
}

/// The first completed line in scan order, for highlighting.
#[must_use]
pub fn winning_line(board: &Board) -> Option<Line> {
    completed_line(board).map(|(line, _)| line)
}
