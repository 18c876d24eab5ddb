//! Core type bindings for Python.
//!
//! Marks cross the boundary as `"X"`, `"O"` and `""` (empty cell), the
//! strings a front-end puts on its buttons.

use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;

use crate::core::{Cell, Mark, MoveError, MoveOutcome};

pub(crate) fn mark_str(mark: Mark) -> String {
    mark.symbol().to_string()
}

pub(crate) fn cell_str(cell: Cell) -> String {
    cell.mark().map(mark_str).unwrap_or_default()
}

pub(crate) fn parse_mark(s: &str) -> PyResult<Mark> {
    Mark::from_name(s).ok_or_else(|| PyValueError::new_err(format!("Unknown mark {s:?}")))
}

pub(crate) fn move_err(err: MoveError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

const OUTCOME_KEYS: [&str; 4] = ["position", "mark", "status", "winning_line"];

/// Python wrapper for MoveOutcome.
///
/// Fields are readable as attributes (`outcome.position`) or by key
/// (`outcome["position"]`).
#[pyclass(name = "MoveOutcome", frozen)]
#[derive(Clone, Debug)]
pub struct PyMoveOutcome(pub MoveOutcome);

#[pymethods]
impl PyMoveOutcome {
    /// Cell index that changed.
    #[getter]
    fn position(&self) -> usize {
        self.0.position
    }

    /// Mark placed, "X" or "O".
    #[getter]
    fn mark(&self) -> String {
        mark_str(self.0.mark)
    }

    /// Status after the move: "in_progress", "x_won", "o_won" or "draw".
    #[getter]
    fn status(&self) -> &'static str {
        self.0.status.as_str()
    }

    /// Winning line when this move won, else None.
    #[getter]
    fn winning_line(&self) -> Option<Vec<usize>> {
        self.0.winning_line.map(|line| line.to_vec())
    }

    fn __getitem__(&self, py: Python<'_>, key: &str) -> PyResult<PyObject> {
        match key {
            "position" => Ok(self.position().into_py(py)),
            "mark" => Ok(self.mark().into_py(py)),
            "status" => Ok(self.status().into_py(py)),
            "winning_line" => Ok(self.winning_line().into_py(py)),
            _ => Err(PyKeyError::new_err(key.to_string())),
        }
    }

    fn keys(&self) -> Vec<&'static str> {
        OUTCOME_KEYS.to_vec()
    }

    fn __repr__(&self) -> String {
        format!(
            "MoveOutcome(position={}, mark={}, status={})",
            self.0.position,
            self.0.mark,
            self.0.status.as_str()
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameStatus, Mark};

    #[test]
    fn test_mark_and_cell_strings() {
        assert_eq!(mark_str(Mark::X), "X");
        assert_eq!(mark_str(Mark::O), "O");
        assert_eq!(cell_str(Cell::Empty), "");
        assert_eq!(cell_str(Cell::Occupied(Mark::O)), "O");
    }

    #[test]
    fn test_parse_mark() {
        assert_eq!(parse_mark("X").ok(), Some(Mark::X));
        assert_eq!(parse_mark("o").ok(), Some(Mark::O));
        assert!(parse_mark("").is_err());
        assert!(parse_mark("XO").is_err());
    }

    #[test]
    fn test_outcome_getters() {
        let outcome = PyMoveOutcome(MoveOutcome {
            position: 2,
            mark: Mark::X,
            status: GameStatus::Won(Mark::X),
            winning_line: Some([0, 1, 2]),
        });

        assert_eq!(outcome.position(), 2);
        assert_eq!(outcome.mark(), "X");
        assert_eq!(outcome.status(), "x_won");
        assert_eq!(outcome.winning_line(), Some(vec![0, 1, 2]));
        assert_eq!(outcome.keys(), vec!["position", "mark", "status", "winning_line"]);
    }
}
