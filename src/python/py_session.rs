//! Session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameMode, SessionConfig};
use crate::session::GameSession;

use super::py_core::{cell_str, mark_str, move_err, parse_mark, PyMoveOutcome};

/// Python wrapper for GameSession.
///
/// One object per window: it survives "new game" and keeps the score.
#[pyclass(name = "GameSession")]
pub struct PyGameSession {
    inner: GameSession,
}

#[pymethods]
impl PyGameSession {
    /// Create a new session.
    ///
    /// # Arguments
    /// - mode: "friend" or "ai"
    /// - ai_mark: mark the computer plays in "ai" mode
    /// - seed: RNG seed for the computer's random picks
    #[new]
    #[pyo3(signature = (mode = "friend", ai_mark = "O", seed = 42))]
    fn new(mode: &str, ai_mark: &str, seed: u64) -> PyResult<Self> {
        let mode = GameMode::from_name(mode)
            .ok_or_else(|| PyValueError::new_err(format!("Unknown mode {mode:?}")))?;
        let config = SessionConfig::default()
            .with_mode(mode)
            .with_ai_mark(parse_mark(ai_mark)?)
            .with_seed(seed);
        Ok(Self {
            inner: GameSession::new(config),
        })
    }

    /// Place the current player's mark. Raises ValueError if rejected.
    fn play(&mut self, position: usize) -> PyResult<PyMoveOutcome> {
        self.inner.play(position).map(PyMoveOutcome).map_err(move_err)
    }

    /// Let the computer move. Returns None when it is not its turn.
    /// Raises ValueError if the opponent picks an illegal cell.
    fn play_ai(&mut self) -> PyResult<Option<PyMoveOutcome>> {
        let outcome = self.inner.play_ai().map_err(move_err)?;
        Ok(outcome.map(PyMoveOutcome))
    }

    /// Human move plus the computer's reply, if any.
    fn play_turn(&mut self, position: usize) -> PyResult<Vec<PyMoveOutcome>> {
        let outcomes = self.inner.play_turn(position).map_err(move_err)?;
        Ok(outcomes.into_iter().map(PyMoveOutcome).collect())
    }

    /// Start a new game, keeping scores.
    fn reset(&mut self) {
        self.inner.reset();
    }

    fn reset_scores(&mut self) {
        self.inner.reset_scores();
    }

    #[getter]
    fn mode(&self) -> &'static str {
        self.inner.mode().as_str()
    }

    /// Nine strings: "X", "O" or "".
    #[getter]
    fn board(&self) -> Vec<String> {
        self.inner.board().cells().iter().map(|&c| cell_str(c)).collect()
    }

    #[getter]
    fn current_player(&self) -> String {
        mark_str(self.inner.current_player())
    }

    #[getter]
    fn status(&self) -> &'static str {
        self.inner.status().as_str()
    }

    #[getter]
    fn winner(&self) -> Option<String> {
        self.inner.status().winner().map(mark_str)
    }

    #[getter]
    fn winning_line(&self) -> Option<Vec<usize>> {
        self.inner.winning_line().map(|line| line.to_vec())
    }

    #[getter]
    fn empty_cells(&self) -> Vec<usize> {
        self.inner.empty_cells().to_vec()
    }

    /// (x_wins, o_wins, draws)
    #[getter]
    fn scores(&self) -> (u32, u32, u32) {
        let s = self.inner.scoreboard();
        (s.x_wins, s.o_wins, s.draws)
    }

    #[getter]
    fn ai_to_move(&self) -> bool {
        self.inner.ai_to_move()
    }

    #[getter]
    fn move_count(&self) -> usize {
        self.inner.move_count()
    }

    fn __repr__(&self) -> String {
        format!(
            "GameSession(mode={}, board={}, status={})",
            self.inner.mode().as_str(),
            self.inner.board(),
            self.inner.status().as_str()
        )
    }
}
