//! Python bindings for the rust-ttt engine.
//!
//! Lets a Python GUI drive the engine in-process.
//!
//! # Quick Start
//!
//! ```python
//! import rust_ttt as ttt
//!
//! session = ttt.GameSession(mode="ai", seed=7)
//!
//! # Human plays a corner, the computer answers
//! for outcome in session.play_turn(0):
//!     print(outcome.position, outcome.mark, outcome.status)
//!
//! session.board      # ["X", "", "", "", "O", "", "", "", ""]
//! session.scores     # (0, 0, 0)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

/// rust-ttt: tic-tac-toe engine with a heuristic opponent.
#[pymodule]
fn rust_ttt(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMoveOutcome>()?;
    m.add_class::<PyGameSession>()?;

    Ok(())
}
