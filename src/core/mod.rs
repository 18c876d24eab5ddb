//! Core engine types: marks, board, state, moves, errors, RNG, configuration.
//!
//! Everything here is plain data. Game rules live in `rules`, the computer
//! opponent in `ai`.

pub mod mark;
pub mod board;
pub mod error;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use mark::{Cell, Mark};
pub use board::{Board, CellList, BOARD_SIZE, CENTER, CORNERS};
pub use error::{BoardParseError, MoveError};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedSource};
pub use config::{GameMode, SessionConfig};
pub use action::{Move, MoveOutcome};
pub use state::{GameState, GameStatus};
