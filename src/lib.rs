//! # rust-ttt
//!
//! A tic-tac-toe engine with a greedy computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: No global game. `GameState` and `GameSession` are
//!    values the caller owns and passes around.
//!
//! 2. **All-or-Nothing Moves**: `apply_move` validates before it changes
//!    anything and returns a new state; a rejected move leaves no trace.
//!
//! 3. **Change Descriptors**: Every applied move yields a `MoveOutcome`
//!    (cell, mark, resulting status, winning line) for the front-end to
//!    render. Nothing here touches widgets.
//!
//! 4. **Injectable Randomness**: The opponent's random picks go through
//!    `RandomSource`, so tests pin them exactly.
//!
//! ## Modules
//!
//! - `core`: Marks, board, state, moves, errors, RNG, configuration
//! - `rules`: Winning lines, win/draw detection, move application
//! - `ai`: Win/block/center/corner/random heuristic and the policy seam
//! - `session`: Multi-game controller with scoring and automatic replies
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use rust_ttt::{apply_move, check_winner, reset, Mark};
//!
//! let mut state = reset();
//! for (pos, mark) in [(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O), (2, Mark::X)] {
//!     state = apply_move(&state, pos, mark).unwrap().0;
//! }
//! assert_eq!(check_winner(state.board()), Some(Mark::X));
//! ```

pub mod core;
pub mod rules;
pub mod ai;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Mark, CENTER, CORNERS,
    GameRng, GameRngState, RandomSource, ScriptedSource,
    GameMode, SessionConfig,
    Move, MoveOutcome, MoveError, BoardParseError,
    GameState, GameStatus,
};

pub use crate::rules::{apply_move, check_winner, is_draw, reset, status_of, winning_line, Line, LINES};

pub use crate::ai::{
    choose_ai_move, decide, find_winning_move, Decision, Rule, DEFAULT_AI_MARK,
    HeuristicOpponent, OpponentPolicy,
};

pub use crate::session::{GameSession, Scoreboard, SessionSnapshot};
