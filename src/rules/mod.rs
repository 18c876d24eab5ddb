//! Game rules: winning lines, outcome detection and move application.
//!
//! - `lines`: the eight fixed winning lines and line queries
//! - `engine`: `check_winner`, `is_draw`, `apply_move`, `reset`
//!
//! The state machine is small: `InProgress` moves to `Won` or `Draw`
//! through `apply_move`, and only `reset` leads back.

pub mod lines;
pub mod engine;

pub use lines::{completed_line, line_owner, winning_line, Line, LINES};
pub use engine::{apply_move, check_winner, is_draw, reset, status_of};
