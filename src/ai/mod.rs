//! Computer opponent.
//!
//! - `heuristic`: the five-rule greedy chooser
//! - `policy`: the `OpponentPolicy` trait sessions program against

pub mod heuristic;
pub mod policy;

pub use heuristic::{choose_ai_move, decide, find_winning_move, Decision, Rule, DEFAULT_AI_MARK};
pub use policy::{HeuristicOpponent, OpponentPolicy};
