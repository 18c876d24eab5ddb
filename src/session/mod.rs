//! Sessions: consecutive games with a shared mode, opponent and score.

pub mod controller;
pub mod scoreboard;

pub use controller::{GameSession, SessionSnapshot};
pub use scoreboard::Scoreboard;
