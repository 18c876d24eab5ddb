//! Running tally of finished games.

use serde::{Deserialize, Serialize};

use crate::core::{GameStatus, Mark};

/// Wins per mark and draws across a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game. `InProgress` is ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    #[must_use]
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}
