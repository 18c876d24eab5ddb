//! Session configuration.
//!
//! `SessionConfig` fixes how a `GameSession` is played: whether the second
//! seat is a person or the computer, which mark the computer plays, and the
//! seed for its random tie-breaks.

use serde::{Deserialize, Serialize};

use super::mark::Mark;

/// Who sits in the second seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Two people share the board.
    #[default]
    Friend,
    /// One person plays the computer opponent.
    Ai,
}

impl GameMode {
    /// Parse `"friend"` or `"ai"` (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "friend" => Some(GameMode::Friend),
            "ai" => Some(GameMode::Ai),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameMode::Friend => "friend",
            GameMode::Ai => "ai",
        }
    }
}

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Friend or computer opponent (default: Friend).
    pub mode: GameMode,

    /// Mark the computer plays in `Ai` mode (default: O).
    /// With X the computer opens every game.
    pub ai_mark: Mark,

    /// Seed for the opponent's random corner/cell picks.
    /// Same seed produces the same games.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Friend,
            ai_mark: Mark::O,
            seed: 42,
        }
    }
}

impl SessionConfig {
    /// Create a new config with a custom mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Create a new config with a custom computer mark.
    pub fn with_ai_mark(mut self, mark: Mark) -> Self {
        self.ai_mark = mark;
        self
    }

    /// Create a new config with a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The mark a human plays against the computer.
    #[must_use]
    pub fn human_mark(&self) -> Mark {
        self.ai_mark.opponent()
    }
}
