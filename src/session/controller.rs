//! Game session controller.
//!
//! A `GameSession` strings games together for a front-end: it owns the
//! current `GameState`, the computer opponent and its RNG, and a
//! `Scoreboard` that survives `reset`.
//!
//! ## Turn flow
//!
//! In `Friend` mode both marks go through `play`. In `Ai` mode the human
//! uses `play` and the computer answers through `play_ai`; `play_turn`
//! does both in one call. Any pause between the two moves is left to the
//! caller.
//!
//! ```
//! use rust_ttt::core::{GameMode, GameStatus, SessionConfig};
//! use rust_ttt::session::GameSession;
//!
//! let mut session = GameSession::new(SessionConfig::default().with_mode(GameMode::Ai));
//! let outcomes = session.play_turn(0).unwrap();
//!
//! // The human's X, then the computer's O in the center.
//! assert_eq!(outcomes.len(), 2);
//! assert_eq!(outcomes[1].position, 4);
//! assert_eq!(session.status(), GameStatus::InProgress);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::scoreboard::Scoreboard;
use crate::ai::{HeuristicOpponent, OpponentPolicy};
use crate::core::{
    Board, CellList, GameMode, GameRng, GameState, GameStatus, Mark, MoveError, MoveOutcome,
    SessionConfig,
};
use crate::rules::{self, Line};

/// A sequence of games sharing a mode, an opponent and a scoreboard.
pub struct GameSession {
    config: SessionConfig,
    state: GameState,
    scoreboard: Scoreboard,
    rng: GameRng,
    policy: Box<dyn OpponentPolicy>,
}

impl GameSession {
    /// Create a session with the heuristic opponent playing `config.ai_mark`.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let policy = Box::new(HeuristicOpponent::new(config.ai_mark));
        Self::with_policy(config, policy)
    }

    /// Create a session with a custom opponent.
    ///
    /// The policy's mark replaces `config.ai_mark`.
    #[must_use]
    pub fn with_policy(mut config: SessionConfig, policy: Box<dyn OpponentPolicy>) -> Self {
        config.ai_mark = policy.mark();
        Self {
            rng: GameRng::new(config.seed),
            config,
            state: rules::reset(),
            scoreboard: Scoreboard::new(),
            policy,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[must_use]
    pub fn current_player(&self) -> Mark {
        self.state.current_player()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.state.move_count()
    }

    /// Empty cells, ascending: the opponent's candidate moves.
    #[must_use]
    pub fn empty_cells(&self) -> CellList {
        self.state.board().empty_cells()
    }

    /// The completed line to highlight, once someone has won.
    #[must_use]
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(self.state.board())
    }

    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// True when the computer should move next.
    #[must_use]
    pub fn ai_to_move(&self) -> bool {
        self.config.mode == GameMode::Ai
            && !self.state.is_over()
            && self.state.current_player() == self.policy.mark()
    }

    /// Place the current player's mark at `position`.
    ///
    /// In `Ai` mode this is rejected with `NotYourTurn` while the computer
    /// is to move.
    pub fn play(&mut self, position: usize) -> Result<MoveOutcome, MoveError> {
        if self.ai_to_move() {
            return Err(MoveError::NotYourTurn(self.policy.mark()));
        }
        self.apply(position)
    }

    /// Let the computer move, if it is its turn.
    ///
    /// `Ok(None)` means there was nothing to do: not the computer's turn, or
    /// the policy declined to move. An illegal choice from the policy is
    /// returned as its `MoveError` and leaves the game unchanged.
    pub fn play_ai(&mut self) -> Result<Option<MoveOutcome>, MoveError> {
        if !self.ai_to_move() {
            return Ok(None);
        }

        let Some(decision) = self.policy.choose_move(self.state.board(), &mut self.rng) else {
            return Ok(None);
        };
        self.apply(decision.position)
            .inspect_err(|err| {
                warn!(position = decision.position, %err, "opponent chose an illegal move");
            })
            .map(Some)
    }

    /// The human's move followed, in `Ai` mode, by the computer's reply.
    ///
    /// The reply is skipped when the human's move ended the game. If the
    /// human's move is accepted but the reply is illegal, the reply's error
    /// is returned and the human's move stands.
    pub fn play_turn(&mut self, position: usize) -> Result<Vec<MoveOutcome>, MoveError> {
        let mut outcomes = vec![self.play(position)?];
        if let Some(reply) = self.play_ai()? {
            outcomes.push(reply);
        }
        Ok(outcomes)
    }

    /// Start a new game. Scores are kept.
    ///
    /// When the computer plays X, call `play_ai` to make its opening move.
    pub fn reset(&mut self) {
        self.state = rules::reset();
        info!(mode = self.config.mode.as_str(), "new game");
    }

    /// Zero the scoreboard without touching the current game.
    pub fn reset_scores(&mut self) {
        self.scoreboard = Scoreboard::new();
    }

    /// Immutable view for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.config.mode,
            board: *self.state.board(),
            current_player: self.state.current_player(),
            status: self.state.status(),
            winning_line: self.winning_line(),
            scoreboard: self.scoreboard,
            move_count: self.state.move_count(),
            empty_cells: self.empty_cells().to_vec(),
            ai_to_move: self.ai_to_move(),
        }
    }

    fn apply(&mut self, position: usize) -> Result<MoveOutcome, MoveError> {
        let (next, outcome) = rules::apply_move(&self.state, position, self.state.current_player())?;
        self.state = next;
        if outcome.is_terminal() {
            self.scoreboard.record(outcome.status);
        }
        Ok(outcome)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("scoreboard", &self.scoreboard)
            .finish_non_exhaustive()
    }
}

/// Everything a front-end needs to draw the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub mode: GameMode,
    pub board: Board,
    pub current_player: Mark,
    pub status: GameStatus,
    pub winning_line: Option<Line>,
    pub scoreboard: Scoreboard,
    pub move_count: usize,
    pub empty_cells: Vec<usize>,
    pub ai_to_move: bool,
}
