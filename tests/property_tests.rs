//! Property tests over random move sequences.
//!
//! Sequences mix legal moves with off-board and occupied positions, so the
//! rejection paths are exercised alongside normal play.

use proptest::prelude::*;

use rust_ttt::ai::{decide, find_winning_move, Rule};
use rust_ttt::core::{Board, GameMode, GameRng, GameState, GameStatus, Mark, MoveError, SessionConfig};
use rust_ttt::rules::{apply_move, check_winner, completed_line, is_draw, reset, status_of};
use rust_ttt::session::GameSession;

/// Play `positions` from a fresh game, each by the player to move,
/// returning every state reached (including the first).
fn play_out(positions: &[usize]) -> Vec<GameState> {
    let mut states = vec![reset()];
    for &pos in positions {
        let state = states.last().unwrap();
        if let Ok((next, _)) = apply_move(state, pos, state.current_player()) {
            states.push(next);
        }
    }
    states
}

/// A board reached by legal play.
fn reachable_board() -> impl Strategy<Value = Board> {
    proptest::collection::vec(0usize..9, 0..12).prop_map(|positions| {
        *play_out(&positions).last().unwrap().board()
    })
}

proptest! {
    /// Turns alternate X, O, X, ... and freeze once the game ends.
    #[test]
    fn prop_turns_alternate(positions in proptest::collection::vec(0usize..12, 0..20)) {
        let mut state = reset();
        for pos in positions {
            let mover = state.current_player();
            let before = state.clone();
            match apply_move(&state, pos, mover) {
                Ok((next, outcome)) => {
                    prop_assert_eq!(outcome.mark, mover);
                    if next.is_over() {
                        prop_assert_eq!(next.current_player(), mover);
                    } else {
                        prop_assert_eq!(next.current_player(), mover.opponent());
                    }
                    let expected = if next.move_count() % 2 == 0 { Mark::X } else { Mark::O };
                    if !next.is_over() {
                        prop_assert_eq!(next.current_player(), expected);
                    }
                    state = next;
                }
                Err(err) => {
                    match err {
                        MoveError::InvalidPosition(p) => prop_assert!(p >= 9),
                        MoveError::CellOccupied(p) => prop_assert!(!state.board().is_empty_at(p)),
                        MoveError::GameAlreadyOver => prop_assert!(state.is_over()),
                        MoveError::NotYourTurn(_) => prop_assert!(false, "engine never checks turns"),
                    }
                    prop_assert_eq!(&state, &before);
                }
            }
        }
    }

    /// Status always matches the board, and history matches occupied cells.
    #[test]
    fn prop_status_matches_board(positions in proptest::collection::vec(0usize..9, 0..20)) {
        for state in play_out(&positions) {
            prop_assert_eq!(state.status(), status_of(state.board()));
            prop_assert_eq!(state.move_count(), state.board().occupied_count());
        }
    }

    /// A draw and a winner never coexist; a draw means a full board.
    #[test]
    fn prop_draw_excludes_winner(board in reachable_board()) {
        if is_draw(&board) {
            prop_assert!(board.is_full());
            prop_assert_eq!(check_winner(&board), None);
        }
        if check_winner(&board).is_some() {
            prop_assert!(!is_draw(&board));
        }
        prop_assert_eq!(
            check_winner(&board),
            completed_line(&board).map(|(_, mark)| mark)
        );
    }

    /// The computer only ever picks empty cells, and picks one whenever
    /// any exists.
    #[test]
    fn prop_ai_picks_empty_cell(board in reachable_board(), seed in any::<u64>(), ai in prop_oneof![Just(Mark::X), Just(Mark::O)]) {
        let mut rng = GameRng::new(seed);
        match decide(&board, ai, &mut rng) {
            Some(d) => prop_assert!(board.is_empty_at(d.position)),
            None => prop_assert!(board.is_full()),
        }
    }

    /// Win is taken whenever available; otherwise a block whenever needed.
    #[test]
    fn prop_ai_rule_priority(board in reachable_board(), seed in any::<u64>()) {
        prop_assume!(status_of(&board) == GameStatus::InProgress);
        let mut rng = GameRng::new(seed);
        let decision = decide(&board, Mark::O, &mut rng).unwrap();

        if let Some(win) = find_winning_move(&board, Mark::O) {
            prop_assert_eq!(decision.rule, Rule::Win);
            prop_assert_eq!(decision.position, win);
            prop_assert_eq!(check_winner(&board.with_mark(win, Mark::O).unwrap()), Some(Mark::O));
        } else if let Some(block) = find_winning_move(&board, Mark::X) {
            prop_assert_eq!(decision.rule, Rule::Block);
            prop_assert_eq!(decision.position, block);
        } else if board.is_empty_at(4) {
            prop_assert_eq!(decision.rule, Rule::Center);
        }
    }

    /// After any mix of play, reset starts a fresh game: nothing from the
    /// previous game leaks through, and the scores are kept.
    #[test]
    fn prop_session_reset_is_fresh(
        positions in proptest::collection::vec(0usize..12, 0..30),
        seed in any::<u64>(),
        ai_mode in any::<bool>(),
    ) {
        let mode = if ai_mode { GameMode::Ai } else { GameMode::Friend };
        let config = SessionConfig::default().with_mode(mode).with_seed(seed);
        let mut session = GameSession::new(config.clone());

        for pos in positions {
            if session.state().is_over() {
                session.reset();
            }
            let _ = session.play_turn(pos);
        }
        let scores = *session.scoreboard();

        session.reset();
        let snapshot = session.snapshot();
        let mut fresh = GameSession::new(config).snapshot();
        fresh.scoreboard = scores;

        prop_assert_eq!(snapshot, fresh);
        prop_assert!(session.state().history().is_empty());
        prop_assert_eq!(session.state().last_move(), None);
    }
}
