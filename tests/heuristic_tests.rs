//! Computer opponent integration tests.
//!
//! Each test builds a board where several rules apply at once and checks
//! that the highest-priority rule decides.

use rust_ttt::ai::{choose_ai_move, decide, find_winning_move, Decision, HeuristicOpponent, OpponentPolicy, Rule};
use rust_ttt::core::{Board, GameRng, Mark, RandomSource, ScriptedSource, CORNERS};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

// =============================================================================
// Winning Move Search
// =============================================================================

#[test]
fn test_find_winning_move_reference_boards() {
    assert_eq!(find_winning_move(&board("XX./.../..."), Mark::X), Some(2));
    assert_eq!(find_winning_move(&board("O../O../..."), Mark::O), Some(6));
    assert_eq!(find_winning_move(&board("X../.O./..."), Mark::X), None);
}

/// Test that the lowest qualifying index is returned.
#[test]
fn test_find_winning_move_ascending_order() {
    // O can finish the top row at 2 or the left column at 6.
    let b = board("OO./OX./..X");
    assert_eq!(find_winning_move(&b, Mark::O), Some(2));
    assert_eq!(find_winning_move(&b, Mark::X), None);
}

/// Test that the search leaves the board as it found it.
#[test]
fn test_find_winning_move_is_pure() {
    let b = board("XX./OO./...");
    let copy = b;
    let _ = find_winning_move(&b, Mark::X);
    let _ = find_winning_move(&b, Mark::O);
    assert_eq!(b, copy);
}

// =============================================================================
// Rule Priority
// =============================================================================

/// Test that winning beats blocking.
#[test]
fn test_win_beats_block() {
    // O wins at 2; X threatens 5.
    let b = board("OO./XX./X..");
    let mut rng = ScriptedSource::default();
    assert_eq!(
        decide(&b, Mark::O, &mut rng),
        Some(Decision { position: 2, rule: Rule::Win })
    );
}

/// Test that blocking beats taking the center.
#[test]
fn test_block_beats_center() {
    let b = board("X.X/.../...");
    let mut rng = ScriptedSource::default();
    assert_eq!(
        decide(&b, Mark::O, &mut rng),
        Some(Decision { position: 1, rule: Rule::Block })
    );
}

/// Test that with two threats the lower cell is blocked.
#[test]
fn test_block_lowest_threat() {
    let b = board("XX./XO./...");
    let mut rng = ScriptedSource::default();
    assert_eq!(
        decide(&b, Mark::O, &mut rng),
        Some(Decision { position: 2, rule: Rule::Block })
    );
}

/// Test that the center beats a corner.
#[test]
fn test_center_beats_corner() {
    let b = board("X../.../...");
    let mut rng = ScriptedSource::new([3]);
    assert_eq!(choose_ai_move(&b, Mark::O, &mut rng), Some(4));
    // The source was not consulted.
    assert_eq!(rng.remaining(), 1);
}

/// Test that a corner beats an edge.
#[test]
fn test_corner_beats_random() {
    let b = board(".../.X./...");
    for pick in 0..4 {
        let mut rng = ScriptedSource::new([pick]);
        assert_eq!(
            decide(&b, Mark::O, &mut rng),
            Some(Decision { position: CORNERS[pick], rule: Rule::Corner })
        );
    }
}

/// Test that only empty corners are candidates.
#[test]
fn test_corner_skips_taken_corners() {
    // X holds 0 and 8 around O's center; 2 and 6 remain.
    let b = board("X../.O./..X");
    let mut rng = ScriptedSource::new([1]);
    assert_eq!(
        decide(&b, Mark::O, &mut rng),
        Some(Decision { position: 6, rule: Rule::Corner })
    );
}

/// Test that a source returning out-of-range picks still lands on a corner.
#[test]
fn test_corner_with_out_of_range_source() {
    struct Overshoot;
    impl RandomSource for Overshoot {
        fn pick_index(&mut self, len: usize) -> usize {
            len * 10 + 3
        }
    }

    let b = board(".../.X./...");
    assert_eq!(
        decide(&b, Mark::O, &mut Overshoot),
        Some(Decision { position: 8, rule: Rule::Corner })
    );
}

/// Test the random fallback once center and corners are gone.
#[test]
fn test_random_fallback() {
    let b = board("XOX/.O./OXO");
    for (pick, expected) in [(0, 3), (1, 5)] {
        let mut rng = ScriptedSource::new([pick]);
        assert_eq!(
            decide(&b, Mark::O, &mut rng),
            Some(Decision { position: expected, rule: Rule::Random })
        );
    }
}

/// Test that a full board yields no move.
#[test]
fn test_full_board() {
    let mut rng = GameRng::new(1);
    assert_eq!(choose_ai_move(&board("XOX/XXO/OXO"), Mark::O, &mut rng), None);
}

// =============================================================================
// Randomness
// =============================================================================

/// Test that seeded corner picks are reproducible and cover every corner.
#[test]
fn test_seeded_corner_picks() {
    let b = board(".../.X./...");
    let mut seen = Vec::new();

    for seed in 0..64 {
        let first = choose_ai_move(&b, Mark::O, &mut GameRng::new(seed)).unwrap();
        let again = choose_ai_move(&b, Mark::O, &mut GameRng::new(seed)).unwrap();
        assert_eq!(first, again);
        assert!(CORNERS.contains(&first));
        if !seen.contains(&first) {
            seen.push(first);
        }
    }

    seen.sort_unstable();
    assert_eq!(seen, CORNERS.to_vec());
}

/// Test that the policy object and the free function agree.
#[test]
fn test_policy_matches_free_function() {
    let policy = HeuristicOpponent::new(Mark::X);
    let b = board("O../.../...");

    let via_policy = policy.choose_move(&b, &mut GameRng::new(5)).map(|d| d.position);
    let direct = choose_ai_move(&b, Mark::X, &mut GameRng::new(5));
    assert_eq!(via_policy, direct);
    assert_eq!(direct, Some(4));
}
