//! Integration tests for the tic-tac-toe stack
//!
//! Exercises the core game logic through its public API the way the
//! server and CLI drive it.

use tictac_core::{
    best_move, is_terminal, legal_moves, minimax, status, winner, Board, Cell, Mark,
};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

/// Play a full game with both sides choosing minimax moves
fn play_optimal_game() -> Board {
    let mut b = Board::empty();
    let mut to_move = Mark::X;

    while !is_terminal(&b) {
        let cell = best_move(&b, to_move).expect("non-terminal board has a move");
        b.set(cell, Cell::from(to_move));
        to_move = to_move.opponent();
    }

    b
}

// ============================================================================
// TESTS
// ============================================================================

#[test]
fn test_optimal_play_is_always_a_tie() {
    let final_board = play_optimal_game();
    let verdict = status(&final_board);

    assert_eq!(verdict.winner, None);
    assert!(verdict.tie);
    assert!(legal_moves(&final_board).is_empty());
}

#[test]
fn test_search_never_hands_opponent_a_win() {
    // O threatens the 2-4-6 diagonal at cell 6. Ignoring it loses, so
    // the search must hold the draw instead.
    let b = board("XXO O    ");
    let result = minimax(&b, Mark::X);

    assert_eq!(result.cell, Some(6));
    assert!(result.score >= 0);
}

#[test]
fn test_forced_win_is_taken_over_a_draw() {
    // X can win immediately on the top row; any other move scores worse.
    let b = board("XX OO    ");
    let result = minimax(&b, Mark::X);

    let mut child = b;
    child.set(result.cell.unwrap(), Cell::X);
    assert_eq!(winner(&child), Some(Mark::X));
}

#[test]
fn test_minimizer_symmetry() {
    // Mirror position with marks swapped: O to move wins at the same cell
    let x_result = minimax(&board("XX OO    "), Mark::X);
    let o_result = minimax(&board("OO XX    "), Mark::O);

    assert_eq!(x_result.cell, o_result.cell);
    assert_eq!(x_result.score, -o_result.score);
}
