//! Outcome evaluation: winner, tie, and legal moves
//!
//! Pure functions over a board value. Inputs are assumed well-formed;
//! validation happens at the HTTP/CLI boundary when the board is built.

use crate::board::{Board, Mark, BOARD_CELLS, WIN_LINES};
use serde::Serialize;

/// Mark holding a completed line, if any
///
/// Lines are checked in fixed order (rows, columns, diagonals). At most
/// one mark can have a completed line in a reachable position, so the
/// order is not observable for valid inputs.
pub fn winner(board: &Board) -> Option<Mark> {
    for line in WIN_LINES {
        if let Some(mark) = board.get(line[0]).mark() {
            if board.get(line[1]).mark() == Some(mark) && board.get(line[2]).mark() == Some(mark) {
                return Some(mark);
            }
        }
    }
    None
}

/// True iff no cell is empty
pub fn is_full(board: &Board) -> bool {
    (0..BOARD_CELLS).all(|i| !board.get(i).is_empty())
}

/// Indices of empty cells, ascending
///
/// The ascending order is load-bearing: the search breaks ties by
/// keeping the first equally-good move it encounters.
pub fn legal_moves(board: &Board) -> Vec<usize> {
    (0..BOARD_CELLS)
        .filter(|&i| board.get(i).is_empty())
        .collect()
}

/// True iff a winner exists or the board is full
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Win/tie verdict for a board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GameStatus {
    pub winner: Option<Mark>,
    pub tie: bool,
}

/// Compute the win/tie verdict: tie iff the board is full with no winner
pub fn status(board: &Board) -> GameStatus {
    let winner = winner(board);
    GameStatus {
        tie: winner.is_none() && is_full(board),
        winner,
    }
}
