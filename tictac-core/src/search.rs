//! Exhaustive minimax move selection
//!
//! X maximizes and O minimizes, by convention. The state space is tiny
//! (at most 9! continuations, far fewer in practice), so the search
//! explores every line to the end with no pruning or depth limit.

use crate::board::{Board, Mark};
use crate::outcome::{is_full, legal_moves, winner};

/// Score when X has won
pub const X_WIN: i8 = 1;
/// Score when O has won
pub const O_WIN: i8 = -1;
/// Score for a drawn position
pub const DRAW: i8 = 0;

/// Outcome of a search: the position's value from X's perspective and
/// the chosen cell. `cell` is `None` only at terminal positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i8,
    pub cell: Option<usize>,
}

/// Evaluate a position for the mark to move, assuming optimal play by
/// both sides thereafter.
///
/// Ties between equally-good moves go to the lowest cell index: only a
/// strict improvement replaces the current best, and legal moves are
/// visited in ascending order.
pub fn minimax(board: &Board, to_move: Mark) -> SearchResult {
    if let Some(mark) = winner(board) {
        let score = match mark {
            Mark::X => X_WIN,
            Mark::O => O_WIN,
        };
        return SearchResult { score, cell: None };
    }
    if is_full(board) {
        return SearchResult {
            score: DRAW,
            cell: None,
        };
    }

    let mut best: Option<SearchResult> = None;

    for index in legal_moves(board) {
        // The board is a small Copy value, so each branch searches its
        // own copy instead of mutating and restoring a shared one.
        let mut child = *board;
        child.set(index, to_move.into());
        let reply = minimax(&child, to_move.opponent());

        let improves = match best {
            None => true,
            Some(current) => match to_move {
                Mark::X => reply.score > current.score,
                Mark::O => reply.score < current.score,
            },
        };
        if improves {
            best = Some(SearchResult {
                score: reply.score,
                cell: Some(index),
            });
        }
    }

    // Non-terminal positions always have at least one legal move
    best.unwrap_or(SearchResult {
        score: DRAW,
        cell: None,
    })
}

/// Optimal cell for the mark to move, or `None` at terminal positions
pub fn best_move(board: &Board, to_move: Mark) -> Option<usize> {
    minimax(board, to_move).cell
}
