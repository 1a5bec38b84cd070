//! Tic-tac-toe core - game rules and optimal move search
//!
//! This crate provides the pure game logic:
//! - Board model (3x3 grid, row-major cells)
//! - Outcome evaluation (winner, tie, legal moves)
//! - Exhaustive minimax move selection

pub mod board;
pub mod outcome;
pub mod search;

// Re-exports for convenient access
pub use board::{Board, BoardError, Cell, Mark, BOARD_CELLS, WIN_LINES};
pub use outcome::{is_full, is_terminal, legal_moves, status, winner, GameStatus};
pub use search::{best_move, minimax, SearchResult};
