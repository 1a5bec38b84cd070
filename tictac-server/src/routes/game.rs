//! Game API routes
//!
//! The two computations the core exposes: optimal CPU move and win/tie
//! status. Each request carries its own board.

use axum::Json;
use serde::{Deserialize, Serialize};
use tictac_core::{minimax, status, Board, Cell, Mark};

use crate::error::ApiError;

/// Request body for `/cpu_move`
#[derive(Deserialize)]
pub struct CpuMoveRequest {
    pub board: Vec<Cell>,
    pub cpu: Mark,
}

/// Response body for `/cpu_move`
#[derive(Serialize)]
pub struct CpuMoveResponse {
    /// Chosen cell index, or null when no legal move exists
    #[serde(rename = "move")]
    pub cell: Option<usize>,
}

/// Compute the optimal move for the CPU mark
pub async fn cpu_move(
    Json(req): Json<CpuMoveRequest>,
) -> Result<Json<CpuMoveResponse>, ApiError> {
    let board = Board::try_from(req.board.as_slice())?;
    let result = minimax(&board, req.cpu);

    tracing::debug!(cpu = %req.cpu, cell = ?result.cell, score = result.score, "cpu move");

    Ok(Json(CpuMoveResponse { cell: result.cell }))
}

/// Request body for `/check`
#[derive(Deserialize)]
pub struct CheckRequest {
    pub board: Vec<Cell>,
}

/// Response body for `/check`
#[derive(Serialize)]
pub struct CheckResponse {
    pub winner: Option<Mark>,
    pub tie: bool,
}

/// Report winner and tie state for a board
pub async fn check(Json(req): Json<CheckRequest>) -> Result<Json<CheckResponse>, ApiError> {
    let board = Board::try_from(req.board.as_slice())?;
    let verdict = status(&board);

    Ok(Json(CheckResponse {
        winner: verdict.winner,
        tie: verdict.tie,
    }))
}
