//! Analyze command - optimal move for a single position

use anyhow::Result;
use clap::Args;

use tictac_core::{minimax, status, Board, Mark};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Board as 9 symbols, row-major: X, O, and '.' or '_' for empty
    pub board: String,

    /// Mark to move
    #[arg(long, default_value = "X", value_parser = parse_mark)]
    pub mark: Mark,
}

fn parse_mark(s: &str) -> Result<Mark, String> {
    match s {
        "X" | "x" => Ok(Mark::X),
        "O" | "o" => Ok(Mark::O),
        other => Err(format!("mark must be X or O, got {:?}", other)),
    }
}

/// Run analyze command
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let board: Board = args.board.parse()?;

    print!("{}", board);

    let verdict = status(&board);
    if let Some(winner) = verdict.winner {
        println!("winner: {}", winner);
        return Ok(());
    }
    if verdict.tie {
        println!("tie");
        return Ok(());
    }

    let result = minimax(&board, args.mark);
    match result.cell {
        Some(cell) => println!(
            "best move for {}: cell {} (score {})",
            args.mark, cell, result.score
        ),
        None => println!("no legal moves"),
    }

    Ok(())
}
