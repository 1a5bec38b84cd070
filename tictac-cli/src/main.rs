//! Tic-tac-toe CLI
//!
//! Commands:
//! - serve: start the web server
//! - analyze: print the optimal move for a position

mod analyze;
mod serve;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tictac")]
#[command(about = "Web-served tic-tac-toe with exhaustive minimax")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),
    /// Print the optimal move for a position
    Analyze(analyze::AnalyzeArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::run(args),
        Commands::Analyze(args) => analyze::run(args),
    }
}
