//! ttt - Tic-Tac-Toe against a minimax engine with alpha-beta pruning
//!
//! - Play interactively against the engine
//! - Inspect the utility of every move in a position
//! - Solve positions and compare pruned and full-width search
//! - Run engine matches against baseline opponents

use anyhow::Result;
use clap::{Parser, Subcommand};
use ttt_search::cli::{
    commands::{analyze, play, simulate, solve},
    config::GlobalArgs,
};

#[derive(Parser)]
#[command(name = "ttt")]
#[command(version, about = "Tic-Tac-Toe solved by minimax with alpha-beta pruning", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine
    Play(play::PlayArgs),

    /// Show the utility of every legal move in a position
    Analyze(analyze::AnalyzeArgs),

    /// Solve a position with and without pruning
    Solve(solve::SolveArgs),

    /// Run engine matches against baseline opponents
    Simulate(simulate::SimulateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let common = cli.global.config();

    match cli.command {
        Commands::Play(args) => play::execute(args, &common),
        Commands::Analyze(args) => analyze::execute(args, &common),
        Commands::Solve(args) => solve::execute(args, &common),
        Commands::Simulate(args) => simulate::execute(args, &common),
    }
}
