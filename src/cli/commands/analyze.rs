//! Analyze command - Minimax values of every move in a position

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{config::CommonConfig, output},
    search::{EngineConfig, MoveEvaluation, SearchEngine, outcome_of_utility},
    tictactoe::{BoardState, GameOutcome},
};

#[derive(Parser, Debug)]
#[command(about = "Show the utility of every legal move in a position")]
pub struct AnalyzeArgs {
    /// Board such as "XX.OO...." (side to move inferred) or "XX.OO...._X"
    #[arg(long, short = 's')]
    pub state: String,

    /// Search without alpha-beta pruning
    #[arg(long)]
    pub no_pruning: bool,
}

pub fn execute(args: AnalyzeArgs, common: &CommonConfig) -> Result<()> {
    let state = BoardState::from_string(&args.state)?;
    let mut engine = SearchEngine::new(EngineConfig {
        pruning: !args.no_pruning,
    });

    output::print_section("Position");
    println!("{state}");
    output::print_kv("To move", &state.to_move.to_string());

    if let Some(outcome) = state.outcome() {
        output::print_kv("Result", &describe(outcome));
        return Ok(());
    }

    let evaluations = engine.analyze(&state);
    output::print_subsection("Move utilities (X perspective)");
    for MoveEvaluation { position, utility } in &evaluations {
        println!(
            "  cell {} (row {}, col {}): {:>3}  {}",
            position + 1,
            position / 3,
            position % 3,
            utility,
            describe(outcome_of_utility(*utility))
        );
    }

    let stats_after_analysis = engine.stats();
    if let Some(best) = engine.select_best_move(&state) {
        output::print_kv("Best move", &format!("cell {}", best + 1));
    }

    if common.verbose {
        output::print_subsection("Search statistics");
        output::print_kv("Nodes", &output::format_number(stats_after_analysis.nodes));
        output::print_kv(
            "Cutoffs",
            &output::format_number(stats_after_analysis.cutoffs),
        );
    }

    Ok(())
}

fn describe(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Win(player) => format!("{player} wins"),
        GameOutcome::Draw => "draw".to_string(),
    }
}
