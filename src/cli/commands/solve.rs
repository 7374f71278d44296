//! Solve command - Game value with and without pruning

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{config::CommonConfig, output},
    search::{SearchEngine, SearchStats, outcome_of_utility},
    tictactoe::BoardState,
};

#[derive(Parser, Debug)]
#[command(about = "Solve a position and compare pruned and full-width search")]
pub struct SolveArgs {
    /// Position to solve (defaults to the empty board)
    #[arg(long, short = 's')]
    pub state: Option<String>,
}

/// Both searches over one position
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SolveReport {
    pub value: i32,
    pub pruned: SearchStats,
    pub full_width: SearchStats,
}

impl SolveReport {
    /// Share of full-width nodes that pruning skipped
    pub fn node_reduction(&self) -> f64 {
        if self.full_width.nodes == 0 {
            return 0.0;
        }
        1.0 - self.pruned.nodes as f64 / self.full_width.nodes as f64
    }
}

/// Solve `state` twice and check both searches agree.
///
/// # Errors
///
/// Fails if the pruned and full-width values differ.
pub fn solve(state: &BoardState) -> Result<SolveReport> {
    let mut pruned = SearchEngine::default();
    let mut full = SearchEngine::full_width();

    let value = pruned.solve(state);
    let reference = full.solve(state);
    anyhow::ensure!(
        value == reference,
        "pruned value {value} differs from full-width value {reference}"
    );

    Ok(SolveReport {
        value,
        pruned: pruned.stats(),
        full_width: full.stats(),
    })
}

pub fn execute(args: SolveArgs, common: &CommonConfig) -> Result<()> {
    let state = match &args.state {
        Some(s) => BoardState::from_string(s)?,
        None => BoardState::new(),
    };

    let spinner = output::create_spinner("Searching game tree...", common);
    let report = solve(&state)?;
    spinner.finish_and_clear();

    output::print_section("Solution");
    println!("{state}");
    output::print_kv("Value", &report.value.to_string());
    output::print_kv(
        "Optimal result",
        &format!("{:?}", outcome_of_utility(report.value)),
    );

    output::print_subsection("Nodes visited");
    output::print_kv("Alpha-beta", &output::format_number(report.pruned.nodes));
    output::print_kv("Full width", &output::format_number(report.full_width.nodes));
    output::print_kv("Skipped", &output::format_percent(report.node_reduction()));
    if common.verbose {
        output::print_kv("Cutoffs", &output::format_number(report.pruned.cutoffs));
    }

    Ok(())
}
