//! Simulate command - Engine matches against baseline opponents

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::{
    agents::{Agent, DefensiveAgent, EngineAgent, RandomAgent},
    arena::{MatchConfig, MatchRunner},
    cli::{config::CommonConfig, output},
    search::EngineConfig,
    tictactoe::{GameOutcome, Player},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OpponentKind {
    /// Uniformly random legal moves
    Random,
    /// Wins or blocks when possible, otherwise random
    Defensive,
    /// Another copy of the search engine
    Engine,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Side {
    X,
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Play the engine against an opponent many times")]
pub struct SimulateArgs {
    /// Opponent to play against
    #[arg(long, short = 'o', value_enum, default_value = "random")]
    pub opponent: OpponentKind,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Side the engine plays (X always moves first)
    #[arg(long, value_enum, default_value = "x")]
    pub engine_player: Side,

    /// Search without alpha-beta pruning
    #[arg(long)]
    pub no_pruning: bool,

    /// Export results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

fn build_opponent(kind: OpponentKind, seed: Option<u64>) -> Box<dyn Agent> {
    match (kind, seed) {
        (OpponentKind::Random, Some(seed)) => {
            Box::new(RandomAgent::with_seed("Random".to_string(), seed))
        }
        (OpponentKind::Random, None) => Box::new(RandomAgent::new("Random".to_string())),
        (OpponentKind::Defensive, Some(seed)) => {
            Box::new(DefensiveAgent::with_seed("Defensive".to_string(), seed))
        }
        (OpponentKind::Defensive, None) => Box::new(DefensiveAgent::new("Defensive".to_string())),
        (OpponentKind::Engine, _) => Box::new(EngineAgent::new(
            "Engine".to_string(),
            EngineConfig::default(),
        )),
    }
}

pub fn execute(args: SimulateArgs, common: &CommonConfig) -> Result<()> {
    let config = MatchConfig {
        games: args.games,
        seed: args.seed,
        engine_player: args.engine_player.into(),
    };
    let mut engine = EngineAgent::new(
        "Alpha-beta".to_string(),
        EngineConfig {
            pruning: !args.no_pruning,
        },
    );
    let mut opponent = build_opponent(args.opponent, args.seed);

    output::print_section("Match configuration");
    output::print_kv("Opponent", opponent.name());
    output::print_kv("Engine plays", &config.engine_player.to_string());
    output::print_kv("Games", &config.games.to_string());
    if let Some(seed) = config.seed {
        output::print_kv("Seed", &seed.to_string());
    }

    let pb = output::create_match_progress(config.games as u64, common);
    let progress = pb.clone();
    let engine_player = config.engine_player;
    let mut runner = MatchRunner::new(config).with_callback(move |_, outcome| {
        progress.set_message(match outcome.score_for(engine_player) {
            1 => "win",
            0 => "draw",
            _ => "loss",
        });
        progress.inc(1);
        if let GameOutcome::Win(winner) = outcome
            && winner != engine_player
        {
            progress.println("engine lost a game");
        }
    });

    let summary = runner.run(&mut engine, opponent.as_mut())?;
    pb.finish_and_clear();

    output::print_section("Match results");
    output::print_kv("Games", &summary.games.to_string());
    output::print_kv(
        "Wins",
        &format!("{} ({})", summary.wins, output::format_percent(summary.win_rate())),
    );
    output::print_kv(
        "Draws",
        &format!("{} ({})", summary.draws, output::format_percent(summary.draw_rate())),
    );
    output::print_kv(
        "Losses",
        &format!(
            "{} ({})",
            summary.losses,
            output::format_percent(summary.loss_rate())
        ),
    );

    if common.verbose {
        let stats = engine.stats();
        output::print_subsection("Search statistics");
        output::print_kv("Nodes", &output::format_number(stats.nodes));
        output::print_kv("Cutoffs", &output::format_number(stats.cutoffs));
    }

    if let Some(path) = &args.export {
        summary.write_json(runner.config(), opponent.name(), path)?;
        println!("\nResults exported to: {}", path.display());
    }

    Ok(())
}
