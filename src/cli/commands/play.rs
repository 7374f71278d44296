//! Play command - Human versus engine at the terminal

use std::io::{self, BufRead, Write};

use anyhow::{Result, anyhow, bail};
use clap::Parser;

use crate::{
    cli::{config::CommonConfig, output},
    search::{EngineConfig, SearchEngine},
    tictactoe::{BoardState, Game, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play a game against the engine")]
pub struct PlayArgs {
    /// Play X and move first (the engine moves first by default)
    #[arg(long)]
    pub human_first: bool,

    /// Search without alpha-beta pruning
    #[arg(long)]
    pub no_pruning: bool,
}

pub fn execute(args: PlayArgs, common: &CommonConfig) -> Result<()> {
    let human = if args.human_first {
        Player::X
    } else {
        Player::O
    };
    let mut engine = SearchEngine::new(EngineConfig {
        pruning: !args.no_pruning,
    });

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut stdin.lock(), &mut stdout.lock(), human, &mut engine)?;

    if common.verbose {
        let stats = engine.stats();
        output::print_subsection("Search statistics");
        output::print_kv("Nodes", &output::format_number(stats.nodes));
        output::print_kv("Cutoffs", &output::format_number(stats.cutoffs));
    }

    Ok(())
}

/// Run one game, reading the human's moves from `input` and writing the
/// board and prompts to `out`.
///
/// # Errors
///
/// Fails if `input` ends before the game is decided or `out` cannot be
/// written.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    human: Player,
    engine: &mut SearchEngine,
) -> Result<Game> {
    let mut game = Game::new();
    writeln!(
        out,
        "Tic-Tac-Toe: engine ({}) vs. human ({})",
        human.opponent(),
        human
    )?;
    writeln!(out, "{}\n", game.current_state())?;

    while game.status().is_none() {
        let state = game.current_state();
        if state.to_move == human {
            let position = read_human_move(input, out, &state)?;
            game.play(position)?;
        } else {
            let position = engine
                .select_best_move(&state)
                .ok_or_else(|| anyhow!("engine found no legal move on an unfinished board"))?;
            game.play(position)?;
            writeln!(out, "Engine chose position: {}", position + 1)?;
        }
        writeln!(out, "{}\n", game.current_state())?;
    }

    let message = match game.status() {
        Some(GameOutcome::Win(winner)) if winner == human => "You win!",
        Some(GameOutcome::Win(_)) => "Engine wins!",
        _ => "It's a draw!",
    };
    writeln!(out, "{message}")?;

    Ok(game)
}

fn read_human_move<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    state: &BoardState,
) -> Result<usize> {
    loop {
        write!(out, "Enter your move (1-9): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before the game finished");
        }

        match parse_human_move(&line, state) {
            Ok(position) => return Ok(position),
            Err(err) => writeln!(out, "{err}. Try again.")?,
        }
    }
}

/// Turn a 1-9 cell number typed by the player into a board index.
///
/// # Errors
///
/// Rejects non-numeric or out-of-range input and occupied cells.
pub fn parse_human_move(input: &str, state: &BoardState) -> crate::Result<usize> {
    let trimmed = input.trim();
    let cell: usize = trimmed
        .parse()
        .ok()
        .filter(|n| (1..=9).contains(n))
        .ok_or_else(|| crate::Error::InvalidInput {
            input: trimmed.to_string(),
        })?;

    let position = cell - 1;
    if !state.is_empty(position) {
        return Err(crate::Error::CellOccupied { cell });
    }
    Ok(position)
}
