//! Complete games between two agents and match tallies

use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    agents::Agent,
    tictactoe::{Game, GameOutcome, Player},
};

/// Match parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: usize,
    /// Seed handed to the opponent, if it is random
    pub seed: Option<u64>,
    /// Side controlled by the engine
    pub engine_player: Player,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
            engine_player: Player::X,
        }
    }
}

/// Play one game to completion, X moving first.
///
/// # Errors
///
/// Returns [`crate::Error::IllegalAgentMove`] if an agent picks an occupied
/// or out-of-range cell, and propagates agent failures.
pub fn play_game(x: &mut dyn Agent, o: &mut dyn Agent) -> Result<Game> {
    let mut game = Game::new();

    while game.status().is_none() {
        let state = game.current_state();
        let agent: &mut dyn Agent = match state.to_move {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };

        let position = agent.select_move(&state)?;
        game.play(position)
            .map_err(|_| crate::Error::IllegalAgentMove {
                agent: agent.name().to_string(),
                position,
            })?;
    }

    Ok(game)
}

/// Results from the engine's point of view
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl MatchSummary {
    pub fn record(&mut self, outcome: GameOutcome, engine_player: Player) {
        self.games += 1;
        match outcome.score_for(engine_player) {
            1 => self.wins += 1,
            0 => self.draws += 1,
            _ => self.losses += 1,
        }
    }

    fn rate(&self, count: usize) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            count as f64 / self.games as f64
        }
    }

    pub fn win_rate(&self) -> f64 {
        self.rate(self.wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    pub fn loss_rate(&self) -> f64 {
        self.rate(self.losses)
    }

    /// Write the configuration and results as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be created or written.
    pub fn write_json(&self, config: &MatchConfig, opponent: &str, path: &Path) -> Result<()> {
        #[derive(Serialize)]
        struct MatchExport<'a> {
            config: &'a MatchConfig,
            opponent: &'a str,
            summary: &'a MatchSummary,
            win_rate: f64,
            draw_rate: f64,
            loss_rate: f64,
        }

        let export = MatchExport {
            config,
            opponent,
            summary: self,
            win_rate: self.win_rate(),
            draw_rate: self.draw_rate(),
            loss_rate: self.loss_rate(),
        };

        let file = File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, &export)?;
        Ok(())
    }
}

/// Plays a series of games between the engine and an opponent
pub struct MatchRunner {
    config: MatchConfig,
    on_game_end: Option<Box<dyn FnMut(usize, GameOutcome)>>,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            on_game_end: None,
        }
    }

    /// Callback invoked with the game index and outcome after every game
    pub fn with_callback(mut self, callback: impl FnMut(usize, GameOutcome) + 'static) -> Self {
        self.on_game_end = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play every game of the match.
    ///
    /// # Errors
    ///
    /// Stops at the first game that fails.
    pub fn run(&mut self, engine: &mut dyn Agent, opponent: &mut dyn Agent) -> Result<MatchSummary> {
        let mut summary = MatchSummary::default();

        for game_num in 0..self.config.games {
            let game = match self.config.engine_player {
                Player::X => play_game(engine, opponent)?,
                Player::O => play_game(opponent, engine)?,
            };
            let outcome = game.status().ok_or(crate::Error::NoValidMoves)?;
            summary.record(outcome, self.config.engine_player);

            if let Some(callback) = self.on_game_end.as_mut() {
                callback(game_num, outcome);
            }
        }

        Ok(summary)
    }
}
