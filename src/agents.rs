//! Move choosers that can sit on either side of a game
//!
//! - [`EngineAgent`]: minimax with alpha-beta pruning
//! - [`RandomAgent`]: uniformly random legal move
//! - [`DefensiveAgent`]: wins or blocks when it can, otherwise random

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Result,
    search::{EngineConfig, SearchEngine, SearchStats},
    tictactoe::BoardState,
};

/// Anything that can pick a move for the side to move
pub trait Agent {
    /// Select a cell (0-8) for `state.to_move`.
    ///
    /// # Errors
    ///
    /// Returns an error if the state has no legal move.
    fn select_move(&mut self, state: &BoardState) -> Result<usize>;

    /// Display name used in summaries
    fn name(&self) -> &str;
}

/// Agent backed by the game-tree search
pub struct EngineAgent {
    name: String,
    engine: SearchEngine,
}

impl EngineAgent {
    pub fn new(name: String, config: EngineConfig) -> Self {
        Self {
            name,
            engine: SearchEngine::new(config),
        }
    }

    /// Counters from every search this agent has run
    pub fn stats(&self) -> SearchStats {
        self.engine.stats()
    }
}

impl Agent for EngineAgent {
    fn select_move(&mut self, state: &BoardState) -> Result<usize> {
        self.engine
            .select_best_move(state)
            .ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Random policy (baseline)
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(name: String) -> Self {
        Self::with_seed(name, random())
    }

    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, state: &BoardState) -> Result<usize> {
        random_legal_move(&mut self.rng, state)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Takes an immediate win, else blocks the opponent's, else plays randomly
pub struct DefensiveAgent {
    name: String,
    rng: StdRng,
}

impl DefensiveAgent {
    pub fn new(name: String) -> Self {
        Self::with_seed(name, random())
    }

    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for DefensiveAgent {
    fn select_move(&mut self, state: &BoardState) -> Result<usize> {
        if state.is_terminal() {
            return Err(crate::Error::NoValidMoves);
        }
        if let Some(&win) = state.immediate_wins().first() {
            return Ok(win);
        }
        if let Some(&block) = state.threats_against().first() {
            return Ok(block);
        }
        random_legal_move(&mut self.rng, state)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn random_legal_move(rng: &mut StdRng, state: &BoardState) -> Result<usize> {
    let moves = state.legal_moves();
    if moves.is_empty() {
        return Err(crate::Error::NoValidMoves);
    }
    Ok(moves[rng.random_range(0..moves.len())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_agent_reports_no_moves_on_finished_board() {
        let mut agent = EngineAgent::new("Engine".to_string(), EngineConfig::default());
        let finished = BoardState::from_string("XXXOO....").unwrap();
        assert!(matches!(
            agent.select_move(&finished),
            Err(crate::Error::NoValidMoves)
        ));
    }

    #[test]
    fn random_agent_is_reproducible_and_legal() {
        let state = BoardState::from_string("X...O....").unwrap();
        let mut a = RandomAgent::with_seed("A".to_string(), 7);
        let mut b = RandomAgent::with_seed("B".to_string(), 7);

        for _ in 0..20 {
            let mv = a.select_move(&state).unwrap();
            assert_eq!(mv, b.select_move(&state).unwrap());
            assert!(state.is_empty(mv));
        }
    }

    #[test]
    fn defensive_agent_prefers_win_over_block() {
        let mut agent = DefensiveAgent::with_seed("Defensive".to_string(), 1);
        let state = BoardState::from_string("XX.OO....").unwrap();
        assert_eq!(agent.select_move(&state).unwrap(), 2);
    }

    #[test]
    fn defensive_agent_blocks() {
        let mut agent = DefensiveAgent::with_seed("Defensive".to_string(), 1);
        let state = BoardState::from_string("X..OO...X").unwrap();
        assert_eq!(agent.select_move(&state).unwrap(), 5);
    }
}
