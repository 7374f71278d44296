//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{BoardState, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome as seen by `player`: 1 for a win, 0 for a draw, -1 for a loss
    pub fn score_for(self, player: Player) -> i32 {
        match self {
            GameOutcome::Win(winner) if winner == player => 1,
            GameOutcome::Win(_) => -1,
            GameOutcome::Draw => 0,
        }
    }
}

/// A game in progress or finished, with its move history.
///
/// Once an outcome is recorded the game accepts no further moves.
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
    #[serde(skip)]
    state: BoardState,
}

impl Game {
    /// Start a game on the empty board, X to move
    pub fn new() -> Self {
        Game {
            moves: Vec::new(),
            outcome: None,
            state: BoardState::new(),
        }
    }

    /// Play the side to move on `position`
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has an outcome, and
    /// the board's move errors for occupied or out-of-range cells.
    pub fn play(&mut self, position: usize) -> Result<Option<GameOutcome>, crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let next = self.state.make_move(position)?;
        self.moves.push(Move {
            position,
            player: self.state.to_move,
        });
        self.state = next;
        self.outcome = next.outcome();

        Ok(self.outcome)
    }

    /// Board after every recorded move
    pub fn current_state(&self) -> BoardState {
        self.state
    }

    /// Outcome if the game is finished, `None` while in progress
    pub fn status(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Rebuild the board by replaying the history from the empty board.
    ///
    /// # Errors
    ///
    /// Returns error if any recorded move is illegal, which indicates the
    /// history was edited after it was recorded.
    pub fn replay(&self) -> Result<BoardState, crate::Error> {
        let mut state = BoardState::new();
        for m in &self.moves {
            state = state.make_move(m.position)?;
        }
        Ok(state)
    }

    /// Move positions in the order they were played
    pub fn positions(&self) -> Vec<usize> {
        self.moves.iter().map(|m| m.position).collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
