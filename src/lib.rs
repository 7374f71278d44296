//! Tic-Tac-Toe solved by adversarial game-tree search
//!
//! This crate provides:
//! - Tic-Tac-Toe board model, winning lines and game history
//! - Minimax search with alpha-beta pruning and depth-shaped utilities
//! - Baseline agents and a match runner for engine evaluation
//! - A command-line front end for play and analysis

pub mod agents;
pub mod arena;
pub mod cli;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{EngineConfig, MoveEvaluation, SearchEngine, SearchStats};
pub use tictactoe::{BoardState, Cell, GameOutcome, Player};
