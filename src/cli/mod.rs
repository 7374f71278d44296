//! Command-line interface for the Tic-Tac-Toe search engine
//!
//! Commands for playing against the engine, inspecting positions, solving
//! the game and running engine matches.

pub mod commands;
pub mod config;
pub mod output;
