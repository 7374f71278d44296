//! Engine matches against baseline opponents

use std::{cell::Cell, rc::Rc};

use ttt_search::{
    EngineConfig, Error, Result,
    agents::{Agent, DefensiveAgent, EngineAgent, RandomAgent},
    arena::{MatchConfig, MatchRunner, play_game},
    tictactoe::{BoardState, GameOutcome, Player},
};

fn engine() -> EngineAgent {
    EngineAgent::new("Engine".to_string(), EngineConfig::default())
}

/// Always answers with the same cell, legal or not
struct StubbornAgent;

impl Agent for StubbornAgent {
    fn select_move(&mut self, _state: &BoardState) -> Result<usize> {
        Ok(4)
    }

    fn name(&self) -> &str {
        "Stubborn"
    }
}

#[test]
fn engine_never_loses_to_random_as_x() {
    let config = MatchConfig {
        games: 40,
        seed: Some(11),
        engine_player: Player::X,
    };
    let mut opponent = RandomAgent::with_seed("Random".to_string(), 11);
    let summary = MatchRunner::new(config)
        .run(&mut engine(), &mut opponent)
        .unwrap();

    assert_eq!(summary.games, 40);
    assert_eq!(summary.losses, 0);
    assert!(summary.wins > 0, "random play should concede some games");
}

#[test]
fn engine_never_loses_to_random_as_o() {
    let config = MatchConfig {
        games: 40,
        seed: Some(5),
        engine_player: Player::O,
    };
    let mut opponent = RandomAgent::with_seed("Random".to_string(), 5);
    let summary = MatchRunner::new(config)
        .run(&mut engine(), &mut opponent)
        .unwrap();

    assert_eq!(summary.losses, 0);
    assert_eq!(summary.wins + summary.draws, 40);
}

#[test]
fn engine_never_loses_to_defensive() {
    for engine_player in [Player::X, Player::O] {
        let config = MatchConfig {
            games: 20,
            seed: Some(3),
            engine_player,
        };
        let mut opponent = DefensiveAgent::with_seed("Defensive".to_string(), 3);
        let summary = MatchRunner::new(config)
            .run(&mut engine(), &mut opponent)
            .unwrap();
        assert_eq!(summary.losses, 0, "engine as {engine_player}");
    }
}

#[test]
fn engine_mirror_match_is_drawn() {
    let mut x = engine();
    let mut o = engine();
    let game = play_game(&mut x, &mut o).unwrap();
    assert_eq!(game.status(), Some(GameOutcome::Draw));
    assert_eq!(game.moves.len(), 9);
}

#[test]
fn pruned_and_full_width_engines_play_identically() {
    let mut pruned_x = engine();
    let mut full_o = EngineAgent::new("Full".to_string(), EngineConfig { pruning: false });
    let mixed = play_game(&mut pruned_x, &mut full_o).unwrap();

    let mut x = engine();
    let mut o = engine();
    let reference = play_game(&mut x, &mut o).unwrap();

    assert_eq!(mixed.positions(), reference.positions());
    assert!(full_o.stats().nodes > 0);
}

#[test]
fn illegal_agent_move_is_reported() {
    let mut x = StubbornAgent;
    let mut o = StubbornAgent;
    let err = play_game(&mut x, &mut o).unwrap_err();
    assert!(matches!(
        err,
        Error::IllegalAgentMove { ref agent, position: 4 } if agent == "Stubborn"
    ));
}

#[test]
fn callback_sees_every_game() {
    let seen = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&seen);
    let config = MatchConfig {
        games: 7,
        seed: Some(1),
        engine_player: Player::X,
    };
    let mut opponent = RandomAgent::with_seed("Random".to_string(), 1);
    let mut runner = MatchRunner::new(config).with_callback(move |index, _| {
        assert_eq!(index, counter.get());
        counter.set(index + 1);
    });
    runner.run(&mut engine(), &mut opponent).unwrap();
    assert_eq!(seen.get(), 7);
}

#[test]
fn summary_exports_to_json() {
    let config = MatchConfig {
        games: 5,
        seed: Some(9),
        engine_player: Player::X,
    };
    let mut opponent = RandomAgent::with_seed("Random".to_string(), 9);
    let summary = MatchRunner::new(config)
        .run(&mut engine(), &mut opponent)
        .unwrap();

    let file = tempfile::NamedTempFile::new().unwrap();
    summary.write_json(&config, "Random", file.path()).unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["opponent"], "Random");
    assert_eq!(json["config"]["games"], 5);
    assert_eq!(json["config"]["engine_player"], "X");
    assert_eq!(json["summary"]["losses"], 0);
    assert_eq!(json["summary"]["games"], 5);
}
