//! Adversarial game-tree search
//!
//! Minimax over the Tic-Tac-Toe game tree with alpha-beta pruning. X is the
//! maximizing side and O the minimizing side. Terminal positions score
//! `10 - depth` for an X win, `depth - 10` for an O win and `0` for a draw,
//! where `depth` counts plies from the root of the current search, so faster
//! wins and slower losses are preferred.
//!
//! Recursion works on copies of the 10-byte [`BoardState`], so no placement
//! ever has to be undone and sibling branches always see the parent board.

use serde::{Deserialize, Serialize};

use crate::tictactoe::{BoardState, GameOutcome, Player};

/// Utility of winning on the root's own ply
pub const WIN_UTILITY: i32 = 10;

/// Lower bound sentinel, below every reachable utility
pub const NEG_INFINITY: i32 = -(WIN_UTILITY + 1);

/// Upper bound sentinel, above every reachable utility
pub const POS_INFINITY: i32 = WIN_UTILITY + 1;

/// Depth-shaped utility of a finished position, from X's point of view
pub fn terminal_utility(outcome: GameOutcome, depth: u32) -> i32 {
    let depth = depth as i32;
    match outcome {
        GameOutcome::Win(Player::X) => WIN_UTILITY - depth,
        GameOutcome::Win(Player::O) => depth - WIN_UTILITY,
        GameOutcome::Draw => 0,
    }
}

/// Search behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Skip siblings once `alpha >= beta`. Disabling gives full-width
    /// minimax with the same root values.
    pub pruning: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { pruning: true }
    }
}

/// Counters accumulated across searches until [`SearchEngine::reset_stats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Calls to [`SearchEngine::evaluate`], terminal or not
    pub nodes: u64,
    /// Nodes whose remaining moves were skipped by a cutoff
    pub cutoffs: u64,
}

/// Root utility of a single legal move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEvaluation {
    pub position: usize,
    pub utility: i32,
}

/// Minimax engine with optional alpha-beta pruning
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: EngineConfig,
    stats: SearchStats,
}

impl SearchEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Engine that visits every node
    pub fn full_width() -> Self {
        Self::new(EngineConfig { pruning: false })
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Minimax value of `board` with the side to move playing next.
    ///
    /// `board.to_move` decides whether this node maximizes (X) or minimizes
    /// (O). Terminal positions are scored before any move is generated.
    /// Children are tried in increasing cell order; with pruning enabled the
    /// loop stops as soon as `alpha >= beta`.
    pub fn evaluate(&mut self, board: &BoardState, depth: u32, alpha: i32, beta: i32) -> i32 {
        self.stats.nodes += 1;

        if let Some(outcome) = board.outcome() {
            return terminal_utility(outcome, depth);
        }

        let maximizing = board.to_move.is_maximizing();
        let mut alpha = alpha;
        let mut beta = beta;
        let mut best = if maximizing {
            NEG_INFINITY
        } else {
            POS_INFINITY
        };

        for pos in board.empty_positions() {
            let child = board.successor(pos);
            let utility = self.evaluate(&child, depth + 1, alpha, beta);

            if maximizing {
                best = best.max(utility);
                alpha = alpha.max(best);
            } else {
                best = best.min(utility);
                beta = beta.min(best);
            }

            if self.config.pruning && alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }

    /// Utility of every legal move for the side to move, in cell order.
    ///
    /// Each child is searched from depth 0 with the full window, so the
    /// values are exact rather than bounds.
    pub fn analyze(&mut self, board: &BoardState) -> Vec<MoveEvaluation> {
        board
            .legal_moves()
            .into_iter()
            .map(|position| {
                let child = board.successor(position);
                MoveEvaluation {
                    position,
                    utility: self.evaluate(&child, 0, NEG_INFINITY, POS_INFINITY),
                }
            })
            .collect()
    }

    /// Optimal move for the side to move, or `None` when the game is over.
    ///
    /// X takes the strictly greatest utility and O the strictly least; ties
    /// go to the lowest cell index.
    pub fn select_best_move(&mut self, board: &BoardState) -> Option<usize> {
        let maximizing = board.to_move.is_maximizing();
        let mut best: Option<MoveEvaluation> = None;

        for candidate in self.analyze(board) {
            let improves = match best {
                None => true,
                Some(current) if maximizing => candidate.utility > current.utility,
                Some(current) => candidate.utility < current.utility,
            };
            if improves {
                best = Some(candidate);
            }
        }

        best.map(|mv| mv.position)
    }

    /// Value of `board` under optimal play, or the terminal utility if the
    /// game is already decided
    pub fn solve(&mut self, board: &BoardState) -> i32 {
        self.evaluate(board, 0, NEG_INFINITY, POS_INFINITY)
    }
}

/// Outcome implied by a root utility
pub fn outcome_of_utility(utility: i32) -> GameOutcome {
    match utility.signum() {
        1 => GameOutcome::Win(Player::X),
        -1 => GameOutcome::Win(Player::O),
        _ => GameOutcome::Draw,
    }
}
