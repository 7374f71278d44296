//! Board state validation logic

use std::collections::HashSet;

use super::board::{BoardState, Player};
use super::lines::LineAnalyzer;

impl BoardState {
    /// Check if the board can arise from the empty board by alternating
    /// legal moves with X first
    pub fn is_valid(&self) -> bool {
        let count = self.count_pieces();

        let expected_turn = if count.x == count.o {
            Player::X
        } else if count.x == count.o + 1 {
            Player::O
        } else {
            return false;
        };
        if self.to_move != expected_turn {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false;
        }

        // The winner must have made the last move
        if x_wins && count.x != count.o + 1 {
            return false;
        }
        if o_wins && count.x != count.o {
            return false;
        }

        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// Check if all completed lines for a player share at least one cell,
    /// which is required for them to be finished by a single move
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines = LineAnalyzer::completed_lines(&self.cells, player);
        if lines.len() < 2 {
            return true;
        }

        (0..9).any(|pos| lines.iter().all(|line| line.contains(&pos)))
    }

    /// Every board reachable from the empty board, in discovery order.
    ///
    /// Play stops at terminal positions, so no board has moves after a win.
    pub fn reachable_states() -> Vec<BoardState> {
        let mut states = Vec::new();
        let mut seen = HashSet::new();
        let mut stack = vec![BoardState::new()];

        while let Some(state) = stack.pop() {
            if !seen.insert(state) {
                continue;
            }
            states.push(state);

            for pos in state.legal_moves() {
                stack.push(state.successor(pos));
            }
        }

        states
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Cell;

    #[test]
    fn reachable_state_count() {
        // 5478 distinct positions are reachable in X-first tic-tac-toe
        let states = BoardState::reachable_states();
        assert_eq!(states.len(), 5478);
        assert!(states.iter().all(BoardState::is_valid));
    }

    #[test]
    fn double_line_through_shared_cell_is_valid() {
        // X X X
        // X O O
        // X O O
        let state = BoardState::from_string("XXXXOOXOO").unwrap();
        assert!(state.winning_lines_share_cell(Player::X));
    }

    #[test]
    fn parallel_lines_are_invalid() {
        // X X X
        // O O .
        // X X X
        let mut cells = [Cell::Empty; 9];
        for pos in [0, 1, 2, 6, 7, 8] {
            cells[pos] = Cell::X;
        }
        cells[3] = Cell::O;
        cells[4] = Cell::O;
        let state = BoardState {
            cells,
            to_move: Player::O,
        };
        assert!(!state.is_valid());
    }

    #[test]
    fn loser_cannot_have_moved_last() {
        // X won but O has as many pieces, so O moved after the win
        let state = BoardState {
            cells: BoardState::from_string("XXXOO.O..").map(|b| b.cells).unwrap(),
            to_move: Player::X,
        };
        assert!(!state.is_valid());
    }

    #[test]
    fn wrong_side_to_move_is_invalid() {
        let mut state = BoardState::from_string("X........").unwrap();
        state.to_move = Player::X;
        assert!(!state.is_valid());
    }
}
