//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player holds all three cells of any line
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Lines fully held by the player
    pub fn completed_lines(cells: &[Cell; 9], player: Player) -> Vec<[usize; 3]> {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| cells[idx] == target))
            .copied()
            .collect()
    }

    /// Positions that would immediately complete a line for the player,
    /// ascending and without duplicates
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<usize> {
        let mut moves: Vec<usize> = WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, player, line))
            .collect();
        moves.sort_unstable();
        moves.dedup();
        moves
    }

    /// Check if a player has two in a line with the third cell empty
    pub fn has_immediate_win(cells: &[Cell; 9], player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::winning_move_in_line(cells, player, line).is_some())
    }

    fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None, // Opponent piece in line
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_from(marks: &[(usize, Cell)]) -> [Cell; 9] {
        let mut cells = [Cell::Empty; 9];
        for &(pos, cell) in marks {
            cells[pos] = cell;
        }
        cells
    }

    #[test]
    fn every_line_is_a_win_for_its_owner() {
        for line in WINNING_LINES {
            let cells = cells_from(&[(line[0], Cell::O), (line[1], Cell::O), (line[2], Cell::O)]);
            assert!(LineAnalyzer::has_won(&cells, Player::O), "line {line:?}");
            assert!(!LineAnalyzer::has_won(&cells, Player::X), "line {line:?}");
        }
    }

    #[test]
    fn lines_cover_rows_columns_and_diagonals() {
        let mut usage = [0usize; 9];
        for line in WINNING_LINES {
            for idx in line {
                usage[idx] += 1;
            }
        }
        // Centre sits on 4 lines, corners on 3, edges on 2
        assert_eq!(usage, [3, 2, 3, 2, 4, 2, 3, 2, 3]);
    }

    #[test]
    fn winning_moves_gap_in_row() {
        // X.X
        // ...
        // ...
        let cells = cells_from(&[(0, Cell::X), (2, Cell::X)]);
        assert_eq!(LineAnalyzer::winning_moves(&cells, Player::X), vec![1]);
    }

    #[test]
    fn winning_moves_are_sorted_and_unique() {
        // XX.
        // X..
        // ...
        let cells = cells_from(&[(0, Cell::X), (1, Cell::X), (3, Cell::X)]);
        assert_eq!(LineAnalyzer::winning_moves(&cells, Player::X), vec![2, 6]);
    }

    #[test]
    fn blocked_line_is_not_a_threat() {
        let cells = cells_from(&[(0, Cell::X), (1, Cell::X), (2, Cell::O)]);
        assert!(!LineAnalyzer::has_immediate_win(&cells, Player::X));
        assert!(LineAnalyzer::winning_moves(&cells, Player::X).is_empty());
    }

    #[test]
    fn completed_lines_reports_double_line() {
        // XXX
        // X..
        // X..
        let cells = cells_from(&[
            (0, Cell::X),
            (1, Cell::X),
            (2, Cell::X),
            (3, Cell::X),
            (6, Cell::X),
        ]);
        let lines = LineAnalyzer::completed_lines(&cells, Player::X);
        assert_eq!(lines, vec![[0, 1, 2], [0, 3, 6]]);
    }
}
