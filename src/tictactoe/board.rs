//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{game::GameOutcome, lines::LineAnalyzer};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game. X moves first and maximizes utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Whether this side seeks the highest utility
    pub fn is_maximizing(self) -> bool {
        self == Player::X
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// Complete board state including cells and whose turn it is
///
/// The fixed-size array means a constructed board always has exactly nine
/// cells; every fallible constructor checks the input shape first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Player,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub(crate) x: usize,
    pub(crate) o: usize,
}

impl BoardState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: Player::X,
        }
    }

    /// Build a board from a slice of cells.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoardLength`] unless the slice holds
    /// exactly nine cells.
    pub fn from_cells(cells: &[Cell], to_move: Player) -> Result<Self, crate::Error> {
        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|_| crate::Error::InvalidBoardLength {
                expected: 9,
                got: cells.len(),
                context: cells.iter().map(|c| c.to_char()).collect(),
            })?;
        Ok(BoardState { cells, to_move })
    }

    fn parse_cells(chars: &[char], context: &str) -> Result<[Cell; 9], crate::Error> {
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    pub(crate) fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    fn parse_player(player_str: &str, context: &str) -> Result<Player, crate::Error> {
        match player_str {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            _ => Err(crate::Error::InvalidPlayerString {
                player: player_str.to_string(),
                context: context.to_string(),
            }),
        }
    }

    /// Create a board from a string such as `"XX.OO...."` or `"XX.OO...._X"`.
    ///
    /// Whitespace is ignored. An optional `_X`/`_O` suffix names the side to
    /// move; otherwise it is inferred from the piece counts with X moving
    /// first.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The board part does not have exactly 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts are impossible for an X-first game
    /// - A provided suffix conflicts with the piece counts
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (board_part, suffix) = match cleaned.split_once('_') {
            Some((board, suffix)) => (board, Some(Self::parse_player(suffix, s)?)),
            None => (cleaned.as_str(), None),
        };
        let chars: Vec<char> = board_part.chars().collect();
        let cells = Self::parse_cells(&chars, s)?;

        let mut board = BoardState {
            cells,
            to_move: Player::X,
        };
        let count = board.count_pieces();
        let inferred = if count.x == count.o {
            Player::X
        } else if count.x == count.o + 1 {
            Player::O
        } else {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        };

        if let Some(turn) = suffix
            && turn != inferred
        {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "piece counts (X={}, O={}) are inconsistent with {turn} to move in '{s}'",
                    count.x, count.o
                ),
            });
        }

        board.to_move = inferred;
        Ok(board)
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions in increasing index order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Check whether every cell is occupied
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Make a move and return a new board state
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, pos: usize) -> Result<BoardState, crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }

        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        Ok(self.successor(pos))
    }

    /// Copy of the board with the side to move placed on `pos`.
    ///
    /// Callers pass positions taken from [`Self::empty_positions`].
    pub(crate) fn successor(&self, pos: usize) -> BoardState {
        debug_assert!(self.is_empty(pos), "successor on occupied cell {pos}");
        let mut next = *self;
        next.cells[pos] = self.to_move.to_cell();
        next.to_move = self.to_move.opponent();
        next
    }

    /// Get legal moves in this position (empty cells when game not terminal)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }

    /// Classify the position.
    ///
    /// Checks X lines, then O lines, then a full board. `None` means play
    /// continues.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.has_won(Player::X) {
            Some(GameOutcome::Win(Player::X))
        } else if self.has_won(Player::O) {
            Some(GameOutcome::Win(Player::O))
        } else if self.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.outcome() == Some(GameOutcome::Draw)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        match self.outcome() {
            Some(GameOutcome::Win(player)) => Some(player),
            _ => None,
        }
    }

    /// Positions where the side to move completes a line right now
    pub fn immediate_wins(&self) -> Vec<usize> {
        LineAnalyzer::winning_moves(&self.cells, self.to_move)
    }

    /// Positions where the opponent would complete a line on their next turn
    pub fn threats_against(&self) -> Vec<usize> {
        LineAnalyzer::winning_moves(&self.cells, self.to_move.opponent())
    }

    /// Get a compact string representation for use as a key
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.cells.iter().map(|&c| c.to_char()).collect::<String>(),
            self.to_move
        )
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let mark = |col: usize| match self.cells[row * 3 + col] {
                Cell::Empty => ' ',
                cell => cell.to_char(),
            };
            write!(f, " {} | {} | {} ", mark(0), mark(1), mark(2))?;
            if row < 2 {
                writeln!(f)?;
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}
