//! Board state, move application, and win detection.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Mark {
    /// The X mark (moves first).
    X,
    /// The O mark (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

/// Supported board sizes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum BoardSize {
    /// Classic 3x3 board.
    #[strum(to_string = "3x3")]
    Three,
    /// Extended 5x5 board.
    #[strum(to_string = "5x5")]
    Five,
}

impl BoardSize {
    /// Cells per side.
    pub fn length(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Five => 5,
        }
    }

    /// Total number of cells.
    pub fn cell_count(self) -> usize {
        self.length() * self.length()
    }
}

/// N x N grid of cells with derived winner tracking.
///
/// The winner field is set only by [`Board::make_move`] when a placement
/// completes a line, and cleared by [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
    winner: Option<Mark>,
}

impl Board {
    /// Creates an empty board of the given size.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
            winner: None,
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the winning mark, if a move has completed a line.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Gets the cell at the given square index.
    pub fn get(&self, square: usize) -> Option<Cell> {
        self.cells.get(square).copied()
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, square: usize) -> bool {
        matches!(self.get(square), Some(Cell::Empty))
    }

    /// Reduces an index into the valid square range.
    pub fn wrap_index(&self, square: usize) -> usize {
        square % self.size.cell_count()
    }

    /// Applies `mark` to `square` if the cell is empty.
    ///
    /// The index is wrapped into range first. Returns whether the move was
    /// applied; a false return means no state changed. A move that completes
    /// a line sets the winner.
    #[instrument]
    pub fn make_move(&mut self, square: usize, mark: Mark) -> bool {
        let square = self.wrap_index(square);
        let n = self.size.length();
        let (row, col) = (square / n, square % n);
        if self.cells[square] != Cell::Empty {
            return false;
        }
        self.cells[square] = Cell::Occupied(mark);
        if self.check_winner(row, col, mark) {
            self.winner = Some(mark);
        }
        true
    }

    /// Tests the four lines through (`row`, `col`) for a full line of `mark`.
    ///
    /// Only meaningful immediately after placing `mark` at that cell; this is
    /// not a whole-board winner query.
    pub fn check_winner(&self, row: usize, col: usize, mark: Mark) -> bool {
        let n = self.size.length();
        let occupied = Cell::Occupied(mark);

        if (0..n).all(|c| self.cells[row * n + c] == occupied) {
            return true;
        }
        if (0..n).all(|r| self.cells[r * n + col] == occupied) {
            return true;
        }
        if row == col && (0..n).all(|i| self.cells[i * n + i] == occupied) {
            return true;
        }
        if row + col == n - 1 && (0..n).all(|i| self.cells[i * n + (n - 1 - i)] == occupied) {
            return true;
        }

        false
    }

    /// Returns all empty squares in increasing row-major order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(square, _)| square)
            .collect()
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Clears all cells and the winner, preserving the size.
    #[instrument]
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.winner = None;
    }

    /// Clears a cell and the winner. Search backtracking only.
    pub(crate) fn undo(&mut self, square: usize) {
        self.cells[square] = Cell::Empty;
        self.winner = None;
    }

    /// Renders the square indices in the board layout, for move prompts.
    pub fn index_grid(&self) -> String {
        let n = self.size.length();
        let width = (self.size.cell_count() - 1).to_string().len();
        let mut grid = String::new();
        for row in 0..n {
            grid.push('|');
            for col in 0..n {
                grid.push_str(&format!(" {:>width$} |", row * n + col));
            }
            if row < n - 1 {
                grid.push('\n');
            }
        }
        grid
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size.length();
        for row in 0..n {
            write!(f, "|")?;
            for col in 0..n {
                match self.cells[row * n + col] {
                    Cell::Empty => write!(f, "   |")?,
                    Cell::Occupied(mark) => write!(f, " {mark} |")?,
                }
            }
            if row < n - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
