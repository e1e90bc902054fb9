//! Recursive adversarial search over a mutable board.

use crate::board::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Terminal utility scaling.
///
/// The two scalings come from the console and fixed-3x3 engines this module
/// unifies; the choice is a per-engine configuration knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum Utility {
    /// Score a win as board cell count + 1.
    #[strum(to_string = "board")]
    BoardScaled,
    /// Score a win as remaining empty cells + 1.
    #[strum(to_string = "remaining")]
    Remaining,
}

impl Utility {
    fn value(self, board: &Board) -> i32 {
        match self {
            Utility::BoardScaled => board.size().cell_count() as i32 + 1,
            Utility::Remaining => board.available_moves().len() as i32 + 1,
        }
    }
}

/// A scored move produced by the search.
///
/// The square is meaningful only at the top-level call; nested calls return
/// scores for comparison, with the square reattached by each caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen square, if any candidate was evaluated.
    pub square: Option<usize>,
    /// Utility propagated from the subtree.
    pub score: i32,
}

/// Minimax engine for one mark.
#[derive(Debug, Clone, Copy)]
pub struct Minimax {
    mark: Mark,
    utility: Utility,
}

impl Minimax {
    /// Creates an engine maximizing for `mark`.
    pub fn new(mark: Mark, utility: Utility) -> Self {
        Self { mark, utility }
    }

    /// Searches for the best square for the configured mark.
    ///
    /// `depth` bounds the lookahead; `None` searches to terminal states.
    /// The board is mutated during the search and restored exactly before
    /// returning.
    #[instrument(skip(board))]
    pub fn search(&self, board: &mut Board, depth: Option<u32>) -> SearchResult {
        self.minimax(board, self.mark, depth)
    }

    fn minimax(&self, board: &mut Board, mark: Mark, depth: Option<u32>) -> SearchResult {
        if depth == Some(0) {
            return SearchResult {
                square: None,
                score: 0,
            };
        }

        // Only the previous mover can have completed a line.
        let opponent = mark.opponent();
        if board.winner() == Some(opponent) {
            let utility = self.utility.value(board);
            let score = if opponent == self.mark {
                utility
            } else {
                -utility
            };
            return SearchResult {
                square: None,
                score,
            };
        }
        if board.is_full() {
            return SearchResult {
                square: None,
                score: 0,
            };
        }

        let maximizing = mark == self.mark;
        let mut best = SearchResult {
            square: None,
            score: if maximizing { i32::MIN } else { i32::MAX },
        };

        for square in board.available_moves() {
            board.make_move(square, mark);
            let mut outcome = self.minimax(board, opponent, depth.map(|d| d - 1));
            board.undo(square);
            outcome.square = Some(square);

            let better = if maximizing {
                outcome.score > best.score
            } else {
                outcome.score < best.score
            };
            if better {
                best = outcome;
            }
        }

        best
    }
}
