//! Player trait and move-selection strategies.

use crate::board::{Board, Mark};
use crate::error::PlayError;
use crate::search::{Minimax, Utility};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Difficulty tier for AI opponents.
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
pub enum Difficulty {
    /// Tier 1: uniform-random moves.
    Easy,
    /// Tier 2: one-ply lookahead.
    Medium,
    /// Tier 3: full-depth search.
    Hard,
}

impl Difficulty {
    /// Builds the search-backed AI for this tier.
    ///
    /// The mapping follows the console game: easy ignores the search
    /// entirely, medium caps the search at depth 1, hard searches to
    /// terminal states.
    pub fn search_player(self, mark: Mark, utility: Utility) -> Box<dyn Player> {
        match self {
            Difficulty::Easy => Box::new(RandomPlayer::new(mark, "Easy AI")),
            Difficulty::Medium => Box::new(MinimaxPlayer::with_depth(mark, "Medium AI", 1, utility)),
            Difficulty::Hard => Box::new(MinimaxPlayer::new(mark, "Hard AI", utility)),
        }
    }
}

/// A source of moves for one mark.
pub trait Player {
    /// Returns the mark this player places.
    fn mark(&self) -> Mark;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Picks the next square for this player.
    ///
    /// The returned square is empty on the given board. Implementations do
    /// not mutate the board.
    fn get_move(&mut self, board: &Board) -> Result<usize, PlayError>;
}

/// Blocking line source for human input.
///
/// Drivers implement this over whatever feeds them (a shared stdin handle,
/// a test script); every buffered reader works out of the box.
pub trait LineSource {
    /// Reads the next line into `buf`, returning the byte count (0 = end).
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<R: BufRead> LineSource for R {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Human player reading moves from an input stream.
///
/// Prompts on `output`, parses an integer square, wraps it into range, and
/// re-prompts until the square is empty. The only error is the input stream
/// closing.
pub struct HumanPlayer<R, W> {
    mark: Mark,
    name: String,
    input: R,
    output: W,
}

impl<R: LineSource, W: Write> HumanPlayer<R, W> {
    /// Creates a human player over the given input and prompt sink.
    pub fn new(mark: Mark, name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            mark,
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: LineSource, W: Write> Player for HumanPlayer<R, W> {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn get_move(&mut self, board: &Board) -> Result<usize, PlayError> {
        let limit = board.size().cell_count();
        loop {
            write!(
                self.output,
                "{}'s turn. Input move (0-{}): ",
                self.mark,
                limit - 1
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PlayError::InputClosed);
            }

            if let Ok(square) = line.trim().parse::<usize>() {
                let square = board.wrap_index(square);
                if board.is_empty(square) {
                    return Ok(square);
                }
            }
            writeln!(self.output, "Invalid move. Try again.")?;
        }
    }
}

/// Tier 1 AI: uniform-random choice among available moves.
pub struct RandomPlayer {
    mark: Mark,
    name: String,
    rng: SmallRng,
}

impl RandomPlayer {
    /// Creates a random player with an entropy-seeded generator.
    pub fn new(mark: Mark, name: impl Into<String>) -> Self {
        Self {
            mark,
            name: name.into(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a random player with a fixed seed, for reproducible games.
    pub fn with_seed(mark: Mark, name: impl Into<String>, seed: u64) -> Self {
        Self {
            mark,
            name: name.into(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn get_move(&mut self, board: &Board) -> Result<usize, PlayError> {
        let square = board
            .available_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(PlayError::NoMovesAvailable)?;
        debug!(player = %self.name, square, "random move");
        Ok(square)
    }
}

/// Tier 2 AI: one-ply win/block lookahead.
///
/// Takes an immediate winning square if one exists, otherwise blocks the
/// opponent's immediate win, otherwise plays randomly.
pub struct HeuristicPlayer {
    mark: Mark,
    name: String,
    rng: SmallRng,
}

impl HeuristicPlayer {
    /// Creates a heuristic player with an entropy-seeded fallback generator.
    pub fn new(mark: Mark, name: impl Into<String>) -> Self {
        Self {
            mark,
            name: name.into(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a heuristic player with a fixed seed for the random fallback.
    pub fn with_seed(mark: Mark, name: impl Into<String>, seed: u64) -> Self {
        Self {
            mark,
            name: name.into(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Player for HeuristicPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn get_move(&mut self, board: &Board) -> Result<usize, PlayError> {
        // Win first, then block: probe own mark before the opponent's.
        for mark in [self.mark, self.mark.opponent()] {
            for square in board.available_moves() {
                let mut probe = board.clone();
                probe.make_move(square, mark);
                if probe.winner() == Some(mark) {
                    debug!(player = %self.name, square, %mark, "one-ply move");
                    return Ok(square);
                }
            }
        }

        board
            .available_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(PlayError::NoMovesAvailable)
    }
}

/// Tier 3 AI: minimax search, optionally depth-limited.
pub struct MinimaxPlayer {
    mark: Mark,
    name: String,
    depth: Option<u32>,
    utility: Utility,
}

impl MinimaxPlayer {
    /// Creates a full-depth minimax player.
    pub fn new(mark: Mark, name: impl Into<String>, utility: Utility) -> Self {
        Self {
            mark,
            name: name.into(),
            depth: None,
            utility,
        }
    }

    /// Creates a depth-limited minimax player.
    pub fn with_depth(mark: Mark, name: impl Into<String>, depth: u32, utility: Utility) -> Self {
        Self {
            mark,
            name: name.into(),
            depth: Some(depth),
            utility,
        }
    }
}

impl Player for MinimaxPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn get_move(&mut self, board: &Board) -> Result<usize, PlayError> {
        let mut scratch = board.clone();
        let result = Minimax::new(self.mark, self.utility).search(&mut scratch, self.depth);
        debug_assert_eq!(&scratch, board);
        debug!(
            player = %self.name,
            scoring = %self.utility,
            square = ?result.square,
            score = result.score,
            "search move"
        );
        result.square.ok_or(PlayError::NoMovesAvailable)
    }
}
