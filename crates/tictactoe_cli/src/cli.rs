//! Command-line interface definitions.

use clap::{Parser, ValueEnum};
use tictactoe_core::{BoardSize, Difficulty, Utility};

/// Console tic-tac-toe.
#[derive(Debug, Parser)]
#[command(name = "tictactoe", version, about = "Play tic-tac-toe in the terminal")]
pub struct Cli {
    /// Board size.
    #[arg(long, value_enum, default_value_t = SizeArg::Three)]
    pub size: SizeArg,

    /// Opponent seated as O.
    #[arg(long, value_enum, default_value_t = OpponentArg::Minimax)]
    pub opponent: OpponentArg,

    /// Difficulty tier for the minimax opponent.
    #[arg(long, value_enum, default_value_t = DifficultyArg::Hard)]
    pub difficulty: DifficultyArg,

    /// Terminal score scaling used by the search engine.
    #[arg(long, value_enum, default_value_t = ScoringArg::Board)]
    pub scoring: ScoringArg,

    /// Seed for AI randomness, for reproducible games.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Board size choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SizeArg {
    /// 3x3 board.
    #[value(name = "3")]
    Three,
    /// 5x5 board.
    #[value(name = "5")]
    Five,
}

impl From<SizeArg> for BoardSize {
    fn from(size: SizeArg) -> Self {
        match size {
            SizeArg::Three => BoardSize::Three,
            SizeArg::Five => BoardSize::Five,
        }
    }
}

/// Who plays the O seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OpponentArg {
    /// A second human at the same terminal.
    Human,
    /// Tier 1: random moves.
    Random,
    /// Tier 2: one-ply win/block lookahead.
    Heuristic,
    /// Search-backed AI at the selected difficulty.
    Minimax,
}

/// Difficulty tiers exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    /// Random moves.
    Easy,
    /// Depth-1 search.
    Medium,
    /// Full-depth search.
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(difficulty: DifficultyArg) -> Self {
        match difficulty {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

/// Terminal utility scalings exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScoringArg {
    /// Wins score board cell count + 1.
    Board,
    /// Wins score remaining empty cells + 1.
    Remaining,
}

impl From<ScoringArg> for Utility {
    fn from(scoring: ScoringArg) -> Self {
        match scoring {
            ScoringArg::Board => Utility::BoardScaled,
            ScoringArg::Remaining => Utility::Remaining,
        }
    }
}
