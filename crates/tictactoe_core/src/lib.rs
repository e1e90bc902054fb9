//! Tic-tac-toe core engine.
//!
//! Board model, win detection, minimax search, and player strategies for
//! 3x3 and 5x5 games. Drivers (console loop, event handler) sit outside
//! this crate and talk to it through [`Board`] and [`Player`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod player;
mod search;

// Crate-level exports - Board model
pub use board::{Board, BoardSize, Cell, Mark};

// Crate-level exports - Errors
pub use error::PlayError;

// Crate-level exports - Players
pub use player::{
    Difficulty, HeuristicPlayer, HumanPlayer, LineSource, MinimaxPlayer, Player, RandomPlayer,
};

// Crate-level exports - Search engine
pub use search::{Minimax, SearchResult, Utility};
