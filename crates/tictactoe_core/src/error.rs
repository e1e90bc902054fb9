//! Library error types.

use derive_more::{Display, Error, From};

/// Error surfaced while obtaining a move from a player.
///
/// Occupied cells and rejected moves are not errors; they are signaled by
/// boolean returns on the board and handled locally by players.
#[derive(Debug, Display, Error, From)]
pub enum PlayError {
    /// Input source closed before a move was chosen.
    #[display("input closed before a move was chosen")]
    InputClosed,
    /// Asked for a move on a board with no empty squares.
    #[display("no moves available on the board")]
    NoMovesAvailable,
    /// Failure reading input or writing a prompt.
    #[display("io error: {_0}")]
    #[from]
    Io(#[error(source)] std::io::Error),
}
