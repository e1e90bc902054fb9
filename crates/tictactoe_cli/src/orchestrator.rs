//! Turn loop between two players.

use anyhow::Result;
use tictactoe_core::{Board, BoardSize, Mark, Player};
use tracing::{debug, info};

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A mark completed a line.
    Won(Mark),
    /// The board filled with no winner.
    Tie,
}

/// Drives a game between two players.
///
/// Owns the board for the duration of a game: alternates marks, applies
/// moves, checks for the end, and renders progress. X moves first.
pub struct Orchestrator {
    board: Board,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates an orchestrator over an empty board.
    pub fn new(size: BoardSize, player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            board: Board::new(size),
            player_x,
            player_o,
        }
    }

    /// Runs the game to completion.
    pub fn run(&mut self) -> Result<Outcome> {
        info!(size = %self.board.size(), "starting game");
        println!("\nBoard positions:");
        println!("{}\n", self.board.index_grid());

        let mut mark = Mark::X;
        while !self.board.is_full() {
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let square = player.get_move(&self.board)?;

            // A rejected move leaves the same mark to play.
            if !self.board.make_move(square, mark) {
                debug!(square, %mark, "rejected move");
                continue;
            }

            println!("\n{mark} makes a move to square {square}");
            println!("{}", self.board);

            if let Some(winner) = self.board.winner() {
                info!(%winner, "game over");
                return Ok(Outcome::Won(winner));
            }
            mark = mark.opponent();
        }

        info!("game over, board full");
        Ok(Outcome::Tie)
    }

    /// Clears the board for a rematch with the same players.
    pub fn reset(&mut self) {
        self.board.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_core::{HumanPlayer, MinimaxPlayer, RandomPlayer, Utility};

    fn scripted_human(mark: Mark, script: &str) -> Box<dyn Player> {
        Box::new(HumanPlayer::new(
            mark,
            format!("Player {mark}"),
            Cursor::new(script.to_string()),
            Vec::new(),
        ))
    }

    #[test]
    fn scripted_humans_reach_a_win() {
        // X takes the top row before O finishes the middle row.
        let x = scripted_human(Mark::X, "0\n1\n2\n");
        let o = scripted_human(Mark::O, "3\n4\n");
        let mut orchestrator = Orchestrator::new(BoardSize::Three, x, o);
        assert_eq!(orchestrator.run().unwrap(), Outcome::Won(Mark::X));
    }

    #[test]
    fn engine_seats_reach_a_tie() {
        let x = Box::new(MinimaxPlayer::new(Mark::X, "X engine", Utility::BoardScaled));
        let o = Box::new(MinimaxPlayer::new(Mark::O, "O engine", Utility::BoardScaled));
        let mut orchestrator = Orchestrator::new(BoardSize::Three, x, o);
        assert_eq!(orchestrator.run().unwrap(), Outcome::Tie);
    }

    #[test]
    fn reset_supports_a_rematch() {
        let x = Box::new(RandomPlayer::with_seed(Mark::X, "X random", 3));
        let o = Box::new(RandomPlayer::with_seed(Mark::O, "O random", 4));
        let mut orchestrator = Orchestrator::new(BoardSize::Three, x, o);
        orchestrator.run().unwrap();

        orchestrator.reset();
        // The board starts empty again, so a second game completes normally.
        orchestrator.run().unwrap();
    }
}
