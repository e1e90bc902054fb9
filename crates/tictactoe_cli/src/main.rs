//! Console tic-tac-toe driver.
//!
//! Thin adapter over the core engine: argument parsing, the turn loop, and
//! board rendering. All game logic lives in `tictactoe_core`.

#![warn(missing_docs)]

mod cli;
mod orchestrator;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, OpponentArg};
use orchestrator::{Orchestrator, Outcome};
use std::io::{self, Write};
use tictactoe_core::{
    Difficulty, HeuristicPlayer, HumanPlayer, LineSource, Mark, Player, RandomPlayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Reads one line per call through the process stdin handle.
///
/// Stdin buffers globally, so human seats and the replay prompt can share
/// input without holding a lock across turns.
struct StdinLines;

impl LineSource for StdinLines {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::stdin().read_line(buf)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    info!(?cli, "starting console game");

    println!("Welcome to Tic Tac Toe!");

    let player_x: Box<dyn Player> = Box::new(HumanPlayer::new(
        Mark::X,
        "Player X",
        StdinLines,
        io::stdout(),
    ));
    let mut orchestrator = Orchestrator::new(cli.size.into(), player_x, opponent(&cli));

    loop {
        match orchestrator.run()? {
            Outcome::Won(mark) => println!("{mark} wins!"),
            Outcome::Tie => println!("It's a tie!"),
        }
        if !play_again()? {
            break;
        }
        orchestrator.reset();
    }

    println!("Thanks for playing! Goodbye.");
    Ok(())
}

/// Builds the O seat from the command-line selection.
fn opponent(cli: &Cli) -> Box<dyn Player> {
    let mark = Mark::O;
    match cli.opponent {
        OpponentArg::Human => Box::new(HumanPlayer::new(
            mark,
            "Player O",
            StdinLines,
            io::stdout(),
        )),
        OpponentArg::Random => match cli.seed {
            Some(seed) => Box::new(RandomPlayer::with_seed(mark, "Random AI", seed)),
            None => Box::new(RandomPlayer::new(mark, "Random AI")),
        },
        OpponentArg::Heuristic => match cli.seed {
            Some(seed) => Box::new(HeuristicPlayer::with_seed(mark, "Heuristic AI", seed)),
            None => Box::new(HeuristicPlayer::new(mark, "Heuristic AI")),
        },
        OpponentArg::Minimax => {
            let difficulty = Difficulty::from(cli.difficulty);
            // The easy tier ignores the search, so it can honor the seed.
            if difficulty == Difficulty::Easy {
                if let Some(seed) = cli.seed {
                    return Box::new(RandomPlayer::with_seed(mark, "Easy AI", seed));
                }
            }
            difficulty.search_player(mark, cli.scoring.into())
        }
    }
}

/// Asks whether to start another game with the same setup.
fn play_again() -> Result<bool> {
    print!("Do you want to play again? (y/n): ");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(line.trim().eq_ignore_ascii_case("y"))
}
