//! Full-game properties of the search engine and player strategies.

use tictactoe_core::{
    Board, BoardSize, Difficulty, Mark, Minimax, MinimaxPlayer, Player, RandomPlayer, Utility,
};

/// Runs a game to completion and returns the winner, if any.
fn play(mut x: Box<dyn Player>, mut o: Box<dyn Player>, size: BoardSize) -> Option<Mark> {
    let mut board = Board::new(size);
    let mut mark = Mark::X;
    while !board.is_full() {
        let player = if mark == Mark::X { &mut x } else { &mut o };
        let square = player.get_move(&board).unwrap();
        assert!(
            board.make_move(square, mark),
            "player {} chose occupied square {square}",
            player.name()
        );
        if let Some(winner) = board.winner() {
            return Some(winner);
        }
        mark = mark.opponent();
    }
    None
}

#[test]
fn minimax_vs_minimax_always_ties() {
    for utility in [Utility::BoardScaled, Utility::Remaining] {
        let x = Box::new(MinimaxPlayer::new(Mark::X, "X engine", utility));
        let o = Box::new(MinimaxPlayer::new(Mark::O, "O engine", utility));
        assert_eq!(play(x, o, BoardSize::Three), None);
    }
}

#[test]
fn hard_ai_never_loses_to_random() {
    for seed in 0..8 {
        let random = Box::new(RandomPlayer::with_seed(Mark::X, "random", seed));
        let hard = Difficulty::Hard.search_player(Mark::O, Utility::BoardScaled);
        assert_ne!(play(random, hard, BoardSize::Three), Some(Mark::X));
    }

    // Going first the engine repeats its opening, so a few seeds suffice.
    for seed in 0..3 {
        let hard = Difficulty::Hard.search_player(Mark::X, Utility::BoardScaled);
        let random = Box::new(RandomPlayer::with_seed(Mark::O, "random", seed));
        assert_ne!(play(hard, random, BoardSize::Three), Some(Mark::O));
    }
}

#[test]
fn search_leaves_every_position_untouched() {
    // A full scripted game; the engine is consulted at every position on
    // the way and must restore the board each time.
    let script = [4, 0, 8, 2, 6, 5, 1, 7, 3];
    let mut board = Board::new(BoardSize::Three);
    let mut mark = Mark::X;

    for square in script {
        for utility in [Utility::BoardScaled, Utility::Remaining] {
            for depth in [None, Some(1), Some(3)] {
                let snapshot = board.clone();
                Minimax::new(mark, utility).search(&mut board, depth);
                assert_eq!(board, snapshot);
            }
        }
        if board.winner().is_some() {
            break;
        }
        board.make_move(square, mark);
        mark = mark.opponent();
    }
}

#[test]
fn random_players_finish_a_five_by_five_game() {
    let x = Box::new(RandomPlayer::with_seed(Mark::X, "X random", 11));
    let o = Box::new(RandomPlayer::with_seed(Mark::O, "O random", 12));
    // Either someone completes a full line or the board fills up; the loop
    // in `play` asserts every chosen square was legal.
    play(x, o, BoardSize::Five);
}
