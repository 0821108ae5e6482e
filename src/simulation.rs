//! Drives alternating turns between two strategies until the board is full.

use log::{debug, warn};

use crate::position::Board;
use crate::search::Strategy;

/// Plays two strategies, assumed bound to opposite players, against each
/// other from an initial board. The first strategy moves first.
pub struct GameSimulator<const S: usize> {
    board: Board<S>,
    players: [Box<dyn Strategy<S>>; 2],
}

impl<const S: usize> GameSimulator<S> {
    pub fn new(board: Board<S>, players: [Box<dyn Strategy<S>>; 2]) -> Self {
        GameSimulator { board, players }
    }

    /// Runs the game to completion, returning every post-move board state
    /// in order. The initial board is not included.
    ///
    /// A strategy that leaves a non-terminal board unchanged (greedy can,
    /// when no move strictly improves its score) would repeat forever, so
    /// the loop stops at the first unproductive turn instead.
    pub fn play(&self) -> Vec<Board<S>> {
        let mut states = Vec::new();
        let mut board = self.board.clone();
        let mut turn = 0;
        while !board.is_over() {
            let (_, next) = self.players[turn].choose_move(&board);
            if next == board {
                warn!(
                    "player {} left the board unchanged on turn {}, stopping",
                    turn,
                    states.len()
                );
                break;
            }
            debug!("turn {}: player {} moved", states.len(), turn);
            board = next;
            states.push(board.clone());
            turn = (turn + 1) % 2;
        }
        states
    }
}
