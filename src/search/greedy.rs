use crate::position::{squares_iterator, Board, Player};
use crate::search::{Strategy, TraceEntry};

/// One-deep search: applies every possible move and keeps the child with
/// the strictly best static evaluation, first-found winning ties. If no
/// move improves on the current evaluation, the board is returned
/// unchanged. Produces no trace.
pub struct Greedy {
    player: Player,
}

impl Greedy {
    pub fn new(player: Player) -> Self {
        Greedy { player }
    }
}

impl<const S: usize> Strategy<S> for Greedy {
    fn choose_move(&self, board: &Board<S>) -> (Vec<TraceEntry<S>>, Board<S>) {
        let mut best_board = board.clone();
        let mut best_value = board.evaluate(self.player);
        for square in squares_iterator::<S>() {
            let next = board.sneak(square, self.player);
            let value = next.evaluate(self.player);
            if value > best_value {
                best_board = next;
                best_value = value;
            }
        }
        (Vec::new(), best_board)
    }
}
