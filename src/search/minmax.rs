use crate::position::{Board, Player, Square};
use crate::search::{NodeLabel, Score, Strategy, TraceEntry, INFINITY, NEG_INFINITY};

/// Full-width depth-limited minmax.
///
/// The root is a maximizing node for the bound player; odd plies minimize,
/// even plies maximize, and the acting player toggles at every ply. Leaves
/// are statically evaluated from the root player's perspective regardless
/// of whose move produced them. Every node visit and value update is
/// appended to the trace, so the returned log is a step-by-step replay of
/// the search.
pub struct Minmax {
    player: Player,
    depth: u16,
}

impl Minmax {
    /// Depth 0 degenerates to static evaluation of the root's children,
    /// which is the same search as depth 1.
    pub fn new(player: Player, depth: u16) -> Self {
        Minmax {
            player,
            depth: depth.max(1),
        }
    }

    fn traverse<const S: usize>(
        &self,
        board: &Board<S>,
        mv: Square<S>,
        depth: u16,
        mover: Player,
        trace: &mut Vec<TraceEntry<S>>,
    ) -> Score {
        let state = board.sneak(mv, mover);
        if depth == self.depth {
            // Leaf values are always for the root player, not the mover
            let value = state.evaluate(self.player);
            trace.push(TraceEntry::plain(NodeLabel::Move(mv), depth, value));
            return value;
        }

        let minimizing = depth % 2 == 1;
        let mut value = if minimizing { INFINITY } else { NEG_INFINITY };
        let mut moves = Vec::new();
        state.valid_moves(!mover, &mut moves);
        for next_move in moves {
            trace.push(TraceEntry::plain(NodeLabel::Move(mv), depth, value));
            let child_value = self.traverse(&state, next_move, depth + 1, !mover, trace);
            value = if minimizing {
                value.min(child_value)
            } else {
                value.max(child_value)
            };
        }
        trace.push(TraceEntry::plain(NodeLabel::Move(mv), depth, value));
        value
    }
}

impl<const S: usize> Strategy<S> for Minmax {
    fn choose_move(&self, board: &Board<S>) -> (Vec<TraceEntry<S>>, Board<S>) {
        let mut trace = vec![TraceEntry::plain(NodeLabel::Root, 0, NEG_INFINITY)];
        let mut best_value = NEG_INFINITY;
        let mut best_board = board.clone();
        let mut moves = Vec::new();
        board.valid_moves(self.player, &mut moves);
        for mv in moves {
            let value = self.traverse(board, mv, 1, self.player, &mut trace);
            if value > best_value {
                best_value = value;
                best_board = board.sneak(mv, self.player);
            }
            trace.push(TraceEntry::plain(NodeLabel::Root, 0, best_value));
        }
        (trace, best_board)
    }
}
