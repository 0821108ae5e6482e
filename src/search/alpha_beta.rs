use crate::position::{Board, Player, Square};
use crate::search::{NodeLabel, Score, Strategy, TraceEntry, INFINITY, NEG_INFINITY};

/// Minmax with an (alpha, beta) pruning window.
///
/// The search shape and trace positions match [`super::Minmax`] exactly;
/// the entries carry the window as two extra columns. The cutoff
/// conditions are part of the observable contract and are deliberately
/// asymmetric: a minimizing ply prunes when its running value drops to
/// alpha or below, checked before beta is tightened, while a maximizing
/// ply prunes on the child's raw value reaching beta. The root raises
/// alpha to the incumbent best value, so earlier root branches tighten the
/// window for later ones.
pub struct AlphaBeta {
    player: Player,
    depth: u16,
}

impl AlphaBeta {
    /// Depth 0 degenerates to static evaluation of the root's children,
    /// which is the same search as depth 1.
    pub fn new(player: Player, depth: u16) -> Self {
        AlphaBeta {
            player,
            depth: depth.max(1),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn traverse<const S: usize>(
        &self,
        board: &Board<S>,
        mv: Square<S>,
        depth: u16,
        mover: Player,
        mut alpha: Score,
        mut beta: Score,
        trace: &mut Vec<TraceEntry<S>>,
    ) -> Score {
        let state = board.sneak(mv, mover);
        if depth == self.depth {
            let value = state.evaluate(self.player);
            trace.push(TraceEntry::windowed(
                NodeLabel::Move(mv),
                depth,
                value,
                alpha,
                beta,
            ));
            return value;
        }

        let minimizing = depth % 2 == 1;
        let mut value = if minimizing { INFINITY } else { NEG_INFINITY };
        let mut moves = Vec::new();
        state.valid_moves(!mover, &mut moves);
        for next_move in moves {
            trace.push(TraceEntry::windowed(
                NodeLabel::Move(mv),
                depth,
                value,
                alpha,
                beta,
            ));
            let child_value =
                self.traverse(&state, next_move, depth + 1, !mover, alpha, beta, trace);
            if minimizing {
                value = value.min(child_value);
                if value <= alpha {
                    // The maximizer above already has alpha guaranteed
                    break;
                }
                beta = beta.min(value);
            } else {
                value = value.max(child_value);
                if child_value >= beta {
                    // Raw child value, not the running maximum
                    break;
                }
                alpha = alpha.max(value);
            }
        }
        trace.push(TraceEntry::windowed(
            NodeLabel::Move(mv),
            depth,
            value,
            alpha,
            beta,
        ));
        value
    }
}

impl<const S: usize> Strategy<S> for AlphaBeta {
    fn choose_move(&self, board: &Board<S>) -> (Vec<TraceEntry<S>>, Board<S>) {
        let mut alpha = NEG_INFINITY;
        let beta = INFINITY;
        let mut value = NEG_INFINITY;
        let mut trace = vec![TraceEntry::windowed(NodeLabel::Root, 0, value, alpha, beta)];
        let mut best_board = board.clone();
        let mut moves = Vec::new();
        board.valid_moves(self.player, &mut moves);
        for mv in moves {
            let child_value = self.traverse(board, mv, 1, self.player, alpha, beta, &mut trace);
            if child_value > value {
                value = child_value;
                best_board = board.sneak(mv, self.player);
                alpha = value;
            }
            trace.push(TraceEntry::windowed(NodeLabel::Root, 0, value, alpha, beta));
        }
        (trace, best_board)
    }
}
