//! The decision strategies: greedy, minmax and alpha-beta.
//!
//! Each strategy is bound to a player at construction and exposes a single
//! operation, [`Strategy::choose_move`], which picks the next board state
//! and returns the ordered node trace the search produced along the way.
//! Tie-breaking is deterministic everywhere: moves are explored in
//! row-major order and only a strictly better value replaces the incumbent.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::position::{Board, Square};

mod alpha_beta;
mod greedy;
mod minmax;

pub use alpha_beta::AlphaBeta;
pub use greedy::Greedy;
pub use minmax::Minmax;

pub type Score = i32;

/// Sentinel scores for unexplored nodes. These are only ever compared,
/// never added to; the trace serializer renders them as the literal
/// `Infinity` / `-Infinity` strings.
pub const INFINITY: Score = Score::MAX;
pub const NEG_INFINITY: Score = Score::MIN;

/// What a trace entry refers to: the search root, or the move that led to
/// the node being reported.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeLabel<const S: usize> {
    Root,
    Move(Square<S>),
}

impl<const S: usize> fmt::Display for NodeLabel<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeLabel::Root => write!(f, "root"),
            NodeLabel::Move(square) => write!(f, "{}", square),
        }
    }
}

/// One line of the audit trail: a node visit or a value update during the
/// search. Alpha-beta entries additionally carry the (alpha, beta) window
/// in effect at that point.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEntry<const S: usize> {
    pub node: NodeLabel<S>,
    pub depth: u16,
    pub value: Score,
    pub window: Option<(Score, Score)>,
}

impl<const S: usize> TraceEntry<S> {
    pub(crate) fn plain(node: NodeLabel<S>, depth: u16, value: Score) -> Self {
        TraceEntry {
            node,
            depth,
            value,
            window: None,
        }
    }

    pub(crate) fn windowed(
        node: NodeLabel<S>,
        depth: u16,
        value: Score,
        alpha: Score,
        beta: Score,
    ) -> Self {
        TraceEntry {
            node,
            depth,
            value,
            window: Some((alpha, beta)),
        }
    }
}

/// A decision procedure: given the current board, produce the chosen next
/// board together with the diagnostic trace of the search.
///
/// A strategy invoked on a board with no valid moves for its player
/// returns the board unchanged; it never fails.
pub trait Strategy<const S: usize> {
    fn choose_move(&self, board: &Board<S>) -> (Vec<TraceEntry<S>>, Board<S>);
}
