//! Adversarial search for a weighted territory-capture game played on a
//! fixed-size square board.
//!
//! The building blocks are the [`position`] module (board state, move
//! application and evaluation), the [`search`] module (greedy, minmax and
//! alpha-beta strategies with audit traces) and the [`simulation`] module
//! (alternating two-strategy games). The [`input`] and [`trace_writer`]
//! modules handle the batch task-file format consumed by the `sneak` binary.

pub mod input;
pub mod position;
pub mod search;
pub mod simulation;
pub mod trace_writer;

mod tests;
