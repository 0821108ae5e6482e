//! Serializers for search trace logs and board sequences.
//!
//! Trace logs are comma-delimited with a header row; infinite sentinel
//! scores are rendered as the literal `Infinity` / `-Infinity` strings.

use std::io::{self, Write};

use crate::position::Board;
use crate::search::{Score, TraceEntry, INFINITY, NEG_INFINITY};

fn write_value<W: Write>(writer: &mut W, value: Score) -> io::Result<()> {
    match value {
        INFINITY => write!(writer, "Infinity"),
        NEG_INFINITY => write!(writer, "-Infinity"),
        _ => write!(writer, "{}", value),
    }
}

/// Writes the trace as `Node,Depth,Value` rows, or
/// `Node,Depth,Value,Alpha,Beta` when the entries carry a window.
pub fn write_trace_log<W: Write, const S: usize>(
    writer: &mut W,
    trace: &[TraceEntry<S>],
) -> io::Result<()> {
    let windowed = trace.first().map_or(false, |entry| entry.window.is_some());
    if windowed {
        writeln!(writer, "Node,Depth,Value,Alpha,Beta")?;
    } else {
        writeln!(writer, "Node,Depth,Value")?;
    }
    for entry in trace {
        write!(writer, "{},{},", entry.node, entry.depth)?;
        write_value(writer, entry.value)?;
        if let Some((alpha, beta)) = entry.window {
            write!(writer, ",")?;
            write_value(writer, alpha)?;
            write!(writer, ",")?;
            write_value(writer, beta)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Writes the board's serialized occupancy grid.
pub fn write_board<W: Write, const S: usize>(writer: &mut W, board: &Board<S>) -> io::Result<()> {
    write!(writer, "{}", board)
}

/// Writes a sequence of board states back to back, as the simulator's
/// replay log.
pub fn write_states<W: Write, const S: usize>(
    writer: &mut W,
    states: &[Board<S>],
) -> io::Result<()> {
    for state in states {
        write!(writer, "{}", state)?;
    }
    Ok(())
}
