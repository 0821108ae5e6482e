use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use self::Direction::*;

/// A location on the board. Can be used to index a `Board`.
///
/// Construction is checked, so a `Square<S>` is always in bounds for a
/// board of size `S`. Squares are ordered row by row from the top-left
/// corner, which is also the order move generation visits them in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square<const S: usize> {
    inner: u8,
}

impl<const S: usize> Square<S> {
    pub const fn from_u8(inner: u8) -> Self {
        assert!((inner as usize) < S * S);
        Square { inner }
    }

    pub const fn into_inner(self) -> u8 {
        self.inner
    }

    pub const fn from_row_col(row: u8, col: u8) -> Self {
        assert!((row as usize) < S && (col as usize) < S);
        Square::from_u8(row * S as u8 + col)
    }

    pub const fn row(self) -> u8 {
        self.inner / S as u8
    }

    pub const fn col(self) -> u8 {
        self.inner % S as u8
    }

    /// Checked construction from possibly out-of-bounds coordinates.
    /// Returns `None` instead of panicking, so callers can walk off the
    /// edge of the board safely.
    pub fn try_from_row_col(row: i32, col: i32) -> Option<Self> {
        if row < 0 || col < 0 || row >= S as i32 || col >= S as i32 {
            None
        } else {
            Some(Square::from_row_col(row as u8, col as u8))
        }
    }

    pub fn go_direction(self, direction: Direction) -> Option<Self> {
        let row = self.row() as i32;
        let col = self.col() as i32;
        match direction {
            North => Self::try_from_row_col(row - 1, col),
            West => Self::try_from_row_col(row, col - 1),
            East => Self::try_from_row_col(row, col + 1),
            South => Self::try_from_row_col(row + 1, col),
        }
    }

    /// The up-to-4 orthogonal neighbors, in `North, West, East, South` order.
    pub fn neighbors(self) -> impl Iterator<Item = Square<S>> {
        [North, West, East, South]
            .into_iter()
            .filter_map(move |direction| self.go_direction(direction))
    }

    pub fn parse_square(input: &str) -> Result<Square<S>, String> {
        match input.as_bytes() {
            [col_ch, row_ch] => {
                let col = col_ch.wrapping_sub(b'A');
                let row = row_ch.wrapping_sub(b'1');
                if col >= S as u8 || row >= S as u8 {
                    Err(format!(
                        "Couldn't parse square \"{}\" at size {}",
                        input, S
                    ))
                } else {
                    Ok(Square::from_row_col(row, col))
                }
            }
            _ => Err(format!("Couldn't parse square \"{}\"", input)),
        }
    }
}

/// Column letter followed by the 1-based row number, `A1` being the
/// top-left corner. This is the label the trace logs use for nodes.
impl<const S: usize> fmt::Display for Square<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", (b'A' + self.col()) as char)?;
        write!(f, "{}", self.row() + 1)
    }
}

/// Iterates over all board squares in row-major order.
pub fn squares_iterator<const S: usize>() -> impl Iterator<Item = Square<S>> {
    (0..(S * S)).map(|i| Square::from_u8(i as u8))
}

/// One of the four cardinal directions on the board
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    North = 0,
    West = 1,
    East = 2,
    South = 3,
}
