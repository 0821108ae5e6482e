//! Board state, move application and evaluation for the territory-capture
//! game, along with all required data types.
//!
//! A board is a value: applying a move never mutates the receiver, it
//! produces a fresh board. The search strategies rely on this copy-on-move
//! discipline to explore sibling states without them corrupting each other.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{self, Index};
use std::str::FromStr;

use arrayvec::ArrayVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod position_gen;
mod square;

pub use square::{squares_iterator, Direction, Square};

/// One of the two players. `X` moves first in simulated games by
/// convention of the input format, but nothing in the board model assumes
/// a move order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    X = 0,
    O = 1,
}

impl Player {
    pub fn from_char(ch: char) -> Option<Player> {
        match ch {
            'X' => Some(Player::X),
            'O' => Some(Player::O),
            _ => None,
        }
    }
}

impl ops::Not for Player {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

impl FromStr for Player {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "X" => Ok(Player::X),
            "O" => Ok(Player::O),
            _ => Err(format!("Invalid player \"{}\"", input)),
        }
    }
}

/// The contents of a single board square: a static weight assigned at
/// construction and the player currently holding the square, if any.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cell {
    value: i32,
    owner: Option<Player>,
}

impl Cell {
    pub const fn unowned(value: i32) -> Self {
        Cell { value, owner: None }
    }

    pub fn value(self) -> i32 {
        self.value
    }

    pub fn owner(self) -> Option<Player> {
        self.owner
    }
}

/// A generic square board indexed by `Square<S>`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AbstractBoard<T, const S: usize> {
    raw: [[T; S]; S],
}

impl<T: Default + Copy, const S: usize> Default for AbstractBoard<T, S> {
    fn default() -> Self {
        AbstractBoard {
            raw: [[T::default(); S]; S],
        }
    }
}

impl<T, const S: usize> Index<Square<S>> for AbstractBoard<T, S> {
    type Output = T;

    fn index(&self, square: Square<S>) -> &Self::Output {
        &self.raw[square.row() as usize][square.col() as usize]
    }
}

impl<T, const S: usize> ops::IndexMut<Square<S>> for AbstractBoard<T, S> {
    fn index_mut(&mut self, square: Square<S>) -> &mut Self::Output {
        &mut self.raw[square.row() as usize][square.col() as usize]
    }
}

/// Complete representation of a game position.
///
/// Equality and hashing look at the occupancy pattern only, matching the
/// board's serialized form; cell weights are construction-time data and do
/// not distinguish positions.
#[derive(Clone)]
pub struct Board<const S: usize> {
    cells: AbstractBoard<Cell, S>,
}

impl<const S: usize> Board<S> {
    pub fn from_weights(weights: [[i32; S]; S]) -> Self {
        let mut cells: AbstractBoard<Cell, S> = AbstractBoard::default();
        for square in squares_iterator::<S>() {
            cells[square] = Cell::unowned(weights[square.row() as usize][square.col() as usize]);
        }
        Board { cells }
    }

    pub fn cell_at(&self, square: Square<S>) -> Cell {
        self.cells[square]
    }

    /// Construction-time setup used by the parser and board generators.
    /// Gameplay goes through [`Board::sneak`], which returns a new board.
    pub fn set_owner(&mut self, square: Square<S>, owner: Option<Player>) {
        self.cells[square].owner = owner;
    }

    /// The orthogonal neighbors of `square` owned by `player`.
    pub fn adjacent_owned_by(&self, square: Square<S>, player: Player) -> ArrayVec<Square<S>, 4> {
        square
            .neighbors()
            .filter(|neighbor| self.cells[*neighbor].owner == Some(player))
            .collect()
    }

    /// The orthogonal neighbors of `square` owned by anyone other than `player`.
    pub fn adjacent_owned_by_opponent(
        &self,
        square: Square<S>,
        player: Player,
    ) -> ArrayVec<Square<S>, 4> {
        square
            .neighbors()
            .filter(|neighbor| {
                let owner = self.cells[*neighbor].owner;
                owner.is_some() && owner != Some(player)
            })
            .collect()
    }

    /// Applies a move for `player` at `square`, returning the resulting board.
    ///
    /// Three cases:
    /// * the target is already owned: the move is a no-op and the result is
    ///   an unchanged copy of this board;
    /// * the target is orthogonally adjacent to a cell `player` already
    ///   owns: a raid. `player` takes the target plus every orthogonal
    ///   neighbor the opponent holds. The capture is a single hop, it does
    ///   not spread through the captured cells;
    /// * otherwise a plain placement of the target cell, no capture.
    pub fn sneak(&self, square: Square<S>, player: Player) -> Board<S> {
        let mut next = self.clone();
        if self.cells[square].owner.is_some() {
            return next;
        }
        next.cells[square].owner = Some(player);
        if !self.adjacent_owned_by(square, player).is_empty() {
            for captured in self.adjacent_owned_by_opponent(square, player) {
                next.cells[captured].owner = Some(player);
            }
        }
        next
    }

    /// Adds every location whose `sneak` changes the board, in row-major
    /// order. An unowned target is always claimed, so this is exactly the
    /// set of unowned squares, for either player.
    pub fn valid_moves(&self, player: Player, moves: &mut Vec<Square<S>>) {
        for square in squares_iterator::<S>() {
            if self.cells[square].owner.is_none() {
                debug_assert!(self.sneak(square, player) != *self);
                moves.push(square);
            }
        }
    }

    /// Sum of weights held by `player` minus the sum held by the opponent.
    /// Unowned cells count for neither side.
    pub fn evaluate(&self, player: Player) -> i32 {
        let mut score = 0;
        for square in squares_iterator::<S>() {
            match self.cells[square].owner {
                Some(owner) if owner == player => score += self.cells[square].value,
                Some(_) => score -= self.cells[square].value,
                None => (),
            }
        }
        score
    }

    pub fn is_over(&self) -> bool {
        squares_iterator::<S>().all(|square| self.cells[square].owner.is_some())
    }

    /// The winner of a finished game. `X` wins on a strictly positive
    /// score; a tied board goes to `O`.
    pub fn winner(&self) -> Player {
        if self.evaluate(Player::X) > 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

impl<const S: usize> PartialEq for Board<S> {
    fn eq(&self, other: &Self) -> bool {
        squares_iterator::<S>().all(|square| self.cells[square].owner == other.cells[square].owner)
    }
}

impl<const S: usize> Eq for Board<S> {}

impl<const S: usize> Hash for Board<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for square in squares_iterator::<S>() {
            self.cells[square].owner.hash(state);
        }
    }
}

impl<const S: usize> Index<Square<S>> for Board<S> {
    type Output = Cell;

    fn index(&self, square: Square<S>) -> &Self::Output {
        &self.cells[square]
    }
}

/// The canonical serialized form: a grid of ownership characters, `*`
/// marking unowned cells, one row per line.
impl<const S: usize> fmt::Display for Board<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..S {
            for col in 0..S {
                match self.cells.raw[row][col].owner {
                    Some(player) => write!(f, "{}", player)?,
                    None => write!(f, "*")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<const S: usize> fmt::Debug for Board<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..S {
            for col in 0..S {
                let cell = self.cells.raw[row][col];
                match cell.owner {
                    Some(player) => write!(f, "[{}{:3}]", player, cell.value)?,
                    None => write!(f, "[.{:3}]", cell.value)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
