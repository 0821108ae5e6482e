//! Parsing of the line-oriented batch task file.
//!
//! Layout:
//! * line 1: task selector, `1` greedy, `2` minmax, `3` alpha-beta,
//!   `4` simulation;
//! * tasks 1-3: player, search depth, then the board;
//! * task 4: player, algorithm digit and depth for each of the two
//!   contestants (six lines), then the board.
//!
//! A board of size `S` is `S` rows of space-separated cell weights
//! followed by `S` rows of ownership characters (`X`, `O` or `*` for
//! unowned). Parsing fails fast with the offending 1-based line number;
//! the game core never sees a malformed board.

use std::error;
use std::fmt;

use crate::position::{Board, Player, Square};
use crate::search::{self, Strategy};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    line: usize,
    message: String,
}

impl Error {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Error {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl error::Error for Error {}

/// The three decision procedures selectable from the input file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Greedy,
    Minmax,
    AlphaBeta,
}

impl Algorithm {
    fn from_digit(input: &str) -> Option<Algorithm> {
        match input {
            "1" => Some(Algorithm::Greedy),
            "2" => Some(Algorithm::Minmax),
            "3" => Some(Algorithm::AlphaBeta),
            _ => None,
        }
    }

    pub fn strategy<const S: usize>(self, player: Player, depth: u16) -> Box<dyn Strategy<S>> {
        match self {
            Algorithm::Greedy => Box::new(search::Greedy::new(player)),
            Algorithm::Minmax => Box::new(search::Minmax::new(player, depth)),
            Algorithm::AlphaBeta => Box::new(search::AlphaBeta::new(player, depth)),
        }
    }
}

/// One contestant in a simulated game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerSpec {
    pub player: Player,
    pub algorithm: Algorithm,
    pub depth: u16,
}

/// A fully parsed input file.
#[derive(Debug)]
pub enum Task<const S: usize> {
    SingleMove {
        algorithm: Algorithm,
        player: Player,
        depth: u16,
        board: Board<S>,
    },
    Simulation {
        players: [PlayerSpec; 2],
        board: Board<S>,
    },
}

pub fn parse_task<const S: usize>(input: &str) -> Result<Task<S>, Error> {
    let lines: Vec<&str> = input.lines().collect();
    let selector = line_at(&lines, 0)?.trim();
    match selector {
        "1" | "2" | "3" => {
            let algorithm = match selector {
                "1" => Algorithm::Greedy,
                "2" => Algorithm::Minmax,
                _ => Algorithm::AlphaBeta,
            };
            let player = parse_player(&lines, 1)?;
            let depth = parse_depth(&lines, 2)?;
            let board = parse_board(&lines, 3)?;
            Ok(Task::SingleMove {
                algorithm,
                player,
                depth,
                board,
            })
        }
        "4" => {
            let players = [parse_player_spec(&lines, 1)?, parse_player_spec(&lines, 4)?];
            let board = parse_board(&lines, 7)?;
            Ok(Task::Simulation { players, board })
        }
        other => Err(Error::new(
            1,
            format!("unknown task selector \"{}\"", other),
        )),
    }
}

fn line_at<'a>(lines: &[&'a str], index: usize) -> Result<&'a str, Error> {
    lines
        .get(index)
        .copied()
        .ok_or_else(|| Error::new(index + 1, "unexpected end of input"))
}

fn parse_player(lines: &[&str], index: usize) -> Result<Player, Error> {
    line_at(lines, index)?
        .trim()
        .parse()
        .map_err(|err: String| Error::new(index + 1, err))
}

fn parse_depth(lines: &[&str], index: usize) -> Result<u16, Error> {
    let token = line_at(lines, index)?.trim();
    token
        .parse()
        .map_err(|_| Error::new(index + 1, format!("invalid depth \"{}\"", token)))
}

fn parse_player_spec(lines: &[&str], index: usize) -> Result<PlayerSpec, Error> {
    let player = parse_player(lines, index)?;
    let algorithm_token = line_at(lines, index + 1)?.trim();
    let algorithm = Algorithm::from_digit(algorithm_token).ok_or_else(|| {
        Error::new(
            index + 2,
            format!("unknown algorithm \"{}\"", algorithm_token),
        )
    })?;
    let depth = parse_depth(lines, index + 2)?;
    Ok(PlayerSpec {
        player,
        algorithm,
        depth,
    })
}

fn parse_board<const S: usize>(lines: &[&str], start: usize) -> Result<Board<S>, Error> {
    let mut weights = [[0; S]; S];
    for (row, row_weights) in weights.iter_mut().enumerate() {
        let line = line_at(lines, start + row)?;
        let mut tokens = line.split_whitespace();
        for (col, weight) in row_weights.iter_mut().enumerate() {
            let token = tokens.next().ok_or_else(|| {
                Error::new(
                    start + row + 1,
                    format!("expected {} cell values, found {}", S, col),
                )
            })?;
            *weight = token.parse().map_err(|_| {
                Error::new(
                    start + row + 1,
                    format!("invalid cell value \"{}\"", token),
                )
            })?;
        }
        if tokens.next().is_some() {
            return Err(Error::new(
                start + row + 1,
                format!("expected {} cell values, found more", S),
            ));
        }
    }

    let mut board = Board::from_weights(weights);
    for row in 0..S {
        let line = line_at(lines, start + S + row)?.trim();
        if line.chars().count() != S {
            return Err(Error::new(
                start + S + row + 1,
                format!("expected {} ownership characters, found \"{}\"", S, line),
            ));
        }
        for (col, ch) in line.chars().enumerate() {
            let square = Square::from_row_col(row as u8, col as u8);
            match ch {
                '*' => (),
                _ => {
                    let player = Player::from_char(ch).ok_or_else(|| {
                        Error::new(
                            start + S + row + 1,
                            format!("invalid ownership character '{}'", ch),
                        )
                    })?;
                    board.set_owner(square, Some(player));
                }
            }
        }
    }
    Ok(board)
}
