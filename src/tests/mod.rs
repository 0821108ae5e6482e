#[cfg(test)]
mod search_tests;

#[cfg(test)]
use crate::position::{Board, Player, Square};

/// Builds a board from a weight matrix and ownership rows, `*` (or any
/// non-player character) marking unowned cells.
#[cfg(test)]
fn board_from<const S: usize>(weights: [[i32; S]; S], rows: [&str; S]) -> Board<S> {
    let mut board = Board::from_weights(weights);
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.chars().count(), S);
        for (col, ch) in line.chars().enumerate() {
            if let Some(player) = Player::from_char(ch) {
                board.set_owner(Square::from_row_col(row as u8, col as u8), Some(player));
            }
        }
    }
    board
}
