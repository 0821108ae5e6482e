//! Random board generation, used by the differential search tests and
//! ad-hoc experiments.

use rand::Rng;

use crate::position::{squares_iterator, Board, Player};

/// Generates a board with random cell weights in `1..=99` and roughly a
/// `fill` fraction of squares pre-owned by a random player.
pub fn random_board<const S: usize, R: Rng>(rng: &mut R, fill: f64) -> Board<S> {
    let mut weights = [[0; S]; S];
    for row in weights.iter_mut() {
        for value in row.iter_mut() {
            *value = rng.gen_range(1..=99);
        }
    }
    let mut board = Board::from_weights(weights);
    for square in squares_iterator::<S>() {
        if rng.gen_bool(fill) {
            let player = if rng.gen() { Player::X } else { Player::O };
            board.set_owner(square, Some(player));
        }
    }
    board
}
