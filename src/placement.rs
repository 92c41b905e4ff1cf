//! Randomized fleet placement: rejection sampling with a per-board attempt
//! budget and a bounded whole-board restart loop.

use log::{debug, warn};
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coord};
use crate::config::{BOARD_RESTART_CEILING, FLEET, PLACEMENT_ATTEMPT_CEILING};
use crate::ship::{Orientation, Ship};

/// Try to populate one board with the standard fleet.
///
/// Bows are sampled from `0..=size` on both axes — one past the edge on
/// purpose, leaving the bounds rejection to [`Board::place`] — together
/// with a uniform orientation. Returns `None` once the shared attempt
/// budget for the whole fleet is spent.
pub fn random_place<R: Rng>(rng: &mut R, size: i32, concealed: bool) -> Option<Board> {
    let mut board = Board::new(size, concealed);
    let mut attempts = 0usize;
    for &length in FLEET.iter() {
        loop {
            attempts += 1;
            if attempts > PLACEMENT_ATTEMPT_CEILING {
                debug!("fleet placement ran out of attempts at ship length {length}");
                return None;
            }
            let bow = Coord::new(rng.random_range(0..=size), rng.random_range(0..=size));
            if board.is_used(bow) {
                continue;
            }
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            match board.place(Ship::new(bow, length, orientation)) {
                Ok(()) => break,
                Err(BoardError::OutOfBounds | BoardError::Overlap) => continue,
                Err(e) => {
                    debug!("unexpected placement failure: {e}");
                    continue;
                }
            }
        }
    }
    board.begin();
    Some(board)
}

/// Produce a fully placed board, rebuilding from scratch whenever a board
/// exhausts its attempt budget. The restart loop is itself bounded: rather
/// than spinning forever on a board too small for the fleet, it gives up
/// with [`BoardError::PlacementExhausted`].
pub fn random_board<R: Rng>(rng: &mut R, size: i32, concealed: bool) -> Result<Board, BoardError> {
    for restart in 0..BOARD_RESTART_CEILING {
        if let Some(board) = random_place(rng, size, concealed) {
            return Ok(board);
        }
        if restart == 0 {
            warn!("board of size {size} rejected a full fleet, restarting placement");
        }
    }
    Err(BoardError::PlacementExhausted)
}
