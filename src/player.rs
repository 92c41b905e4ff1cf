//! Player abstraction: the ask capability plus the shared move loop.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, Coord, ShotOutcome};

/// Interface implemented by the two player types.
pub trait Player {
    /// Display name used in turn banners and the win announcement.
    fn name(&self) -> &'static str;

    /// Choose the next target coordinate. The target board is provided as
    /// a read-only view; coordinate validation stays with
    /// [`Board::shoot`].
    fn select_target(&mut self, rng: &mut SmallRng, target: &Board) -> Coord;

    /// Inform the player of the result of its accepted shot.
    fn handle_shot_result(&mut self, _coord: Coord, _outcome: ShotOutcome) {}

    /// Inform the player that its shot was rejected and will be re-asked.
    fn handle_rejected_shot(&mut self, _coord: Coord, _err: &BoardError) {}
}

/// Drive one turn of `player` against `target`: ask for a coordinate,
/// shoot, and on a rejected shot report it and ask again until a shot is
/// accepted. There is no retry ceiling; a rejection never terminates the
/// game.
pub fn take_turn(player: &mut dyn Player, rng: &mut SmallRng, target: &mut Board) -> ShotOutcome {
    loop {
        let coord = player.select_target(rng, target);
        match target.shoot(coord) {
            Ok(outcome) => {
                player.handle_shot_result(coord, outcome);
                return outcome;
            }
            Err(err) => player.handle_rejected_shot(coord, &err),
        }
    }
}
