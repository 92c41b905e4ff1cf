//! Automated player with uniform-random target selection.

use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coord, ShotOutcome};
use crate::player::Player;

/// Automated player. Samples targets uniformly over the board with no
/// memory of its own guesses; duplicate targets are weeded out by the
/// target board's rejection and a fresh sample.
pub struct AiPlayer {
    name: &'static str,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::named("Computer")
    }

    /// Distinctly labelled automated player, for games between two of
    /// them.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &'static str {
        self.name
    }

    fn select_target(&mut self, rng: &mut SmallRng, target: &Board) -> Coord {
        let size = target.size();
        let coord = Coord::new(rng.random_range(0..size), rng.random_range(0..size));
        println!("{} turn: {coord}", self.name);
        coord
    }

    fn handle_shot_result(&mut self, _coord: Coord, outcome: ShotOutcome) {
        println!("{outcome}");
    }

    fn handle_rejected_shot(&mut self, coord: Coord, err: &BoardError) {
        debug!("computer shot at {coord} rejected: {err}");
    }
}
