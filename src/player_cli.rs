//! Interactive console player.

use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, Coord, ShotOutcome};
use crate::player::Player;

/// Human player reading 1-based `row col` pairs from stdin. Malformed
/// input (wrong token count, non-numeric tokens) is re-prompted here and
/// never reaches the board; range checking is still the board's call.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a `row col` pair of 1-based numeric tokens into a 0-based
/// coordinate.
fn parse_coord(input: &str) -> Option<Coord> {
    let mut tokens = input.split_whitespace();
    let row: i32 = tokens.next()?.parse().ok()?;
    let col: i32 = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some(Coord::new(row - 1, col - 1))
}

impl Player for CliPlayer {
    fn name(&self) -> &'static str {
        "User"
    }

    fn select_target(&mut self, _rng: &mut SmallRng, _target: &Board) -> Coord {
        loop {
            print!("Your turn: ");
            io::stdout().flush().unwrap();
            let mut line = String::new();
            io::stdin().read_line(&mut line).unwrap();
            let line = line.trim();

            if line.split_whitespace().count() != 2 {
                println!("Enter 2 coordinates!");
                continue;
            }
            match parse_coord(line) {
                Some(coord) => return coord,
                None => println!("Enter numbers!"),
            }
        }
    }

    fn handle_shot_result(&mut self, _coord: Coord, outcome: ShotOutcome) {
        println!("{outcome}");
    }

    fn handle_rejected_shot(&mut self, _coord: Coord, err: &BoardError) {
        println!("{err}");
    }
}
