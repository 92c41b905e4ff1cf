//! The game value: two boards, two players and the turn loop.

use log::debug;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::NUM_SHIPS;
use crate::placement::random_board;
use crate::player::{take_turn, Player};
use crate::ui;

/// Status of a game from the first player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A full game session. Owns both boards and both players; the active
/// player is lent the opponent board for exactly one turn at a time, so
/// shots are serialized by construction.
pub struct Game {
    players: [Box<dyn Player>; 2],
    boards: [Board; 2],
    rng: SmallRng,
}

impl Game {
    /// Build a game with one randomly placed board per player.
    /// `concealed[i]` hides player `i`'s ships from the display (the
    /// automated side's board in the standard game).
    pub fn new(
        size: i32,
        players: [Box<dyn Player>; 2],
        concealed: [bool; 2],
        mut rng: SmallRng,
    ) -> Result<Self, BoardError> {
        let boards = [
            random_board(&mut rng, size, concealed[0])?,
            random_board(&mut rng, size, concealed[1])?,
        ];
        Ok(Self {
            players,
            boards,
            rng,
        })
    }

    /// Boards by player index, first player at 0.
    pub fn boards(&self) -> &[Board; 2] {
        &self.boards
    }

    /// Status from the first player's perspective: `Won` once every enemy
    /// ship is sunk, `Lost` once the first player's fleet is gone.
    pub fn status(&self) -> GameStatus {
        if self.boards[1].sunk_count() == NUM_SHIPS {
            GameStatus::Won
        } else if self.boards[0].sunk_count() == NUM_SHIPS {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Drive turns until one fleet is fully sunk. A `Hit` or `Sunk`
    /// outcome repeats the shooter's turn; a `Miss` passes it over.
    pub fn run(&mut self) -> GameStatus {
        let mut turn = 0usize;
        loop {
            ui::separator();
            ui::print_boards(
                self.players[0].name(),
                &self.boards[0],
                self.players[1].name(),
                &self.boards[1],
            );

            let idx = turn % 2;
            ui::separator();
            println!("{} turn", self.players[idx].name());

            let [first, second] = &mut self.players;
            let [own, enemy] = &mut self.boards;
            let (shooter, target) = if idx == 0 {
                (first.as_mut(), enemy)
            } else {
                (second.as_mut(), own)
            };
            let outcome = take_turn(shooter, &mut self.rng, target);
            debug!("turn {turn}: {} -> {outcome:?}", self.players[idx].name());

            let status = self.status();
            if status != GameStatus::InProgress {
                let winner = if status == GameStatus::Won {
                    self.players[0].name()
                } else {
                    self.players[1].name()
                };
                ui::separator();
                ui::announce_winner(winner);
                return status;
            }
            if !outcome.repeats_turn() {
                turn += 1;
            }
        }
    }
}
