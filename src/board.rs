//! Game board state: the cell grid, placed ships and shot resolution.

use std::collections::HashSet;

use crate::common::{BoardError, Coord, ShotOutcome};
use crate::ship::Ship;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Ship segment present, not yet hit.
    Occupied,
    Miss,
    Hit,
}

impl Cell {
    /// Display symbol. Concealed boards substitute the `Empty` symbol for
    /// `Occupied` cells.
    fn symbol(self, show_ships: bool) -> &'static str {
        match self {
            Cell::Empty => "O",
            Cell::Occupied => {
                if show_ships {
                    "\u{25a0}"
                } else {
                    "O"
                }
            }
            Cell::Miss => ".",
            Cell::Hit => "X",
        }
    }
}

/// Offsets covering a cell and its 8 neighbors, used for contour
/// registration around a ship.
const NEIGHBORHOOD: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A square board owning its ships, the cell grid and the set of used
/// cells.
///
/// `used` does double duty across two phases. During setup it holds every
/// occupied cell plus the silent contour exclusions that keep ships from
/// touching; [`Board::begin`] clears it once the fleet is down. During play
/// it holds every targeted cell plus the contour of each sunk ship, so
/// duplicate shots are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: i32,
    grid: Vec<Cell>,
    ships: Vec<Ship>,
    used: HashSet<Coord>,
    sunk_count: usize,
    concealed: bool,
}

impl Board {
    /// Create an empty board. Concealed boards render ship cells with the
    /// neutral water symbol.
    pub fn new(size: i32, concealed: bool) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            grid: vec![Cell::Empty; (size * size) as usize],
            ships: Vec::new(),
            used: HashSet::new(),
            sunk_count: 0,
            concealed,
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    /// Ships placed so far, in placement order. Sunk ships stay listed.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far; the side loses when this reaches the
    /// fleet size.
    pub fn sunk_count(&self) -> usize {
        self.sunk_count
    }

    /// Whether every placed ship has been sunk.
    pub fn all_sunk(&self) -> bool {
        self.sunk_count == self.ships.len()
    }

    /// `true` when `c` lies outside the grid on either axis.
    pub fn is_out_of_bounds(&self, c: Coord) -> bool {
        c.row < 0 || c.row >= self.size || c.col < 0 || c.col >= self.size
    }

    /// Whether `c` is occupied, excluded or already targeted in the current
    /// phase.
    pub fn is_used(&self, c: Coord) -> bool {
        self.used.contains(&c)
    }

    /// Cell state at `c`, or `None` out of bounds.
    pub fn cell(&self, c: Coord) -> Option<Cell> {
        if self.is_out_of_bounds(c) {
            None
        } else {
            Some(self.grid[(c.row * self.size + c.col) as usize])
        }
    }

    fn set(&mut self, c: Coord, state: Cell) {
        let idx = (c.row * self.size + c.col) as usize;
        self.grid[idx] = state;
    }

    /// Place a ship. Fails with `OutOfBounds` if any of its cells leaves
    /// the grid, or `Overlap` if any cell is occupied or contour-excluded.
    /// Validation completes before mutation, so a failed placement leaves
    /// the board untouched. On success the ship's contour is registered as
    /// excluded (silently — contour cells are only marked visibly when the
    /// ship sinks).
    pub fn place(&mut self, ship: Ship) -> Result<(), BoardError> {
        for cell in ship.cells() {
            if self.is_out_of_bounds(cell) {
                return Err(BoardError::OutOfBounds);
            }
            if self.used.contains(&cell) {
                return Err(BoardError::Overlap);
            }
        }
        for cell in ship.cells() {
            self.set(cell, Cell::Occupied);
            self.used.insert(cell);
        }
        self.contour(&ship, false);
        self.ships.push(ship);
        Ok(())
    }

    /// Register the cells around `ship` as used. With `mark` set the cells
    /// are also written as visible misses, confirming after a sink that no
    /// other ship borders the wreck.
    fn contour(&mut self, ship: &Ship, mark: bool) {
        for cell in ship.cells() {
            for (dr, dc) in NEIGHBORHOOD {
                let cur = Coord::new(cell.row + dr, cell.col + dc);
                if self.is_out_of_bounds(cur) || self.used.contains(&cur) {
                    continue;
                }
                if mark {
                    self.set(cur, Cell::Miss);
                }
                self.used.insert(cur);
            }
        }
    }

    /// Resolve a shot at `c`.
    ///
    /// Rejects coordinates outside the grid and cells already targeted.
    /// A hit increments the ship's counter; sinking the ship additionally
    /// reveals its contour as misses and bumps the sunk counter.
    pub fn shoot(&mut self, c: Coord) -> Result<ShotOutcome, BoardError> {
        if self.is_out_of_bounds(c) {
            return Err(BoardError::OutOfBounds);
        }
        if self.used.contains(&c) {
            return Err(BoardError::AlreadyTargeted);
        }
        self.used.insert(c);

        for i in 0..self.ships.len() {
            if !self.ships[i].is_hit_by(c) {
                continue;
            }
            self.ships[i].take_hit();
            self.set(c, Cell::Hit);
            if self.ships[i].is_sunk() {
                self.sunk_count += 1;
                let sunk = self.ships[i];
                self.contour(&sunk, true);
                return Ok(ShotOutcome::Sunk);
            }
            return Ok(ShotOutcome::Hit);
        }

        self.set(c, Cell::Miss);
        Ok(ShotOutcome::Miss)
    }

    /// End the setup phase: drop the placement-time exclusion bookkeeping
    /// so every cell is targetable once play starts. Grid state, ships and
    /// counters are untouched.
    pub fn begin(&mut self) {
        self.used.clear();
    }

    /// Render the board as fixed-width text rows, header first. Ship cells
    /// are substituted with the water symbol unless `show_ships` is set and
    /// the board is not concealed.
    pub fn render(&self, show_ships: bool) -> Vec<String> {
        let reveal = show_ships && !self.concealed;
        let mut rows = Vec::with_capacity(self.size as usize + 1);
        let header: Vec<String> = (1..=self.size).map(|i| format!("{i} ")).collect();
        rows.push(format!("    {}|", header.join("| ")));
        for r in 0..self.size {
            let cells: Vec<&str> = (0..self.size)
                .map(|c| {
                    self.grid[(r * self.size + c) as usize].symbol(reveal)
                })
                .collect();
            rows.push(format!("{} | {} |", r + 1, cells.join(" | ")));
        }
        rows
    }
}
