//! Straight-line ships and their per-segment hit tracking.

use crate::common::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship anchored at its bow. The remaining cells extend along the
/// orientation axis; hits are counted per segment by the owning board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Coord,
    length: usize,
    orientation: Orientation,
    hits_taken: usize,
}

impl Ship {
    /// Describe a ship at (`bow`, `length`, `orientation`). Bounds and
    /// overlap validation belong to [`crate::Board::place`].
    pub fn new(bow: Coord, length: usize, orientation: Orientation) -> Self {
        Self {
            bow,
            length,
            orientation,
            hits_taken: 0,
        }
    }

    pub fn bow(&self) -> Coord {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The cells this ship occupies, bow first. Columns grow for horizontal
    /// ships, rows for vertical ones.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let (dr, dc) = match self.orientation {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        };
        (0..self.length as i32).map(move |i| Coord::new(self.bow.row + dr * i, self.bow.col + dc * i))
    }

    /// Whether `shot` lands on one of this ship's cells.
    pub fn is_hit_by(&self, shot: Coord) -> bool {
        self.cells().any(|cell| cell == shot)
    }

    /// Record one confirmed hit. Called by the board only, once per cell;
    /// the board's duplicate-shot rejection keeps the count at or below
    /// `length`.
    pub fn take_hit(&mut self) {
        debug_assert!(self.hits_taken < self.length);
        self.hits_taken += 1;
    }

    /// All segments hit.
    pub fn is_sunk(&self) -> bool {
        self.hits_taken == self.length
    }

    pub fn hits_taken(&self) -> usize {
        self.hits_taken
    }
}
