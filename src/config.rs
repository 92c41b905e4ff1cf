//! Game constants: board size, fleet composition and placement budgets.

/// Board edge length of the standard game.
pub const DEFAULT_BOARD_SIZE: i32 = 6;

/// Number of ships in the fleet.
pub const NUM_SHIPS: usize = 7;

/// Fleet composition, largest first: placing the three-decker before the
/// single-deckers keeps the success rate of randomized placement high.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Total ship segments across the fleet.
pub const TOTAL_SHIP_CELLS: usize = 10;

/// Placement attempts allowed across one whole fleet before the board is
/// abandoned and rebuilt from scratch.
pub const PLACEMENT_ATTEMPT_CEILING: usize = 2000;

/// Full-board rebuilds allowed before randomized placement fails loudly.
/// Generous for the standard 6x6 board; exists so pathologically small
/// boards produce an error instead of a hang.
pub const BOARD_RESTART_CEILING: usize = 2000;
