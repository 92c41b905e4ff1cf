use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{random_board, Board, BoardError, Coord, Orientation, Ship};

fn seeded_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    random_board(&mut rng, 6, false).expect("6x6 board always fits the fleet")
}

/// Chebyshev distance: adjacent (incl. diagonally) means distance <= 1.
fn chebyshev(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ships_never_overlap_or_touch(seed in any::<u64>()) {
        let board = seeded_board(seed);
        let ships = board.ships();
        for (i, a) in ships.iter().enumerate() {
            for b in ships.iter().skip(i + 1) {
                for ca in a.cells() {
                    for cb in b.cells() {
                        prop_assert!(
                            chebyshev(ca, cb) >= 2,
                            "ships at {:?} and {:?} touch",
                            a.bow(),
                            b.bow()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn failed_place_leaves_board_unchanged(
        row in -1i32..8,
        col in -1i32..8,
        length in 1usize..4,
        horizontal in any::<bool>(),
    ) {
        let mut board = Board::new(6, false);
        board
            .place(Ship::new(Coord::new(0, 0), 3, Orientation::Horizontal))
            .unwrap();
        board
            .place(Ship::new(Coord::new(3, 3), 2, Orientation::Vertical))
            .unwrap();
        let snapshot = board.clone();

        let orientation = if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        if board
            .place(Ship::new(Coord::new(row, col), length, orientation))
            .is_err()
        {
            prop_assert_eq!(board, snapshot);
        }
    }

    #[test]
    fn shoot_is_idempotent_safe(
        seed in any::<u64>(),
        row in 0i32..6,
        col in 0i32..6,
    ) {
        let mut board = seeded_board(seed);
        let coord = Coord::new(row, col);
        board.shoot(coord).unwrap();
        let snapshot = board.clone();
        prop_assert_eq!(board.shoot(coord).unwrap_err(), BoardError::AlreadyTargeted);
        prop_assert_eq!(board, snapshot);
    }

    #[test]
    fn out_of_bounds_shot_never_mutates(seed in any::<u64>(), row in 6i32..20, col in -5i32..0) {
        let mut board = seeded_board(seed);
        let snapshot = board.clone();
        prop_assert_eq!(
            board.shoot(Coord::new(row, col)).unwrap_err(),
            BoardError::OutOfBounds
        );
        prop_assert_eq!(board, snapshot);
    }
}
