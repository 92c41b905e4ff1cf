use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{random_board, random_place, BoardError, Cell, Coord, FLEET, NUM_SHIPS, TOTAL_SHIP_CELLS};

#[test]
fn test_random_board_places_whole_fleet() {
    for seed in [1u64, 42, 1337, 2024] {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = random_board(&mut rng, 6, false).unwrap();

        assert_eq!(board.ships().len(), NUM_SHIPS);
        let mut lengths: Vec<usize> = board.ships().iter().map(|s| s.length()).collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(lengths, FLEET);

        let occupied = (0..6)
            .flat_map(|r| (0..6).map(move |c| Coord::new(r, c)))
            .filter(|&c| board.cell(c) == Some(Cell::Occupied))
            .count();
        assert_eq!(occupied, TOTAL_SHIP_CELLS);
    }
}

#[test]
fn test_random_board_is_ready_for_play() {
    // begin() must have cleared the placement exclusions: every cell is
    // targetable exactly once, and the ship segments account for all
    // non-miss outcomes.
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = random_board(&mut rng, 6, false).unwrap();

    let mut ship_cells = 0;
    for r in 0..6 {
        for c in 0..6 {
            match board.shoot(Coord::new(r, c)).unwrap() {
                seabattle::ShotOutcome::Miss => {}
                _ => ship_cells += 1,
            }
        }
    }
    assert_eq!(ship_cells, TOTAL_SHIP_CELLS);
    assert_eq!(board.sunk_count(), NUM_SHIPS);
}

#[test]
fn test_random_place_keeps_concealment() {
    let mut rng = SmallRng::seed_from_u64(3);
    let board = random_place(&mut rng, 6, true).expect("seeded placement should fit");
    assert!(board.is_concealed());
    assert!(!board.render(true).iter().any(|row| row.contains('\u{25a0}')));
}

#[test]
fn test_random_board_fails_loudly_on_tiny_board() {
    // a 2x2 board can never fit the three-decker; the bounded restart
    // loop must give up instead of hanging
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(
        random_board(&mut rng, 2, false).unwrap_err(),
        BoardError::PlacementExhausted
    );
}
