use seabattle::{Coord, Orientation, Ship};

#[test]
fn test_horizontal_cells_grow_along_columns() {
    let ship = Ship::new(Coord::new(2, 1), 3, Orientation::Horizontal);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)]
    );
}

#[test]
fn test_vertical_cells_grow_along_rows() {
    let ship = Ship::new(Coord::new(0, 0), 4, Orientation::Vertical);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(2, 0),
            Coord::new(3, 0)
        ]
    );
}

#[test]
fn test_bow_is_first_cell() {
    let ship = Ship::new(Coord::new(4, 5), 1, Orientation::Horizontal);
    assert_eq!(ship.cells().next(), Some(ship.bow()));
}

#[test]
fn test_is_hit_by_membership() {
    let ship = Ship::new(Coord::new(1, 1), 2, Orientation::Horizontal);
    assert!(ship.is_hit_by(Coord::new(1, 1)));
    assert!(ship.is_hit_by(Coord::new(1, 2)));
    assert!(!ship.is_hit_by(Coord::new(1, 3)));
    assert!(!ship.is_hit_by(Coord::new(0, 1)));
}

#[test]
fn test_take_hit_and_sunk() {
    let mut ship = Ship::new(Coord::new(1, 1), 2, Orientation::Horizontal);
    assert!(!ship.is_sunk());
    ship.take_hit();
    assert!(!ship.is_sunk());
    assert_eq!(ship.hits_taken(), 1);
    ship.take_hit();
    assert!(ship.is_sunk());
}
