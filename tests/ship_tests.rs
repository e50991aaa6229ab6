use broadside::{Coordinate, Direction, Ship};

#[test]
fn test_cells_horizontal() {
    let ship = Ship::new(Coordinate::new(2, 3), Direction::Horizontal, 3);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(2, 3),
            Coordinate::new(3, 3),
            Coordinate::new(4, 3),
        ]
    );
}

#[test]
fn test_cells_vertical() {
    let ship = Ship::new(Coordinate::new(7, 1), Direction::Vertical, 4);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells.len(), 4);
    assert_eq!(cells[0], Coordinate::new(7, 1));
    assert_eq!(cells[3], Coordinate::new(7, 4));
    assert!(cells.iter().all(|c| c.column == 7));
}

#[test]
fn test_occupies() {
    let ship = Ship::new(Coordinate::new(2, 2), Direction::Horizontal, 2);
    assert!(ship.occupies(Coordinate::new(2, 2)));
    assert!(ship.occupies(Coordinate::new(3, 2)));
    assert!(!ship.occupies(Coordinate::new(4, 2)));
    assert!(!ship.occupies(Coordinate::new(2, 3)));
}

#[test]
fn test_crossing_ships_collide() {
    let horizontal = Ship::new(Coordinate::new(3, 5), Direction::Horizontal, 4);
    let vertical = Ship::new(Coordinate::new(4, 3), Direction::Vertical, 5);
    assert!(horizontal.collides_with(&vertical));
    assert!(vertical.collides_with(&horizontal));
}

#[test]
fn test_parallel_ships_do_not_collide() {
    let first = Ship::new(Coordinate::new(1, 1), Direction::Horizontal, 5);
    let second = Ship::new(Coordinate::new(1, 2), Direction::Horizontal, 5);
    assert!(!first.collides_with(&second));
    assert!(!second.collides_with(&first));
}

#[test]
fn test_touching_end_to_end_is_not_a_collision() {
    let first = Ship::new(Coordinate::new(1, 1), Direction::Horizontal, 3);
    let second = Ship::new(Coordinate::new(4, 1), Direction::Horizontal, 3);
    assert!(!first.collides_with(&second));
}

#[test]
fn test_overlapping_same_axis_collide() {
    let first = Ship::new(Coordinate::new(1, 1), Direction::Horizontal, 3);
    let second = Ship::new(Coordinate::new(3, 1), Direction::Horizontal, 2);
    assert!(first.collides_with(&second));
    assert!(second.collides_with(&first));
}
