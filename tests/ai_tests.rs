use broadside::{ai, Board, Coordinate, Direction, FireOutcome, Game, Ship, Side, FLEET};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn at(column: i32, row_letter: char) -> Coordinate {
    Coordinate::from_row_letter(column, row_letter).unwrap()
}

#[test]
fn test_hunt_mode_fires_one_legal_shot() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new(10, 10);
    board
        .add_ship(Ship::new(at(1, 'A'), Direction::Horizontal, 2))
        .unwrap();

    let report = ai::take_turn(&mut rng, &mut board);
    assert_eq!(board.shots().len(), 1);
    assert!(board.in_bounds(report.target));
    assert_eq!(board.shots()[0], report.target);
}

#[test]
fn test_target_mode_probes_a_neighbor_of_the_lead() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new(10, 10);
    board
        .add_ship(Ship::new(at(5, 'C'), Direction::Horizontal, 3))
        .unwrap();
    board.fire(at(5, 'C')).unwrap();

    let report = ai::take_turn(&mut rng, &mut board);
    let lead = at(5, 'C');
    let neighbors = [lead.up(), lead.down(), lead.left(), lead.right()];
    assert!(neighbors.contains(&report.target));
}

#[test]
fn test_target_mode_stays_horizontal_when_verticals_are_spent() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new(10, 10);
    board
        .add_ship(Ship::new(at(5, 'C'), Direction::Horizontal, 2))
        .unwrap();
    // both vertical neighbors already probed and missed
    board.fire(at(5, 'B')).unwrap();
    board.fire(at(5, 'D')).unwrap();
    board.fire(at(5, 'C')).unwrap();

    let report = ai::take_turn(&mut rng, &mut board);
    assert!(
        report.target == at(6, 'C') || report.target == at(4, 'C'),
        "expected a horizontal neighbor, got {}",
        report.target
    );
    assert_ne!(report.target.column, 5, "must never probe vertically here");
}

#[test]
fn test_target_mode_continues_an_established_line() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new(10, 10);
    board
        .add_ship(Ship::new(at(5, 'C'), Direction::Horizontal, 3))
        .unwrap();
    board.fire(at(5, 'C')).unwrap();
    board.fire(at(6, 'C')).unwrap();

    // lead is (6, C); its left neighbor is a live hit, so the line continues right
    let report = ai::take_turn(&mut rng, &mut board);
    assert_eq!(report.target, at(7, 'C'));
    assert_eq!(report.outcome, FireOutcome::Hit);
    assert!(report.sunk);
}

#[test]
fn test_target_mode_continues_a_line_leftward() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new(10, 10);
    board
        .add_ship(Ship::new(at(4, 'C'), Direction::Horizontal, 3))
        .unwrap();
    board.fire(at(6, 'C')).unwrap();
    board.fire(at(5, 'C')).unwrap();

    // lead is (5, C); its right neighbor is a live hit, so the line continues left
    let report = ai::take_turn(&mut rng, &mut board);
    assert_eq!(report.target, at(4, 'C'));
    assert_eq!(report.outcome, FireOutcome::Hit);
    assert!(report.sunk);
}

#[test]
fn test_target_mode_continues_a_vertical_line() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new(10, 10);
    board
        .add_ship(Ship::new(at(5, 'C'), Direction::Vertical, 3))
        .unwrap();
    board.fire(at(5, 'C')).unwrap();
    board.fire(at(5, 'D')).unwrap();

    // lead is (5, D); its upper neighbor is a live hit, so the line continues down
    let report = ai::take_turn(&mut rng, &mut board);
    assert_eq!(report.target, at(5, 'E'));
    assert!(report.sunk);
}

#[test]
fn test_falls_back_to_hunt_when_all_neighbors_are_spent() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new(10, 10);
    board
        .add_ship(Ship::new(at(4, 'C'), Direction::Horizontal, 3))
        .unwrap();
    board.fire(at(5, 'C')).unwrap();
    board.fire(at(5, 'B')).unwrap();
    board.fire(at(5, 'D')).unwrap();
    board.fire(at(4, 'C')).unwrap();
    board.fire(at(4, 'B')).unwrap();
    board.fire(at(4, 'D')).unwrap();
    board.fire(at(3, 'C')).unwrap();

    // lead is (4, C) with every neighbor already shot; the turn still lands
    let lead = at(4, 'C');
    assert_eq!(board.last_unresolved_hit(), Some(lead));
    let shots_before = board.shots().len();
    let report = ai::take_turn(&mut rng, &mut board);
    assert_eq!(board.shots().len(), shots_before + 1);
    let neighbors = [lead.up(), lead.down(), lead.left(), lead.right()];
    assert!(!neighbors.contains(&report.target));
}

#[test]
fn test_random_fleet_placement() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut board = Board::new(10, 10);
    ai::place_fleet(&mut rng, &mut board, &FLEET).unwrap();
    assert_eq!(board.ships().len(), FLEET.len());
    let total: u32 = board.ships().iter().map(Ship::length).sum();
    assert_eq!(total, 17);
}

#[test]
fn test_ai_vs_ai_game_terminates() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut game = Game::new();
    ai::place_fleet(&mut rng, game.board_mut(Side::Human), &FLEET).unwrap();
    ai::place_fleet(&mut rng, game.board_mut(Side::Computer), &FLEET).unwrap();

    let mut turns = 0;
    while !game.ended() {
        turns += 1;
        ai::take_turn(&mut rng, game.board_mut(Side::Computer));
        if game.ended() {
            break;
        }
        ai::take_turn(&mut rng, game.board_mut(Side::Human));
        if turns > 200 {
            panic!("game took too many turns");
        }
    }

    // exactly one fleet is at the bottom of the sea
    let human_down = game.board(Side::Human).is_game_over();
    let computer_down = game.board(Side::Computer).is_game_over();
    assert!(human_down ^ computer_down);
}
