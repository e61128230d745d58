use salvo::{surroundings, Board, BoardError, Coord, GuessResult, Orientation, Ship, FLEET};

fn c(x: u8, y: u8) -> Coord {
    Coord::new(x, y).unwrap()
}

fn ship(x: u8, y: u8, orientation: Orientation, size: usize) -> Ship {
    Ship::new(c(x, y), orientation, size).unwrap()
}

/// A legal standard fleet laid out by hand.
fn standard_fleet() -> Vec<Ship> {
    vec![
        ship(0, 0, Orientation::Horizontal, 4),
        ship(0, 2, Orientation::Horizontal, 3),
        ship(4, 2, Orientation::Horizontal, 3),
        ship(0, 4, Orientation::Horizontal, 2),
        ship(3, 4, Orientation::Horizontal, 2),
        ship(6, 4, Orientation::Horizontal, 2),
        ship(0, 6, Orientation::Horizontal, 1),
        ship(2, 6, Orientation::Horizontal, 1),
        ship(4, 6, Orientation::Horizontal, 1),
        ship(9, 9, Orientation::Vertical, 1),
    ]
}

#[test]
fn test_tile_at_off_board_is_none() {
    let board = Board::from_ships(standard_fleet()).unwrap();
    assert_eq!(board.tile_at(-1, 0), None);
    assert_eq!(board.tile_at(0, -1), None);
    assert_eq!(board.tile_at(10, 3), None);
    assert_eq!(board.tile_at(3, 10), None);
    assert!(board.tile_at(0, 0).unwrap().occupied);
    assert!(!board.tile_at(5, 0).unwrap().occupied);
}

#[test]
fn test_classify_does_not_apply_shot() {
    let board = Board::from_ships(vec![ship(2, 2, Orientation::Vertical, 1)]);
    assert_eq!(board.unwrap_err(), BoardError::FleetComposition);

    let mut board = Board::new();
    board.add_ship(ship(2, 2, Orientation::Vertical, 2)).unwrap();
    assert_eq!(board.classify(c(2, 2)), GuessResult::Hit);
    assert_eq!(board.classify(c(2, 4)), GuessResult::Miss);
    assert!(board.shots().is_empty());
    assert_eq!(board.tile(c(2, 2)).shot, None);
}

#[test]
fn test_commit_hit_then_sink() {
    let mut board = Board::new();
    board.add_ship(ship(5, 5, Orientation::Horizontal, 2)).unwrap();

    assert_eq!(board.commit(c(5, 5)), GuessResult::Hit);
    assert_eq!(board.classify(c(6, 5)), GuessResult::Sunk);
    assert_eq!(board.commit(c(6, 5)), GuessResult::Sunk);
    assert!(board.all_destroyed());
    assert_eq!(board.tile(c(5, 5)).shot, Some(GuessResult::Sunk));
    assert_eq!(board.commit(c(0, 0)), GuessResult::Miss);
    assert_eq!(board.tile(c(0, 0)).shot, Some(GuessResult::Miss));
}

#[test]
fn test_repeat_shot_is_not_rejected() {
    let mut board = Board::new();
    board.add_ship(ship(1, 1, Orientation::Horizontal, 3)).unwrap();
    assert_eq!(board.commit(c(1, 1)), GuessResult::Hit);
    assert_eq!(board.commit(c(1, 1)), GuessResult::Hit);
    assert_eq!(board.ships()[0].remaining(), 2);
}

#[test]
fn test_from_ships_accepts_standard_fleet() {
    let board = Board::from_ships(standard_fleet()).unwrap();
    assert_eq!(board.ships().len(), FLEET.len());
    assert_eq!(board.ship_map().len(), 20);
    assert_eq!(board.ships_afloat(), 10);
    assert!(!board.all_destroyed());
}

#[test]
fn test_from_ships_rejects_touching_and_overlap() {
    let mut touching = standard_fleet();
    // Diagonal contact with the four-cell ship.
    touching[9] = ship(4, 1, Orientation::Horizontal, 1);
    assert_eq!(
        Board::from_ships(touching).unwrap_err(),
        BoardError::ShipAdjacent
    );

    let mut overlapping = standard_fleet();
    overlapping[9] = ship(1, 0, Orientation::Horizontal, 1);
    assert_eq!(
        Board::from_ships(overlapping).unwrap_err(),
        BoardError::ShipOverlaps
    );
}

#[test]
fn test_ship_off_board_rejected() {
    assert_eq!(
        Ship::new(c(8, 0), Orientation::Horizontal, 3).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        Ship::from_ends(c(0, 0), c(2, 2)).unwrap_err(),
        BoardError::InvalidShipEnd
    );
}

#[test]
fn test_surroundings_clips_at_corner() {
    let zone = surroundings([c(0, 0)]);
    assert_eq!(zone.len(), 4);
    let zone = surroundings([c(4, 4), c(5, 4)]);
    assert_eq!(zone.len(), 12);
}

#[test]
fn test_is_clear_checks_ring() {
    let mut board = Board::new();
    board.add_ship(ship(3, 3, Orientation::Vertical, 2)).unwrap();
    assert!(!board.is_clear(c(3, 3)));
    assert!(!board.is_clear(c(4, 5)));
    assert!(board.is_clear(c(5, 5)));
    assert!(board.is_clear(c(3, 6)));
}
