use salvo::{BoardError, Coord, FleetBuilder, FLEET};

fn c(x: u8, y: u8) -> Coord {
    Coord::new(x, y).unwrap()
}

/// Start and end cells of a legal standard fleet, largest ship first.
const LAYOUT: [((u8, u8), (u8, u8)); 10] = [
    ((0, 0), (3, 0)),
    ((0, 2), (2, 2)),
    ((6, 2), (4, 2)),
    ((0, 4), (0, 5)),
    ((3, 4), (4, 4)),
    ((7, 4), (6, 4)),
    ((0, 7), (0, 7)),
    ((2, 7), (2, 7)),
    ((4, 7), (4, 7)),
    ((9, 9), (9, 9)),
];

#[test]
fn test_full_fleet_builds_a_board() {
    let mut builder = FleetBuilder::new();
    for (i, &((sx, sy), (ex, ey))) in LAYOUT.iter().enumerate() {
        assert_eq!(builder.current_size(), Some(FLEET[i]));
        let ship = builder.place(c(sx, sy), c(ex, ey)).unwrap();
        assert_eq!(ship.size(), FLEET[i]);
    }
    assert!(builder.is_complete());
    assert_eq!(builder.current_size(), None);
    assert_eq!(
        builder.place(c(9, 0), c(9, 0)).unwrap_err(),
        BoardError::FleetComplete
    );
    let board = builder.finish().unwrap();
    assert_eq!(board.ships().len(), FLEET.len());
}

#[test]
fn test_possible_ends_in_open_water() {
    let builder = FleetBuilder::new();
    let mut ends = builder.possible_ends(c(5, 5));
    ends.sort();
    assert_eq!(ends, vec![c(2, 5), c(5, 2), c(5, 8), c(8, 5)]);
}

#[test]
fn test_possible_ends_clipped_by_edge() {
    let builder = FleetBuilder::new();
    let mut ends = builder.possible_ends(c(1, 0));
    ends.sort();
    assert_eq!(ends, vec![c(1, 3), c(4, 0)]);
}

#[test]
fn test_possible_ends_avoid_touching() {
    let mut builder = FleetBuilder::new();
    builder.place(c(0, 0), c(3, 0)).unwrap();
    // Start touches the four-cell ship diagonally.
    assert!(!builder.can_start(c(4, 1)));
    assert!(builder.possible_ends(c(4, 1)).is_empty());
    // A start two rows down is fine, but growing north would touch.
    let ends = builder.possible_ends(c(1, 3));
    assert!(ends.contains(&c(1, 5)));
    assert!(ends.contains(&c(3, 3)));
    assert!(!ends.contains(&c(1, 1)));
}

#[test]
fn test_wrong_length_is_rejected() {
    let mut builder = FleetBuilder::new();
    assert_eq!(
        builder.place(c(0, 0), c(2, 0)).unwrap_err(),
        BoardError::InvalidShipEnd
    );
    assert_eq!(
        builder.place(c(0, 0), c(3, 3)).unwrap_err(),
        BoardError::InvalidShipEnd
    );
    assert_eq!(builder.current_size(), Some(4));
}

#[test]
fn test_touching_ship_is_rejected() {
    let mut builder = FleetBuilder::new();
    builder.place(c(0, 0), c(3, 0)).unwrap();
    assert_eq!(
        builder.place(c(0, 1), c(2, 1)).unwrap_err(),
        BoardError::ShipAdjacent
    );
    assert_eq!(
        builder.place(c(3, 0), c(3, 2)).unwrap_err(),
        BoardError::ShipOverlaps
    );
}

#[test]
fn test_unfinished_fleet_cannot_finish() {
    let mut builder = FleetBuilder::new();
    builder.place(c(0, 0), c(0, 3)).unwrap();
    assert_eq!(builder.finish().unwrap_err(), BoardError::FleetIncomplete);
}
