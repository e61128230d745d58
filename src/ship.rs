//! Ship geometry and damage tracking.

use core::fmt;

use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use crate::coord::{Coord, Direction};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Direction in which the footprint grows from the origin.
    pub fn direction(self) -> Direction {
        match self {
            Orientation::Horizontal => Direction::East,
            Orientation::Vertical => Direction::South,
        }
    }
}

/// A placed ship. `origin` is the end with the lowest coordinate; the
/// footprint extends east (horizontal) or south (vertical). Undamaged cells
/// are tracked as a bitmask of offsets from the origin.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ShipRecord", into = "ShipRecord")
)]
pub struct Ship {
    origin: Coord,
    orientation: Orientation,
    size: u8,
    intact: u16,
}

impl Ship {
    /// Place a ship of `size` at `origin`. Fails when the footprint would
    /// leave the board.
    pub fn new(origin: Coord, orientation: Orientation, size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidShipEnd);
        }
        if size > BOARD_SIZE as usize
            || origin
                .offset(orientation.direction(), size as i32 - 1)
                .is_none()
        {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Ship {
            origin,
            orientation,
            size: size as u8,
            intact: (1u16 << size) - 1,
        })
    }

    /// Ship spanning the straight line between `a` and `b`, in either order.
    pub fn from_ends(a: Coord, b: Coord) -> Result<Self, BoardError> {
        let origin = a.min(b);
        let end = a.max(b);
        if origin.y() == end.y() {
            Ship::new(origin, Orientation::Horizontal, (end.x() - origin.x()) as usize + 1)
        } else if origin.x() == end.x() {
            Ship::new(origin, Orientation::Vertical, (end.y() - origin.y()) as usize + 1)
        } else {
            Err(BoardError::InvalidShipEnd)
        }
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Number of undamaged cells.
    pub fn remaining(&self) -> usize {
        self.intact.count_ones() as usize
    }

    /// Offset of `coord` within the footprint, if the ship covers it.
    fn offset_of(&self, coord: Coord) -> Option<u8> {
        let (along, across, origin_along, origin_across) = match self.orientation {
            Orientation::Horizontal => (coord.x(), coord.y(), self.origin.x(), self.origin.y()),
            Orientation::Vertical => (coord.y(), coord.x(), self.origin.y(), self.origin.x()),
        };
        if across == origin_across && along >= origin_along && along < origin_along + self.size {
            Some(along - origin_along)
        } else {
            None
        }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.offset_of(coord).is_some()
    }

    /// Cells covered by the ship, stepping away from the origin.
    pub fn footprint(&self) -> impl Iterator<Item = Coord> + '_ {
        let dir = self.orientation.direction();
        (0..self.size as i32).filter_map(move |i| self.origin.offset(dir, i))
    }

    /// Mark the cell at `coord` as damaged. Returns `true` when the ship
    /// covers `coord`; damaging the same cell again changes nothing.
    pub fn damage(&mut self, coord: Coord) -> bool {
        match self.offset_of(coord) {
            Some(off) => {
                self.intact &= !(1u16 << off);
                true
            }
            None => false,
        }
    }

    /// Whether damaging `coord` would leave the ship destroyed. Does not
    /// modify the ship.
    pub fn would_sink(&self, coord: Coord) -> bool {
        match self.offset_of(coord) {
            Some(off) => self.intact & !(1u16 << off) == 0,
            None => false,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.intact == 0
    }
}

/// Wire form of a [`Ship`]. Decoding goes back through [`Ship::new`], so a
/// stored ship can never be off the board or carry damage past its size.
#[cfg(feature = "std")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ShipRecord {
    origin: Coord,
    orientation: Orientation,
    size: u8,
    intact: u16,
}

#[cfg(feature = "std")]
impl TryFrom<ShipRecord> for Ship {
    type Error = BoardError;

    fn try_from(rec: ShipRecord) -> Result<Self, Self::Error> {
        let mut ship = Ship::new(rec.origin, rec.orientation, rec.size as usize)?;
        if rec.intact & !ship.intact != 0 {
            return Err(BoardError::InvalidShipEnd);
        }
        ship.intact = rec.intact;
        Ok(ship)
    }
}

#[cfg(feature = "std")]
impl From<Ship> for ShipRecord {
    fn from(ship: Ship) -> Self {
        ShipRecord {
            origin: ship.origin,
            orientation: ship.orientation,
            size: ship.size,
            intact: ship.intact,
        }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ size: {}, origin: {:?}, orientation: {:?}, remaining: {} }}",
            self.size,
            self.origin,
            self.orientation,
            self.remaining(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    fn c(x: u8, y: u8) -> Coord {
        Coord::new(x, y).unwrap()
    }

    #[test]
    fn footprint_follows_orientation() {
        let single = Ship::new(c(3, 4), Orientation::Horizontal, 1).unwrap();
        assert_eq!(single.footprint().collect::<Vec<_>>(), vec![c(3, 4)]);

        let cruiser = Ship::new(c(2, 5), Orientation::Horizontal, 3).unwrap();
        assert_eq!(
            cruiser.footprint().collect::<Vec<_>>(),
            vec![c(2, 5), c(3, 5), c(4, 5)]
        );

        let vertical = Ship::new(c(0, 6), Orientation::Vertical, 4).unwrap();
        assert_eq!(
            vertical.footprint().collect::<Vec<_>>(),
            vec![c(0, 6), c(0, 7), c(0, 8), c(0, 9)]
        );
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        assert_eq!(
            Ship::new(c(8, 0), Orientation::Horizontal, 3),
            Err(BoardError::ShipOutOfBounds)
        );
        assert_eq!(
            Ship::new(c(0, 7), Orientation::Vertical, 4),
            Err(BoardError::ShipOutOfBounds)
        );
    }

    #[test]
    fn contains_is_orientation_aware() {
        let ship = Ship::new(c(4, 1), Orientation::Vertical, 3).unwrap();
        assert!(ship.contains(c(4, 1)));
        assert!(ship.contains(c(4, 3)));
        assert!(!ship.contains(c(4, 4)));
        assert!(!ship.contains(c(5, 1)));
        assert!(!ship.contains(c(4, 0)));
    }

    #[test]
    fn damage_is_idempotent() {
        let mut ship = Ship::new(c(1, 1), Orientation::Horizontal, 2).unwrap();
        assert!(ship.damage(c(1, 1)));
        let after_first = ship;
        assert!(ship.damage(c(1, 1)));
        assert_eq!(ship, after_first);
        assert_eq!(ship.remaining(), 1);
        assert!(!ship.is_destroyed());
        assert!(!ship.damage(c(3, 1)));
        assert!(ship.would_sink(c(2, 1)));
        assert!(ship.damage(c(2, 1)));
        assert!(ship.is_destroyed());
    }

    #[test]
    fn from_ends_accepts_either_order() {
        let a = Ship::from_ends(c(6, 2), c(6, 4)).unwrap();
        let b = Ship::from_ends(c(6, 4), c(6, 2)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.origin(), c(6, 2));
        assert_eq!(a.orientation(), Orientation::Vertical);
        assert_eq!(a.size(), 3);
        assert_eq!(
            Ship::from_ends(c(0, 0), c(1, 1)),
            Err(BoardError::InvalidShipEnd)
        );
    }
}
