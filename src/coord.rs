//! Grid coordinates, cardinal directions and the adjacency ring shared by
//! placement, hunting and fleet validation.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::config::BOARD_SIZE;

/// A cell on the board. Always in range: construction is bounds-checked.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(u8, u8)", into = "(u8, u8)")
)]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// Returns `None` when `(x, y)` is off the board.
    pub const fn new(x: u8, y: u8) -> Option<Self> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Some(Coord { x, y })
        } else {
            None
        }
    }

    /// Accepts signed input, e.g. a neighbour offset that may leave the grid.
    pub fn from_signed(x: i32, y: i32) -> Option<Self> {
        if x < 0 || y < 0 {
            return None;
        }
        Coord::new(u8::try_from(x).ok()?, u8::try_from(y).ok()?)
    }

    pub const fn x(self) -> u8 {
        self.x
    }

    pub const fn y(self) -> u8 {
        self.y
    }

    /// Row-major index in `0..100`.
    pub const fn index(self) -> usize {
        self.y as usize * BOARD_SIZE as usize + self.x as usize
    }

    /// Neighbour one cell away in `dir`, if it is on the board.
    pub fn step(self, dir: Direction) -> Option<Self> {
        self.offset(dir, 1)
    }

    /// Cell `n` steps away in `dir`, if it is on the board.
    pub fn offset(self, dir: Direction, n: i32) -> Option<Self> {
        let (dx, dy) = dir.delta();
        Coord::from_signed(self.x as i32 + dx * n, self.y as i32 + dy * n)
    }

    /// Chebyshev (king-move) distance.
    pub fn chebyshev(self, other: Coord) -> u8 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Shares an edge with `other`.
    pub fn is_orthogonal_neighbour(self, other: Coord) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Board notation: column letter, 1-based row (`A1` is `(0, 0)`).
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.x) as char, self.y + 1)
    }
}

impl TryFrom<(u8, u8)> for Coord {
    type Error = BitBoardError;

    fn try_from((x, y): (u8, u8)) -> Result<Self, Self::Error> {
        Coord::new(x, y).ok_or(BitBoardError::IndexOutOfBounds {
            x: x as usize,
            y: y as usize,
        })
    }
}

impl From<Coord> for (u8, u8) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

/// The up-to-8 cells surrounding `coord`, clipped to the board.
///
/// Every adjacency rule in the crate goes through this one function: the
/// placement pool, the hunter's sink pruning and the fleet validators.
pub fn adjacency_ring(coord: Coord) -> impl Iterator<Item = Coord> {
    const OFFSETS: [(i32, i32); 8] = [
        (1, 0),
        (1, 1),
        (0, 1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
        (0, -1),
        (1, -1),
    ];
    OFFSETS
        .into_iter()
        .filter_map(move |(dx, dy)| Coord::from_signed(coord.x as i32 + dx, coord.y as i32 + dy))
}

/// Cardinal direction on the grid. `y` grows southwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    pub const fn opposite(self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
            Direction::North => Direction::South,
        }
    }

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::North => (0, -1),
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 4,
            Direction::North => 8,
        }
    }
}

/// A small set of directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const fn empty() -> Self {
        DirectionSet(0)
    }

    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    pub fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }
}
