//! Board state: one side's fleet plus the shots fired at it.
//!
//! The same logic serves the human's board and the AI's board: shots are
//! previewed with [`Board::classify`] and applied with [`Board::commit`].

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::bitboard::Grid;
use crate::common::{BoardError, GuessResult};
use crate::config::{FLEET, NUM_SHIPS, PLACEMENT_ATTEMPTS};
use crate::coord::{adjacency_ring, Coord};
use crate::placement::PlacementGenerator;
use crate::ship::Ship;

/// Cells plus their full adjacency rings.
pub fn surroundings<I>(cells: I) -> Grid
where
    I: IntoIterator<Item = Coord>,
{
    let mut zone = Grid::new();
    for cell in cells {
        zone.mark(cell);
        for n in adjacency_ring(cell) {
            zone.mark(n);
        }
    }
    zone
}

/// What is known about a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// A ship covers the cell.
    pub occupied: bool,
    /// Result of the shot fired at the cell, if any.
    pub shot: Option<GuessResult>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    ships: Vec<Ship>,
    ship_map: Grid,
    shots: Grid,
}

impl Board {
    /// An empty board with no ships.
    pub fn new() -> Self {
        Board {
            ships: Vec::with_capacity(NUM_SHIPS),
            ship_map: Grid::new(),
            shots: Grid::new(),
        }
    }

    /// Board holding a player-built fleet. Rejects fleets whose sizes differ
    /// from [`FLEET`] or whose ships overlap or touch.
    pub fn from_ships<I>(ships: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Ship>,
    {
        let mut board = Board::new();
        for ship in ships {
            board.add_ship(ship)?;
        }
        let mut sizes: Vec<usize> = board.ships.iter().map(Ship::size).collect();
        let mut expected = FLEET.to_vec();
        sizes.sort_unstable();
        expected.sort_unstable();
        if sizes != expected {
            return Err(BoardError::FleetComposition);
        }
        Ok(board)
    }

    /// Board with a randomly generated standard fleet.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, BoardError> {
        let ships = PlacementGenerator::standard().generate_with_retries(rng, PLACEMENT_ATTEMPTS)?;
        Board::from_ships(ships)
    }

    /// Add one ship, keeping every ship clear of every other one.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        self.check_clear(&ship)?;
        for cell in ship.footprint() {
            self.ship_map.mark(cell);
        }
        self.ships.push(ship);
        Ok(())
    }

    /// Whether `ship` could be added without overlapping or touching.
    pub fn check_clear(&self, ship: &Ship) -> Result<(), BoardError> {
        if ship.footprint().any(|c| self.ship_map.has(c)) {
            return Err(BoardError::ShipOverlaps);
        }
        let zone = surroundings(self.ship_map.coords());
        if ship.footprint().any(|c| zone.has(c)) {
            return Err(BoardError::ShipAdjacent);
        }
        Ok(())
    }

    /// `true` when `coord` is free and none of its neighbours holds a ship.
    pub fn is_clear(&self, coord: Coord) -> bool {
        !self.ship_map.has(coord) && adjacency_ring(coord).all(|n| !self.ship_map.has(n))
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Occupancy of all ships.
    pub fn ship_map(&self) -> Grid {
        self.ship_map
    }

    /// Every cell that has been shot at.
    pub fn shots(&self) -> Grid {
        self.shots
    }

    /// Tile at `(x, y)`, or `None` when the position is off the board.
    pub fn tile_at(&self, x: i32, y: i32) -> Option<Tile> {
        Coord::from_signed(x, y).map(|c| self.tile(c))
    }

    pub fn tile(&self, coord: Coord) -> Tile {
        let shot = if self.shots.has(coord) {
            Some(match self.ship_at(coord) {
                Some(ship) if ship.is_destroyed() => GuessResult::Sunk,
                Some(_) => GuessResult::Hit,
                None => GuessResult::Miss,
            })
        } else {
            None
        };
        Tile {
            occupied: self.ship_map.has(coord),
            shot,
        }
    }

    fn ship_at(&self, coord: Coord) -> Option<&Ship> {
        self.ships.iter().find(|s| s.contains(coord))
    }

    /// What a shot at `coord` would do, without applying it.
    pub fn classify(&self, coord: Coord) -> GuessResult {
        match self.ship_at(coord) {
            Some(ship) if ship.would_sink(coord) => GuessResult::Sunk,
            Some(_) => GuessResult::Hit,
            None => GuessResult::Miss,
        }
    }

    /// Apply a shot at `coord`, damaging whichever ship covers it.
    pub fn commit(&mut self, coord: Coord) -> GuessResult {
        self.shots.mark(coord);
        let result = match self.ships.iter_mut().find(|s| s.contains(coord)) {
            Some(ship) => {
                ship.damage(coord);
                if ship.is_destroyed() {
                    GuessResult::Sunk
                } else {
                    GuessResult::Hit
                }
            }
            None => GuessResult::Miss,
        };
        log::trace!("shot at {} -> {:?}", coord, result);
        result
    }

    /// Returns `true` when every ship is destroyed.
    pub fn all_destroyed(&self) -> bool {
        self.ships.iter().all(Ship::is_destroyed)
    }

    /// Ships that still have undamaged cells.
    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_destroyed()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  shots: {:?},\n  ships: {:?}\n}}",
            self.ship_map, self.shots, self.ships
        )
    }
}
