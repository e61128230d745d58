//! Step-by-step fleet construction for a human player.
//!
//! Ships are placed largest first. The player picks a start cell, is offered
//! the end cells that would give a legal ship of the current size, and picks
//! one. Clearance uses the same checks as [`Board::from_ships`], so a fleet
//! built here always satisfies the rules the generator follows.

use alloc::vec::Vec;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::FLEET;
use crate::coord::{Coord, Direction};
use crate::ship::Ship;

#[derive(Debug, Clone, Default)]
pub struct FleetBuilder {
    board: Board,
    placed: usize,
}

impl FleetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of the next ship to place, `None` once the fleet is complete.
    pub fn current_size(&self) -> Option<usize> {
        FLEET.get(self.placed).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.placed == FLEET.len()
    }

    /// Ships placed so far.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// A ship may start on `coord` if it is empty and touches no ship.
    pub fn can_start(&self, coord: Coord) -> bool {
        self.current_size().is_some() && self.board.is_clear(coord)
    }

    /// End cells that complete a legal ship of the current size from `start`.
    pub fn possible_ends(&self, start: Coord) -> Vec<Coord> {
        let Some(size) = self.current_size() else {
            return Vec::new();
        };
        if !self.can_start(start) {
            return Vec::new();
        }
        if size == 1 {
            return alloc::vec![start];
        }
        Direction::ALL
            .iter()
            .filter_map(|&dir| start.offset(dir, size as i32 - 1))
            .filter(|&end| {
                Ship::from_ends(start, end)
                    .and_then(|ship| self.board.check_clear(&ship))
                    .is_ok()
            })
            .collect()
    }

    /// Place the current ship between `start` and `end` (equal for a
    /// one-cell ship).
    pub fn place(&mut self, start: Coord, end: Coord) -> Result<Ship, BoardError> {
        let size = self.current_size().ok_or(BoardError::FleetComplete)?;
        let ship = Ship::from_ends(start, end)?;
        if ship.size() != size {
            return Err(BoardError::InvalidShipEnd);
        }
        self.board.add_ship(ship)?;
        self.placed += 1;
        log::debug!("placed ship of size {} at {}", size, ship.origin());
        Ok(ship)
    }

    /// The finished board. Fails while ships remain to be placed.
    pub fn finish(self) -> Result<Board, BoardError> {
        if !self.is_complete() {
            return Err(BoardError::FleetIncomplete);
        }
        Ok(self.board)
    }
}
