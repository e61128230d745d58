//! Randomized fleet placement under the no-touching rule.
//!
//! The generator keeps a pool of cells that may still hold a ship. Each ship
//! is anchored on a random pool cell and grown in a random cardinal
//! direction; once placed, its footprint and the ring around it leave the
//! pool, so later ships can never touch it.

use alloc::vec::Vec;
use rand::Rng;

use crate::bitboard::Grid;
use crate::board::surroundings;
use crate::common::BoardError;
use crate::config::{FLEET, MAX_DIRECTION_TRIALS};
use crate::coord::{Coord, Direction};
use crate::ship::Ship;

#[derive(Debug, Clone, Copy)]
pub struct PlacementGenerator<'a> {
    sizes: &'a [usize],
    trials: usize,
}

impl PlacementGenerator<'static> {
    /// Generator for the standard fleet.
    pub fn standard() -> Self {
        PlacementGenerator::new(&FLEET)
    }
}

impl<'a> PlacementGenerator<'a> {
    /// Generator placing ships of `sizes`, in the given order.
    pub fn new(sizes: &'a [usize]) -> Self {
        PlacementGenerator {
            sizes,
            trials: MAX_DIRECTION_TRIALS,
        }
    }

    /// Overrides the number of direction trials per anchor.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Place every ship once. Returns `PlacementFailed` as soon as some size
    /// runs out of anchors; nothing is repaired, callers start over. A
    /// zero-length ship is rejected with `InvalidShipEnd` before any draw.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Ship>, BoardError> {
        if self.sizes.contains(&0) {
            return Err(BoardError::InvalidShipEnd);
        }
        let mut pool = Grid::full();
        let mut occupied = Grid::new();
        let mut ships = Vec::with_capacity(self.sizes.len());

        for &size in self.sizes {
            // Anchors that failed every trial are struck for this size only.
            let mut anchors = pool;
            let ship = loop {
                let anchor = anchors.choose(rng).ok_or(BoardError::PlacementFailed)?;
                if let Some(ship) = self.try_anchor(rng, anchor, size, &pool, &occupied) {
                    break ship;
                }
                anchors.unmark(anchor);
            };
            for cell in ship.footprint() {
                occupied.mark(cell);
            }
            pool = pool - surroundings(ship.footprint());
            ships.push(ship);
        }
        Ok(ships)
    }

    /// Run [`generate`](Self::generate) from scratch up to `attempts` times.
    pub fn generate_with_retries<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        attempts: usize,
    ) -> Result<Vec<Ship>, BoardError> {
        for attempt in 1..=attempts {
            match self.generate(rng) {
                Ok(ships) => return Ok(ships),
                Err(BoardError::PlacementFailed) => {
                    log::debug!("fleet placement attempt {} of {} failed", attempt, attempts);
                }
                Err(e) => return Err(e),
            }
        }
        Err(BoardError::PlacementFailed)
    }

    fn try_anchor<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        anchor: Coord,
        size: usize,
        pool: &Grid,
        occupied: &Grid,
    ) -> Option<Ship> {
        for _ in 0..self.trials {
            let dir = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            if let Some(ship) = fits(anchor, dir, size, pool, occupied) {
                return Some(ship);
            }
        }
        None
    }
}

/// Ship of `size` grown from `anchor` towards `dir`, if every cell is still
/// in the pool and the cell past the far end holds no ship.
fn fits(anchor: Coord, dir: Direction, size: usize, pool: &Grid, occupied: &Grid) -> Option<Ship> {
    if size == 0 {
        return None;
    }
    let far = anchor.offset(dir, size as i32 - 1)?;
    for i in 0..size as i32 {
        let cell = anchor.offset(dir, i)?;
        if !pool.has(cell) || occupied.has(cell) {
            return None;
        }
    }
    if far.step(dir).is_some_and(|beyond| occupied.has(beyond)) {
        return None;
    }
    Ship::from_ends(anchor, far).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn fits_respects_pool_and_bounds() {
        let anchor = Coord::new(8, 0).unwrap();
        let pool = Grid::full();
        let occupied = Grid::new();
        assert!(fits(anchor, Direction::East, 3, &pool, &occupied).is_none());
        let ship = fits(anchor, Direction::West, 3, &pool, &occupied).unwrap();
        assert_eq!(ship.origin(), Coord::new(6, 0).unwrap());

        let mut shrunk = pool;
        shrunk.unmark(Coord::new(7, 0).unwrap());
        assert!(fits(anchor, Direction::West, 3, &shrunk, &occupied).is_none());
    }

    #[test]
    fn fits_rejects_ship_past_far_end() {
        let anchor = Coord::new(2, 2).unwrap();
        let mut occupied = Grid::new();
        occupied.mark(Coord::new(2, 5).unwrap());
        let pool = Grid::full();
        assert!(fits(anchor, Direction::South, 3, &pool, &occupied).is_none());
        assert!(fits(anchor, Direction::South, 2, &pool, &occupied).is_some());
    }

    #[test]
    fn zero_trials_always_fails() {
        let mut rng = SmallRng::seed_from_u64(1);
        let gen = PlacementGenerator::new(&[1]).with_trials(0);
        assert_eq!(gen.generate(&mut rng), Err(BoardError::PlacementFailed));
    }

    #[test]
    fn zero_length_ship_is_rejected() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(fits(Coord::new(4, 4).unwrap(), Direction::East, 0, &Grid::full(), &Grid::new()).is_none());
        assert_eq!(
            PlacementGenerator::new(&[0]).generate(&mut rng),
            Err(BoardError::InvalidShipEnd)
        );
        assert_eq!(
            PlacementGenerator::new(&[2, 0, 1]).generate_with_retries(&mut rng, 4),
            Err(BoardError::InvalidShipEnd)
        );
    }
}
