pub const BOARD_SIZE: u8 = 10;

/// Ship sizes of a fleet, in the order they are placed.
pub const FLEET: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];
pub const NUM_SHIPS: usize = FLEET.len();

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 * 2 + 2 * 3 + 4;

/// Random direction trials per anchor before the generator draws a new one.
pub const MAX_DIRECTION_TRIALS: usize = 10;

/// Whole-fleet generations attempted before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 64;

/// Number of ships of `size` in the standard fleet.
pub fn ships_of_size(size: usize) -> usize {
    FLEET.iter().filter(|&&s| s == size).count()
}
