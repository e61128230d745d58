//! Common types: shot classification and board errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// Classification of a shot against a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// No ship occupies the cell.
    Miss,
    /// A ship was hit and still has undamaged cells.
    Hit,
    /// The shot destroyed the last undamaged cell of a ship.
    Sunk,
}

impl GuessResult {
    /// `true` for both `Hit` and `Sunk`.
    pub fn is_hit(self) -> bool {
        !matches!(self, GuessResult::Miss)
    }
}

/// Errors returned by board, placement and fleet-building operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Random placement ran out of anchors; retry the whole generation.
    PlacementFailed,
    /// Fleet sizes do not match the standard composition.
    FleetComposition,
    /// Ship extends past the edge of the board.
    ShipOutOfBounds,
    /// Ship shares a cell with another ship.
    ShipOverlaps,
    /// Ship touches another ship, diagonals included.
    ShipAdjacent,
    /// Start and end cells do not form a straight ship of the expected size.
    InvalidShipEnd,
    /// Every ship of the fleet has already been placed.
    FleetComplete,
    /// The fleet still has ships left to place.
    FleetIncomplete,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::PlacementFailed => write!(f, "Unable to place every ship of the fleet"),
            BoardError::FleetComposition => write!(f, "Fleet does not match the required ship sizes"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipAdjacent => write!(f, "Ship placement touches another ship"),
            BoardError::InvalidShipEnd => write!(f, "Ship end does not match the ship being placed"),
            BoardError::FleetComplete => write!(f, "All ships have already been placed"),
            BoardError::FleetIncomplete => write!(f, "Not all ships have been placed yet"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
