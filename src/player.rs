use rand::RngCore;

use crate::{
    board::Board,
    common::{BoardError, GuessResult},
    coord::Coord,
};

/// Interface implemented by automated players.
///
/// A player is responsible for:
/// - Placing its own fleet
/// - Selecting targets on the opponent's board
/// - Absorbing feedback from its shots
pub trait Player {
    /// Build this player's board with a full fleet.
    fn place_ships(&mut self, rng: &mut dyn RngCore) -> Result<Board, BoardError>;

    /// Choose the next coordinate to attack, or `None` if nothing is left.
    fn select_target(&mut self, rng: &mut dyn RngCore) -> Option<Coord>;

    /// Inform the player of the result of its last shot.
    fn handle_guess_result(&mut self, coord: Coord, result: GuessResult);

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_guess(&mut self, _coord: Coord, _result: GuessResult) {}
}
