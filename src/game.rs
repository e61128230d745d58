use alloc::vec::Vec;
use rand::RngCore;

use crate::board::Board;
use crate::common::{BoardError, GuessResult};
use crate::coord::Coord;
use crate::hunter::Hunter;
use crate::player::Player;
use crate::replay::{Action, ActionLog, Actor, Replay};
use crate::ship::Ship;

/// Current status of a game, seen from the human's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// The AI's reply shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AiMove {
    pub target: Coord,
    pub result: GuessResult,
}

/// Everything that happened during one call to [`GameSession::attack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnOutcome {
    pub player_result: GuessResult,
    /// `None` when the human's shot ended the game or the AI has no
    /// cells left to fire at.
    pub ai_move: Option<AiMove>,
}

/// One human-versus-AI game. Each human shot is answered immediately by the
/// AI, so a whole turn completes inside [`attack`](Self::attack).
pub struct GameSession<R: RngCore> {
    player_board: Board,
    ai_board: Board,
    hunter: Hunter,
    log: ActionLog,
    player_ships: Vec<Ship>,
    rng: R,
}

impl<R: RngCore> GameSession<R> {
    /// Start a game against `player_board`; the AI fleet is generated with
    /// `rng`.
    pub fn new(player_board: Board, mut rng: R) -> Result<Self, BoardError> {
        let mut hunter = Hunter::new();
        let ai_board = hunter.place_ships(&mut rng)?;
        Ok(Self::from_parts(player_board, ai_board, hunter, rng))
    }

    /// Start a game with both fleets already decided.
    pub fn with_boards(player_board: Board, ai_board: Board, rng: R) -> Self {
        Self::from_parts(player_board, ai_board, Hunter::new(), rng)
    }

    fn from_parts(player_board: Board, ai_board: Board, hunter: Hunter, rng: R) -> Self {
        GameSession {
            player_ships: player_board.ships().to_vec(),
            player_board,
            ai_board,
            hunter,
            log: ActionLog::new(),
            rng,
        }
    }

    /// Fire at `coord` on the AI's board, then let the AI answer.
    ///
    /// Coordinates already fired at are not rejected; a repeat shot simply
    /// reports what the cell holds now.
    pub fn attack(&mut self, coord: Coord) -> TurnOutcome {
        let player_result = self.ai_board.commit(coord);
        self.log.push(Action::new(Actor::Player, coord, player_result));
        self.hunter.handle_opponent_guess(coord, player_result);
        log::debug!("player fires at {}: {:?}", coord, player_result);

        if self.ai_board.all_destroyed() {
            return TurnOutcome {
                player_result,
                ai_move: None,
            };
        }

        let ai_move = self.hunter.select_target(&mut self.rng).map(|target| {
            let result = self.player_board.commit(target);
            self.hunter.handle_guess_result(target, result);
            self.log.push(Action::new(Actor::Ai, target, result));
            log::debug!("ai fires at {}: {:?}", target, result);
            AiMove { target, result }
        });

        TurnOutcome {
            player_result,
            ai_move,
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.ai_board.all_destroyed() {
            GameStatus::Won
        } else if self.player_board.all_destroyed() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// The human's board, with the AI's shots on it.
    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// The AI's board, with the human's shots on it.
    pub fn ai_board(&self) -> &Board {
        &self.ai_board
    }

    pub fn hunter(&self) -> &Hunter {
        &self.hunter
    }

    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    /// Snapshot of the game so far: the human's fleet as placed and every
    /// shot in order.
    pub fn replay(&self) -> Replay {
        Replay {
            player_ships: self.player_ships.clone(),
            actions: self.log.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::Orientation;
    use rand::{rngs::SmallRng, SeedableRng};

    fn c(x: u8, y: u8) -> Coord {
        Coord::new(x, y).unwrap()
    }

    fn one_ship_board(x: u8, y: u8) -> Board {
        let mut board = Board::new();
        board
            .add_ship(Ship::new(c(x, y), Orientation::Horizontal, 1).unwrap())
            .unwrap();
        board
    }

    #[test]
    fn winning_shot_skips_ai_reply() {
        let rng = SmallRng::seed_from_u64(4);
        let mut session = GameSession::with_boards(one_ship_board(0, 0), one_ship_board(9, 9), rng);

        let outcome = session.attack(c(9, 9));
        assert_eq!(outcome.player_result, GuessResult::Sunk);
        assert_eq!(outcome.ai_move, None);
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.log().len(), 1);
    }

    #[test]
    fn miss_is_answered_by_ai() {
        let rng = SmallRng::seed_from_u64(4);
        let mut session = GameSession::with_boards(one_ship_board(0, 0), one_ship_board(9, 9), rng);

        let outcome = session.attack(c(3, 3));
        assert_eq!(outcome.player_result, GuessResult::Miss);
        let ai = outcome.ai_move.unwrap();
        assert!(session.player_board().shots().has(ai.target));
        assert!(!session.hunter().candidates().has(ai.target));

        let actors: std::vec::Vec<_> = session.log().iter().map(|a| a.actor).collect();
        assert_eq!(actors, [Actor::Player, Actor::Ai]);
    }
}
