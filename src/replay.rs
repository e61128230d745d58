//! Ordered record of every shot in a game, for later replay.
//!
//! The log is append-only and always yields actions oldest first.

use alloc::vec::Vec;

use crate::bitboard::Grid;
use crate::common::GuessResult;
use crate::coord::Coord;
use crate::ship::Ship;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Actor {
    Player,
    Ai,
}

/// `Shot` covers both hits and sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    Shot,
    Miss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub actor: Actor,
    pub kind: ActionKind,
    pub coord: Coord,
}

impl Action {
    pub fn new(actor: Actor, coord: Coord, result: GuessResult) -> Self {
        let kind = if result.is_hit() {
            ActionKind::Shot
        } else {
            ActionKind::Miss
        };
        Action { actor, kind, coord }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionLog {
    actions: Vec<Action>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Actions in the order they happened.
    pub fn iter(&self) -> core::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    pub fn as_slice(&self) -> &[Action] {
        &self.actions
    }
}

impl<'a> IntoIterator for &'a ActionLog {
    type Item = &'a Action;
    type IntoIter = core::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

impl IntoIterator for ActionLog {
    type Item = Action;
    type IntoIter = alloc::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

/// A finished (or paused) game: the human's fleet as placed, plus every shot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Replay {
    pub player_ships: Vec<Ship>,
    pub actions: ActionLog,
}

impl Replay {
    /// Step through the actions oldest first.
    pub fn cursor(&self) -> ReplayCursor<'_> {
        ReplayCursor {
            actions: self.actions.as_slice(),
            next: 0,
        }
    }

    #[cfg(feature = "std")]
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    #[cfg(feature = "std")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

/// Marks left on the two boards during playback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayView {
    /// Player shots that struck a ship.
    pub player_hits: Grid,
    pub player_misses: Grid,
    /// AI shots that struck a ship.
    pub ai_hits: Grid,
    pub ai_misses: Grid,
}

impl ReplayView {
    pub fn apply(&mut self, action: &Action) {
        let grid = match (action.actor, action.kind) {
            (Actor::Player, ActionKind::Shot) => &mut self.player_hits,
            (Actor::Player, ActionKind::Miss) => &mut self.player_misses,
            (Actor::Ai, ActionKind::Shot) => &mut self.ai_hits,
            (Actor::Ai, ActionKind::Miss) => &mut self.ai_misses,
        };
        grid.mark(action.coord);
    }
}

/// Playback position within a replay. Timing is the caller's business.
#[derive(Debug, Clone)]
pub struct ReplayCursor<'a> {
    actions: &'a [Action],
    next: usize,
}

impl<'a> ReplayCursor<'a> {
    /// Apply the next action to `view`, returning it.
    pub fn step(&mut self, view: &mut ReplayView) -> Option<Action> {
        let action = self.next()?;
        view.apply(&action);
        Some(action)
    }

    pub fn remaining(&self) -> usize {
        self.actions.len() - self.next
    }
}

impl<'a> Iterator for ReplayCursor<'a> {
    type Item = Action;

    fn next(&mut self) -> Option<Action> {
        let action = *self.actions.get(self.next)?;
        self.next += 1;
        Some(action)
    }
}
