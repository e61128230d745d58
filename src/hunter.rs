//! The automated opponent's targeting logic.
//!
//! The hunter sees nothing of the enemy fleet beyond the Miss/Hit/Sunk
//! feedback of its own shots. It keeps a pool of cells it has not fired at
//! and, after a hit, works along the struck ship until it sinks:
//!
//! * `Searching` draws a random cell from the pool.
//! * `EngagedUnknownDirection` has a single hit and picks an untried
//!   cardinal direction at random.
//! * `EngagedCommitted` keeps stepping past the latest hit in that direction.
//! * `Reversing` walks back the other way, starting from the first hit.
//!
//! On a sink the ring around every hit of the engagement leaves the pool,
//! since no other ship can touch a sunk one.

use alloc::vec::Vec;
use core::mem;
use rand::{Rng, RngCore};

use crate::bitboard::Grid;
use crate::board::{surroundings, Board};
use crate::common::{BoardError, GuessResult};
use crate::config::PLACEMENT_ATTEMPTS;
use crate::coord::{Coord, Direction, DirectionSet};
use crate::placement::PlacementGenerator;
use crate::player::Player;

/// Hits on the ship currently being pursued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engagement {
    hits: Vec<Coord>,
    tried: DirectionSet,
}

impl Engagement {
    fn new(first: Coord) -> Self {
        Engagement {
            hits: alloc::vec![first],
            tried: DirectionSet::empty(),
        }
    }

    /// Hits in the order they were scored.
    pub fn hits(&self) -> &[Coord] {
        &self.hits
    }

    /// The hit that opened the engagement.
    pub fn first(&self) -> Coord {
        self.hits[0]
    }

    pub fn last(&self) -> Coord {
        self.hits[self.hits.len() - 1]
    }

    /// A second hit fixes the ship's axis.
    pub fn is_confirmed(&self) -> bool {
        self.hits.len() >= 2
    }

    /// Directions already chosen from the first hit.
    pub fn tried(&self) -> DirectionSet {
        self.tried
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum HuntState {
    Searching,
    EngagedUnknownDirection(Engagement),
    EngagedCommitted {
        engagement: Engagement,
        direction: Direction,
    },
    /// `past_origin` is set once a reverse shot has hit; from then on the
    /// latest hit is the reference instead of the first one.
    Reversing {
        engagement: Engagement,
        direction: Direction,
        past_origin: bool,
    },
}

impl HuntState {
    fn engagement(&self) -> Option<&Engagement> {
        match self {
            HuntState::Searching => None,
            HuntState::EngagedUnknownDirection(e)
            | HuntState::EngagedCommitted { engagement: e, .. }
            | HuntState::Reversing { engagement: e, .. } => Some(e),
        }
    }

    fn into_engagement(self) -> Option<Engagement> {
        match self {
            HuntState::Searching => None,
            HuntState::EngagedUnknownDirection(e)
            | HuntState::EngagedCommitted { engagement: e, .. }
            | HuntState::Reversing { engagement: e, .. } => Some(e),
        }
    }
}

/// Copyable view of the hunter's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuntMode {
    Searching,
    EngagedUnknownDirection,
    EngagedCommitted(Direction),
    Reversing(Direction),
}

#[derive(Debug, Clone)]
pub struct Hunter {
    candidates: Grid,
    state: HuntState,
}

impl Hunter {
    /// Fresh hunter with every cell as a candidate.
    pub fn new() -> Self {
        Self::with_candidates(Grid::full())
    }

    /// Hunter restricted to `candidates`.
    pub fn with_candidates(candidates: Grid) -> Self {
        Hunter {
            candidates,
            state: HuntState::Searching,
        }
    }

    /// Cells not yet fired at and not ruled out.
    pub fn candidates(&self) -> Grid {
        self.candidates
    }

    pub fn mode(&self) -> HuntMode {
        match &self.state {
            HuntState::Searching => HuntMode::Searching,
            HuntState::EngagedUnknownDirection(_) => HuntMode::EngagedUnknownDirection,
            HuntState::EngagedCommitted { direction, .. } => HuntMode::EngagedCommitted(*direction),
            HuntState::Reversing { direction, .. } => HuntMode::Reversing(*direction),
        }
    }

    pub fn engagement(&self) -> Option<&Engagement> {
        self.state.engagement()
    }

    /// `next` if it is on the board and still a candidate.
    fn open(&self, next: Option<Coord>) -> Option<Coord> {
        next.filter(|&c| self.candidates.has(c))
    }

    /// Decide the next shot and take it out of the pool. Returns `None` only
    /// when no candidates are left.
    pub fn next_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coord> {
        loop {
            match mem::replace(&mut self.state, HuntState::Searching) {
                HuntState::Searching => {
                    let target = self.candidates.choose(rng)?;
                    self.candidates.unmark(target);
                    return Some(target);
                }
                HuntState::EngagedUnknownDirection(mut engagement) => {
                    let origin = engagement.first();
                    let mut open = [Direction::East; 4];
                    let mut n = 0;
                    for dir in Direction::ALL {
                        if !engagement.tried.contains(dir) && self.open(origin.step(dir)).is_some() {
                            open[n] = dir;
                            n += 1;
                        }
                    }
                    if n == 0 {
                        log::debug!("no direction left around {}, abandoning engagement", origin);
                        continue;
                    }
                    let direction = open[rng.random_range(0..n)];
                    engagement.tried.insert(direction);
                    self.state = HuntState::EngagedCommitted {
                        engagement,
                        direction,
                    };
                }
                HuntState::EngagedCommitted {
                    engagement,
                    direction,
                } => {
                    if let Some(target) = self.open(engagement.last().step(direction)) {
                        self.candidates.unmark(target);
                        self.state = HuntState::EngagedCommitted {
                            engagement,
                            direction,
                        };
                        return Some(target);
                    }
                    self.state = if engagement.is_confirmed() {
                        HuntState::Reversing {
                            engagement,
                            direction: direction.opposite(),
                            past_origin: false,
                        }
                    } else {
                        HuntState::EngagedUnknownDirection(engagement)
                    };
                }
                HuntState::Reversing {
                    engagement,
                    direction,
                    past_origin,
                } => {
                    let from = if past_origin {
                        engagement.last()
                    } else {
                        engagement.first()
                    };
                    if let Some(target) = self.open(from.step(direction)) {
                        self.candidates.unmark(target);
                        self.state = HuntState::Reversing {
                            engagement,
                            direction,
                            past_origin,
                        };
                        return Some(target);
                    }
                    log::debug!("nothing left to reverse into from {}, abandoning engagement", from);
                }
            }
        }
    }

    /// Feed back the result of a shot at `target`.
    pub fn record(&mut self, target: Coord, result: GuessResult) {
        self.candidates.unmark(target);
        let state = mem::replace(&mut self.state, HuntState::Searching);
        self.state = match result {
            GuessResult::Miss => self.after_miss(state),
            GuessResult::Hit => self.after_hit(state, target),
            GuessResult::Sunk => {
                let mut hits = state.into_engagement().map(|e| e.hits).unwrap_or_default();
                hits.push(target);
                self.candidates = self.candidates - surroundings(hits);
                HuntState::Searching
            }
        };
        log::trace!("hunter {} {:?} -> {:?}", target, result, self.mode());
    }

    fn after_miss(&self, state: HuntState) -> HuntState {
        match state {
            HuntState::EngagedCommitted {
                engagement,
                direction,
            } => {
                if engagement.is_confirmed() {
                    HuntState::Reversing {
                        engagement,
                        direction: direction.opposite(),
                        past_origin: false,
                    }
                } else {
                    // The direction was marked as tried when it was chosen.
                    HuntState::EngagedUnknownDirection(engagement)
                }
            }
            HuntState::Reversing { engagement, .. } => {
                log::debug!(
                    "reverse shot missed, abandoning engagement opened at {}",
                    engagement.first()
                );
                HuntState::Searching
            }
            other => other,
        }
    }

    fn after_hit(&self, state: HuntState, target: Coord) -> HuntState {
        match state {
            HuntState::Searching => HuntState::EngagedUnknownDirection(Engagement::new(target)),
            HuntState::EngagedUnknownDirection(mut engagement) => {
                engagement.hits.push(target);
                HuntState::EngagedUnknownDirection(engagement)
            }
            HuntState::EngagedCommitted {
                mut engagement,
                direction,
            } => {
                engagement.hits.push(target);
                if self.open(target.step(direction)).is_some() {
                    HuntState::EngagedCommitted {
                        engagement,
                        direction,
                    }
                } else {
                    HuntState::Reversing {
                        engagement,
                        direction: direction.opposite(),
                        past_origin: false,
                    }
                }
            }
            HuntState::Reversing {
                mut engagement,
                direction,
                ..
            } => {
                engagement.hits.push(target);
                if self.open(target.step(direction)).is_some() {
                    HuntState::Reversing {
                        engagement,
                        direction,
                        past_origin: true,
                    }
                } else {
                    log::debug!("ship at {} has no room left either way, abandoning", target);
                    HuntState::Searching
                }
            }
        }
    }
}

impl Default for Hunter {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for Hunter {
    fn place_ships(&mut self, rng: &mut dyn RngCore) -> Result<Board, BoardError> {
        let ships = PlacementGenerator::standard().generate_with_retries(rng, PLACEMENT_ATTEMPTS)?;
        Board::from_ships(ships)
    }

    fn select_target(&mut self, rng: &mut dyn RngCore) -> Option<Coord> {
        self.next_target(rng)
    }

    fn handle_guess_result(&mut self, coord: Coord, result: GuessResult) {
        self.record(coord, result);
    }
}
