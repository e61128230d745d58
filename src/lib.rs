#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod builder;
mod common;
mod config;
mod coord;
mod game;
mod hunter;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod player;
mod replay;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError, Grid};
pub use board::*;
pub use builder::FleetBuilder;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use hunter::{Engagement, HuntMode, Hunter};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::PlacementGenerator;
pub use player::*;
pub use replay::*;
pub use ship::*;
