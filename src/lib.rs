#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod agent;
pub mod ai;
mod bitboard;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
pub mod env;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
mod player;
pub mod prelude;
mod ship;
pub mod state;

pub use agent::{Agent, ProbabilityAgent, RandomAgent};
pub use bitboard::{BitBoard, BitBoardError, Cells};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use player::*;
pub use ship::*;
pub use state::{GameState, PlayerState, ShipState};
