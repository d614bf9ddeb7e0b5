//! Commonly used types and utilities for ease of import.

pub use crate::{
    Agent, Cell, Game, GameStatus, Player, ProbabilityAgent, RandomAgent, Ship, ShotGrid,
    ShotOutcome, TurnPolicy, FLEET, LENGTH, WIDTH,
};

#[cfg(feature = "std")]
pub use crate::{
    cli::{parse_coord, print_player_view},
    init_logging,
};
