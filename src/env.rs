//! Training-environment adapter: flat actions in, observation grids and
//! rewards out.
//!
//! The learning side always plays as player 0 against a passive opponent
//! fleet. It only ever sees player 0's shot grid.

use alloc::vec::Vec;
use rand::Rng;

use crate::board::Coord;
use crate::common::{BoardError, ShotOutcome};
use crate::config::{FLEET, LENGTH, WIDTH};
use crate::game::Game;
use crate::player::Player;
use crate::ship::{Orientation, Ship};

/// Number of discrete actions, one per cell.
pub const ACTION_SPACE: usize = LENGTH * WIDTH;

pub const ILLEGAL_REWARD: i64 = -10;
pub const MISS_REWARD: i64 = -1;
pub const HIT_REWARD: i64 = 1;
/// Sinking pays this much per ship square.
pub const SINK_REWARD_PER_SQUARE: i64 = 3;
pub const VICTORY_REWARD: i64 = 10;

/// Player 0's shot grid as `[x][y]` codes: 0 unknown, 1 miss, 2 hit.
pub type Observation = [[u8; WIDTH]; LENGTH];

/// Result of one environment step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub observation: Observation,
    pub reward: i64,
    pub done: bool,
    pub outcome: ShotOutcome,
}

/// The fixed ten-ship layout used for training runs.
pub fn training_layout() -> Result<Vec<Ship>, BoardError> {
    const SHIPS: [(usize, i32, i32); 10] = [
        (4, 0, 0),
        (3, 2, 0),
        (3, 4, 0),
        (2, 6, 0),
        (2, 8, 0),
        (2, 0, 6),
        (1, 2, 6),
        (1, 4, 6),
        (1, 6, 6),
        (1, 8, 6),
    ];
    SHIPS
        .iter()
        .map(|&(len, x, y)| Ship::line(len, x, y, Orientation::Horizontal))
        .collect()
}

/// Map an action index to a target cell. Indices past the action space map
/// to cells off the board.
pub fn decode_action(action: usize) -> Coord {
    let x = i32::try_from(action / WIDTH).unwrap_or(i32::MAX);
    (x, (action % WIDTH) as i32)
}

/// Inverse of [`decode_action`] for on-board cells.
pub fn encode_action(x: i32, y: i32) -> Option<usize> {
    crate::board::in_bounds(x, y).map(|(r, c)| r * WIDTH + c)
}

/// Single-agent episode wrapper around a [`Game`].
#[derive(Debug, Clone)]
pub struct BattleshipEnv {
    game: Game,
    fleet: Vec<usize>,
    score: i64,
}

impl Default for BattleshipEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleshipEnv {
    /// Environment using the default [`FLEET`]. Call a reset before stepping.
    pub fn new() -> Self {
        Self::with_fleet(FLEET)
    }

    pub fn with_fleet(fleet: &[usize]) -> Self {
        Self {
            game: Game::default(),
            fleet: fleet.to_vec(),
            score: 0,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Sum of rewards since the last reset.
    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    pub fn observation(&self) -> Observation {
        self.game.players()[0].guesses().to_rows()
    }

    /// New episode with both fleets placed at random.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Observation, BoardError> {
        self.game = Game::random_with_fleet(rng, &self.fleet)?;
        self.score = 0;
        Ok(self.observation())
    }

    /// New episode with `layout` given to both players.
    pub fn reset_with_layout(&mut self, layout: Player) -> Observation {
        self.game = Game::new([layout.clone(), layout]);
        self.score = 0;
        self.observation()
    }

    /// Fire at the cell named by `action`.
    pub fn step(&mut self, action: usize) -> Step {
        let (x, y) = decode_action(action);
        let outcome = self.game.turn(x, y);
        let reward = match outcome {
            ShotOutcome::GameOver => 0,
            ShotOutcome::Illegal => ILLEGAL_REWARD,
            ShotOutcome::Miss => MISS_REWARD,
            ShotOutcome::Hit => HIT_REWARD,
            ShotOutcome::Sunk { length } => SINK_REWARD_PER_SQUARE * length as i64,
            ShotOutcome::Victory { .. } => VICTORY_REWARD,
        };
        self.score += reward;
        Step {
            observation: self.observation(),
            reward,
            done: self.game.is_over(),
            outcome,
        }
    }
}
