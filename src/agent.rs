//! Automated shooters that drive a [`Game`](crate::Game) from its shot grid.

use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::ai;
use crate::board::{Coord, ShotGrid};
use crate::common::ShotOutcome;
use crate::config::BoardMask;
use crate::player::Player;

/// Interface implemented by different shooter strategies.
pub trait Agent {
    /// Choose the next target given this side's shot grid, or `None` when no
    /// unknown cell remains.
    fn select_target(&mut self, rng: &mut SmallRng, guesses: &ShotGrid) -> Option<Coord>;

    /// Inform the agent of the result of its last shot. `guesses` is the grid
    /// after the shot was resolved.
    fn handle_outcome(&mut self, _coord: Coord, _outcome: ShotOutcome, _guesses: &ShotGrid) {}

    /// Forget everything learned during the previous game.
    fn reset(&mut self) {}
}

/// Uniformly random cell among the unknown ones.
fn random_open<R: Rng + ?Sized>(rng: &mut R, guesses: &ShotGrid) -> Option<Coord> {
    let open = guesses.unknown();
    let n = open.count_ones();
    if n == 0 {
        return None;
    }
    let k = rng.random_range(0..n);
    open.cells().nth(k).map(|(r, c)| (r as i32, c as i32))
}

/// Fires at random unknown cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Agent for RandomAgent {
    fn select_target(&mut self, rng: &mut SmallRng, guesses: &ShotGrid) -> Option<Coord> {
        random_open(rng, guesses)
    }
}

/// Probability based targeting that tracks which enemy ships are still
/// afloat.
#[derive(Debug, Clone)]
pub struct ProbabilityAgent {
    fleet: Vec<usize>,
    remaining: Vec<usize>,
    sunk: BoardMask,
}

impl ProbabilityAgent {
    /// Agent expecting the opponent to field `fleet`.
    pub fn new(fleet: &[usize]) -> Self {
        Self {
            fleet: fleet.to_vec(),
            remaining: fleet.to_vec(),
            sunk: BoardMask::new(),
        }
    }

    /// Agent firing at `target`, picking up from the ships it has already
    /// lost. Sunk ships are public, so their cells are known.
    pub fn against(target: &Player) -> Self {
        let mut sunk = BoardMask::new();
        let mut remaining = Vec::new();
        for ship in target.ships() {
            if ship.is_sunk() {
                sunk |= ship.mask();
            } else {
                remaining.push(ship.length());
            }
        }
        Self {
            fleet: target.ships().iter().map(|s| s.length()).collect(),
            remaining,
            sunk,
        }
    }

    /// Lengths of enemy ships not yet sunk.
    pub fn remaining(&self) -> &[usize] {
        &self.remaining
    }

    /// Cells of enemy ships already sunk.
    pub fn sunk_cells(&self) -> BoardMask {
        self.sunk
    }
}

impl Agent for ProbabilityAgent {
    fn select_target(&mut self, rng: &mut SmallRng, guesses: &ShotGrid) -> Option<Coord> {
        ai::calc_pdf_and_guess(guesses, &self.sunk, &self.remaining, rng)
            .map(|(r, c)| (r as i32, c as i32))
            .or_else(|| random_open(rng, guesses))
    }

    fn handle_outcome(&mut self, coord: Coord, outcome: ShotOutcome, guesses: &ShotGrid) {
        let Some(length) = outcome.sunk_length() else {
            return;
        };
        if let Some(i) = self.remaining.iter().position(|&l| l == length) {
            self.remaining.swap_remove(i);
        }
        // ships never touch, so the hit region grown from the sinking shot is
        // exactly the sunk ship
        let hits = guesses.hits() & !self.sunk;
        let mut region = BoardMask::new();
        if region.set(coord.0 as usize, coord.1 as usize).is_err() {
            return;
        }
        loop {
            let grown = region.footprint() & hits;
            if grown == region {
                break;
            }
            region = grown;
        }
        self.sunk |= region;
    }

    fn reset(&mut self) {
        self.remaining = self.fleet.clone();
        self.sunk = BoardMask::new();
    }
}
