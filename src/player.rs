//! One side of the game: a fleet and a grid of shots fired at the opponent.

use alloc::vec::Vec;
use rand::Rng;

use crate::board::ShotGrid;
use crate::common::BoardError;
use crate::config::FLEET;
use crate::placement::{self, Layout};
use crate::ship::Ship;

/// A player's ships, the count still afloat, and their shot record.
///
/// `guesses` holds this player's shots against the opponent, never shots
/// received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    ships_left: usize,
    ships: Vec<Ship>,
    guesses: ShotGrid,
}

impl Default for Player {
    /// No ships yet, `ships_left` set to the size of [`FLEET`].
    fn default() -> Self {
        Self::new(FLEET.len(), Vec::new())
    }
}

impl Player {
    /// Plain constructor taking the fields as given, with an empty shot grid.
    pub fn new(ships_left: usize, ships: Vec<Ship>) -> Self {
        Self {
            ships_left,
            ships,
            guesses: ShotGrid::new(),
        }
    }

    /// Player with an explicit fleet; `ships_left` counts the unsunk ships.
    pub fn with_ships(ships: Vec<Ship>) -> Self {
        let left = ships.iter().filter(|s| !s.is_sunk()).count();
        Self::new(left, ships)
    }

    pub(crate) fn from_parts(ships_left: usize, ships: Vec<Ship>, guesses: ShotGrid) -> Self {
        Self {
            ships_left,
            ships,
            guesses,
        }
    }

    /// Ships still afloat.
    pub fn ships_left(&self) -> usize {
        self.ships_left
    }

    /// The fleet in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// This player's shots against the opponent.
    pub fn guesses(&self) -> &ShotGrid {
        &self.guesses
    }

    pub(crate) fn guesses_mut(&mut self) -> &mut ShotGrid {
        &mut self.guesses
    }

    pub(crate) fn ships_mut(&mut self) -> &mut [Ship] {
        &mut self.ships
    }

    /// Counts one sunk ship. Returns the number still afloat.
    pub(crate) fn lose_ship(&mut self) -> usize {
        self.ships_left = self.ships_left.saturating_sub(1);
        self.ships_left
    }

    /// Adds one ship by hand, rejecting overlap or contact with the fleet.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        Layout::from_ships(&self.ships)?.check(&ship)?;
        self.ships.push(ship);
        self.recount();
        Ok(())
    }

    /// Places the default [`FLEET`] at random.
    pub fn random_place_ships<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        self.random_place_fleet(rng, FLEET)
    }

    /// Places `fleet` at random. Only valid while the player has no ships;
    /// on failure the player is left untouched.
    pub fn random_place_fleet<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        fleet: &[usize],
    ) -> Result<(), BoardError> {
        if !self.ships.is_empty() {
            return Err(BoardError::ShipsAlreadyPlaced);
        }
        self.ships = placement::random_fleet(rng, fleet)?;
        self.recount();
        Ok(())
    }

    fn recount(&mut self) {
        self.ships_left = self.ships.iter().filter(|s| !s.is_sunk()).count();
    }
}
