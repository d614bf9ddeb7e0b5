//! Fleet layout: manual placement checks and the random placement generator.
//!
//! Ships may not overlap and may not touch, diagonally included. A layout
//! keeps the squares of every placed ship together with their 3×3
//! footprints; a new ship is legal when none of its squares falls inside
//! that occupied region.

use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::common::BoardError;
use crate::config::{BoardMask, LENGTH, PLACEMENT_ATTEMPTS_PER_SHIP, PLACEMENT_RESTARTS, WIDTH};
use crate::ship::{Orientation, Ship};

/// Occupancy of a partially placed fleet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    ships: BoardMask,
    occupied: BoardMask,
}

impl Layout {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout of an existing set of ships, checking each against the others.
    pub fn from_ships(ships: &[Ship]) -> Result<Self, BoardError> {
        let mut layout = Self::new();
        for ship in ships {
            layout.check(ship)?;
            layout.add(ship);
        }
        Ok(layout)
    }

    /// Squares covered by placed ships.
    pub fn ships(&self) -> BoardMask {
        self.ships
    }

    /// Squares where no new ship square may go.
    pub fn occupied(&self) -> BoardMask {
        self.occupied
    }

    /// Checks that `ship` neither overlaps nor touches a placed ship.
    pub fn check(&self, ship: &Ship) -> Result<(), BoardError> {
        let mask = ship.mask();
        if mask.intersects(&self.ships) {
            return Err(BoardError::ShipOverlaps);
        }
        if mask.intersects(&self.occupied) {
            return Err(BoardError::ShipsTouching);
        }
        Ok(())
    }

    /// Records `ship` and blocks its footprint. Does not check legality.
    pub fn add(&mut self, ship: &Ship) {
        let mask = ship.mask();
        self.ships |= mask;
        self.occupied |= mask.footprint();
    }
}

/// Draws one legal ship of `size` squares by rejection sampling, trying at
/// most [`PLACEMENT_ATTEMPTS_PER_SHIP`] random anchors.
pub fn random_ship<R: Rng + ?Sized>(rng: &mut R, layout: &Layout, size: usize) -> Option<Ship> {
    for attempt in 1..=PLACEMENT_ATTEMPTS_PER_SHIP {
        let x = rng.random_range(0..LENGTH) as i32;
        let y = rng.random_range(0..WIDTH) as i32;
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        // runs leaving the board fail construction
        let Ok(ship) = Ship::line(size, x, y, orientation) else {
            continue;
        };
        if ship.mask().intersects(&layout.occupied()) {
            continue;
        }
        debug!(
            "placed ship of size {} at ({}, {}) {:?} after {} attempts",
            size, x, y, orientation, attempt
        );
        return Some(ship);
    }
    None
}

/// Generates a full random layout for `fleet`, in the given order.
///
/// Sizes of zero are rejected. A size longer than both board dimensions can
/// never fit and fails at once. Otherwise each ship gets
/// [`PLACEMENT_ATTEMPTS_PER_SHIP`] tries; when one runs out the layout starts
/// over, up to [`PLACEMENT_RESTARTS`] times, before reporting
/// [`BoardError::PlacementInfeasible`] for the ship that could not be placed.
pub fn random_fleet<R: Rng + ?Sized>(rng: &mut R, fleet: &[usize]) -> Result<Vec<Ship>, BoardError> {
    if fleet.contains(&0) {
        return Err(BoardError::InvalidShipSize {
            size: 0,
            squares: 0,
        });
    }
    if let Some(&size) = fleet.iter().find(|&&s| s > LENGTH.max(WIDTH)) {
        warn!("ship of size {} cannot fit on a {}x{} board", size, LENGTH, WIDTH);
        return Err(BoardError::PlacementInfeasible { size });
    }

    let mut stuck_on = 0;
    for restart in 0..PLACEMENT_RESTARTS {
        match try_layout(rng, fleet) {
            Ok(ships) => return Ok(ships),
            Err(size) => {
                debug!("layout restart {} stuck on ship of size {}", restart + 1, size);
                stuck_on = size;
            }
        }
    }
    warn!(
        "giving up on fleet {:?} after {} layout restarts",
        fleet, PLACEMENT_RESTARTS
    );
    Err(BoardError::PlacementInfeasible { size: stuck_on })
}

fn try_layout<R: Rng + ?Sized>(rng: &mut R, fleet: &[usize]) -> Result<Vec<Ship>, usize> {
    let mut layout = Layout::new();
    let mut ships = Vec::with_capacity(fleet.len());
    for &size in fleet {
        let ship = random_ship(rng, &layout, size).ok_or(size)?;
        layout.add(&ship);
        ships.push(ship);
    }
    Ok(ships)
}
