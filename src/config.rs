//! Fixed board and fleet configuration.

use crate::bitboard::BitBoard;

/// Number of rows (`x` range is `0..LENGTH`).
pub const LENGTH: usize = 10;
/// Number of columns (`y` range is `0..WIDTH`).
pub const WIDTH: usize = 10;

/// Board-sized bitboard used for ship cells, occupancy and shot planes.
pub type BoardMask = BitBoard<u128, LENGTH, WIDTH>;

/// One carrier, two battleships, three cruisers, four destroyers.
pub const CLASSIC_FLEET: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];
/// Three ships of length four.
pub const TRIPLE_FLEET: [usize; 3] = [4, 4, 4];

/// Fleet used by [`Player::default`](crate::Player) and
/// [`Player::random_place_ships`](crate::Player::random_place_ships).
pub const FLEET: &[usize] = &CLASSIC_FLEET;

/// Random anchors tried for a single ship before the layout is restarted.
pub const PLACEMENT_ATTEMPTS_PER_SHIP: usize = 1_000;
/// Whole-layout restarts before placement is reported infeasible.
pub const PLACEMENT_RESTARTS: usize = 16;

/// Total number of ship cells in a fleet.
pub fn fleet_cells(fleet: &[usize]) -> usize {
    fleet.iter().sum()
}

/// Display name of a ship class by length.
pub fn ship_class_name(length: usize) -> &'static str {
    match length {
        1 => "Destroyer",
        2 => "Cruiser",
        3 => "Battleship",
        4 => "Aircraft Carrier",
        _ => "Ship",
    }
}
