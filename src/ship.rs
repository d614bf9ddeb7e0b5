//! Ship records: a fixed set of squares and a count of unhit cells.

use core::fmt;

use crate::board::{in_bounds, Coord};
use crate::common::BoardError;
use crate::config::BoardMask;

/// Orientation of a straight ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along `y`.
    Horizontal,
    /// Extends along `x`.
    Vertical,
}

/// A ship on the board.
///
/// `squares` never changes after construction; `size` counts the squares not
/// yet hit and only ever goes down.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ship {
    size: usize,
    squares: BoardMask,
}

impl Ship {
    /// Build a ship from its remaining size and the set of squares it covers.
    /// Duplicate squares collapse. Fails when a square is off the board, when
    /// there are no squares, or when `size` exceeds the number of squares.
    pub fn new<I>(size: usize, squares: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut mask = BoardMask::new();
        for (x, y) in squares {
            let (r, c) = in_bounds(x, y).ok_or(BoardError::ShipOutOfBounds)?;
            mask.set(r, c)?;
        }
        let count = mask.count_ones();
        if count == 0 || size > count {
            return Err(BoardError::InvalidShipSize {
                size,
                squares: count,
            });
        }
        Ok(Ship {
            size,
            squares: mask,
        })
    }

    /// An undamaged straight ship of `length` squares anchored at `(x, y)`.
    pub fn line(
        length: usize,
        x: i32,
        y: i32,
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        let squares = (0..length as i32).map(|i| match orientation {
            Orientation::Horizontal => (x, y.saturating_add(i)),
            Orientation::Vertical => (x.saturating_add(i), y),
        });
        Ship::new(length, squares)
    }

    /// Remaining unhit squares.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of squares the ship covers.
    pub fn length(&self) -> usize {
        self.squares.count_ones()
    }

    /// Squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Coord> + '_ {
        self.squares.cells().map(|(r, c)| (r as i32, c as i32))
    }

    /// Occupancy mask of the ship.
    pub fn mask(&self) -> BoardMask {
        self.squares
    }

    /// True if `(x, y)` is one of the ship's squares.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        in_bounds(x, y)
            .map(|(r, c)| self.squares.get(r, c).unwrap_or(false))
            .unwrap_or(false)
    }

    /// A ship is sunk once no unhit squares remain.
    pub fn is_sunk(&self) -> bool {
        self.size == 0
    }

    /// Count one hit. Returns `true` if this hit sank the ship.
    pub(crate) fn register_hit(&mut self) -> bool {
        if self.size == 0 {
            return false;
        }
        self.size -= 1;
        self.size == 0
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ship")
            .field("size", &self.size)
            .field("squares", &self.squares.cells().collect::<alloc::vec::Vec<_>>())
            .finish()
    }
}
