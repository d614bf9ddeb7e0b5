//! Board geometry and the per-player shot grid.

use crate::common::BoardError;
use crate::config::{BoardMask, LENGTH, WIDTH};
use core::fmt;

/// A signed board coordinate `(x, y)`. Shots may name cells off the board.
pub type Coord = (i32, i32);

/// The 3×3 block centred on `(x, y)`, centre included, without bounds
/// filtering.
pub fn neighbours(x: i32, y: i32) -> [Coord; 9] {
    let mut out = [(0, 0); 9];
    let mut k = 0;
    for dx in -1..=1 {
        for dy in -1..=1 {
            out[k] = (x.saturating_add(dx), y.saturating_add(dy));
            k += 1;
        }
    }
    out
}

/// Converts a coordinate to `(row, col)` indices when it lies on the board.
pub fn in_bounds(x: i32, y: i32) -> Option<(usize, usize)> {
    if x < 0 || y < 0 {
        return None;
    }
    let (r, c) = (x as usize, y as usize);
    if r < LENGTH && c < WIDTH {
        Some((r, c))
    } else {
        None
    }
}

/// State of one cell in a shot grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Cell {
    #[default]
    Unknown = 0,
    Miss = 1,
    Hit = 2,
}

impl TryFrom<u8> for Cell {
    type Error = BoardError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Cell::Unknown),
            1 => Ok(Cell::Miss),
            2 => Ok(Cell::Hit),
            other => Err(BoardError::InvalidCell(other)),
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell as u8
    }
}

/// A player's record of their own shots against the opponent.
///
/// Hits and misses are kept as two disjoint planes; every other cell is
/// unknown.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct ShotGrid {
    hits: BoardMask,
    misses: BoardMask,
}

impl ShotGrid {
    /// An all-unknown grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// State at `(x, y)`, or `None` off the board.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        in_bounds(x, y).map(|(r, c)| self.cell(r, c))
    }

    /// State at board indices; out-of-range indices read as unknown.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if self.hits.get(row, col).unwrap_or(false) {
            Cell::Hit
        } else if self.misses.get(row, col).unwrap_or(false) {
            Cell::Miss
        } else {
            Cell::Unknown
        }
    }

    pub(crate) fn mark(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        match cell {
            Cell::Hit => {
                self.misses.clear(row, col)?;
                self.hits.set(row, col)?;
            }
            Cell::Miss => {
                self.hits.clear(row, col)?;
                self.misses.set(row, col)?;
            }
            Cell::Unknown => {
                self.hits.clear(row, col)?;
                self.misses.clear(row, col)?;
            }
        }
        Ok(())
    }

    /// Cells recorded as hits.
    pub fn hits(&self) -> BoardMask {
        self.hits
    }

    /// Cells recorded as misses.
    pub fn misses(&self) -> BoardMask {
        self.misses
    }

    /// Cells not yet resolved.
    pub fn unknown(&self) -> BoardMask {
        !(self.hits | self.misses)
    }

    /// Number of cells in the given state.
    pub fn count(&self, cell: Cell) -> usize {
        match cell {
            Cell::Hit => self.hits.count_ones(),
            Cell::Miss => self.misses.count_ones(),
            Cell::Unknown => self.unknown().count_ones(),
        }
    }

    /// Plain `u8` grid indexed `[x][y]` with 0 unknown, 1 miss, 2 hit.
    pub fn to_rows(&self) -> [[u8; WIDTH]; LENGTH] {
        core::array::from_fn(|r| core::array::from_fn(|c| u8::from(self.cell(r, c))))
    }

    /// Rebuilds a grid from the [`to_rows`](Self::to_rows) encoding.
    pub fn from_rows(rows: &[[u8; WIDTH]; LENGTH]) -> Result<Self, BoardError> {
        let mut grid = Self::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                grid.mark(r, c, Cell::try_from(v)?)?;
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for ShotGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..LENGTH {
            for c in 0..WIDTH {
                let ch = match self.cell(r, c) {
                    Cell::Unknown => '.',
                    Cell::Miss => 'o',
                    Cell::Hit => 'X',
                };
                write!(f, "{} ", ch)?;
            }
            if r + 1 < LENGTH {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ShotGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ShotGrid:")?;
        fmt::Display::fmt(self, f)
    }
}
