//! A fixed-size rectangular bitboard using const generics.
//!
//! The type is `no_std` friendly and avoids heap allocations. An `R×C` grid is
//! packed row-major into an unsigned integer `T`; the row index is the game's
//! `x` coordinate and the column index its `y` coordinate.

use core::ops::{BitAnd, BitOr, BitOrAssign, Not};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size R*C exceeds capacity of `T::BITS`.
    SizeTooLarge { cells: usize, capacity: usize },
    /// Row or column index is out of bounds.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { cells, capacity } => {
                write!(f, "SizeTooLarge: R*C={} exceeds T::BITS={}", cells, capacity)
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A fixed-size R×C bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const R: usize, const C: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const R: usize, const C: usize> BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the board (`R * C`).
    const BOARD_BITS: usize = R * C;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    /// Create a new empty bitboard without size check.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if R*C > T::BITS.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::BOARD_BITS > capacity {
            Err(BitBoardError::SizeTooLarge {
                cells: Self::BOARD_BITS,
                capacity,
            })
        } else {
            Ok(Self::new())
        }
    }

    /// Returns the number of set cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cells are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        self.check_bounds(row, col)?;
        let idx = row * C + col;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.check_bounds(row, col)?;
        let idx = row * C + col;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.check_bounds(row, col)?;
        let idx = row * C + col;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BitBoardError> {
        if row >= R || col >= C {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    /// True if the two boards share at least one set cell.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    /// The union of the 3×3 neighbourhoods of every set cell, clipped to the
    /// board. The board itself is always a subset of its footprint.
    pub fn footprint(&self) -> Self {
        let mut out = *self;
        for (r, c) in self.cells() {
            for nr in r.saturating_sub(1)..=(r + 1).min(R - 1) {
                for nc in c.saturating_sub(1)..=(c + 1).min(C - 1) {
                    out.bits = out.bits | (T::one() << (nr * C + nc));
                }
            }
        }
        out
    }

    /// Creates a bitboard from the raw integer, masking out upper bits.
    #[inline]
    pub fn from_raw(raw: T) -> Self {
        BitBoard {
            bits: raw & Self::mask(),
        }
    }

    /// Creates a bitboard from `(row, col)` positions.
    pub fn from_cells<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new();
        for (r, c) in iter {
            board.set(r, c)?;
        }
        Ok(board)
    }

    /// Iterator over the set cells in row-major order.
    #[inline]
    pub fn cells(&self) -> Cells<'_, T, R, C> {
        Cells {
            board: self,
            idx: 0,
        }
    }
}

impl<T, const R: usize, const C: usize> Default for BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const R: usize, const C: usize> fmt::Debug for BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}, {}>:", any::type_name::<T>(), R, C)?;
        fmt::Display::fmt(self, f)?;
        writeln!(f)
    }
}

impl<T, const R: usize, const C: usize> fmt::Display for BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..R {
            for c in 0..C {
                let bit = if ((self.bits >> (r * C + c)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < R {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the set cells of a bitboard.
#[derive(Clone, Copy)]
pub struct Cells<'a, T, const R: usize, const C: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, R, C>,
    idx: usize,
}

impl<'a, T, const R: usize, const C: usize> Iterator for Cells<'a, T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < R * C {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / C, idx % C));
            }
        }
        None
    }
}

impl<T, const R: usize, const C: usize> BitAnd for BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits & rhs.bits)
    }
}

impl<T, const R: usize, const C: usize> BitOr for BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits | rhs.bits)
    }
}

/// Inverts a bitboard within board bounds.
impl<T, const R: usize, const C: usize> Not for BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}

impl<T, const R: usize, const C: usize> BitOrAssign for BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
