//! Common types for the rules engine: errors and shot outcomes.

use crate::bitboard::BitBoardError;

/// Result of a single call to [`Game::turn`](crate::Game::turn).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// The game was already finished; nothing changed.
    GameOver,
    /// Off the board or already resolved; only the step counter moved.
    Illegal,
    /// No ship at the target.
    Miss,
    /// Hit a ship that still floats.
    Hit,
    /// Sank a ship of the given length.
    Sunk { length: usize },
    /// Sank the opponent's last ship.
    Victory { length: usize },
}

impl ShotOutcome {
    /// True when the shot struck a ship.
    pub fn is_hit(&self) -> bool {
        matches!(
            self,
            ShotOutcome::Hit | ShotOutcome::Sunk { .. } | ShotOutcome::Victory { .. }
        )
    }

    /// Length of the ship sunk by this shot, if any.
    pub fn sunk_length(&self) -> Option<usize> {
        match self {
            ShotOutcome::Sunk { length } | ShotOutcome::Victory { length } => Some(*length),
            _ => None,
        }
    }
}

/// Errors returned by ship, player and game construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoard(BitBoardError),
    /// Ship size is zero or exceeds its number of squares.
    InvalidShipSize { size: usize, squares: usize },
    /// A ship square lies outside the board.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement touches another ship, diagonally included.
    ShipsTouching,
    /// The player's fleet has already been placed.
    ShipsAlreadyPlaced,
    /// No layout for a ship of this size was found within the retry cap.
    PlacementInfeasible { size: usize },
    /// Player index is not 0 or 1.
    InvalidPlayer(usize),
    /// Cell code is not 0 (unknown), 1 (miss) or 2 (hit).
    InvalidCell(u8),
    /// A restored snapshot violates a game invariant.
    InvalidState(&'static str),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoard(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidShipSize { size, squares } => {
                write!(f, "Invalid ship size {} for {} squares", size, squares)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipsTouching => write!(f, "Ship placement touches another ship"),
            BoardError::ShipsAlreadyPlaced => write!(f, "Ships are already placed"),
            BoardError::PlacementInfeasible { size } => {
                write!(f, "Unable to place ship of size {}", size)
            }
            BoardError::InvalidPlayer(p) => write!(f, "Player index {} is out of range", p),
            BoardError::InvalidCell(v) => write!(f, "Invalid cell code {}", v),
            BoardError::InvalidState(why) => write!(f, "Invalid game state: {}", why),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
