//! Common types shared by the board, the placement engine and the turn
//! resolver: cell states, shot outcomes and board errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// State of a single cell on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    ShipPresent,
    Hit,
    Miss,
}

impl Cell {
    /// `true` once the cell has been shot at.
    pub fn is_resolved(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// Result of resolving a shot against one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The cell was already `Hit` or `Miss`; nothing changed.
    AlreadyTaken,
    /// The cell held part of a ship.
    Hit,
    /// The cell was empty water.
    Miss,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error other than an out-of-range index.
    BitBoardError(BitBoardError),
    /// Row or column outside `[0, BOARD_SIZE)`.
    InvalidCoordinates { row: usize, col: usize },
    /// Random placement gave up on a ship after the configured attempt cap.
    PlacementExhausted { ship: &'static str },
    /// Every cell of the target board has already been shot.
    NoTargetsLeft,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => {
                BoardError::InvalidCoordinates { row, col }
            }
            other => BoardError::BitBoardError(other),
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidCoordinates { row, col } => {
                write!(f, "Coordinates ({}, {}) are off the board", row, col)
            }
            BoardError::PlacementExhausted { ship } => {
                write!(f, "Could not find a free position for the {}", ship)
            }
            BoardError::NoTargetsLeft => write!(f, "Every cell has already been targeted"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
