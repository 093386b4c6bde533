//! Common types: game errors and shot outcomes.

use crate::bitboard::BitBoardError;

/// Outcome of a resolved shot, as reported to collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot hit nothing.
    Miss,
    /// Shot hit a unit that still has an unhit cell.
    Hit,
    /// Shot hit the last remaining cell of a unit.
    Destroyed,
}

impl ShotOutcome {
    /// Whether the shot struck a unit.
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// A resolved shot as handed to collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotReport {
    pub row: usize,
    pub col: usize,
    pub outcome: ShotOutcome,
}

/// Errors returned by board, targeting and match operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Underlying bitboard error.
    BitBoard(BitBoardError),
    /// Coordinate lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// A shot was already resolved at this coordinate.
    DuplicateShot { row: usize, col: usize },
    /// Every cell of the target board has been fired at.
    NoTargetsRemaining,
    /// Automated setup failed on every fresh board.
    SetupExhausted { attempts: usize },
    /// A placement batch contained a unit that cannot be placed.
    InvalidPlacement,
    /// Units may only be placed before the first shot.
    PlacementAfterShots,
    /// Input ended before the player finished setting up.
    Aborted,
    /// A placement batch had the wrong number of units.
    WrongBatchSize { expected: usize, found: usize },
    /// Action requested for the side that does not hold the turn.
    NotYourTurn,
    /// The match already has a winner.
    MatchOver,
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::BitBoard(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            GameError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the board", row, col)
            }
            GameError::DuplicateShot { row, col } => {
                write!(f, "Cell ({}, {}) has already been fired at", row, col)
            }
            GameError::NoTargetsRemaining => write!(f, "No untried cells remain on the board"),
            GameError::SetupExhausted { attempts } => {
                write!(f, "Unable to place units after {} attempts", attempts)
            }
            GameError::InvalidPlacement => write!(f, "Unit placement is invalid"),
            GameError::PlacementAfterShots => {
                write!(f, "Units cannot be placed once shots have been fired")
            }
            GameError::Aborted => write!(f, "Setup abandoned"),
            GameError::WrongBatchSize { expected, found } => {
                write!(f, "Expected {} units, got {}", expected, found)
            }
            GameError::NotYourTurn => write!(f, "It is not this side's turn"),
            GameError::MatchOver => write!(f, "The match is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
