//! Errors used throughout the checkers engine.
//!
//! Rejected player actions, malformed hand-built positions, an empty search
//! root and engine failures each have their own enum so callers can match on
//! exactly the failures a given call can produce. None of these represent a
//! corrupted board: a rejected action leaves the board untouched.

use thiserror::Error;

use crate::game_state::checkers_rules::Position;
use crate::game_state::checkers_types::{Color, Direction, Square};

/// Why a requested move or take was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Square index outside `0..=45`.
    #[error("square {0} is outside the board")]
    SquareOutOfRange(Square),

    /// Direction is not one of NW (+4), NE (+5), SW (-5), SE (-4).
    #[error("direction {0} is not a diagonal step")]
    InvalidDirection(Direction),

    /// The square has no piece that may move that way this ply.
    #[error("no legal move from square {square} in direction {direction}")]
    IllegalMove { square: Square, direction: Direction },

    /// The square has no piece that may capture that way this ply.
    #[error("no legal take from square {square} in direction {direction}")]
    IllegalTake { square: Square, direction: Direction },
}

/// Occupancy sets violating the board invariants. Payload holds the offending bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("black and white share squares {0:#x}")]
    OverlappingColors(Position),

    #[error("kings on empty squares {0:#x}")]
    KingWithoutPiece(Position),

    #[error("pieces on unplayable squares {0:#x}")]
    OffBoardSquares(Position),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The searched color has no successor at the root.
    #[error("{0:?} has no legal action")]
    NoLegalAction(Color),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An engine answered without a board, or with one that is not a
    /// successor of the position it was given.
    #[error("{engine} did not return a legal successor")]
    IllegalSuccessor { engine: String },
}
