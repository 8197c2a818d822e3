//! Board error types.

use super::Mark;

/// Error returned when a board operation rejects its input.
///
/// Every variant describes a caller mistake; none of them leaves the board
/// in a modified state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GridError {
    /// Two or more players share a mark.
    #[display("Mark {} is held by more than one player", _0)]
    DuplicateMarks(Mark),

    /// The requested side length is 0 or too large.
    #[display("Board side must be between 1 and {}, got {}", crate::Board::MAX_SIDE, _0)]
    InvalidSize(usize),

    /// No players were supplied.
    #[display("Board needs at least one player")]
    EmptyRoster,

    /// The player is not registered on this board.
    #[display("Player {} is not registered on this board", _0)]
    UnknownPlayer(Mark),

    /// The 1-based position is 0 or past the last cell.
    #[display("Position {} is outside 1..={}", position, max)]
    PositionOutOfRange {
        /// Requested position.
        position: usize,
        /// Highest valid position.
        max: usize,
    },

    /// The target cell already carries a mark.
    #[display("Position {} is already occupied", _0)]
    PositionOccupied(usize),

    /// The cell count has no integer square root.
    #[display("{} cells do not form a perfect square", _0)]
    NotPerfectSquare(usize),
}

impl std::error::Error for GridError {}
