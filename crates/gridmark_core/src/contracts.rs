//! Contract-based validation for placements.
//!
//! Contracts pair the preconditions a placement must satisfy with the
//! postconditions the board must satisfy afterwards: {P} place {Q}.

use super::action::Placement;
use super::invariants::{BoardInvariants, InvariantSet, InvariantViolation};
use super::{Board, Cell, GridError};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GridError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S, action: &A) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the player is registered on the board (by identity).
pub struct PlayerRegistered;

impl PlayerRegistered {
    /// Rejects players the roster does not contain.
    #[instrument(skip_all, fields(placement = %placement))]
    pub fn check(placement: &Placement, board: &Board) -> Result<(), GridError> {
        if board.roster().contains(&placement.player) {
            Ok(())
        } else {
            Err(GridError::UnknownPlayer(placement.player.mark()))
        }
    }
}

/// Precondition: the position lies in `1..=side²`.
pub struct PositionInRange;

impl PositionInRange {
    /// Rejects position 0 and positions past the last cell.
    #[instrument(skip_all, fields(placement = %placement))]
    pub fn check(placement: &Placement, board: &Board) -> Result<(), GridError> {
        let max = board.snapshot().len();
        if (1..=max).contains(&placement.position) {
            Ok(())
        } else {
            Err(GridError::PositionOutOfRange {
                position: placement.position,
                max,
            })
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects placements onto an occupied cell.
    #[instrument(skip_all, fields(placement = %placement))]
    pub fn check(placement: &Placement, board: &Board) -> Result<(), GridError> {
        match board.snapshot().get(placement.index()) {
            Some(Cell::Empty) => Ok(()),
            _ => Err(GridError::PositionOccupied(placement.position)),
        }
    }
}

/// Composite precondition: registered player, in-range position, empty cell.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates all preconditions in order.
    pub fn check(placement: &Placement, board: &Board) -> Result<(), GridError> {
        PlayerRegistered::check(placement, board)?;
        PositionInRange::check(placement, board)?;
        CellIsEmpty::check(placement, board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placements.
///
/// Preconditions:
/// - Player is registered
/// - Position is in range
/// - Cell is empty
///
/// Postconditions:
/// - Board invariants hold
/// - Only the target cell changed, from empty to the player's mark
pub struct PlaceMarkContract;

impl Contract<Board, Placement> for PlaceMarkContract {
    fn pre(board: &Board, placement: &Placement) -> Result<(), GridError> {
        LegalPlacement::check(placement, board)
    }

    fn post(
        before: &Board,
        after: &Board,
        placement: &Placement,
    ) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match BoardInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        let old = before.snapshot();
        let new = after.snapshot();
        let target = placement.index();

        if old.len() != new.len() {
            violations.push(InvariantViolation::new("Cell count changed"));
        } else {
            let others_unchanged = old
                .iter()
                .zip(new)
                .enumerate()
                .all(|(i, (a, b))| i == target || a == b);
            if !others_unchanged {
                violations.push(InvariantViolation::new(
                    "Cells other than the target changed",
                ));
            }

            let expected = Cell::Occupied(placement.player.mark());
            if old.get(target) != Some(&Cell::Empty) || new.get(target) != Some(&expected) {
                violations.push(InvariantViolation::new(
                    "Target cell did not go from empty to the player's mark",
                ));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(?violations, placement = %placement, "Placement postcondition failed");
            Err(violations)
        }
    }
}
