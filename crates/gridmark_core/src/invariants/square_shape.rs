//! Square shape invariant: the board always holds side² cells.

use super::super::Board;
use super::Invariant;
use tracing::warn;

/// Invariant: the cell count equals the side squared, and the side is positive.
pub struct SquareShapeInvariant;

impl Invariant<Board> for SquareShapeInvariant {
    fn holds(board: &Board) -> bool {
        let side = board.side();
        let cells = board.snapshot().len();
        let valid = side >= 1 && side.checked_mul(side) == Some(cells);
        if !valid {
            warn!(side, cells, "Square shape violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Board holds exactly side × side cells"
    }
}
