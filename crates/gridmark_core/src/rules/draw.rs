//! Tie detection.

use super::super::Cell;
use tracing::instrument;

/// Checks if every cell is occupied.
///
/// A full board with no winner is a tie.
#[instrument(skip(cells), fields(cells = cells.len()))]
pub fn is_full(cells: &[Cell]) -> bool {
    cells.iter().all(|cell| !cell.is_empty())
}
