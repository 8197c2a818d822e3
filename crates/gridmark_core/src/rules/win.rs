//! Win detection.

use super::super::{Cell, Mark, lines};
use tracing::{instrument, warn};

/// Returns the mark that fills a complete line, if any.
///
/// Lines are scanned rows first, then columns, then the main diagonal and
/// the anti-diagonal. The first fully occupied line with a single mark wins.
#[instrument(skip(cells), fields(cells = cells.len()))]
pub fn winning_mark(cells: &[Cell], side: usize) -> Option<Mark> {
    let diagonals = match lines::diagonals(cells) {
        Ok(diagonals) => diagonals,
        Err(e) => {
            warn!(error = %e, "Skipping diagonals");
            Vec::new()
        }
    };

    lines::rows(cells, side)
        .into_iter()
        .chain(lines::columns(cells, side))
        .chain(diagonals)
        .filter(|line| !line.contains(&Cell::Empty))
        .find(|line| lines::all_equal(line))
        .and_then(|line| line.first().and_then(Cell::mark))
}
