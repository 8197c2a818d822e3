//! Line extraction for square grids stored in row-major order.
//!
//! These are pure functions over a flat slice. They know nothing about
//! players or cells, which keeps them testable with plain integers.

use super::GridError;

/// Splits `cells` into consecutive rows of `side` elements, top to bottom.
///
/// The length of `cells` is expected to be a multiple of `side`; a trailing
/// partial row is returned as-is.
pub fn rows<T: Clone>(cells: &[T], side: usize) -> Vec<Vec<T>> {
    if side == 0 {
        return Vec::new();
    }
    cells.chunks(side).map(<[T]>::to_vec).collect()
}

/// Returns the `side` columns of `cells`, left to right.
///
/// Column `i` holds the elements at `i, i + side, i + 2 * side, ...`.
pub fn columns<T: Clone>(cells: &[T], side: usize) -> Vec<Vec<T>> {
    if side == 0 {
        return Vec::new();
    }
    (0..side)
        .map(|i| cells.iter().skip(i).step_by(side).cloned().collect())
        .collect()
}

/// Returns the main diagonal followed by the anti-diagonal.
///
/// The side is derived from the length, which must be a perfect square.
/// On odd sides both diagonals share the centre element.
pub fn diagonals<T: Clone>(cells: &[T]) -> Result<Vec<Vec<T>>, GridError> {
    let side = cells.len().isqrt();
    if side * side != cells.len() {
        return Err(GridError::NotPerfectSquare(cells.len()));
    }

    let main = (0..side).map(|k| cells[k * (side + 1)].clone()).collect();
    let anti = (0..side)
        .map(|k| cells[(side - 1) + k * (side - 1)].clone())
        .collect();

    Ok(vec![main, anti])
}

/// Returns true if every element of `group` is equal.
///
/// Empty and single-element groups are trivially equal. Callers looking
/// for winning lines must discard groups with empty cells first.
pub fn all_equal<T: PartialEq>(group: &[T]) -> bool {
    group.windows(2).all(|pair| pair[0] == pair[1])
}
